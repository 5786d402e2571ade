pub mod checks;
pub mod controls;
pub mod report;
pub mod runner;

pub use checks::{CheckResult, CheckStatus, ControlChecker};
pub use controls::{Control, Profile, Target, CONTROLS};
pub use report::ReportWriter;
pub use runner::{AuditRun, AuditRunner};
