//! AutoNIST-Audit: NIST Cybersecurity Framework compliance audit tool.

pub mod audit;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod project;

pub use error::{AuditError, Result};
