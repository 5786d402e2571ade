use crate::audit::checks::{CheckResult, CheckStatus, ControlChecker};
use crate::audit::controls::{Profile, Target, CONTROLS};
use chrono::{DateTime, Local};

/// Audit runner
pub struct AuditRunner {
    target: Target,
    profile: Profile,
}

impl AuditRunner {
    pub fn new(target: Target, profile: Profile) -> Self {
        AuditRunner { target, profile }
    }

    /// Check every control in the catalog, in catalog order.
    pub fn run(&self) -> AuditRun {
        println!("\n🔍 Running {} audit...", self.target);
        tracing::debug!(audit_target = %self.target, profile = %self.profile, "starting audit");

        let started_at = Local::now();
        let results: Vec<CheckResult> = CONTROLS
            .iter()
            .map(ControlChecker::check_control)
            .collect();

        AuditRun {
            target: self.target,
            profile: self.profile,
            results,
            started_at,
        }
    }
}

/// Result of one audit invocation
#[derive(Debug, Clone)]
pub struct AuditRun {
    pub target: Target,
    pub profile: Profile,
    pub results: Vec<CheckResult>,
    pub started_at: DateTime<Local>,
}

impl AuditRun {
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn passed(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.status == CheckStatus::Pass)
            .count()
    }

    /// True when no check reported anything other than PASS
    pub fn is_clean(&self) -> bool {
        self.passed() == self.len()
    }
}
