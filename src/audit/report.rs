use crate::audit::checks::CheckResult;
use crate::audit::controls::Target;
use crate::error::{AuditError, Result};
use chrono::{DateTime, Local};
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

const TITLE: &str = "AutoNIST-Audit Report";

/// Writes plain-text audit reports into a reports directory
pub struct ReportWriter {
    reports_dir: PathBuf,
}

impl ReportWriter {
    pub fn new(reports_dir: impl Into<PathBuf>) -> Self {
        ReportWriter {
            reports_dir: reports_dir.into(),
        }
    }

    /// `audit_{target}_{YYYYMMDD_HHMMSS}.txt`
    pub fn file_name(target: Target, at: &DateTime<Local>) -> String {
        format!("audit_{}_{}.txt", target, at.format("%Y%m%d_%H%M%S"))
    }

    /// Render the report body
    pub fn render(results: &[CheckResult], target: Target, at: &DateTime<Local>) -> String {
        let mut output = String::new();

        output.push_str(TITLE);
        output.push('\n');
        output.push_str(&"=".repeat(50));
        output.push('\n');
        let _ = writeln!(output, "Target: {}", target);
        let _ = writeln!(output, "Date: {}", at.format("%Y-%m-%d %H:%M:%S%.6f"));
        let _ = writeln!(output, "Checks: {}\n", results.len());

        for result in results {
            let _ = writeln!(output, "{}: {}", result.control, result.name);
            let _ = writeln!(output, "  Status: {}", result.status);
            let _ = writeln!(output, "  Details: {}", result.details);
            output.push_str(&"-".repeat(30));
            output.push('\n');
        }

        output
    }

    /// Write the report stamped with the current time and return its path.
    pub fn write(&self, results: &[CheckResult], target: Target) -> Result<PathBuf> {
        self.write_at(results, target, &Local::now())
    }

    /// Write the report stamped with `at`, used for both the filename and the `Date:` line.
    ///
    /// Names only carry second resolution, so a second report for the same
    /// target within that second replaces the earlier file.
    pub fn write_at(
        &self,
        results: &[CheckResult],
        target: Target,
        at: &DateTime<Local>,
    ) -> Result<PathBuf> {
        fs::create_dir_all(&self.reports_dir)
            .map_err(|e| AuditError::io(&self.reports_dir, e))?;

        let path = self.reports_dir.join(Self::file_name(target, at));
        if path.exists() {
            tracing::warn!(path = %path.display(), "overwriting report from the same second");
        }

        fs::write(&path, Self::render(results, target, at))
            .map_err(|e| AuditError::io(&path, e))?;

        println!("\n📄 Report saved: {}", path.display());
        tracing::info!(path = %path.display(), checks = results.len(), "report written");
        Ok(path)
    }
}
