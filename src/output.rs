use crate::audit::{AuditRun, CheckStatus};
use atty::Stream;
use colored::*;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use std::path::Path;

const BANNER: &str = "
╔══════════════════════════════════════╗
║         AutoNIST-Audit v1.0          ║
║   NIST CSF Compliance Audit Tool     ║
╚══════════════════════════════════════╝
";

pub const PROJECT_URL: &str = "github.com/chouhanprashant/AutoNIST-Audit";

/// Formatted terminal output for autonist-audit
pub struct Output;

impl Output {
    /// Check if colors should be enabled
    pub(crate) fn colors_enabled() -> bool {
        atty::is(Stream::Stdout) && std::env::var("NO_COLOR").is_err()
    }

    /// Initialize output system (call at startup)
    pub fn init() {
        if !Self::colors_enabled() {
            colored::control::set_override(false);
        }
    }

    pub fn banner() {
        if Self::colors_enabled() {
            println!("{}", BANNER.bright_blue());
        } else {
            println!("{}", BANNER);
        }
    }

    /// Printed when neither `--init` nor `--target` is given
    pub fn usage(bin: &str) {
        println!("Usage: {} --target [windows|linux|network|all]", bin);
        println!("\nExamples:");
        println!("  {} --init", bin);
        println!("  {} --target windows", bin);
        println!("  {} --target linux --profile standard", bin);
    }

    /// A horizontal rule of `width` copies of `ch`
    pub fn rule(ch: char, width: usize) {
        println!("{}", ch.to_string().repeat(width));
    }

    /// Show a success message
    pub fn success(msg: &str) {
        if Self::colors_enabled() {
            println!("{}", msg.green().bold());
        } else {
            println!("{}", msg);
        }
    }

    /// Create a table for displaying data
    pub fn table() -> Table {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        // Make table responsive to terminal width
        if let Some((_width, _)) = term_size::dimensions() {
            table.set_content_arrangement(ContentArrangement::Dynamic);
        }
        table
    }

    /// Show check results in a table
    pub fn results_table(run: &AuditRun) {
        let mut table = Self::table();
        table.set_header(vec!["Control", "Name", "Status"]);

        for result in &run.results {
            let status = match result.status {
                CheckStatus::Pass if Self::colors_enabled() => {
                    Cell::new(result.status).fg(comfy_table::Color::Green)
                }
                CheckStatus::Pass => Cell::new(result.status),
            };
            table.add_row(vec![Cell::new(&result.control), Cell::new(&result.name), status]);
        }

        println!("\n{}", table);
        let tally = format!("{}/{} controls passed", run.passed(), run.len());
        if run.is_clean() {
            Self::success(&tally);
        } else {
            println!("{}", tally);
        }
    }

    /// Closing block after a successful audit
    pub fn summary(report: &Path) {
        println!();
        Self::rule('=', 50);
        Self::success("✅ Audit completed successfully!");
        println!("📊 Report: {}", report.display());
        println!("🔗 GitHub: {}", PROJECT_URL);
        Self::rule('=', 50);
    }
}
