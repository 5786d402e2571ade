use crate::audit::{Profile, Target};
use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

pub const BIN_NAME: &str = "autonist-audit";

const HELP_TEMPLATE: &str = "\
{before-help}{about-with-newline}

{usage-heading}
  {usage}

{tab}Options:
{options}

{after-help}
";

#[derive(Parser, Debug)]
#[command(name = "autonist-audit", version)]
#[command(about = "AutoNIST-Audit: NIST Cybersecurity Framework Compliance Tool")]
#[command(
    long_about = "autonist-audit runs the NIST CSF control catalog against a target\n\
    and writes a timestamped plain-text report under reports/.\n\n\
    Controls checked:\n\
    • ID.AM-1 Physical devices inventory\n\
    • PR.AC-1 Identity management\n\
    • DE.CM-1 Network monitoring\n\
    • RS.RP-1 Response planning\n\
    • RC.RP-1 Recovery planning"
)]
#[command(
    help_template = HELP_TEMPLATE,
    after_help = "Examples:\n\
    \n\
    Initialize the working directories:\n\
      $ autonist-audit --init\n\
    \n\
    Audit a Windows host:\n\
      $ autonist-audit --target windows\n\
    \n\
    Audit Linux with the standard profile:\n\
      $ autonist-audit --target linux --profile standard"
)]
pub struct Cli {
    /// Initialize project structure
    ///
    /// Creates reports/, logs/, data/ and exports/ plus a placeholder
    /// config.yaml, then exits.
    #[arg(long)]
    pub init: bool,

    /// System to audit
    #[arg(long, value_enum, value_name = "TARGET")]
    pub target: Option<Target>,

    /// Audit profile
    #[arg(long, value_enum, default_value_t = Profile::Basic, value_name = "PROFILE")]
    pub profile: Profile,

    /// Working directory for reports and the initialized layout
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// TOML file overriding directory names
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Verbose output
    ///
    /// Enables debug logging on stderr.
    #[arg(short, long)]
    pub verbose: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}

/// Generate shell completion scripts
pub fn generate_completions(shell: Shell, app: &mut clap::Command) {
    clap_complete::generate(shell, app, BIN_NAME, &mut std::io::stdout());
}
