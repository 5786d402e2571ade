//! The fixed NIST CSF control catalog and the inert run selectors.

use clap::ValueEnum;
use std::fmt;

/// A NIST Cybersecurity Framework control: identifier plus human-readable name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Control {
    pub id: &'static str,
    pub name: &'static str,
}

impl Control {
    pub const fn new(id: &'static str, name: &'static str) -> Self {
        Control { id, name }
    }
}

/// Controls checked on every run, in report order.
pub const CONTROLS: [Control; 5] = [
    Control::new("ID.AM-1", "Physical devices inventory"),
    Control::new("PR.AC-1", "Identity management"),
    Control::new("DE.CM-1", "Network monitoring"),
    Control::new("RS.RP-1", "Response planning"),
    Control::new("RC.RP-1", "Recovery planning"),
];

/// System category being audited.
///
/// Recorded in the report and its filename; it does not change which controls run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Target {
    Windows,
    Linux,
    Network,
    All,
}

impl Target {
    pub fn as_str(&self) -> &'static str {
        match self {
            Target::Windows => "windows",
            Target::Linux => "linux",
            Target::Network => "network",
            Target::All => "all",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Audit depth. Accepted and echoed, but every profile runs the same checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Profile {
    #[default]
    Basic,
    Standard,
    Comprehensive,
}

impl Profile {
    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::Basic => "basic",
            Profile::Standard => "standard",
            Profile::Comprehensive => "comprehensive",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
