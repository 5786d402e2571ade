use assert_cmd::Command;
use autonist_audit::config::Config;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated working directory for a test run
pub struct TestEnvironment {
    pub temp_dir: TempDir,
    pub config: Config,
}

impl TestEnvironment {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::default().with_root(temp_dir.path());
        TestEnvironment { temp_dir, config }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// The binary, running inside the temporary directory
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("autonist-audit").unwrap();
        cmd.current_dir(self.path()).env("NO_COLOR", "1");
        cmd
    }

    /// Names of everything directly inside the working directory, sorted
    pub fn entries(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    pub fn reports(&self) -> Vec<PathBuf> {
        let dir = self.config.reports_dir();
        if !dir.is_dir() {
            return Vec::new();
        }
        fs::read_dir(dir).unwrap().map(|e| e.unwrap().path()).collect()
    }
}

/// `audit_{target}_{8 digits}_{6 digits}.txt`
pub fn is_report_name(name: &str, target: &str) -> bool {
    let Some(stamp) = name
        .strip_prefix(&format!("audit_{}_", target))
        .and_then(|rest| rest.strip_suffix(".txt"))
    else {
        return false;
    };
    let Some((date, time)) = stamp.split_once('_') else {
        return false;
    };
    date.len() == 8
        && time.len() == 6
        && date.chars().all(|c| c.is_ascii_digit())
        && time.chars().all(|c| c.is_ascii_digit())
}
