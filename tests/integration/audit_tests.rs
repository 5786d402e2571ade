use crate::helpers::{is_report_name, TestEnvironment};
use autonist_audit::audit::{AuditRunner, CheckStatus, ControlChecker, Profile, ReportWriter, Target};
use autonist_audit::project::ProjectInitializer;
use clap::ValueEnum;
use std::fs;

#[test]
fn test_checker_always_passes() {
    for (id, name) in [("ID.AM-1", "Physical devices inventory"), ("RS.RP-1", "Response planning")] {
        let result = ControlChecker::check(id, name);
        assert_eq!(result.status, CheckStatus::Pass);
        assert_eq!(result.details, "Check implemented");
    }
}

#[test]
fn test_run_order_for_every_target() {
    for target in Target::value_variants() {
        let run = AuditRunner::new(*target, Profile::default()).run();
        let ids: Vec<&str> = run.results.iter().map(|r| r.control.as_str()).collect();
        assert_eq!(ids, ["ID.AM-1", "PR.AC-1", "DE.CM-1", "RS.RP-1", "RC.RP-1"]);
    }
}

#[test]
fn test_write_report_for_each_target() {
    let env = TestEnvironment::new();
    let writer = ReportWriter::new(env.config.reports_dir());

    for target in Target::value_variants() {
        let run = AuditRunner::new(*target, Profile::Standard).run();
        let path = writer.write(&run.results, run.target).unwrap();

        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(is_report_name(&name, target.as_str()));

        let content = fs::read_to_string(&path).unwrap();
        for result in &run.results {
            assert!(content.contains(&format!("{}: {}\n", result.control, result.name)));
        }
    }

    assert_eq!(env.reports().len(), 4);
}

#[test]
fn test_initialize_then_audit() {
    let env = TestEnvironment::new();

    ProjectInitializer::new(&env.config).initialize().unwrap();
    ProjectInitializer::new(&env.config).initialize().unwrap();

    let run = AuditRunner::new(Target::Linux, Profile::Basic).run();
    ReportWriter::new(env.config.reports_dir())
        .write(&run.results, run.target)
        .unwrap();

    assert_eq!(env.reports().len(), 1);
    assert!(fs::read_dir(env.path().join("logs")).unwrap().next().is_none());
}
