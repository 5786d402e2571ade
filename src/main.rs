use autonist_audit::audit::{AuditRunner, ReportWriter, Target};
use autonist_audit::cli::{self, Cli};
use autonist_audit::config::Config;
use autonist_audit::logging::{self, LoggingConfig};
use autonist_audit::output::Output;
use autonist_audit::project::ProjectInitializer;
use clap::CommandFactory;

/// Let a closed stdout terminate the process instead of panicking inside `println!`.
#[cfg(unix)]
fn reset_sigpipe() {
    // SAFETY: runs first in main, before any output or extra threads exist.
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn reset_sigpipe() {}

fn main() -> anyhow::Result<()> {
    reset_sigpipe();

    // Initialize output system
    Output::init();

    // Completion scripts go to stdout untouched; everything else gets the banner,
    // argument errors included.
    let opts = match cli::try_parse() {
        Ok(opts) => opts,
        Err(e) => {
            Output::banner();
            e.exit();
        }
    };
    if opts.completions.is_none() {
        Output::banner();
    }
    logging::init_logging(LoggingConfig::from_verbosity(opts.verbose));

    run(&opts)
}

fn run(opts: &Cli) -> anyhow::Result<()> {
    if let Some(shell) = opts.completions {
        let mut app = Cli::command();
        cli::generate_completions(shell, &mut app);
        return Ok(());
    }

    let mut config = Config::load(opts.config.as_deref())?;
    if let Some(root) = &opts.root {
        config = config.with_root(root);
    }

    if opts.init {
        ProjectInitializer::new(&config).initialize()?;
        return Ok(());
    }

    let Some(target) = opts.target else {
        Output::usage(cli::BIN_NAME);
        return Ok(());
    };

    cmd_audit(&config, target, opts)
}

fn cmd_audit(config: &Config, target: Target, opts: &Cli) -> anyhow::Result<()> {
    println!("Target: {}", target);
    println!("Profile: {}", opts.profile);
    Output::rule('-', 40);

    let run = AuditRunner::new(target, opts.profile).run();
    let report = ReportWriter::new(config.reports_dir()).write_at(
        &run.results,
        run.target,
        &run.started_at,
    )?;

    Output::results_table(&run);
    Output::summary(&report);

    Ok(())
}
