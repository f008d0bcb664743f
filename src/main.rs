use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, warn};

use version_gate::config::{self, GateConfig};
use version_gate::version::checker::evaluate;
use version_gate::version::diagnostics::report;

#[derive(Parser)]
#[command(name = "version-gate")]
#[command(
    version,
    about = "Check a proposed version tag against already-published tags",
    after_help = "Exit codes: 0 = accept as latest, 1 = reject, 2 = accept behind the latest version"
)]
struct Cli {
    /// Candidate version, e.g. 1.2.3
    candidate: String,

    /// Already-published versions; entries that are not MAJOR.MINOR.PATCH are ignored
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    existing: Vec<String>,

    /// Skip version checking and accept the candidate
    #[arg(long)]
    no_verify: bool,

    /// Path to a JSON config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<ExitCode> {
    // clap exits with 2 on usage errors, which this gate reserves for acceptance
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return Ok(if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            });
        }
    };
    let config = GateConfig::load(cli.config.as_deref())?;
    let _guard = version_gate::logging::init(&config.log, &config::log_path())?;

    if cli.no_verify {
        warn!("Skipping version check for {}", cli.candidate);
        println!("Version checking skipped for {}.", cli.candidate);
        return Ok(ExitCode::SUCCESS);
    }

    match evaluate(&cli.candidate, &cli.existing) {
        Ok(verdict) => {
            for line in report(&verdict, &cli.existing, &config.bypass_hint) {
                println!("{line}");
            }
            Ok(ExitCode::from(verdict.exit_code()))
        }
        Err(e) => {
            error!("{}", e);
            println!("{e}. Aborting.");
            println!("{}", config.bypass_hint);
            Ok(ExitCode::FAILURE)
        }
    }
}
