//! Application entry point and dispatch.

use anyhow::{Context, Result};
use tracing::debug;

use bigfib_core::{exit_codes, get_calculators_to_run, BigInt, DefaultFactory, FibError};

use crate::config::AppConfig;
use crate::errors::exit_code;
use crate::orchestrator::{analyze_comparison_results, execute_calculations, first_error};
use crate::output::write_to_file;
use crate::presenter::{CLIResultPresenter, PresenterOptions};

/// Run the application.
///
/// # Errors
///
/// Returns a [`FibError`] (wrapped in `anyhow`) for malformed or negative
/// indices, unknown algorithms and disagreeing engines, or an I/O error when
/// the output file cannot be written.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        clap_complete::generate(shell, &mut cmd, "bigfib", &mut std::io::stdout());
        return Ok(());
    }

    run_cli(config)
}

/// Run, report any failure through the presenter, and return the exit status.
pub fn run_and_report(config: &AppConfig) -> i32 {
    match run(config) {
        Ok(()) => exit_codes::SUCCESS,
        Err(err) => {
            let presenter = CLIResultPresenter::new(PresenterOptions::default());
            presenter.present_error(&format!("{err:#}"));
            exit_code(&err)
        }
    }
}

fn run_cli(config: &AppConfig) -> Result<()> {
    let n: BigInt = config.n.trim().parse().map_err(FibError::from)?;
    debug!(%n, algo = %config.algo, "starting");

    let factory = DefaultFactory::new();
    let calculators = get_calculators_to_run(&config.algo, &factory)?;
    let results = execute_calculations(&calculators, &n);

    if let Some(err) = first_error(&results) {
        return Err(err.clone().into());
    }
    if results.len() > 1 {
        analyze_comparison_results(&results)?;
    }

    let presenter = CLIResultPresenter::new(PresenterOptions {
        verbose: config.verbose,
        quiet: config.quiet,
        details: config.details,
        digits_only: config.digits_only,
        json: config.json,
    });
    for result in &results {
        if let Ok(value) = &result.outcome {
            presenter.present_result(&result.algorithm, &n, value, result.duration);
        }
    }
    if results.len() > 1 {
        presenter.present_comparison(&results);
    }

    if let Some(ref path) = config.output {
        if let Some(value) = results.iter().find_map(|r| r.outcome.as_ref().ok()) {
            write_to_file(path, value).with_context(|| format!("writing result to {path}"))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn config(args: &[&str]) -> AppConfig {
        let mut argv = vec!["bigfib"];
        argv.extend_from_slice(args);
        AppConfig::try_parse_from(argv).unwrap()
    }

    fn fib_error(err: &anyhow::Error) -> &FibError {
        err.downcast_ref::<FibError>().unwrap()
    }

    #[test]
    fn run_succeeds_for_default_index() {
        assert!(run(&config(&["-q"])).is_ok());
    }

    #[test]
    fn malformed_index_is_parse_error() {
        let err = run(&config(&["-n", "12a3"])).unwrap_err();
        assert!(matches!(fib_error(&err), FibError::Parse(_)));
    }

    #[test]
    fn negative_index_is_invalid_argument() {
        let err = run(&config(&["-n", "-1", "--algo", "matrix"])).unwrap_err();
        assert!(matches!(fib_error(&err), FibError::InvalidArgument(_)));
    }

    #[test]
    fn unknown_algorithm_is_config_error() {
        let err = run(&config(&["--algo", "fft"])).unwrap_err();
        assert!(matches!(fib_error(&err), FibError::Config(_)));
    }

    #[test]
    fn run_and_report_maps_exit_status() {
        assert_eq!(run_and_report(&config(&["-n", "12", "-q"])), exit_codes::SUCCESS);
        assert_eq!(
            run_and_report(&config(&["-n", "12a3"])),
            exit_codes::ERROR_INVALID_INPUT
        );
        assert_eq!(
            run_and_report(&config(&["--algo", "fft"])),
            exit_codes::ERROR_CONFIG
        );
    }

    #[test]
    fn output_file_written() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("fib.txt");
        run(&config(&["-n", "40", "-q", "-o", path.to_str().unwrap()])).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "102334155");
    }
}
