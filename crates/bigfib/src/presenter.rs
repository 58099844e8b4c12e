//! CLI result presenter.

use std::time::Duration;

use serde::Serialize;

use bigfib_core::BigInt;

use crate::orchestrator::CalculationResult;
use crate::output::{format_duration, format_number, format_result};

/// How results are rendered on stdout.
#[derive(Debug, Clone, Copy, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct PresenterOptions {
    pub verbose: bool,
    pub quiet: bool,
    pub details: bool,
    pub digits_only: bool,
    pub json: bool,
}

/// One machine-readable result line.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub algorithm: &'a str,
    pub n: String,
    pub digits: usize,
    pub bits: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub duration_ms: f64,
}

impl<'a> JsonReport<'a> {
    #[must_use]
    pub fn new(
        algorithm: &'a str,
        n: &BigInt,
        result: &BigInt,
        duration: Duration,
        include_value: bool,
    ) -> Self {
        Self {
            algorithm,
            n: n.to_string(),
            digits: result.digit_count(),
            bits: result.bit_length(),
            value: include_value.then(|| result.to_string()),
            duration_ms: duration.as_secs_f64() * 1000.0,
        }
    }
}

/// CLI result presenter.
pub struct CLIResultPresenter {
    options: PresenterOptions,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(options: PresenterOptions) -> Self {
        Self { options }
    }

    /// Print a single successful result.
    pub fn present_result(&self, algorithm: &str, n: &BigInt, result: &BigInt, duration: Duration) {
        let opts = &self.options;

        if opts.json {
            let report = JsonReport::new(algorithm, n, result, duration, !opts.digits_only);
            match serde_json::to_string(&report) {
                Ok(line) => println!("{line}"),
                Err(e) => self.present_error(&e.to_string()),
            }
            return;
        }

        if opts.quiet {
            if opts.digits_only {
                println!("{} {}", result.digit_count(), result.bit_length());
            } else {
                println!("{result}");
            }
            return;
        }

        println!("Algorithm: {algorithm}");
        println!("N: {}", format_number(n));
        println!("Duration: {}", format_duration(duration));

        if opts.details || opts.digits_only {
            println!("Result digits: {}", result.digit_count());
            println!("Result bits: {}", result.bit_length());
        }

        if !opts.digits_only {
            println!(
                "F({}) = {}",
                format_number(n),
                format_result(result, opts.verbose)
            );
        }
    }

    /// Print the per-algorithm timing table.
    pub fn present_comparison(&self, results: &[CalculationResult]) {
        if self.options.quiet || self.options.json {
            return;
        }

        println!("\nComparison Results:");
        println!("{:-<60}", "");
        for result in results {
            let status = if result.outcome.is_err() {
                "ERROR"
            } else {
                "OK"
            };
            println!(
                "  {:<20} {:>10} [{}]",
                result.algorithm,
                format_duration(result.duration),
                status,
            );
        }
    }

    /// Print a failure on stderr.
    pub fn present_error(&self, error: &str) {
        eprintln!("{}", error_line(error));
    }
}

fn error_line(error: &str) -> String {
    format!("Error: {error}")
}
