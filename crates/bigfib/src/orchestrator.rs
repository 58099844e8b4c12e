//! Sequential execution of the selected calculators and result analysis.

use std::sync::Arc;
use std::time::{Duration, Instant};

use bigfib_core::{BigInt, Calculator, FibError};
use tracing::{info, warn};

/// Result of a single calculation.
#[derive(Debug)]
pub struct CalculationResult {
    /// Algorithm name.
    pub algorithm: String,
    /// The computed value or a structured error.
    pub outcome: Result<BigInt, FibError>,
    /// Computation duration.
    pub duration: Duration,
}

/// Run every calculator on `n`, one after another, timing each.
pub fn execute_calculations(
    calculators: &[Arc<dyn Calculator>],
    n: &BigInt,
) -> Vec<CalculationResult> {
    calculators
        .iter()
        .map(|calc| {
            let start = Instant::now();
            let outcome = calc.calculate(n);
            let duration = start.elapsed();
            match &outcome {
                Ok(_) => info!(algorithm = calc.name(), ?duration, "calculation finished"),
                Err(e) => warn!(algorithm = calc.name(), error = %e, "calculation failed"),
            }
            CalculationResult {
                algorithm: calc.name().to_string(),
                outcome,
                duration,
            }
        })
        .collect()
}

/// Check that all successful results agree.
pub fn analyze_comparison_results(results: &[CalculationResult]) -> Result<(), FibError> {
    let mut values = results.iter().filter_map(|r| r.outcome.as_ref().ok());
    let Some(first) = values.next() else {
        return Ok(());
    };
    if values.any(|v| v != first) {
        return Err(FibError::Mismatch);
    }
    Ok(())
}

/// The first error among the results, if any.
#[must_use]
pub fn first_error(results: &[CalculationResult]) -> Option<&FibError> {
    results.iter().find_map(|r| r.outcome.as_ref().err())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigfib_core::{get_calculators_to_run, DefaultFactory};

    fn result(algorithm: &str, outcome: Result<BigInt, FibError>) -> CalculationResult {
        CalculationResult {
            algorithm: algorithm.to_string(),
            outcome,
            duration: Duration::ZERO,
        }
    }

    #[test]
    fn execute_all_calculators() {
        let calcs = get_calculators_to_run("all", &DefaultFactory::new()).unwrap();
        let results = execute_calculations(&calcs, &BigInt::from(300u32));
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.outcome.is_ok()));
        assert!(analyze_comparison_results(&results).is_ok());
    }

    #[test]
    fn execute_reports_invalid_argument() {
        let calcs = get_calculators_to_run("all", &DefaultFactory::new()).unwrap();
        let results = execute_calculations(&calcs, &BigInt::from(-1i64));
        assert!(matches!(first_error(&results), Some(FibError::InvalidArgument(_))));
    }

    #[test]
    fn mismatch_detected() {
        let results = vec![
            result("a", Ok(BigInt::from(5u32))),
            result("b", Ok(BigInt::from(6u32))),
        ];
        assert_eq!(analyze_comparison_results(&results), Err(FibError::Mismatch));
    }

    #[test]
    fn errors_ignored_in_comparison() {
        let results = vec![
            result("a", Ok(BigInt::from(5u32))),
            result("b", Err(FibError::Config("x".into()))),
        ];
        assert!(analyze_comparison_results(&results).is_ok());
        assert!(first_error(&results).is_some());
    }
}
