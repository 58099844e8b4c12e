//! Calculator factory and registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::calculator::{Calculator, CoreCalculator, FibCalculator};
use crate::error::FibError;
use crate::fastdoubling::FastDoubling;
use crate::matrix::MatrixExponentiation;

/// Factory trait for creating calculators.
pub trait CalculatorFactory: Send + Sync {
    /// Get or create a calculator by name.
    fn get(&self, name: &str) -> Result<Arc<dyn Calculator>, FibError>;

    /// List all available calculator names.
    fn available(&self) -> Vec<&str>;
}

/// An engine the registry can build, with the names that select it.
#[derive(Debug, Clone, Copy)]
pub struct EngineEntry {
    /// Canonical name, as listed by [`CalculatorFactory::available`].
    pub name: &'static str,
    /// Further names accepted by [`CalculatorFactory::get`].
    pub aliases: &'static [&'static str],
    build: fn() -> Arc<dyn CoreCalculator>,
}

impl EngineEntry {
    fn matches(&self, name: &str) -> bool {
        self.name == name || self.aliases.contains(&name)
    }
}

fn build_fast_doubling() -> Arc<dyn CoreCalculator> {
    Arc::new(FastDoubling::new())
}

fn build_matrix() -> Arc<dyn CoreCalculator> {
    Arc::new(MatrixExponentiation::new())
}

/// Every engine, in the order `"all"` runs them.
pub const ENGINES: &[EngineEntry] = &[
    EngineEntry {
        name: "fast",
        aliases: &["fastdoubling"],
        build: build_fast_doubling,
    },
    EngineEntry {
        name: "matrix",
        aliases: &[],
        build: build_matrix,
    },
];

/// Resolve a canonical name or alias.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static EngineEntry> {
    ENGINES.iter().find(|entry| entry.matches(name))
}

/// Default factory over [`ENGINES`], caching one calculator per engine.
pub struct DefaultFactory {
    cache: RwLock<HashMap<&'static str, Arc<dyn Calculator>>>,
}

impl DefaultFactory {
    /// Create a new default factory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorFactory for DefaultFactory {
    fn get(&self, name: &str) -> Result<Arc<dyn Calculator>, FibError> {
        let entry =
            lookup(name).ok_or_else(|| FibError::Config(format!("unknown calculator: {name}")))?;

        if let Some(calc) = self.cache.read().get(entry.name) {
            return Ok(Arc::clone(calc));
        }

        // Keyed by canonical name; the entry API keeps one instance per engine.
        let mut cache = self.cache.write();
        let calc = cache
            .entry(entry.name)
            .or_insert_with(|| -> Arc<dyn Calculator> {
                Arc::new(FibCalculator::new((entry.build)()))
            });
        Ok(Arc::clone(calc))
    }

    fn available(&self) -> Vec<&str> {
        ENGINES.iter().map(|entry| entry.name).collect()
    }
}

/// Get calculators to run based on algorithm selection (`"all"` or a name).
pub fn get_calculators_to_run(
    algo: &str,
    factory: &dyn CalculatorFactory,
) -> Result<Vec<Arc<dyn Calculator>>, FibError> {
    match algo {
        "all" => factory
            .available()
            .into_iter()
            .map(|name| factory.get(name))
            .collect(),
        name => Ok(vec![factory.get(name)?]),
    }
}
