//! Registry of benchmarked algorithms.
//!
//! This module provides functionality for:
//! - Registering the parameter sweep of each algorithm
//! - Looking up a configured algorithm by key
//! - A process-wide registry holding every built-in algorithm

use once_cell::sync::Lazy;
use tracing::debug;

use crate::algorithms::connect::ConnectAlgorithm;
use crate::algorithms::invert::InvertAlgorithm;
use crate::algorithms::rm_final_epsilon::RmFinalEpsilonAlgorithm;
use crate::algorithms::topsort::TopSortAlgorithm;
use crate::error::{BenchError, Result};
use crate::traits::{BenchAlgorithm, ParameterSweep};

static GLOBAL: Lazy<AlgorithmRegistry> = Lazy::new(AlgorithmRegistry::with_builtin);

/// Ordered registry of configured algorithms.
///
/// Every element of a parameter sweep is one entry. Entries are keyed by the
/// subcommand, followed by the CLI arguments when there are any, so that two
/// configurations of the same algorithm do not collide.
#[derive(Debug, Default)]
pub struct AlgorithmRegistry {
    /// Entries in registration order
    entries: Vec<(String, Box<dyn BenchAlgorithm>)>,
}

impl AlgorithmRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Registry holding every built-in algorithm.
    ///
    /// # Panics
    ///
    /// Panics if two built-in algorithms share a key.
    #[must_use]
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry
            .register_sweep::<ConnectAlgorithm>()
            .and_then(|()| registry.register_sweep::<InvertAlgorithm>())
            .and_then(|()| registry.register_sweep::<RmFinalEpsilonAlgorithm>())
            .and_then(|()| registry.register_sweep::<TopSortAlgorithm>())
            .unwrap_or_else(|e| panic!("built-in algorithms must not collide: {e}"));
        debug!(algorithms = registry.len(), "built algorithm registry");
        registry
    }

    /// Process-wide registry of built-in algorithms, built on first use.
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Key under which an algorithm is stored.
    #[must_use]
    pub fn key_of(algorithm: &dyn BenchAlgorithm) -> String {
        let args = algorithm.cli_args();
        let args = args.trim();
        if args.is_empty() {
            algorithm.subcommand().to_string()
        } else {
            format!("{} {args}", algorithm.subcommand())
        }
    }

    /// Register every configuration of `A`.
    ///
    /// # Errors
    /// Returns an error if one of the keys is already taken. Entries before
    /// the duplicate stay registered.
    pub fn register_sweep<A: ParameterSweep>(&mut self) -> Result<()> {
        for algorithm in A::boxed_parameters() {
            self.register(algorithm)?;
        }
        Ok(())
    }

    /// Register a single configured algorithm.
    ///
    /// # Errors
    /// Returns an error if an algorithm with the same key exists
    pub fn register(&mut self, algorithm: Box<dyn BenchAlgorithm>) -> Result<()> {
        let name = Self::key_of(algorithm.as_ref());

        if self.contains(&name) {
            return Err(BenchError::AlgorithmExists { name });
        }

        self.entries.push((name, algorithm));
        Ok(())
    }

    /// Get an algorithm by key.
    ///
    /// # Errors
    /// Returns an error if no algorithm with this key exists
    pub fn get(&self, name: &str) -> Result<&dyn BenchAlgorithm> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, algorithm)| algorithm.as_ref())
            .ok_or_else(|| BenchError::AlgorithmNotFound {
                name: name.to_string(),
            })
    }

    /// Check if an algorithm with the given key exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(key, _)| key == name)
    }

    /// Keys of all registered algorithms, in registration order.
    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        self.entries.iter().map(|(key, _)| key.as_str()).collect()
    }

    /// Iterate over `(key, algorithm)` in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &dyn BenchAlgorithm)> {
        self.entries
            .iter()
            .map(|(key, algorithm)| (key.as_str(), algorithm.as_ref()))
    }

    /// Get the number of registered algorithms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
