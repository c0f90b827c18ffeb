//! Configuration of the benchmark environment.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{BenchError, Result};

/// Where the toolkit binaries live and how many times to run them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Directory holding the OpenFST benchmark wrappers (`bench_*`).
    pub openfst_bench_dir: PathBuf,

    /// Directory holding the OpenFST command line tools (`fst*`).
    #[serde(default = "default_openfst_bin_dir")]
    pub openfst_bin_dir: PathBuf,

    /// Path to the `rustfst-cli` executable.
    #[serde(default = "default_rustfst_cli")]
    pub rustfst_cli: PathBuf,

    /// Untimed runs before measuring.
    #[serde(default = "default_warmup_runs")]
    pub warmup_runs: usize,

    /// Timed runs.
    #[serde(default = "default_iterations")]
    pub iterations: usize,
}

fn default_openfst_bin_dir() -> PathBuf {
    PathBuf::from("/usr/local/bin")
}

fn default_rustfst_cli() -> PathBuf {
    PathBuf::from("rustfst-cli")
}

fn default_warmup_runs() -> usize {
    3
}

fn default_iterations() -> usize {
    10
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            openfst_bench_dir: PathBuf::from("openfst_benches"),
            openfst_bin_dir: default_openfst_bin_dir(),
            rustfst_cli: default_rustfst_cli(),
            warmup_runs: default_warmup_runs(),
            iterations: default_iterations(),
        }
    }
}

impl BenchConfig {
    /// Validate the configuration parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(BenchError::InvalidConfig(
                "iterations must be at least 1".into(),
            ));
        }
        if self.rustfst_cli.as_os_str().is_empty() {
            return Err(BenchError::InvalidConfig(
                "rustfst_cli cannot be empty".into(),
            ));
        }
        Ok(())
    }
}
