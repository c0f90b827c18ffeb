//! Core traits for benchmarked FST algorithms.

use std::fmt;
use std::path::Path;

use crate::error::{BenchError, Result};

/// Name of the OpenFST command line tool for an algorithm, if there is one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceCli {
    /// The algorithm is available as this OpenFST binary (e.g. `fstconnect`).
    Supported(&'static str),
    /// No OpenFST command is wired up; skip the reference side.
    Unsupported,
}

impl ReferenceCli {
    /// The command name, or `None` when unsupported.
    #[must_use]
    pub fn name(self) -> Option<&'static str> {
        match self {
            Self::Supported(name) => Some(name),
            Self::Unsupported => None,
        }
    }

    /// Whether a reference command exists.
    #[must_use]
    pub fn is_supported(self) -> bool {
        matches!(self, Self::Supported(_))
    }

    /// Convert into a `Result`, reporting `algorithm` when unsupported.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::NotSupported`] for [`ReferenceCli::Unsupported`].
    pub fn into_result(self, algorithm: &str) -> Result<&'static str> {
        self.name().ok_or_else(|| BenchError::NotSupported {
            algorithm: algorithm.to_string(),
        })
    }
}

impl fmt::Display for ReferenceCli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Supported(name) => f.write_str(name),
            Self::Unsupported => f.write_str("<unsupported>"),
        }
    }
}

/// Benchmark wrapper binary of the OpenFST side, plus its extra flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchCli {
    /// Name of the benchmark executable (e.g. `bench_rm_final_epsilon`).
    pub name: &'static str,
    /// Flags appended after the positional arguments.
    pub extra_args: Vec<String>,
}

impl BenchCli {
    /// Bench entry point that takes no extra flags.
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            extra_args: Vec::new(),
        }
    }
}

/// One configured algorithm, as seen by the benchmark driver.
///
/// This trait is object safe so a registry can hold heterogeneous
/// algorithms behind `Box<dyn BenchAlgorithm>`.
pub trait BenchAlgorithm: Send + Sync + fmt::Debug {
    /// OpenFST command for this algorithm.
    fn reference_cli(&self) -> ReferenceCli;

    /// rustfst-cli subcommand for this algorithm.
    fn subcommand(&self) -> &'static str;

    /// Benchmark wrapper to run on the OpenFST side.
    fn openfst_bench_cli(&self) -> BenchCli;

    /// Algorithm specific flags passed to the rustfst-cli subcommand.
    fn cli_args(&self) -> String;

    /// Compare the result files produced by both toolkits.
    ///
    /// # Errors
    ///
    /// Returns an error if the results differ or a file cannot be read.
    fn check_correctness(&self, path_res_openfst: &Path, path_res_rustfst: &Path) -> Result<()>;
}

/// Class level side of an algorithm: constants and the parameter sweep.
pub trait ParameterSweep: BenchAlgorithm + Sized + 'static {
    /// OpenFST command for this algorithm.
    fn openfst_cli() -> ReferenceCli;

    /// rustfst-cli subcommand for this algorithm.
    fn rustfst_subcommand() -> &'static str;

    /// Every configuration to benchmark. Never empty.
    #[must_use]
    fn parameters() -> Vec<Self>;

    /// [`ParameterSweep::parameters`] as trait objects.
    #[must_use]
    fn boxed_parameters() -> Vec<Box<dyn BenchAlgorithm>> {
        Self::parameters()
            .into_iter()
            .map(|p| Box::new(p) as Box<dyn BenchAlgorithm>)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety check
    fn _assert_algorithm_object_safe(_: &dyn BenchAlgorithm) {}

    #[test]
    fn test_reference_cli_supported() -> Result<()> {
        let cli = ReferenceCli::Supported("fstconnect");
        assert!(cli.is_supported());
        assert_eq!(cli.name(), Some("fstconnect"));
        assert_eq!(cli.into_result("connect")?, "fstconnect");
        assert_eq!(cli.to_string(), "fstconnect");
        Ok(())
    }

    #[test]
    fn test_reference_cli_unsupported() {
        let cli = ReferenceCli::Unsupported;
        assert!(!cli.is_supported());
        assert_eq!(cli.name(), None);

        let err = cli.into_result("rmfinalepsilon").unwrap_err();
        assert!(matches!(
            err,
            BenchError::NotSupported { ref algorithm } if algorithm == "rmfinalepsilon"
        ));
    }

    #[test]
    fn test_bench_cli_new_has_no_extra_args() {
        let cli = BenchCli::new("bench_connect");
        assert_eq!(cli.name, "bench_connect");
        assert!(cli.extra_args.is_empty());
    }
}
