//! Swapping of input and output labels.

use std::path::Path;

use crate::error::Result;
use crate::oracle::check_fst_equals;
use crate::traits::{BenchAlgorithm, BenchCli, ParameterSweep, ReferenceCli};

/// Descriptor for the `invert` benchmark.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InvertAlgorithm;

impl BenchAlgorithm for InvertAlgorithm {
    fn reference_cli(&self) -> ReferenceCli {
        Self::openfst_cli()
    }

    fn subcommand(&self) -> &'static str {
        Self::rustfst_subcommand()
    }

    fn openfst_bench_cli(&self) -> BenchCli {
        BenchCli::new("bench_invert")
    }

    fn cli_args(&self) -> String {
        String::new()
    }

    fn check_correctness(&self, path_res_openfst: &Path, path_res_rustfst: &Path) -> Result<()> {
        check_fst_equals(path_res_openfst, path_res_rustfst)
    }
}

impl ParameterSweep for InvertAlgorithm {
    fn openfst_cli() -> ReferenceCli {
        ReferenceCli::Supported("fstinvert")
    }

    fn rustfst_subcommand() -> &'static str {
        "invert"
    }

    fn parameters() -> Vec<Self> {
        vec![Self]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invert_descriptor() {
        let algo = InvertAlgorithm;
        assert_eq!(algo.reference_cli().name(), Some("fstinvert"));
        assert_eq!(algo.subcommand(), "invert");
        assert_eq!(algo.openfst_bench_cli().name, "bench_invert");
    }
}
