//! Topological sort of acyclic FSTs.

use std::path::Path;

use crate::error::Result;
use crate::oracle::check_fst_equals;
use crate::traits::{BenchAlgorithm, BenchCli, ParameterSweep, ReferenceCli};

/// Descriptor for the `topsort` benchmark.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TopSortAlgorithm;

impl BenchAlgorithm for TopSortAlgorithm {
    fn reference_cli(&self) -> ReferenceCli {
        Self::openfst_cli()
    }

    fn subcommand(&self) -> &'static str {
        Self::rustfst_subcommand()
    }

    fn openfst_bench_cli(&self) -> BenchCli {
        BenchCli::new("bench_topsort")
    }

    fn cli_args(&self) -> String {
        String::new()
    }

    fn check_correctness(&self, path_res_openfst: &Path, path_res_rustfst: &Path) -> Result<()> {
        check_fst_equals(path_res_openfst, path_res_rustfst)
    }
}

impl ParameterSweep for TopSortAlgorithm {
    fn openfst_cli() -> ReferenceCli {
        ReferenceCli::Supported("fsttopsort")
    }

    fn rustfst_subcommand() -> &'static str {
        "topsort"
    }

    fn parameters() -> Vec<Self> {
        vec![Self]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topsort_boxed_parameters() {
        let boxed = TopSortAlgorithm::boxed_parameters();
        assert_eq!(boxed.len(), 1);
        assert_eq!(boxed[0].subcommand(), "topsort");
        assert!(boxed[0].reference_cli().is_supported());
    }
}
