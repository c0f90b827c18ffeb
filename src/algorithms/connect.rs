//! Trimming of states that are not both accessible and coaccessible.

use std::path::Path;

use crate::error::Result;
use crate::oracle::check_fst_equals;
use crate::traits::{BenchAlgorithm, BenchCli, ParameterSweep, ReferenceCli};

/// Descriptor for the `connect` benchmark.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConnectAlgorithm;

impl BenchAlgorithm for ConnectAlgorithm {
    fn reference_cli(&self) -> ReferenceCli {
        Self::openfst_cli()
    }

    fn subcommand(&self) -> &'static str {
        Self::rustfst_subcommand()
    }

    fn openfst_bench_cli(&self) -> BenchCli {
        BenchCli::new("bench_connect")
    }

    fn cli_args(&self) -> String {
        String::new()
    }

    fn check_correctness(&self, path_res_openfst: &Path, path_res_rustfst: &Path) -> Result<()> {
        check_fst_equals(path_res_openfst, path_res_rustfst)
    }
}

impl ParameterSweep for ConnectAlgorithm {
    fn openfst_cli() -> ReferenceCli {
        ReferenceCli::Supported("fstconnect")
    }

    fn rustfst_subcommand() -> &'static str {
        "connect"
    }

    fn parameters() -> Vec<Self> {
        vec![Self]
    }
}
