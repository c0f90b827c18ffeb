//! Removal of epsilon transitions leading to final states.
//!
//! OpenFST ships no `fstrmfinalepsilon` binary, so only the benchmark wrapper
//! is available on the reference side. The reference CLI stays
//! [`ReferenceCli::Unsupported`] until one is wired up.

use std::path::Path;

use crate::error::Result;
use crate::oracle::check_fst_equals;
use crate::traits::{BenchAlgorithm, BenchCli, ParameterSweep, ReferenceCli};

/// Descriptor for the `rmfinalepsilon` benchmark. Takes no parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RmFinalEpsilonAlgorithm;

impl RmFinalEpsilonAlgorithm {
    /// Create a new descriptor.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl BenchAlgorithm for RmFinalEpsilonAlgorithm {
    fn reference_cli(&self) -> ReferenceCli {
        Self::openfst_cli()
    }

    fn subcommand(&self) -> &'static str {
        Self::rustfst_subcommand()
    }

    fn openfst_bench_cli(&self) -> BenchCli {
        BenchCli::new("bench_rm_final_epsilon")
    }

    fn cli_args(&self) -> String {
        String::new()
    }

    fn check_correctness(&self, path_res_openfst: &Path, path_res_rustfst: &Path) -> Result<()> {
        check_fst_equals(path_res_openfst, path_res_rustfst)
    }
}

impl ParameterSweep for RmFinalEpsilonAlgorithm {
    fn openfst_cli() -> ReferenceCli {
        ReferenceCli::Unsupported
    }

    fn rustfst_subcommand() -> &'static str {
        "rmfinalepsilon"
    }

    fn parameters() -> Vec<Self> {
        vec![Self::new()]
    }
}
