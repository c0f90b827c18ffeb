//! Command lines for running an algorithm with each toolkit.
//!
//! Nothing here spawns a process. The driver decides how and when to run the
//! returned [`Invocation`]s.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::BenchConfig;
use crate::error::Result;
use crate::traits::BenchAlgorithm;

/// A program and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Executable to run.
    pub program: PathBuf,
    /// Arguments, in order.
    pub args: Vec<String>,
}

impl Invocation {
    fn new(program: PathBuf) -> Self {
        Self {
            program,
            args: Vec::new(),
        }
    }

    fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    fn path_arg(self, path: &Path) -> Self {
        self.arg(path.to_string_lossy())
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Benchmark wrapper run on the OpenFST side.
///
/// `<bench_dir>/<bench_name> <warmups> <iterations> <input> <output> <extra_args...>`
#[must_use]
pub fn openfst_invocation(
    config: &BenchConfig,
    algorithm: &dyn BenchAlgorithm,
    input: &Path,
    output: &Path,
) -> Invocation {
    let cli = algorithm.openfst_bench_cli();
    let invocation = Invocation::new(config.openfst_bench_dir.join(cli.name))
        .arg(config.warmup_runs.to_string())
        .arg(config.iterations.to_string())
        .path_arg(input)
        .path_arg(output);

    cli.extra_args.into_iter().fold(invocation, Invocation::arg)
}

/// Benchmarked rustfst-cli subcommand.
///
/// `<rustfst_cli> <subcommand> <cli_args...> <input> <output> --bench --n_warm_ups <n> --n_iters <n>`
#[must_use]
pub fn rustfst_invocation(
    config: &BenchConfig,
    algorithm: &dyn BenchAlgorithm,
    input: &Path,
    output: &Path,
) -> Invocation {
    let invocation = Invocation::new(config.rustfst_cli.clone()).arg(algorithm.subcommand());

    algorithm
        .cli_args()
        .split_whitespace()
        .fold(invocation, Invocation::arg)
        .path_arg(input)
        .path_arg(output)
        .arg("--bench")
        .arg("--n_warm_ups")
        .arg(config.warmup_runs.to_string())
        .arg("--n_iters")
        .arg(config.iterations.to_string())
}

/// Plain OpenFST command line tool, used to produce a reference result.
///
/// `<bin_dir>/<fst_cli> <input> <output>`
///
/// # Errors
///
/// Returns [`crate::BenchError::NotSupported`] if the algorithm has no
/// OpenFST command.
pub fn reference_invocation(
    config: &BenchConfig,
    algorithm: &dyn BenchAlgorithm,
    input: &Path,
    output: &Path,
) -> Result<Invocation> {
    let name = algorithm.reference_cli().into_result(algorithm.subcommand())?;

    Ok(Invocation::new(config.openfst_bin_dir.join(name))
        .path_arg(input)
        .path_arg(output))
}
