//! # fst-bench
//!
//! Algorithm descriptors for benchmarking rustfst against OpenFST.
//!
//! For every benchmarked algorithm this crate knows:
//! - which OpenFST benchmark wrapper and which `rustfst-cli` subcommand run it
//! - which configurations to sweep over
//! - how to check that both toolkits produced the same FST
//!
//! Running the toolkits and timing them is left to the benchmark driver.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fst_bench::{AlgorithmRegistry, ReferenceCli};
//! use std::path::Path;
//!
//! let algo = AlgorithmRegistry::global().get("rmfinalepsilon")?;
//! assert_eq!(algo.reference_cli(), ReferenceCli::Unsupported);
//! assert_eq!(algo.openfst_bench_cli().name, "bench_rm_final_epsilon");
//!
//! algo.check_correctness(Path::new("res_openfst.fst"), Path::new("res_rustfst.fst"))?;
//! # Ok::<(), fst_bench::BenchError>(())
//! ```
//!
//! ## Architecture
//!
//! All algorithms implement the [`BenchAlgorithm`] trait, which the driver
//! consumes through trait objects, and [`ParameterSweep`], which lists the
//! configurations to benchmark.

#![warn(missing_docs)]
#![warn(clippy::pedantic)]

pub mod algorithms;
pub mod config;
pub mod error;
pub mod invocation;
pub mod io;
pub mod oracle;
pub mod registry;
pub mod traits;

pub use algorithms::connect::ConnectAlgorithm;
pub use algorithms::invert::InvertAlgorithm;
pub use algorithms::rm_final_epsilon::RmFinalEpsilonAlgorithm;
pub use algorithms::topsort::TopSortAlgorithm;
pub use config::BenchConfig;
pub use error::{BenchError, Result};
pub use invocation::{openfst_invocation, reference_invocation, rustfst_invocation, Invocation};
pub use io::{load_bench_config, save_bench_config};
pub use oracle::{check_fst_equals, check_fst_equals_with_delta};
pub use registry::AlgorithmRegistry;
pub use traits::{BenchAlgorithm, BenchCli, ParameterSweep, ReferenceCli};
