//! Command line front end for fst-bench.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fst_bench::{
    load_bench_config, openfst_invocation, reference_invocation, rustfst_invocation,
    AlgorithmRegistry, BenchConfig, BenchError,
};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "fst-bench", about = "rustfst vs OpenFST benchmark descriptors")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every registered algorithm.
    List,
    /// Print the command lines the driver would run for each algorithm.
    Plan {
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        input: PathBuf,
        #[arg(long, default_value = ".")]
        output_dir: PathBuf,
    },
    /// Compare the results of both toolkits for one algorithm.
    Check {
        algorithm: String,
        path_res_openfst: PathBuf,
        path_res_rustfst: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let registry = AlgorithmRegistry::global();

    match Cli::parse().command {
        Command::List => {
            for (key, algo) in registry.iter() {
                let bench = algo.openfst_bench_cli();
                println!(
                    "{key}\topenfst={}\tbench={} {}\trustfst={} {}",
                    algo.reference_cli(),
                    bench.name,
                    bench.extra_args.join(" "),
                    algo.subcommand(),
                    algo.cli_args(),
                );
            }
        }
        Command::Plan {
            config,
            input,
            output_dir,
        } => {
            let config = match config {
                Some(path) => load_bench_config(&path)
                    .with_context(|| format!("loading {}", path.display()))?,
                None => BenchConfig::default(),
            };
            plan(registry, &config, &input, &output_dir)?;
        }
        Command::Check {
            algorithm,
            path_res_openfst,
            path_res_rustfst,
        } => {
            let algo = registry.get(&algorithm)?;
            algo.check_correctness(&path_res_openfst, &path_res_rustfst)?;
            info!(algorithm = %algorithm, "results match");
        }
    }

    Ok(())
}

fn plan(
    registry: &AlgorithmRegistry,
    config: &BenchConfig,
    input: &Path,
    output_dir: &Path,
) -> Result<()> {
    for (idx, (key, algo)) in registry.iter().enumerate() {
        let res_openfst = output_dir.join(format!("{idx}_{}_openfst.fst", algo.subcommand()));
        let res_rustfst = output_dir.join(format!("{idx}_{}_rustfst.fst", algo.subcommand()));

        println!("{}", openfst_invocation(config, algo, input, &res_openfst));
        println!("{}", rustfst_invocation(config, algo, input, &res_rustfst));

        match reference_invocation(config, algo, input, &res_openfst) {
            Ok(invocation) => info!(algorithm = key, %invocation, "reference command"),
            Err(BenchError::NotSupported { .. }) => {
                warn!(algorithm = key, "no OpenFST command, skipping reference run");
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}
