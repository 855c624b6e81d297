mod args;
mod commands;
pub mod defaults;
mod printing;

use anyhow::Result;
use clap::{Parser, Subcommand};
use enum_dispatch::enum_dispatch;
use env_logger::Env;

use args::{DatasetsArgs, MakeDatasetsArgs, MsaStatsArgs, MutateArgs};
use commands::Command;

/// Synthap: synthetic haplotype datasets for alignment benchmarks
///
/// Generates reproducibly mutated copies of base haplotypes and organizes
/// them into benchmark datasets.
#[derive(Parser, Debug)]
#[command(name = "synthap")]
#[command(author, version, about = "Builds synthetic mutated sequence sets for alignment benchmarks", long_about = None)]
struct Cli {
    /// Number of threads to use for parallel processing
    ///
    /// If not specified, defaults to the number of logical CPUs.
    #[arg(short = 'j', long, global = true)]
    threads: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[enum_dispatch(Command)]
#[derive(Subcommand, Debug)]
enum Commands {
    /// Create randomly mutated sequences from base haplotypes.
    ///
    /// Substitutions, insertions and deletions are applied at a fixed
    /// error rate; ids are suffixed with `_mut<i>`.
    Mutate(MutateArgs),

    /// Build a grid of benchmark datasets from one base sequence.
    ///
    /// Each dataset holds graph haplotypes, sequences to align and a
    /// meta.toml.
    MakeDatasets(MakeDatasetsArgs),

    /// Print statistics of a multiple sequence alignment.
    MsaStats(MsaStatsArgs),

    /// List the datasets found in a directory.
    Datasets(DatasetsArgs),
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    cli.command.execute()
}
