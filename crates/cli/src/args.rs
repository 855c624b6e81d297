use crate::defaults;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct MutateArgs {
    /// FASTA file with the base haplotypes (.gz supported, '-' for stdin)
    pub base_hap: PathBuf,

    /// Output FASTA file (.gz compresses). Defaults to stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Fraction of positions to mutate
    #[arg(short, long, default_value_t = defaults::ERROR_RATE)]
    pub error_rate: f64,

    /// Total number of mutated sequences to generate
    #[arg(short = 'n', long, default_value_t = defaults::COUNT)]
    pub count: usize,

    /// Truncate each base haplotype to this many bases before mutating
    #[arg(short, long)]
    pub truncate: Option<usize>,

    /// Random generator seed
    #[arg(short, long)]
    pub seed: Option<u64>,
}

#[derive(Args, Debug)]
pub struct MakeDatasetsArgs {
    /// FASTA file with the sequence used as base for all datasets
    pub base: PathBuf,

    /// Output directory receiving one directory per dataset
    #[arg(short, long)]
    pub output_dir: PathBuf,

    /// Numbers of graph haplotypes to generate [default: 3 10 25]
    #[arg(short = 'H', long, num_args = 1..)]
    pub num_haplotypes: Vec<usize>,

    /// Error rates to use [default: 0.01 0.03 0.05]
    #[arg(short = 'E', long, num_args = 1..)]
    pub error_rates: Vec<f64>,

    /// Truncate the base sequences to these lengths
    #[arg(short = 'L', long, num_args = 1..)]
    pub truncate_lengths: Vec<usize>,

    /// Number of sequences to generate for alignment
    #[arg(short = 'N', long, default_value_t = defaults::NUM_SEQUENCES)]
    pub num_sequences: usize,

    /// Random generator seed
    #[arg(short, long)]
    pub seed: Option<u64>,
}

#[derive(Args, Debug)]
pub struct MsaStatsArgs {
    /// Aligned FASTA file (.gz supported)
    pub fasta: PathBuf,

    /// Output file. Defaults to stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write JSON instead of tab-separated lines
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct DatasetsArgs {
    /// Directory to scan for datasets
    pub dir: PathBuf,

    /// Only list datasets whose name starts with this prefix
    #[arg(long)]
    pub prefix: Option<String>,
}
