use synthap_sim::simulation::{GenerationConfig, SweepConfig};
use synthap_sim::storage::Dataset;

// Parameters go to stderr; stdout may carry FASTA output.

pub fn print_generation_parameters(config: &GenerationConfig, num_haplotypes: usize) {
    eprintln!("Generation parameters");
    eprintln!("  • Base haplotypes: {num_haplotypes}");
    eprintln!("  • Error rate: {} [-e, --error-rate]", config.error_rate);
    eprintln!("  • Sequences: {} [-n, --count]", config.count);
    match config.effective_truncate() {
        Some(len) => eprintln!("  • Truncate: {len} bp [-t, --truncate]"),
        None => eprintln!("  • Truncate: off [-t, --truncate]"),
    }
    print_seed(config.seed);
}

pub fn print_sweep_parameters(config: &SweepConfig) {
    eprintln!("Sweep parameters");
    eprintln!("  • Haplotypes: {:?} [-H]", config.num_haplotypes);
    eprintln!("  • Error rates: {:?} [-E]", config.error_rates);
    let lengths: Vec<String> = config
        .lengths
        .iter()
        .map(|l| l.map_or_else(|| "full".to_string(), |l| l.to_string()))
        .collect();
    eprintln!("  • Lengths: [{}] [-L]", lengths.join(", "));
    eprintln!("  • Alignment sequences: {} [-N]", config.num_sequences);
    print_seed(config.seed);
}

fn print_seed(seed: Option<u64>) {
    match seed {
        Some(seed) => eprintln!("  • Random Seed: {seed} [-s, --seed]"),
        None => eprintln!("  • Random Seed: Random [-s, --seed]"),
    }
}

fn or_dash<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

/// One tab-separated line per dataset, preceded by a header.
pub fn print_datasets(datasets: &[Dataset]) {
    println!("name\terror_rate\tlength\tgraph_seqs\talign_seqs\tpath");
    for ds in datasets {
        let meta = ds.meta();
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}",
            ds.name(),
            or_dash(meta.error_rate),
            or_dash(meta.length),
            or_dash(meta.graph_set.as_ref().and_then(|s| s.num_seqs)),
            or_dash(meta.align_set.num_seqs),
            ds.dir().display()
        );
    }
}
