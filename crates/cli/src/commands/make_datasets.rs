use crate::args::MakeDatasetsArgs;
use crate::commands::Command;
use crate::printing::print_sweep_parameters;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use synthap_sim::simulation::{SweepConfig, run_sweep};

impl MakeDatasetsArgs {
    fn sweep_config(&self) -> SweepConfig {
        let mut config = SweepConfig::new(&self.base, &self.output_dir);
        if !self.num_haplotypes.is_empty() {
            config.num_haplotypes = self.num_haplotypes.clone();
        }
        if !self.error_rates.is_empty() {
            config.error_rates = self.error_rates.clone();
        }
        if !self.truncate_lengths.is_empty() {
            config.lengths = self.truncate_lengths.iter().map(|&l| Some(l)).collect();
        }
        config.num_sequences = self.num_sequences;
        config.seed = self.seed;
        config
    }
}

impl Command for MakeDatasetsArgs {
    fn execute(&self) -> Result<()> {
        let config = self.sweep_config();
        config.validate()?;
        print_sweep_parameters(&config);

        let pb = ProgressBar::new(config.points().len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
                .progress_chars("#>-"),
        );

        let summaries = run_sweep(&config, |summary| {
            pb.set_message(summary.name.clone());
            pb.inc(1);
        })
        .with_context(|| format!("Failed to build datasets in {}", config.output_dir.display()))?;

        pb.finish_with_message("Done");
        log::info!(
            "Created {} datasets in {}",
            summaries.len(),
            config.output_dir.display()
        );
        Ok(())
    }
}
