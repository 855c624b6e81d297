use crate::args::MutateArgs;
use crate::commands::Command;
use crate::printing::print_generation_parameters;
use anyhow::{Context, Result};
use synthap_sim::io::fasta;
use synthap_sim::simulation::{GenerationConfig, create_rng, generate_with};

impl Command for MutateArgs {
    fn execute(&self) -> Result<()> {
        let config = GenerationConfig::new(self.error_rate, self.count)
            .with_truncate(self.truncate)
            .with_seed(self.seed);
        config.validate()?;

        let haplotypes = fasta::read_haplotypes(&self.base_hap)
            .with_context(|| format!("Failed to read {}", self.base_hap.display()))?;
        print_generation_parameters(&config, haplotypes.len());

        let mut rng = create_rng(config.seed);
        let records = generate_with(&haplotypes, &config, &mut rng)?;

        let mut writer = fasta::create_writer(self.output.as_deref())
            .context("Failed to create output")?;
        let written = writer.write_haplotypes(records)?;
        writer.finish().context("Failed to finish output")?;

        match &self.output {
            Some(path) => log::info!("Wrote {written} sequences to {}", path.display()),
            None => log::info!("Wrote {written} sequences"),
        }
        Ok(())
    }
}
