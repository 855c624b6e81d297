use crate::args::MsaStatsArgs;
use crate::commands::Command;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use synthap_analysis::{Alignment, msa_stats};

impl Command for MsaStatsArgs {
    fn execute(&self) -> Result<()> {
        let alignment = Alignment::from_fasta(&self.fasta)
            .with_context(|| format!("Failed to load alignment {}", self.fasta.display()))?;
        log::info!(
            "Loaded {} sequences with {} columns",
            alignment.num_rows(),
            alignment.width()
        );

        let stats = msa_stats(&alignment);

        let mut out: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(BufWriter::new(
                File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
            )),
            None => Box::new(io::stdout().lock()),
        };

        if self.json {
            serde_json::to_writer_pretty(&mut out, &stats)?;
            writeln!(out)?;
        } else {
            write!(out, "{stats}")?;
        }
        out.flush()?;
        Ok(())
    }
}
