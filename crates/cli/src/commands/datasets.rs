use crate::args::DatasetsArgs;
use crate::commands::Command;
use crate::printing::print_datasets;
use anyhow::{Context, Result};
use synthap_sim::storage::find_datasets;

impl Command for DatasetsArgs {
    fn execute(&self) -> Result<()> {
        let datasets = find_datasets(&self.dir, self.prefix.as_deref())
            .with_context(|| format!("Failed to scan {}", self.dir.display()))?;

        if datasets.is_empty() {
            log::warn!("No datasets found in {}", self.dir.display());
        }
        print_datasets(&datasets);
        Ok(())
    }
}
