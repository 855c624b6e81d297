//! Parameter sweeps producing benchmark datasets.
//!
//! Every combination of haplotype count, error rate and truncation length
//! becomes one dataset directory. A dataset is built in two stages that
//! share the run's single random generator:
//!
//! 1. *Graph* haplotypes are generated from the base sequences.
//! 2. *Alignment* sequences are generated from those graph haplotypes.
//!
//! Combinations are visited in nested order (haplotypes, then error rates,
//! then lengths), so one seed reproduces the whole sweep.

use crate::errors::{ConfigError, DatasetError, SweepError};
use crate::genome::HaplotypeRecord;
use crate::io::fasta;
use crate::simulation::generator::generate;
use crate::simulation::parameters::validate_error_rate;
use crate::simulation::rng::create_rng;
use crate::storage::{ALIGN_SET_FILE, DatasetMeta, GRAPH_SET_FILE, SequenceSet, dataset_name};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_NUM_HAPLOTYPES: [usize; 3] = [3, 10, 25];
pub const DEFAULT_ERROR_RATES: [f64; 3] = [0.01, 0.03, 0.05];
pub const DEFAULT_NUM_SEQUENCES: usize = 100;

/// Configuration of a dataset sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    /// FASTA file with the base sequence(s).
    pub base: PathBuf,
    /// Directory receiving one subdirectory per dataset.
    pub output_dir: PathBuf,
    pub num_haplotypes: Vec<usize>,
    pub error_rates: Vec<f64>,
    /// Truncation lengths; `None` keeps full-length sequences.
    pub lengths: Vec<Option<usize>>,
    /// Alignment sequences generated per dataset.
    pub num_sequences: usize,
    pub seed: Option<u64>,
}

impl SweepConfig {
    /// Sweep over the default grid.
    pub fn new(base: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            base: base.into(),
            output_dir: output_dir.into(),
            num_haplotypes: DEFAULT_NUM_HAPLOTYPES.to_vec(),
            error_rates: DEFAULT_ERROR_RATES.to_vec(),
            lengths: vec![None],
            num_sequences: DEFAULT_NUM_SEQUENCES,
            seed: None,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_haplotypes.is_empty() || self.error_rates.is_empty() || self.lengths.is_empty()
        {
            return Err(ConfigError::InvalidSweep(
                "every sweep axis needs at least one value".to_string(),
            ));
        }
        if self.num_haplotypes.contains(&0) {
            return Err(ConfigError::InvalidSweep(
                "number of haplotypes must be positive".to_string(),
            ));
        }
        self.error_rates
            .iter()
            .try_for_each(|&rate| validate_error_rate(rate))
    }

    /// All combinations in visiting order.
    pub fn points(&self) -> Vec<SweepPoint> {
        let mut points =
            Vec::with_capacity(self.num_haplotypes.len() * self.error_rates.len() * self.lengths.len());
        for &num_haplotypes in &self.num_haplotypes {
            for &error_rate in &self.error_rates {
                for &length in &self.lengths {
                    points.push(SweepPoint {
                        num_haplotypes,
                        error_rate,
                        length: length.filter(|&l| l > 0),
                    });
                }
            }
        }
        points
    }
}

/// One combination of sweep parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub num_haplotypes: usize,
    pub error_rate: f64,
    pub length: Option<usize>,
}

impl SweepPoint {
    /// Directory name of the dataset built for this point.
    pub fn name(&self) -> String {
        dataset_name(self.num_haplotypes, self.error_rate, self.length)
    }
}

/// What was written for one dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSummary {
    pub name: String,
    pub dir: PathBuf,
    pub graph_seqs: usize,
    pub align_seqs: usize,
}

/// Build the dataset for `point` under `output_dir`.
pub fn build_dataset<R: Rng + ?Sized>(
    base: &[HaplotypeRecord],
    output_dir: &Path,
    point: &SweepPoint,
    num_sequences: usize,
    rng: &mut R,
) -> Result<DatasetSummary, SweepError> {
    let name = point.name();
    let dir = output_dir.join(&name);
    fs::create_dir_all(&dir).map_err(|source| DatasetError::Io {
        path: dir.clone(),
        source,
    })?;
    log::info!("Building dataset {}", dir.display());

    let graph: Vec<HaplotypeRecord> = generate(
        base,
        point.error_rate,
        point.num_haplotypes,
        point.length,
        rng,
    )?
    .collect();

    let graph_path = dir.join(GRAPH_SET_FILE);
    let mut writer = fasta::create_writer(Some(&graph_path))?;
    let graph_seqs = writer.write_haplotypes(&graph)?;
    writer.finish()?;
    log::debug!("Wrote {graph_seqs} graph haplotypes to {}", graph_path.display());

    let align_path = dir.join(ALIGN_SET_FILE);
    let mut writer = fasta::create_writer(Some(&align_path))?;
    let align_seqs = writer.write_haplotypes(generate(
        &graph,
        point.error_rate,
        num_sequences,
        point.length,
        rng,
    )?)?;
    writer.finish()?;
    log::debug!("Wrote {align_seqs} alignment sequences to {}", align_path.display());

    let meta = DatasetMeta {
        error_rate: Some(point.error_rate),
        length: point.length,
        graph_set: Some(SequenceSet::new(GRAPH_SET_FILE, graph_seqs)),
        align_set: SequenceSet::new(ALIGN_SET_FILE, align_seqs),
    };
    meta.write(&dir)?;

    Ok(DatasetSummary {
        name,
        dir,
        graph_seqs,
        align_seqs,
    })
}

/// Run the full sweep, calling `on_dataset` after each dataset is written.
pub fn run_sweep<F>(config: &SweepConfig, mut on_dataset: F) -> Result<Vec<DatasetSummary>, SweepError>
where
    F: FnMut(&DatasetSummary),
{
    config.validate()?;
    let base = fasta::read_haplotypes(&config.base)?;
    let mut rng = create_rng(config.seed);

    let points = config.points();
    let mut summaries = Vec::with_capacity(points.len());
    for point in &points {
        let summary = build_dataset(&base, &config.output_dir, point, config.num_sequences, &mut rng)?;
        on_dataset(&summary);
        summaries.push(summary);
    }

    Ok(summaries)
}
