use crate::errors::AnalysisError;
use std::path::Path;
use synthap_sim::io::fasta::{self, FastaRecord};

/// Gap character in aligned rows.
pub const GAP: u8 = b'-';

/// A validated multiple sequence alignment.
///
/// Rows are stored as uppercase ASCII so that soft-masked bases compare
/// equal to their uppercase form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment {
    ids: Vec<String>,
    rows: Vec<Vec<u8>>,
    width: usize,
}

impl Alignment {
    /// Build an alignment from FASTA records.
    ///
    /// Fails if there are no records, if the rows have zero width, or if any
    /// row is wider or narrower than the first.
    pub fn from_records(records: Vec<FastaRecord>) -> Result<Self, AnalysisError> {
        let width = records.first().ok_or(AnalysisError::Empty)?.sequence.len();
        if width == 0 {
            return Err(AnalysisError::ZeroWidth);
        }

        let mut ids = Vec::with_capacity(records.len());
        let mut rows = Vec::with_capacity(records.len());
        for record in records {
            let mut row = record.sequence.into_bytes();
            row.make_ascii_uppercase();
            if row.len() != width {
                return Err(AnalysisError::LengthMismatch {
                    expected: width,
                    found: row.len(),
                    id: record.id,
                });
            }
            ids.push(record.id);
            rows.push(row);
        }

        Ok(Self { ids, rows, width })
    }

    /// Read an aligned FASTA file, gzip-compressed or not.
    pub fn from_fasta(path: impl AsRef<Path>) -> Result<Self, AnalysisError> {
        Self::from_records(fasta::read_records(path)?)
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of alignment columns.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    /// Length of each row with gaps removed.
    pub fn ungapped_lengths(&self) -> Vec<usize> {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|&&b| b != GAP).count())
            .collect()
    }
}
