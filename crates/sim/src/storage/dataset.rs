use crate::errors::{DatasetError, FastaError};
use crate::io::fasta::{self, FastaRecord};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Name of the metadata file inside a dataset directory.
pub const META_FILE: &str = "meta.toml";
/// Haplotypes used to build the graph.
pub const GRAPH_SET_FILE: &str = "base_haplotypes.fna.gz";
/// Sequences aligned against the graph.
pub const ALIGN_SET_FILE: &str = "align_seq.fna.gz";

/// Directory name for one sweep combination, e.g. `hap10_err0.03` or
/// `hap3_err0.01_len500`.
///
/// Rates below `1e-4` use exponent notation (`hap3_err1e-05`).
pub fn dataset_name(num_haplotypes: usize, error_rate: f64, length: Option<usize>) -> String {
    let rate = format_rate(error_rate);
    match length {
        Some(len) => format!("hap{num_haplotypes}_err{rate}_len{len}"),
        None => format!("hap{num_haplotypes}_err{rate}"),
    }
}

/// Shortest decimal form of `rate`, switching to `<m>e-XX` for very small or
/// large magnitudes.
fn format_rate(rate: f64) -> String {
    let magnitude = rate.abs();
    if magnitude == 0.0 || !magnitude.is_finite() || (1e-4..1e6).contains(&magnitude) {
        return rate.to_string();
    }

    let scientific = format!("{rate:e}");
    match scientific.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => scientific,
    }
}

/// A sequence file belonging to a dataset, relative to the dataset directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceSet {
    pub fname: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_seqs: Option<usize>,
}

impl SequenceSet {
    pub fn new(fname: impl Into<PathBuf>, num_seqs: usize) -> Self {
        Self {
            fname: fname.into(),
            num_seqs: Some(num_seqs),
        }
    }
}

/// Contents of `meta.toml`.
///
/// Unknown keys are ignored so hand-written metadata with extra fields still
/// loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graph_set: Option<SequenceSet>,
    pub align_set: SequenceSet,
}

impl DatasetMeta {
    /// Parse metadata from TOML text; `path` is only used in errors.
    pub fn from_toml(text: &str, path: &Path) -> Result<Self, DatasetError> {
        toml::from_str(text).map_err(|source| DatasetError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn to_toml(&self) -> Result<String, DatasetError> {
        Ok(toml::to_string(self)?)
    }

    /// Read `path`.
    pub fn read(path: &Path) -> Result<Self, DatasetError> {
        let text = fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text, path)
    }

    /// Write `meta.toml` into `dir` and return its path.
    pub fn write(&self, dir: &Path) -> Result<PathBuf, DatasetError> {
        let path = dir.join(META_FILE);
        let text = self.to_toml()?;
        fs::write(&path, text).map_err(|source| DatasetError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}

/// A dataset found on disk.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    name: String,
    dir: PathBuf,
    meta: DatasetMeta,
}

impl Dataset {
    /// Name relative to the datasets root.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn meta(&self) -> &DatasetMeta {
        &self.meta
    }

    pub fn graph_sequences_path(&self) -> Option<PathBuf> {
        self.meta.graph_set.as_ref().map(|set| self.dir.join(&set.fname))
    }

    pub fn align_sequences_path(&self) -> PathBuf {
        self.dir.join(&self.meta.align_set.fname)
    }

    /// Load the sequences to align.
    pub fn load_align_sequences(&self) -> Result<Vec<FastaRecord>, FastaError> {
        fasta::read_records(self.align_sequences_path())
    }

    /// Load the graph haplotypes, if the dataset has any.
    pub fn load_graph_sequences(&self) -> Result<Option<Vec<FastaRecord>>, FastaError> {
        self.graph_sequences_path()
            .map(|path| fasta::read_records(path))
            .transpose()
    }
}

/// Load the dataset `name` under `root`.
pub fn load_dataset(root: &Path, name: &str) -> Result<Dataset, DatasetError> {
    let dir = root.join(name);
    let meta_path = dir.join(META_FILE);
    if !meta_path.is_file() {
        return Err(DatasetError::MissingMetadata(meta_path));
    }

    let meta = DatasetMeta::read(&meta_path)?;
    Ok(Dataset {
        name: name.to_string(),
        dir,
        meta,
    })
}

/// Find every dataset below `root`, optionally keeping only names starting
/// with `prefix`. Results are sorted by name.
pub fn find_datasets(root: &Path, prefix: Option<&str>) -> Result<Vec<Dataset>, DatasetError> {
    let mut datasets = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = entry?;
        if !entry.file_type().is_file() || entry.file_name() != META_FILE {
            continue;
        }

        let Some(dir) = entry.path().parent() else {
            continue;
        };
        let relative = dir.strip_prefix(root).unwrap_or(dir);
        let name = if relative.as_os_str().is_empty() {
            dir.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default()
        } else {
            relative.to_string_lossy().into_owned()
        };

        if let Some(prefix) = prefix
            && !name.starts_with(prefix)
        {
            continue;
        }

        let meta = DatasetMeta::read(entry.path())?;
        datasets.push(Dataset {
            name,
            dir: dir.to_path_buf(),
            meta,
        });
    }

    datasets.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(datasets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn meta(error_rate: f64, length: Option<usize>) -> DatasetMeta {
        DatasetMeta {
            error_rate: Some(error_rate),
            length,
            graph_set: Some(SequenceSet::new(GRAPH_SET_FILE, 3)),
            align_set: SequenceSet::new(ALIGN_SET_FILE, 100),
        }
    }

    fn write_dataset(root: &Path, name: &str, meta: &DatasetMeta) {
        let dir = root.join(name);
        fs::create_dir_all(&dir).unwrap();
        meta.write(&dir).unwrap();
    }

    #[test]
    fn test_dataset_name() {
        assert_eq!(dataset_name(3, 0.01, None), "hap3_err0.01");
        assert_eq!(dataset_name(25, 0.05, Some(500)), "hap25_err0.05_len500");
        assert_eq!(dataset_name(3, 1.0, None), "hap3_err1");
    }

    #[test]
    fn test_dataset_name_small_rates() {
        assert_eq!(dataset_name(3, 0.0001, None), "hap3_err0.0001");
        assert_eq!(dataset_name(3, 0.00001, None), "hap3_err1e-05");
        assert_eq!(dataset_name(10, 0.000025, Some(50)), "hap10_err2.5e-05_len50");
        assert_eq!(dataset_name(3, 0.0, None), "hap3_err0");
    }

    #[test]
    fn test_meta_toml_layout() {
        let text = meta(0.03, Some(200)).to_toml().unwrap();
        assert!(text.contains("error_rate = 0.03"));
        assert!(text.contains("length = 200"));
        assert!(text.contains("[graph_set]"));
        assert!(text.contains("fname = \"base_haplotypes.fna.gz\""));
        assert!(text.contains("[align_set]"));
        assert!(text.contains("num_seqs = 100"));

        let no_length = meta(0.03, None).to_toml().unwrap();
        assert!(!no_length.contains("length"));
    }

    #[test]
    fn test_meta_ignores_unknown_keys() {
        let text = r#"
            clustering_max_dist = 0.2

            [align_set]
            fname = "reads.fa"
            avg_seq_len = 1000.0
        "#;
        let meta = DatasetMeta::from_toml(text, Path::new("meta.toml")).unwrap();
        assert_eq!(meta.error_rate, None);
        assert_eq!(meta.graph_set, None);
        assert_eq!(meta.align_set.fname, PathBuf::from("reads.fa"));
        assert_eq!(meta.align_set.num_seqs, None);
    }

    #[test]
    fn test_meta_parse_error() {
        let err = DatasetMeta::from_toml("align_set = 3", Path::new("x/meta.toml")).unwrap_err();
        assert!(matches!(err, DatasetError::Parse { .. }));
        assert!(err.to_string().contains("x/meta.toml"));
    }

    #[test]
    fn test_load_dataset() {
        let root = TempDir::new().unwrap();
        write_dataset(root.path(), "hap3_err0.01", &meta(0.01, None));

        let ds = load_dataset(root.path(), "hap3_err0.01").unwrap();
        assert_eq!(ds.name(), "hap3_err0.01");
        assert_eq!(ds.meta().error_rate, Some(0.01));
        assert_eq!(
            ds.align_sequences_path(),
            root.path().join("hap3_err0.01").join(ALIGN_SET_FILE)
        );
        assert_eq!(
            ds.graph_sequences_path(),
            Some(root.path().join("hap3_err0.01").join(GRAPH_SET_FILE))
        );
    }

    #[test]
    fn test_load_dataset_missing() {
        let root = TempDir::new().unwrap();
        let err = load_dataset(root.path(), "nope").unwrap_err();
        assert!(matches!(err, DatasetError::MissingMetadata(_)));
    }

    #[test]
    fn test_find_datasets_sorted_and_filtered() {
        let root = TempDir::new().unwrap();
        write_dataset(root.path(), "hap3_err0.05", &meta(0.05, None));
        write_dataset(root.path(), "hap10_err0.01", &meta(0.01, None));
        write_dataset(root.path(), "hap3_err0.01", &meta(0.01, None));
        write_dataset(root.path(), "nested/hap3_err0.03", &meta(0.03, None));
        fs::write(root.path().join("notes.toml"), "x = 1").unwrap();

        let all = find_datasets(root.path(), None).unwrap();
        let names: Vec<&str> = all.iter().map(|d| d.name()).collect();
        assert_eq!(
            names,
            ["hap10_err0.01", "hap3_err0.01", "hap3_err0.05", "nested/hap3_err0.03"]
        );

        let hap3 = find_datasets(root.path(), Some("hap3_")).unwrap();
        assert_eq!(hap3.len(), 2);
        assert!(hap3.iter().all(|d| d.name().starts_with("hap3_")));
    }

    #[test]
    fn test_find_datasets_empty_dir() {
        let root = TempDir::new().unwrap();
        assert!(find_datasets(root.path(), None).unwrap().is_empty());
    }
}
