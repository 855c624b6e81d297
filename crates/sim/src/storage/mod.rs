//! On-disk layout of generated datasets.
//!
//! Each dataset lives in its own directory holding the graph haplotypes, the
//! sequences to align, and a `meta.toml` describing both.

pub mod dataset;

pub use dataset::{
    ALIGN_SET_FILE, Dataset, DatasetMeta, GRAPH_SET_FILE, META_FILE, SequenceSet, dataset_name,
    find_datasets, load_dataset,
};
