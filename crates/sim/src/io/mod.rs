//! Reading and writing sequence files.

pub mod fasta;

pub use fasta::{
    FastaReader, FastaRecord, FastaWriter, OutputSink, create_writer, open_reader,
    read_haplotypes, read_records,
};
