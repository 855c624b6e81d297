//! Plain and gzip-compressed FASTA.
//!
//! Records are parsed and formatted with `noodles::fasta`; flate2 handles
//! compression. The id of a record runs up to the first whitespace of its
//! header and the rest, trimmed, is the description. Paths ending in `.gz`
//! are compressed or decompressed transparently, and `-` stands for the
//! standard streams.

use crate::base::Sequence;
use crate::errors::FastaError;
use crate::genome::HaplotypeRecord;
use flate2::Compression;
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use noodles::fasta;
use noodles::fasta::record::Definition;
use std::borrow::Borrow;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// A FASTA record with its fields decoded to text. The sequence is kept
/// as-is so aligned input with gap characters can be read as well.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    pub id: String,
    pub description: String,
    pub sequence: String,
}

impl FastaRecord {
    /// Interpret the record as a nucleotide haplotype.
    pub fn into_haplotype(self) -> Result<HaplotypeRecord, FastaError> {
        match Sequence::try_from(self.sequence.as_bytes()) {
            Ok(sequence) => Ok(HaplotypeRecord::new(self.id, self.description, sequence)),
            Err(source) => Err(FastaError::InvalidSequence {
                id: self.id,
                source,
            }),
        }
    }
}

impl From<fasta::Record> for FastaRecord {
    fn from(record: fasta::Record) -> Self {
        let description = record
            .description()
            .map(|d| String::from_utf8_lossy(d).trim().to_string())
            .unwrap_or_default();

        Self {
            id: String::from_utf8_lossy(record.name()).into_owned(),
            description,
            sequence: String::from_utf8_lossy(record.sequence().as_ref()).into_owned(),
        }
    }
}

fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "gz")
}

fn is_std_stream(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// FASTA reader over any buffered source.
pub struct FastaReader<R> {
    inner: fasta::io::Reader<R>,
    source: String,
}

impl<R: BufRead> FastaReader<R> {
    /// Wrap `reader`; `source` names the input in error messages.
    pub fn new(reader: R, source: impl Into<String>) -> Self {
        Self {
            inner: fasta::io::Reader::new(reader),
            source: source.into(),
        }
    }

    /// Iterate over the remaining records.
    pub fn records(&mut self) -> impl Iterator<Item = Result<FastaRecord, FastaError>> + '_ {
        let source = &self.source;
        self.inner.records().map(move |result| {
            result
                .map(FastaRecord::from)
                .map_err(|e| FastaError::read(source.as_str(), e))
        })
    }
}

/// Open a FASTA file for reading. `.gz` files are decompressed, `-` reads
/// standard input.
pub fn open_reader(path: impl AsRef<Path>) -> Result<FastaReader<Box<dyn BufRead>>, FastaError> {
    let path = path.as_ref();
    let name = path.display().to_string();

    let reader: Box<dyn BufRead> = if is_std_stream(path) {
        Box::new(BufReader::new(io::stdin().lock()))
    } else {
        let file = File::open(path).map_err(|e| FastaError::io(&name, e))?;
        if is_gzip(path) {
            Box::new(BufReader::new(MultiGzDecoder::new(file)))
        } else {
            Box::new(BufReader::new(file))
        }
    };

    Ok(FastaReader::new(reader, name))
}

/// Read every record of a FASTA file.
pub fn read_records(path: impl AsRef<Path>) -> Result<Vec<FastaRecord>, FastaError> {
    let mut reader = open_reader(path)?;
    let records = reader.records().collect::<Result<Vec<_>, _>>()?;
    Ok(records)
}

/// Read every record of a FASTA file as a nucleotide haplotype.
pub fn read_haplotypes(path: impl AsRef<Path>) -> Result<Vec<HaplotypeRecord>, FastaError> {
    let mut reader = open_reader(path)?;
    let haplotypes = reader
        .records()
        .map(|record| record.and_then(FastaRecord::into_haplotype))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(haplotypes)
}

/// Destination of a [`FastaWriter`] created by [`create_writer`].
pub enum OutputSink {
    Stdout(BufWriter<io::Stdout>),
    Plain(BufWriter<File>),
    Gzip(GzEncoder<BufWriter<File>>),
}

impl OutputSink {
    /// Flush buffered data and terminate a gzip stream.
    pub fn finish(self) -> io::Result<()> {
        match self {
            Self::Stdout(mut w) => w.flush(),
            Self::Plain(mut w) => w.flush(),
            Self::Gzip(gz) => gz.finish()?.flush(),
        }
    }
}

impl Write for OutputSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Stdout(w) => w.write(buf),
            Self::Plain(w) => w.write(buf),
            Self::Gzip(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::Plain(w) => w.flush(),
            Self::Gzip(w) => w.flush(),
        }
    }
}

/// FASTA writer emitting each sequence on a single line.
pub struct FastaWriter<W: Write> {
    inner: fasta::io::Writer<W>,
    target: String,
    written: usize,
}

impl<W: Write> FastaWriter<W> {
    /// Wrap `inner`; `target` names the output in error messages.
    pub fn new(inner: W, target: impl Into<String>) -> Self {
        let inner = fasta::io::writer::Builder::default()
            .set_line_base_count(usize::MAX)
            .build_from_writer(inner);

        Self {
            inner,
            target: target.into(),
            written: 0,
        }
    }

    /// Number of records written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Write one record. An empty description gives a bare `>id` header.
    pub fn write_record(&mut self, id: &str, description: &str, sequence: &[u8]) -> Result<(), FastaError> {
        let description = (!description.is_empty()).then(|| description.into());
        let record = fasta::Record::new(
            Definition::new(id, description),
            fasta::record::Sequence::from(sequence.to_vec()),
        );

        self.inner
            .write_record(&record)
            .map_err(|e| FastaError::io(self.target.as_str(), e))?;
        self.written += 1;
        Ok(())
    }

    pub fn write_haplotype(&mut self, record: &HaplotypeRecord) -> Result<(), FastaError> {
        self.write_record(record.id(), record.description(), &record.sequence().to_ascii())
    }

    /// Write all records of `records`, returning how many were written.
    pub fn write_haplotypes<I>(&mut self, records: I) -> Result<usize, FastaError>
    where
        I: IntoIterator,
        I::Item: Borrow<HaplotypeRecord>,
    {
        let mut n = 0;
        for record in records {
            self.write_haplotype(record.borrow())?;
            n += 1;
        }
        Ok(n)
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(mut self) -> Result<W, FastaError> {
        self.inner
            .get_mut()
            .flush()
            .map_err(|e| FastaError::io(self.target.as_str(), e))?;
        Ok(self.inner.into_inner())
    }
}

impl FastaWriter<OutputSink> {
    /// Flush everything and finalize compression.
    ///
    /// Must be called for `.gz` outputs, otherwise the stream is truncated.
    pub fn finish(self) -> Result<(), FastaError> {
        let target = self.target;
        self.inner
            .into_inner()
            .finish()
            .map_err(|e| FastaError::io(target, e))
    }
}

/// Create a FASTA writer. `None` or `-` writes to standard output, paths
/// ending in `.gz` are gzip-compressed.
pub fn create_writer(path: Option<&Path>) -> Result<FastaWriter<OutputSink>, FastaError> {
    let path = match path {
        Some(path) if !is_std_stream(path) => path,
        _ => {
            let sink = OutputSink::Stdout(BufWriter::new(io::stdout()));
            return Ok(FastaWriter::new(sink, "<stdout>"));
        }
    };

    let name = path.display().to_string();
    let file = File::create(path).map_err(|e| FastaError::io(&name, e))?;
    let buf = BufWriter::new(file);
    let sink = if is_gzip(path) {
        OutputSink::Gzip(GzEncoder::new(buf, Compression::default()))
    } else {
        OutputSink::Plain(buf)
    };

    Ok(FastaWriter::new(sink, name))
}
