//! Implementation of the DvsWriter struct for vector file writing

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::DvsError;
use crate::vector::{format_vector, DiffusionVectorSet};

/// Writer for vector files, appending a fixed terminator to every line.
/// The file handle is released when the writer is finalized or dropped.
pub struct DvsWriter {
    /// Buffered handle to the destination file
    file: BufWriter<File>,
    /// Terminator written after each line
    terminator: String,
    /// Number of lines written so far
    lines: usize,
}

impl DvsWriter {
    /// Creates a new DvsWriter for the given file path (overwrites existing).
    pub fn new<P: AsRef<Path>>(path: P, terminator: &str) -> Result<Self, DvsError> {
        if terminator.is_empty() {
            return Err(DvsError::InvalidConfiguration("line terminator must not be empty".into()));
        }
        let file = File::create(path.as_ref())?;
        tracing::debug!(path = %path.as_ref().display(), "opened vector file for writing");
        Ok(DvsWriter {
            file: BufWriter::new(file),
            terminator: terminator.to_string(),
            lines: 0,
        })
    }

    /// Writes one line followed by the terminator.
    pub fn write_line(&mut self, line: &str) -> Result<(), DvsError> {
        self.file.write_all(line.as_bytes())?;
        self.file.write_all(self.terminator.as_bytes())?;
        self.lines += 1;
        Ok(())
    }

    /// Writes every header line in order.
    pub fn write_header<S: AsRef<str>>(&mut self, header: &[S]) -> Result<(), DvsError> {
        for line in header {
            self.write_line(line.as_ref())?;
        }
        Ok(())
    }

    /// Writes `Vector[i] = (...)` lines, indexed from zero in set order.
    pub fn write_vectors(&mut self, vectors: &DiffusionVectorSet, decimals: usize) -> Result<(), DvsError> {
        for (index, vector) in vectors.iter().enumerate() {
            let line = format_vector(index, vector, decimals)?;
            self.write_line(&line)?;
        }
        Ok(())
    }

    /// Number of lines written so far.
    pub fn lines_written(&self) -> usize { self.lines }

    /// Finalizes the file (flushes all data to disk).
    pub fn finalize(mut self) -> Result<(), DvsError> {
        self.file.flush()?;
        Ok(())
    }
}

/// Write a complete vector file: header lines, then one line per vector.
///
/// A failure part way through leaves whatever was already written on disk.
pub fn write<P: AsRef<Path>, S: AsRef<str>>(
    destination: P,
    header: &[S],
    vectors: &DiffusionVectorSet,
    terminator: &str,
    decimals: usize,
) -> Result<(), DvsError> {
    let mut writer = DvsWriter::new(destination, terminator)?;
    writer.write_header(header)?;
    writer.write_vectors(vectors, decimals)?;
    writer.finalize()
}
