//! CSV file reader with type inference

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use vizframe_core::{create_data_frame_with, DataFrame, DataFrameError};

use crate::reader::{CsvOptions, FrameReader, IoError, IoResult};

/// CSV reader producing a [`DataFrame`]
///
/// The first `sample_rows` records decide the column types. Later records
/// are appended row by row and must fit those types. The returned frame
/// has an index column at position 0.
///
/// Empty cells are handled differently on either side of the sample. An
/// empty cell inside the sample widens an integer column to floating point
/// so the gap can be held as NaN. Once the type is fixed, an empty cell in
/// an integer column fails the read with [`IoError::Record`]. Raise
/// [`CsvOptions::with_sample_rows`] to cover files with late gaps.
#[derive(Debug, Clone, Default)]
pub struct CsvReader {
    options: CsvOptions,
    path: Option<PathBuf>,
}

impl CsvReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: CsvOptions) -> Self {
        Self {
            options,
            path: None,
        }
    }

    /// Reader bound to a file, for use through [`FrameReader`]
    pub fn open(path: impl AsRef<Path>, options: CsvOptions) -> IoResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(IoError::FileNotFound(path.display().to_string()));
        }
        Ok(Self {
            options,
            path: Some(path.to_path_buf()),
        })
    }

    pub fn options(&self) -> &CsvOptions {
        &self.options
    }

    /// Read a CSV file
    pub fn read_path(&self, path: impl AsRef<Path>) -> IoResult<DataFrame> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(IoError::FileNotFound(path.display().to_string()));
        }
        let file = File::open(path)?;
        tracing::debug!(path = %path.display(), "reading csv");
        self.read_from(BufReader::new(file))
    }

    /// Read CSV text
    pub fn read_str(&self, text: &str) -> IoResult<DataFrame> {
        self.read_from(text.as_bytes())
    }

    /// Read CSV from any source
    pub fn read_from<R: Read>(&self, source: R) -> IoResult<DataFrame> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.options.delimiter)
            .has_headers(self.options.has_header)
            .flexible(true)
            .from_reader(source);

        let headers: Vec<String> = if self.options.has_header {
            reader.headers()?.iter().map(|s| s.to_string()).collect()
        } else {
            Vec::new()
        };

        let mut records = reader.records();

        // Read a few rows to infer types
        let sample_rows = self.options.inference.sample_rows.max(1);
        let mut samples: Vec<Vec<String>> = Vec::new();
        let mut expected = (!headers.is_empty()).then_some(headers.len());
        for result in records.by_ref().take(sample_rows) {
            let record = result?;
            let line = line_of(&record);
            let width = *expected.get_or_insert(record.len());
            if record.len() != width {
                return Err(IoError::Record {
                    line,
                    source: DataFrameError::InvalidColCount {
                        expected: width,
                        actual: record.len(),
                    },
                });
            }
            samples.push(record.iter().map(|s| s.to_string()).collect());
        }

        let mut frame = create_data_frame_with(&samples, &headers, &self.options.inference)?;

        for result in records {
            let record = result?;
            let values: Vec<&str> = record.iter().collect();
            frame.add_row(&values).map_err(|source| IoError::Record {
                line: line_of(&record),
                source,
            })?;
        }

        frame.update_index_buffer()?;
        tracing::debug!(
            columns = frame.num_columns(),
            rows = frame.num_rows(),
            sampled = samples.len(),
            "read csv"
        );
        Ok(frame)
    }
}

impl FrameReader for CsvReader {
    fn read_frame(&self) -> IoResult<DataFrame> {
        match &self.path {
            Some(path) => self.read_path(path),
            None => Err(IoError::FileNotFound(String::new())),
        }
    }

    fn format_name(&self) -> &'static str {
        "CSV"
    }
}

fn line_of(record: &csv::StringRecord) -> u64 {
    record.position().map_or(0, |position| position.line())
}
