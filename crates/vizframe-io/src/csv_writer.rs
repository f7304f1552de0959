//! CSV export

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use vizframe_core::DataFrame;

use crate::reader::IoResult;

/// Writes a [`DataFrame`] as CSV
///
/// Categorical cells are written as their category string and NaN as an
/// empty cell, so the output reads back with the same column types. The
/// index column is left out unless requested.
#[derive(Debug, Clone)]
pub struct CsvWriter {
    delimiter: u8,
    write_header: bool,
    include_index: bool,
}

impl Default for CsvWriter {
    fn default() -> Self {
        Self {
            delimiter: b',',
            write_header: true,
            include_index: false,
        }
    }
}

impl CsvWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_header(mut self, write_header: bool) -> Self {
        self.write_header = write_header;
        self
    }

    pub fn with_index(mut self, include_index: bool) -> Self {
        self.include_index = include_index;
        self
    }

    /// Write `frame` to a file, replacing it
    pub fn write_path(&self, frame: &DataFrame, path: impl AsRef<Path>) -> IoResult<()> {
        let file = File::create(path.as_ref())?;
        self.write_to(frame, BufWriter::new(file))
    }

    /// Render `frame` as CSV text
    pub fn write_string(&self, frame: &DataFrame) -> IoResult<String> {
        let mut buffer = Vec::new();
        self.write_to(frame, &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    /// Write `frame` to any sink
    pub fn write_to<W: Write>(&self, frame: &DataFrame, sink: W) -> IoResult<()> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_writer(sink);

        let columns: Vec<_> = frame
            .iter()
            .filter(|column| self.include_index || !column.is_index())
            .collect();

        if self.write_header {
            writer.write_record(columns.iter().map(|column| column.header()))?;
        }

        // Short columns in an inconsistent frame yield empty cells.
        for row in 0..frame.num_rows() {
            let record = columns.iter().map(|column| match column.value(row, true) {
                Ok(value) if !value.is_nan() => value.to_string(),
                _ => String::new(),
            });
            writer.write_record(record)?;
        }

        writer.flush()?;
        tracing::debug!(
            columns = columns.len(),
            rows = frame.num_rows(),
            "wrote csv"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_skipped_by_default() {
        let mut frame = DataFrame::with_size(0);
        frame.add_typed_column::<i32>("n", 0);
        frame.add_categorical_column("label", 0);
        frame.add_row(&["1", "a"]).unwrap();
        frame.add_row(&["2", "b,c"]).unwrap();

        let text = CsvWriter::new().write_string(&frame).unwrap();
        assert_eq!(text, "n,label\n1,a\n2,\"b,c\"\n");

        let text = CsvWriter::new().with_index(true).write_string(&frame).unwrap();
        assert!(text.starts_with("index,n,label\n0,1,a\n"));
    }

    #[test]
    fn test_nan_written_as_empty() {
        let mut frame = DataFrame::new();
        frame.add_column_from_vec("v", vec![1.5f64, f64::NAN]);
        frame.add_column_from_vec("w", vec![1i32, 2]);
        let text = CsvWriter::new()
            .with_header(false)
            .write_string(&frame)
            .unwrap();
        assert_eq!(text, "1.5,1\n,2\n");
    }

    #[test]
    fn test_delimiter() {
        let mut frame = DataFrame::new();
        frame.add_column_from_vec("a", vec![1u8]);
        frame.add_column_from_vec("b", vec![2u8]);
        let text = CsvWriter::new().with_delimiter(b'\t').write_string(&frame).unwrap();
        assert_eq!(text, "a\tb\n1\t2\n");
    }
}
