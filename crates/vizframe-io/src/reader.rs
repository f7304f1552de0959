//! Common reader types
//!
//! Readers turn a data source into a [`DataFrame`]. Every reader accepts
//! the same [`CsvOptions`]-style settings for type inference so a frame
//! read from any source gets the same column types.

use thiserror::Error;
use vizframe_core::{DataFrame, DataFrameError, FrameConfig, InferenceConfig};

/// Errors that can occur during I/O operations
#[derive(Debug, Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A record could not be added to the frame
    #[error("Line {line}: {source}")]
    Record {
        line: u64,
        #[source]
        source: DataFrameError,
    },

    #[error(transparent)]
    DataFrame(#[from] DataFrameError),
}

/// Result type for I/O operations
pub type IoResult<T> = Result<T, IoError>;

/// Anything that can produce a frame
pub trait FrameReader {
    /// Read the whole source into a new frame
    fn read_frame(&self) -> IoResult<DataFrame>;

    /// Get the format name
    fn format_name(&self) -> &'static str;
}

/// Options for delimited text sources
#[derive(Debug, Clone, PartialEq)]
pub struct CsvOptions {
    pub delimiter: u8,
    /// Whether the first record holds column headers
    pub has_header: bool,
    /// Type inference settings; `sample_rows` records are used as examples
    pub inference: InferenceConfig,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            has_header: true,
            inference: InferenceConfig::default(),
        }
    }
}

impl CsvOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options using the inference settings of `config`
    pub fn from_config(config: &FrameConfig) -> Self {
        Self {
            inference: config.inference.clone(),
            ..Self::default()
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    pub fn with_double_precision(mut self, double_precision: bool) -> Self {
        self.inference.double_precision = double_precision;
        self
    }

    /// Number of leading records used to guess column types, at least 1
    pub fn with_sample_rows(mut self, sample_rows: usize) -> Self {
        self.inference.sample_rows = sample_rows.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_builder() {
        let options = CsvOptions::new()
            .with_delimiter(b';')
            .with_header(false)
            .with_double_precision(true)
            .with_sample_rows(0);
        assert_eq!(options.delimiter, b';');
        assert!(!options.has_header);
        assert!(options.inference.double_precision);
        assert_eq!(options.inference.sample_rows, 1);
    }

    #[test]
    fn test_options_from_config() {
        let config = FrameConfig::from_toml("[inference]\nsample_rows = 5\n").unwrap();
        let options = CsvOptions::from_config(&config);
        assert_eq!(options.inference.sample_rows, 5);
        assert_eq!(options.delimiter, b',');
    }

    #[test]
    fn test_record_error_display() {
        let err = IoError::Record {
            line: 4,
            source: DataFrameError::InvalidColCount {
                expected: 2,
                actual: 3,
            },
        };
        assert_eq!(
            err.to_string(),
            "Line 4: Invalid column count: expected 2, got 3"
        );
    }
}
