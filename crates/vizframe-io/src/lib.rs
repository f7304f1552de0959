//! vizframe-io - Reading and writing data frames
//!
//! This crate connects [`vizframe_core::DataFrame`] to delimited text:
//!
//! - **CSV reading**: Column types guessed from the leading records, later records appended
//! - **CSV writing**: Headers plus resolved cell values, index column optional
//!
//! # Design
//!
//! Readers implement the `FrameReader` trait for uniform access. Every
//! frame produced by a reader carries an index column at position 0.

pub mod csv_reader;
pub mod csv_writer;
pub mod reader;

pub use csv_reader::CsvReader;
pub use csv_writer::CsvWriter;
pub use reader::{CsvOptions, FrameReader, IoError, IoResult};
