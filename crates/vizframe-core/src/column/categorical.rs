//! Categorical column: integer codes over a deduplicated string table

use std::collections::HashMap;

use crate::error::{DataFrameError, DataFrameResult};

/// A column of category codes
///
/// Categories are numbered in first-seen order. Looking up a string that is
/// already known returns its existing code, so codes never change once
/// assigned and every stored code has a table entry.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoricalColumn {
    header: String,
    codes: Vec<u32>,
    categories: Vec<String>,
    lookup: HashMap<String, u32>,
}

impl CategoricalColumn {
    /// Create an empty categorical column
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            ..Default::default()
        }
    }

    /// Create a column of `size` rows holding the empty category
    pub fn with_size(header: impl Into<String>, size: usize) -> Self {
        let mut column = Self::new(header);
        if size > 0 {
            let code = column.add_category("");
            column.codes = vec![code; size];
        }
        column
    }

    /// Create a column from string values
    pub fn from_values<S: AsRef<str>>(header: impl Into<String>, values: &[S]) -> Self {
        let mut column = Self::new(header);
        column.codes.reserve(values.len());
        for value in values {
            column.add(value.as_ref());
        }
        column
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn set_header(&mut self, header: impl Into<String>) {
        self.header = header.into();
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Code for `category`, registering it if unseen
    pub fn add_category(&mut self, category: &str) -> u32 {
        if let Some(&code) = self.lookup.get(category) {
            return code;
        }
        let code = self.categories.len() as u32;
        self.categories.push(category.to_string());
        self.lookup.insert(category.to_string(), code);
        code
    }

    /// Code of a known category
    pub fn code_of(&self, category: &str) -> Option<u32> {
        self.lookup.get(category).copied()
    }

    /// Append a value, returning its code
    pub fn add(&mut self, value: &str) -> u32 {
        let code = self.add_category(value);
        self.codes.push(code);
        code
    }

    /// Overwrite the value at `row`
    pub fn set(&mut self, row: usize, value: &str) -> DataFrameResult<u32> {
        let rows = self.codes.len();
        if row >= rows {
            return Err(DataFrameError::RowOutOfRange { row, rows });
        }
        let code = self.add_category(value);
        self.codes[row] = code;
        Ok(code)
    }

    /// Categories ordered by code
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Stored codes, one per row
    pub fn codes(&self) -> &[u32] {
        &self.codes
    }

    pub(crate) fn codes_vec(&self) -> &Vec<u32> {
        &self.codes
    }

    /// Code at `row`
    pub fn code(&self, row: usize) -> DataFrameResult<u32> {
        self.codes
            .get(row)
            .copied()
            .ok_or(DataFrameError::RowOutOfRange {
                row,
                rows: self.codes.len(),
            })
    }

    /// Category string at `row`
    pub fn value_as_string(&self, row: usize) -> DataFrameResult<&str> {
        let code = self.code(row)?;
        // Codes are only ever produced by `add_category`.
        self.categories
            .get(code as usize)
            .map(String::as_str)
            .ok_or(DataFrameError::RowOutOfRange {
                row,
                rows: self.codes.len(),
            })
    }

    /// Keep only the first `len` rows; the category table is left as is
    pub fn truncate(&mut self, len: usize) {
        self.codes.truncate(len);
    }
}
