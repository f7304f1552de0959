//! The DataFrame table
//!
//! A [`DataFrame`] is an ordered list of columns of possibly different
//! element kinds. The index column, when present, holds stable row
//! identities and conventionally sits at position 0.
//!
//! Columns are held behind `Arc`. Handles returned by [`DataFrame::column`]
//! are read-only snapshots: mutating a column through the frame copies it
//! first if a handle is still alive, so readers never see a half-applied
//! change.

use std::sync::Arc;

use crate::buffer::ColumnBuffer;
use crate::column::{CategoricalColumn, Column, IndexColumn, TemplateColumn};
use crate::config::SummaryConfig;
use crate::element::Element;
use crate::error::{DataFrameError, DataFrameResult};
use crate::summary::DataFrameSummary;
use crate::value::DataItem;

/// Header given to index columns created by the frame
pub const INDEX_COLUMN_HEADER: &str = "index";

/// Table of columns
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataFrame {
    columns: Vec<Arc<Column>>,
}

impl DataFrame {
    /// Create an empty frame without any columns
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a frame holding an index column with identities `0..size`
    pub fn with_size(size: usize) -> Self {
        let mut frame = Self::new();
        frame.add_column(IndexColumn::sequential(INDEX_COLUMN_HEADER, size));
        frame
    }

    /// Append an existing column
    ///
    /// Row counts are not checked; call [`update_index_buffer`](Self::update_index_buffer)
    /// once all columns are in place.
    pub fn add_column(&mut self, column: impl Into<Column>) -> Arc<Column> {
        let column = Arc::new(column.into());
        tracing::debug!(header = column.header(), rows = column.len(), "adding column");
        self.columns.push(Arc::clone(&column));
        column
    }

    /// Append a default-filled column of element type `T`
    pub fn add_typed_column<T: Element>(
        &mut self,
        header: impl Into<String>,
        size: usize,
    ) -> Arc<Column> {
        self.add_column(TemplateColumn::typed::<T>(header, size))
    }

    /// Append a column holding `values`
    pub fn add_column_from_vec<T: Element>(
        &mut self,
        header: impl Into<String>,
        values: Vec<T>,
    ) -> Arc<Column> {
        self.add_column(TemplateColumn::from_values(header, values))
    }

    /// Append a column around the contents of `buffer`
    pub fn add_column_from_buffer(
        &mut self,
        header: impl Into<String>,
        buffer: ColumnBuffer,
    ) -> Arc<Column> {
        self.add_column(TemplateColumn::from_buffer(header, buffer))
    }

    /// Append a categorical column of `size` empty-category rows
    pub fn add_categorical_column(
        &mut self,
        header: impl Into<String>,
        size: usize,
    ) -> Arc<Column> {
        self.add_column(CategoricalColumn::with_size(header, size))
    }

    /// Append a categorical column holding `values`
    pub fn add_categorical_column_from<S: AsRef<str>>(
        &mut self,
        header: impl Into<String>,
        values: &[S],
    ) -> Arc<Column> {
        self.add_column(CategoricalColumn::from_values(header, values))
    }

    /// Remove the first column named `header`; nothing happens if there is none
    pub fn drop_column(&mut self, header: &str) -> Option<Arc<Column>> {
        let position = self.column_position(header)?;
        tracing::debug!(header, position, "dropping column");
        Some(self.columns.remove(position))
    }

    /// Remove the column at `index`
    pub fn drop_column_at(&mut self, index: usize) -> DataFrameResult<Arc<Column>> {
        if index >= self.columns.len() {
            return Err(DataFrameError::ColumnIndexOutOfRange {
                index,
                count: self.columns.len(),
            });
        }
        Ok(self.columns.remove(index))
    }

    /// Append one row given as strings
    ///
    /// One value is expected per data column, in column order; the index
    /// column, if any, is skipped and receives a fresh identity. Every value
    /// is converted before any column is touched, so on error the frame is
    /// left unchanged.
    pub fn add_row<S: AsRef<str>>(&mut self, data: &[S]) -> DataFrameResult<()> {
        if self.columns.is_empty() {
            return Err(DataFrameError::NoColumns);
        }

        let index_position = self.index_position();
        let expected = self.columns.len() - usize::from(index_position.is_some());
        if data.len() != expected {
            return Err(DataFrameError::InvalidColCount {
                expected,
                actual: data.len(),
            });
        }

        let mut values = data.iter();
        let mut pending = Vec::with_capacity(self.columns.len());
        for (position, column) in self.columns.iter().enumerate() {
            if Some(position) == index_position {
                pending.push(None);
                continue;
            }
            let raw = values.next().ok_or(DataFrameError::InvalidColCount {
                expected,
                actual: data.len(),
            })?;
            pending.push(Some(column.parse_value(raw.as_ref())?));
        }

        let next_id = match self.index_column() {
            Some(index) => index.next_id()?,
            None => 0,
        };
        for (column, value) in self.columns.iter_mut().zip(pending) {
            let column = Arc::make_mut(column);
            match (value, column) {
                (Some(value), column) => column.push_value(&value)?,
                (None, Column::Index(index)) => index.push(next_id),
                (None, _) => {}
            }
        }
        Ok(())
    }

    /// Values of every column at `row`
    ///
    /// Categorical columns yield their code unless `strings_as_strings` is set.
    pub fn data_item(&self, row: usize, strings_as_strings: bool) -> DataFrameResult<DataItem> {
        let rows = self.num_rows();
        if row >= rows {
            return Err(DataFrameError::RowOutOfRange { row, rows });
        }
        self.columns
            .iter()
            .map(|column| column.value(row, strings_as_strings))
            .collect()
    }

    /// Header and format name of every column
    pub fn headers(&self) -> Vec<(String, String)> {
        self.columns
            .iter()
            .map(|c| (c.header().to_string(), c.format_name().to_string()))
            .collect()
    }

    pub fn header(&self, index: usize) -> Option<&str> {
        self.columns.get(index).map(|c| c.header())
    }

    /// Shared handle to the column at `index`
    pub fn column(&self, index: usize) -> Option<Arc<Column>> {
        self.columns.get(index).cloned()
    }

    /// Shared handle to the first column named `name`
    pub fn column_by_name(&self, name: &str) -> Option<Arc<Column>> {
        self.columns.iter().find(|c| c.header() == name).cloned()
    }

    /// Position of the first column named `name`
    pub fn column_position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.header() == name)
    }

    /// Editable access to the column at `index`, copied first if shared
    ///
    /// Changing the column length breaks row-count consistency until
    /// [`update_index_buffer`](Self::update_index_buffer) is called.
    pub fn column_mut(&mut self, index: usize) -> Option<&mut Column> {
        self.columns.get_mut(index).map(Arc::make_mut)
    }

    /// The designated index column
    pub fn index_column(&self) -> Option<&IndexColumn> {
        self.columns.iter().find_map(|c| c.as_index())
    }

    /// Position of the index column
    pub fn index_position(&self) -> Option<usize> {
        self.columns.iter().position(|c| c.is_index())
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Rows of the longest column, 0 without columns
    pub fn num_rows(&self) -> usize {
        self.columns.iter().map(|c| c.len()).max().unwrap_or(0)
    }

    /// Whether every column has the same number of rows
    pub fn is_consistent(&self) -> bool {
        let rows = self.num_rows();
        self.columns.iter().all(|c| c.len() == rows)
    }

    /// Iterate over the columns in order
    pub fn iter(&self) -> std::slice::Iter<'_, Arc<Column>> {
        self.columns.iter()
    }

    /// Bring the index column in line with the data columns
    ///
    /// Inserts an index column at position 0 if there is none. An index
    /// longer than the data is truncated; a shorter one gets fresh
    /// identities continuing from its maximum. Existing identities are kept.
    /// Fails without touching the index if the new identities would pass
    /// `u64::MAX`.
    pub fn update_index_buffer(&mut self) -> DataFrameResult<()> {
        let data_rows = self
            .columns
            .iter()
            .filter(|c| !c.is_index())
            .map(|c| c.len())
            .max();

        match self.index_position() {
            None => {
                let rows = data_rows.unwrap_or(0);
                self.columns.insert(
                    0,
                    Arc::new(IndexColumn::sequential(INDEX_COLUMN_HEADER, rows).into()),
                );
            }
            Some(position) => {
                let Some(rows) = data_rows else {
                    return Ok(());
                };
                if let Some(index) = Arc::make_mut(&mut self.columns[position]).as_index_mut() {
                    if index.len() > rows {
                        index.truncate(rows);
                    } else {
                        index.extend_sequential(rows - index.len())?;
                    }
                }
            }
        }

        tracing::debug!(rows = self.num_rows(), "updated index buffer");
        Ok(())
    }

    /// Summary with default settings
    pub fn summary(&self) -> DataFrameSummary {
        DataFrameSummary::new(self, &SummaryConfig::default())
    }

    /// Summary with explicit settings
    pub fn summary_with(&self, config: &SummaryConfig) -> DataFrameSummary {
        DataFrameSummary::new(self, config)
    }
}

impl<'a> IntoIterator for &'a DataFrame {
    type Item = &'a Arc<Column>;
    type IntoIter = std::slice::Iter<'a, Arc<Column>>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}
