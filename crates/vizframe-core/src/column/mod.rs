//! Columns of a data frame
//!
//! A [`Column`] is one of three closed variants:
//!
//! - **Template**: a plain typed column over a [`ColumnBuffer`](crate::buffer::ColumnBuffer)
//! - **Categorical**: `u32` codes backed by a deduplicated string table
//! - **Index**: stable `u64` row identities
//!
//! Kind-specific behaviour is selected by pattern matching on the variant.

mod categorical;
mod index;
mod template;

pub use categorical::CategoricalColumn;
pub use index::IndexColumn;
pub use template::TemplateColumn;

use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;

use crate::element::{Element, ElementKind};
use crate::error::{DataFrameError, DataFrameResult};
use crate::value::DataValue;

/// Inclusive (min, max) value range of a column
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

impl fmt::Display for ValueRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// A named column of a data frame
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Template(TemplateColumn),
    Categorical(CategoricalColumn),
    Index(IndexColumn),
}

impl Column {
    pub fn header(&self) -> &str {
        match self {
            Column::Template(col) => col.header(),
            Column::Categorical(col) => col.header(),
            Column::Index(col) => col.header(),
        }
    }

    pub fn set_header(&mut self, header: impl Into<String>) {
        match self {
            Column::Template(col) => col.set_header(header),
            Column::Categorical(col) => col.set_header(header),
            Column::Index(col) => col.set_header(header),
        }
    }

    /// Number of rows in this column
    pub fn len(&self) -> usize {
        match self {
            Column::Template(col) => col.len(),
            Column::Categorical(col) => col.len(),
            Column::Index(col) => col.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element kind of the stored values
    pub fn kind(&self) -> ElementKind {
        match self {
            Column::Template(col) => col.kind(),
            Column::Categorical(_) => ElementKind::UInt32,
            Column::Index(_) => ElementKind::UInt64,
        }
    }

    /// Format name for summaries
    pub fn format_name(&self) -> &'static str {
        match self {
            Column::Categorical(_) => "categorical",
            _ => self.kind().name(),
        }
    }

    /// Value range, if one has been computed or set
    pub fn range(&self) -> Option<ValueRange> {
        match self {
            Column::Template(col) => col.range(),
            _ => None,
        }
    }

    /// Typed read access to the stored values
    ///
    /// Categorical columns expose their codes as `u32`, index columns their
    /// identities as `u64`.
    pub fn values<T: Element>(&self) -> Option<&[T]> {
        match self {
            Column::Template(col) => col.values::<T>(),
            Column::Categorical(col) => (col.codes_vec() as &dyn Any)
                .downcast_ref::<Vec<T>>()
                .map(Vec::as_slice),
            Column::Index(col) => (col.ids_vec() as &dyn Any)
                .downcast_ref::<Vec<T>>()
                .map(Vec::as_slice),
        }
    }

    /// Smallest and largest scalar component, NaN ignored
    ///
    /// Categorical columns have no numeric extent and yield `None`.
    pub fn min_max(&self) -> Option<(f64, f64)> {
        match self {
            Column::Template(col) => col.buffer().min_max(),
            Column::Categorical(_) => None,
            Column::Index(col) => {
                let min = col.ids().iter().min()?;
                let max = col.ids().iter().max()?;
                Some((*min as f64, *max as f64))
            }
        }
    }

    /// Read one cell
    ///
    /// Categorical cells are returned as their code unless
    /// `strings_as_strings` is set.
    pub fn value(&self, row: usize, strings_as_strings: bool) -> DataFrameResult<DataValue> {
        match self {
            Column::Template(col) => col.value(row),
            Column::Categorical(col) if strings_as_strings => col
                .value_as_string(row)
                .map(|s| DataValue::String(s.to_string())),
            Column::Categorical(col) => col.code(row).map(DataValue::UInt32),
            Column::Index(col) => col.id(row).map(DataValue::UInt64),
        }
    }

    /// Cell rendered as a string, categories resolved
    pub fn value_as_string(&self, row: usize) -> DataFrameResult<String> {
        self.value(row, true).map(|v| v.to_string())
    }

    /// Convert a string to a value this column can store, without storing it
    pub fn parse_value(&self, s: &str) -> DataFrameResult<DataValue> {
        match self {
            Column::Template(col) => col.parse(s),
            Column::Categorical(_) => Ok(DataValue::String(s.to_string())),
            Column::Index(col) => s
                .trim()
                .parse::<u64>()
                .map(DataValue::UInt64)
                .map_err(|_| DataFrameError::mismatch(col.header(), s, ElementKind::UInt64.name())),
        }
    }

    /// Append a value produced by [`parse_value`](Self::parse_value)
    pub fn push_value(&mut self, value: &DataValue) -> DataFrameResult<()> {
        match (self, value) {
            (Column::Template(col), value) => col.push_value(value),
            (Column::Categorical(col), DataValue::String(s)) => {
                col.add(s);
                Ok(())
            }
            (Column::Index(col), DataValue::UInt64(id)) => {
                col.push(*id);
                Ok(())
            }
            (col, value) => Err(DataFrameError::mismatch(
                col.header(),
                &value.to_string(),
                col.format_name(),
            )),
        }
    }

    /// Parse and append a value
    pub fn add_from_str(&mut self, s: &str) -> DataFrameResult<()> {
        let value = self.parse_value(s)?;
        self.push_value(&value)
    }

    /// Shorten the column to `len` rows
    pub fn truncate(&mut self, len: usize) {
        match self {
            Column::Template(col) => col.buffer_mut().truncate(len),
            Column::Categorical(col) => col.truncate(len),
            Column::Index(col) => col.truncate(len),
        }
    }

    pub fn is_index(&self) -> bool {
        matches!(self, Column::Index(_))
    }

    pub fn as_template(&self) -> Option<&TemplateColumn> {
        match self {
            Column::Template(col) => Some(col),
            _ => None,
        }
    }

    pub fn as_template_mut(&mut self) -> Option<&mut TemplateColumn> {
        match self {
            Column::Template(col) => Some(col),
            _ => None,
        }
    }

    pub fn as_categorical(&self) -> Option<&CategoricalColumn> {
        match self {
            Column::Categorical(col) => Some(col),
            _ => None,
        }
    }

    pub fn as_categorical_mut(&mut self) -> Option<&mut CategoricalColumn> {
        match self {
            Column::Categorical(col) => Some(col),
            _ => None,
        }
    }

    pub fn as_index(&self) -> Option<&IndexColumn> {
        match self {
            Column::Index(col) => Some(col),
            _ => None,
        }
    }

    pub fn as_index_mut(&mut self) -> Option<&mut IndexColumn> {
        match self {
            Column::Index(col) => Some(col),
            _ => None,
        }
    }
}

impl From<TemplateColumn> for Column {
    fn from(col: TemplateColumn) -> Self {
        Column::Template(col)
    }
}

impl From<CategoricalColumn> for Column {
    fn from(col: CategoricalColumn) -> Self {
        Column::Categorical(col)
    }
}

impl From<IndexColumn> for Column {
    fn from(col: IndexColumn) -> Self {
        Column::Index(col)
    }
}
