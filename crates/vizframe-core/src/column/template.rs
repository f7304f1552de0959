//! Plain typed column over a [`ColumnBuffer`]

use crate::buffer::ColumnBuffer;
use crate::column::ValueRange;
use crate::element::{Element, ElementKind};
use crate::error::{DataFrameError, DataFrameResult};
use crate::value::DataValue;

/// A named column of one element kind
///
/// The column is a thin typed view: values are changed through
/// [`buffer_mut`](Self::buffer_mut) or [`values_mut`](Self::values_mut),
/// which also drops any range computed over the previous contents.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateColumn {
    header: String,
    buffer: ColumnBuffer,
    computed_range: Option<ValueRange>,
    custom_range: Option<ValueRange>,
}

impl TemplateColumn {
    /// Create a default-filled column of the given kind
    pub fn new(header: impl Into<String>, kind: ElementKind, size: usize) -> Self {
        Self::from_buffer(header, ColumnBuffer::new(kind, size))
    }

    /// Create a default-filled column of element type `T`
    pub fn typed<T: Element>(header: impl Into<String>, size: usize) -> Self {
        Self::new(header, T::KIND, size)
    }

    /// Create a column from existing values
    pub fn from_values<T: Element>(header: impl Into<String>, values: Vec<T>) -> Self {
        Self::from_buffer(header, T::wrap(values))
    }

    /// Create a column around an existing buffer
    pub fn from_buffer(header: impl Into<String>, buffer: ColumnBuffer) -> Self {
        Self {
            header: header.into(),
            buffer,
            computed_range: None,
            custom_range: None,
        }
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn set_header(&mut self, header: impl Into<String>) {
        self.header = header.into();
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn kind(&self) -> ElementKind {
        self.buffer.kind()
    }

    /// Read-only storage
    pub fn buffer(&self) -> &ColumnBuffer {
        &self.buffer
    }

    /// Editable storage; invalidates the computed range
    pub fn buffer_mut(&mut self) -> &mut ColumnBuffer {
        self.computed_range = None;
        &mut self.buffer
    }

    /// Typed values, `None` if `T` is not the column's element type
    pub fn values<T: Element>(&self) -> Option<&[T]> {
        T::slice(&self.buffer)
    }

    /// Typed editable values; invalidates the computed range
    pub fn values_mut<T: Element>(&mut self) -> DataFrameResult<&mut Vec<T>> {
        let actual = self.buffer.kind();
        let header = self.header.clone();
        T::vec_mut(self.buffer_mut()).ok_or_else(|| DataFrameError::TypeMismatch {
            header,
            expected: T::KIND.name().to_string(),
            actual: actual.name().to_string(),
        })
    }

    /// Value range: the custom range if set, else the last computed one
    pub fn range(&self) -> Option<ValueRange> {
        self.custom_range.or(self.computed_range)
    }

    /// Compute and store the range over the current contents
    pub fn compute_range(&mut self) -> Option<ValueRange> {
        self.computed_range = self
            .buffer
            .min_max()
            .map(|(min, max)| ValueRange::new(min, max));
        self.range()
    }

    /// Override the range, `None` to go back to the computed one
    pub fn set_custom_range(&mut self, range: Option<ValueRange>) {
        self.custom_range = range;
    }

    /// Parse a string into this column's element type
    pub fn parse(&self, s: &str) -> DataFrameResult<DataValue> {
        self.buffer
            .parse(s)
            .ok_or_else(|| DataFrameError::mismatch(&self.header, s, self.kind().name()))
    }

    /// Append a boxed value of this column's kind
    pub fn push_value(&mut self, value: &DataValue) -> DataFrameResult<()> {
        if self.buffer_mut().push(value) {
            Ok(())
        } else {
            Err(DataFrameError::mismatch(
                &self.header,
                &value.to_string(),
                self.kind().name(),
            ))
        }
    }

    /// Parse and append a value
    pub fn add_from_str(&mut self, s: &str) -> DataFrameResult<()> {
        let value = self.parse(s)?;
        self.push_value(&value)
    }

    /// Bounds-checked read
    pub fn value(&self, row: usize) -> DataFrameResult<DataValue> {
        self.buffer.get(row).ok_or(DataFrameError::RowOutOfRange {
            row,
            rows: self.len(),
        })
    }

    pub fn value_as_string(&self, row: usize) -> DataFrameResult<String> {
        self.value(row).map(|v| v.to_string())
    }
}
