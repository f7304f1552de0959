//! Building a DataFrame from string rows with guessed column types
//!
//! For each column the non-empty example values are tried, in order, as
//! 32-bit integers, 64-bit integers and floating point numbers; a column
//! that fits none of them becomes categorical. Integer columns with
//! missing values are widened to floating point so the gaps can be held
//! as NaN. Tokens such as "inf" and "NaN" count as floats only next to at
//! least one finite number; a column made of nothing else is categorical.

use crate::column::{CategoricalColumn, Column, TemplateColumn};
use crate::config::InferenceConfig;
use crate::dataframe::DataFrame;
use crate::element::{Element, ElementKind};
use crate::error::{DataFrameError, DataFrameResult};

/// Header used for column `position` (0-based) when none is given
pub fn default_header(position: usize) -> String {
    format!("Column {}", position + 1)
}

/// Guess the element kind of a column from its example values
///
/// Returns `None` when the column should be categorical, including when
/// every value is empty.
pub fn infer_element_kind<S: AsRef<str>>(
    values: &[S],
    double_precision: bool,
) -> Option<ElementKind> {
    let present: Vec<&str> = values
        .iter()
        .map(|v| v.as_ref().trim())
        .filter(|v| !v.is_empty())
        .collect();
    if present.is_empty() {
        return None;
    }
    let has_missing = present.len() < values.len();

    let float_kind = if double_precision {
        ElementKind::Float64
    } else {
        ElementKind::Float32
    };

    if fits::<i32>(&present) {
        return Some(if has_missing { float_kind } else { ElementKind::Int32 });
    }
    if fits::<i64>(&present) {
        return Some(if has_missing { float_kind } else { ElementKind::Int64 });
    }
    if fits::<f64>(&present) && present.iter().any(|v| is_finite(v)) {
        return Some(float_kind);
    }
    None
}

fn is_finite(value: &str) -> bool {
    f64::parse_str(value).is_some_and(f64::is_finite)
}

fn fits<T: Element>(values: &[&str]) -> bool {
    values.iter().all(|v| T::parse_str(v).is_some())
}

/// Create a frame whose column types are guessed from `example_rows`
///
/// The column count is taken from `headers` when given, otherwise from the
/// first row, and columns are named "Column 1", "Column 2", ... . The example
/// rows become the frame's rows. No index column is added; call
/// [`DataFrame::update_index_buffer`] once all rows are in.
pub fn create_data_frame<S, H>(
    example_rows: &[Vec<S>],
    headers: &[H],
    double_precision: bool,
) -> DataFrameResult<DataFrame>
where
    S: AsRef<str>,
    H: AsRef<str>,
{
    let config = InferenceConfig {
        double_precision,
        ..InferenceConfig::default()
    };
    create_data_frame_with(example_rows, headers, &config)
}

/// [`create_data_frame`] driven by an [`InferenceConfig`]
pub fn create_data_frame_with<S, H>(
    example_rows: &[Vec<S>],
    headers: &[H],
    config: &InferenceConfig,
) -> DataFrameResult<DataFrame>
where
    S: AsRef<str>,
    H: AsRef<str>,
{
    let column_count = match example_rows.first() {
        Some(row) if headers.is_empty() => row.len(),
        _ => headers.len(),
    };

    if let Some(row) = example_rows.iter().find(|row| row.len() != column_count) {
        return Err(DataFrameError::InvalidColCount {
            expected: column_count,
            actual: row.len(),
        });
    }

    let mut frame = DataFrame::new();
    for position in 0..column_count {
        let header = headers
            .get(position)
            .map(|h| h.as_ref().to_string())
            .unwrap_or_else(|| default_header(position));
        let values: Vec<&str> = example_rows
            .iter()
            .map(|row| row[position].as_ref())
            .collect();

        let mut column: Column = match infer_element_kind(&values, config.double_precision) {
            Some(kind) => TemplateColumn::new(header, kind, 0).into(),
            None => CategoricalColumn::new(header).into(),
        };
        for value in &values {
            column.add_from_str(value)?;
        }

        tracing::debug!(
            header = column.header(),
            format = column.format_name(),
            rows = column.len(),
            "inferred column"
        );
        frame.add_column(column);
    }

    Ok(frame)
}
