//! Human-readable table summary
//!
//! A [`DataFrameSummary`] is the metadata shown next to a frame in a user
//! interface: sizes, one line per column, and a warning when the columns
//! disagree on their row count.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::column::{Column, ValueRange};
use crate::config::SummaryConfig;
use crate::dataframe::DataFrame;

/// Metadata of one column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSummary {
    pub position: usize,
    pub header: String,
    pub format: String,
    pub rows: usize,
    /// Computed or custom range, if any
    pub range: Option<ValueRange>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Category list preview followed by the category count
    pub categories: Option<String>,
}

/// Metadata of a whole frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataFrameSummary {
    pub num_columns: usize,
    pub num_rows: usize,
    /// Whether all columns have the same number of rows
    pub consistent: bool,
    /// Listed columns; fewer than `num_columns` when abbreviated
    pub columns: Vec<ColumnSummary>,
}

impl DataFrameSummary {
    pub fn new(frame: &DataFrame, config: &SummaryConfig) -> Self {
        let num_columns = frame.num_columns();
        let listed = if num_columns > config.max_columns {
            config.abbreviated_columns
        } else {
            num_columns
        };

        let consistent = frame.is_consistent();
        if !consistent {
            tracing::warn!(
                columns = num_columns,
                rows = frame.num_rows(),
                "inconsistent row counts"
            );
        }

        let columns = frame
            .iter()
            .take(listed)
            .enumerate()
            .map(|(position, column)| summarize_column(position, column, config))
            .collect();

        Self {
            num_columns,
            num_rows: frame.num_rows(),
            consistent,
            columns,
        }
    }

    /// Number of columns left out of the listing
    pub fn omitted_columns(&self) -> usize {
        self.num_columns - self.columns.len()
    }
}

fn summarize_column(position: usize, column: &Column, config: &SummaryConfig) -> ColumnSummary {
    let (min, max, categories) = match column {
        Column::Categorical(col) => (
            None,
            None,
            Some(category_preview(col.categories(), config.category_preview_chars)),
        ),
        _ => match column.min_max() {
            Some((min, max)) => (Some(min), Some(max), None),
            None => (None, None, None),
        },
    };

    ColumnSummary {
        position,
        header: column.header().to_string(),
        format: column.format_name().to_string(),
        rows: column.len(),
        range: column.range(),
        min,
        max,
        categories,
    }
}

/// Comma separated categories cut off with "..." after the first category
/// that takes the preview past `budget` characters, followed by the
/// category count in brackets
fn category_preview(categories: &[String], budget: usize) -> String {
    let mut preview = String::new();
    for (shown, category) in categories.iter().enumerate() {
        if !preview.is_empty() {
            preview.push_str(", ");
        }
        preview.push_str(category);
        if preview.chars().count() > budget {
            if shown + 1 < categories.len() {
                preview.push_str(", ...");
            }
            break;
        }
    }
    format!("{} [{}]", preview, categories.len())
}

fn optional<T: fmt::Display>(value: &Option<T>) -> String {
    value.as_ref().map_or_else(|| "-".to_string(), T::to_string)
}

impl fmt::Display for DataFrameSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of Columns: {}", self.num_columns)?;
        writeln!(f, "Number of Rows: {}", self.num_rows)?;
        if !self.consistent {
            writeln!(f, "Inconsistent row counts")?;
        }
        writeln!(f, "Col\tFormat\tRows\tName\tRange\tMin\tMax")?;
        for col in &self.columns {
            write!(
                f,
                "{}\t{}\t{}\t{}\t{}\t{}\t{}",
                col.position,
                col.format,
                col.rows,
                col.header,
                optional(&col.range),
                optional(&col.min),
                optional(&col.max)
            )?;
            if let Some(categories) = &col.categories {
                write!(f, "\t{}", categories)?;
            }
            writeln!(f)?;
        }
        if self.omitted_columns() > 0 {
            writeln!(f, "... ({} more columns)", self.omitted_columns())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_sizes() {
        let mut frame = DataFrame::with_size(0);
        frame.add_typed_column::<f32>("x", 0);
        frame.add_row(&["1.5"]).unwrap();
        frame.add_row(&["-2"]).unwrap();

        let summary = frame.summary();
        assert_eq!(summary.num_columns, 2);
        assert_eq!(summary.num_rows, 2);
        assert!(summary.consistent);

        let x = &summary.columns[1];
        assert_eq!(x.format, "FLOAT32");
        assert_eq!(x.min, Some(-2.0));
        assert_eq!(x.max, Some(1.5));
        assert_eq!(x.range, None);
    }

    #[test]
    fn test_category_preview_is_elided() {
        let categories: Vec<String> = (0..30).map(|i| format!("category{}", i)).collect();
        let preview = category_preview(&categories, 50);
        // category4 is the first to pass 50 characters and is still shown
        assert_eq!(
            preview,
            "category0, category1, category2, category3, category4, ... [30]"
        );

        let last = category_preview(&categories[..5], 50);
        assert_eq!(
            last,
            "category0, category1, category2, category3, category4 [5]"
        );

        let short = category_preview(&["a".to_string(), "b".to_string()], 50);
        assert_eq!(short, "a, b [2]");
    }

    #[test]
    fn test_many_columns_are_abbreviated() {
        let mut frame = DataFrame::new();
        for i in 0..25 {
            frame.add_typed_column::<u8>(format!("c{}", i), 1);
        }
        let summary = frame.summary();
        assert_eq!(summary.columns.len(), 10);
        assert_eq!(summary.omitted_columns(), 15);
        assert!(summary.to_string().contains("(15 more columns)"));

        let exact = {
            let mut frame = DataFrame::new();
            for i in 0..20 {
                frame.add_typed_column::<u8>(format!("c{}", i), 1);
            }
            frame.summary()
        };
        assert_eq!(exact.columns.len(), 20);
    }

    #[test]
    fn test_inconsistent_rows_flagged() {
        let mut frame = DataFrame::new();
        frame.add_typed_column::<i32>("a", 2);
        frame.add_typed_column::<i32>("b", 3);
        let summary = frame.summary();
        assert!(!summary.consistent);
        assert!(summary.to_string().contains("Inconsistent row counts"));
    }

    #[test]
    fn test_summary_serializes() {
        let mut frame = DataFrame::new();
        frame.add_categorical_column_from("label", &["a", "b", "a"]);
        let json = serde_json::to_string(&frame.summary()).unwrap();
        assert!(json.contains("\"format\":\"categorical\""));
        assert!(json.contains("a, b [2]"));
    }
}
