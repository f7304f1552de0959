//! Vizframe Core - Tabular data for visualization pipelines
//!
//! This crate provides the in-memory table that flows between data sources,
//! plots and table views:
//!
//! - **Element**: The closed set of storable element kinds (scalars and 2-4 component vectors)
//! - **Buffer**: Typed contiguous storage with a dispatch macro across element kinds
//! - **Value**: Boxed per-cell values and data items (one value per column)
//! - **Column**: Template, categorical and index columns
//! - **DataFrame**: Ordered, copy-on-write shared columns with stable row identities
//! - **Inference**: Building a frame from string rows with guessed column types
//! - **Summary**: Human-readable metadata about a frame
//! - **Config**: Inference and summary settings, loadable from TOML or JSON
//!
//! # Row identity
//!
//! Every frame can carry an index column of `u64` identities. Identities
//! survive reordering and filtering, so views holding differently ordered
//! copies of the same data can exchange selections by identity rather than
//! by physical row.

pub mod buffer;
pub mod column;
pub mod config;
pub mod dataframe;
pub mod element;
pub mod error;
pub mod inference;
pub mod summary;
pub mod value;

pub use buffer::ColumnBuffer;
pub use column::{CategoricalColumn, Column, IndexColumn, TemplateColumn, ValueRange};
pub use config::{ConfigError, FrameConfig, InferenceConfig, SummaryConfig};
pub use dataframe::{DataFrame, INDEX_COLUMN_HEADER};
pub use element::{Element, ElementKind};
pub use error::{DataFrameError, DataFrameResult};
pub use inference::{create_data_frame, create_data_frame_with, infer_element_kind};
pub use summary::{ColumnSummary, DataFrameSummary};
pub use value::{DataItem, DataValue};
