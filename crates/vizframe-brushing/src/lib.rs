//! vizframe-brushing - Brushing and linking across views of tabular data
//!
//! Linked views exchange selection, highlight and filter state by stable
//! row identity instead of physical row, so views holding differently
//! ordered or filtered copies of the same data stay in agreement:
//!
//! - **Target**: What identities refer to (rows, columns, or a named extension)
//! - **Action**: The three channels: filter, select and highlight
//! - **Translate**: Conversion between physical rows and identities
//! - **Manager**: The shared state with per-channel change generations
//! - **Link**: One view's handle for publishing and reading back rows
//!
//! # Example
//!
//! ```
//! use roaring::RoaringBitmap;
//! use vizframe_brushing::{BrushingLink, BrushingManager};
//! use vizframe_core::{DataFrame, IndexColumn};
//!
//! let mut a = DataFrame::new();
//! a.add_column(IndexColumn::from_ids("index", vec![10, 20, 30]));
//! let mut b = DataFrame::new();
//! b.add_column(IndexColumn::from_ids("index", vec![30, 20, 10]));
//!
//! let mut manager = BrushingManager::new();
//! let rows: RoaringBitmap = [0u32].into_iter().collect();
//! BrushingLink::new("a").select_rows(&mut manager, &a, &rows).unwrap();
//!
//! let (selected, _) = BrushingLink::new("b").selected_rows(&manager, &b).unwrap();
//! assert!(selected.contains(2));
//! ```

pub mod action;
pub mod error;
pub mod link;
pub mod manager;
pub mod target;
pub mod translate;

pub use action::BrushingAction;
pub use error::{BrushingError, Result};
pub use link::BrushingLink;
pub use manager::BrushingManager;
pub use target::BrushingTarget;
pub use translate::{mask_to_rows, remaining_rows, rows_to_ids, IdentityMap, TranslationStats};
