//! Translation between physical rows and stable row identities
//!
//! Physical rows are positions in one particular frame and are held in a
//! [`RoaringBitmap`]. Identities come from the frame's index column and are
//! held in a [`RoaringTreemap`]. Rows or identities with no counterpart are
//! dropped and counted in [`TranslationStats`].

use roaring::{RoaringBitmap, RoaringTreemap};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use vizframe_core::{DataFrame, IndexColumn};

use crate::error::{BrushingError, Result};

/// Outcome counts of one translation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationStats {
    pub translated: u64,
    pub dropped: u64,
}

impl TranslationStats {
    pub fn is_lossless(&self) -> bool {
        self.dropped == 0
    }
}

/// Lookup from identity to physical row for one index column
///
/// When an identity occurs more than once the first row wins.
#[derive(Debug, Clone, Default)]
pub struct IdentityMap {
    rows: HashMap<u64, u32>,
    duplicates: usize,
}

impl IdentityMap {
    pub fn new(index: &IndexColumn) -> Self {
        let mut rows = HashMap::with_capacity(index.len());
        let mut duplicates = 0;
        for (row, id) in index.ids().iter().enumerate() {
            let Ok(row) = u32::try_from(row) else {
                break;
            };
            if rows.contains_key(id) {
                duplicates += 1;
            } else {
                rows.insert(*id, row);
            }
        }

        if duplicates > 0 {
            tracing::warn!(
                header = index.header(),
                duplicates,
                "index column has duplicate identities"
            );
        }

        Self { rows, duplicates }
    }

    /// Map for the index column of `frame`
    pub fn from_frame(frame: &DataFrame) -> Result<Self> {
        frame
            .index_column()
            .map(Self::new)
            .ok_or(BrushingError::MissingIndexColumn)
    }

    /// First physical row holding `id`
    pub fn row_of(&self, id: u64) -> Option<u32> {
        self.rows.get(&id).copied()
    }

    /// Rows whose identity repeats an earlier row's
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    /// Number of distinct identities
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Physical rows of the identities in `ids`; unknown identities are dropped
    pub fn ids_to_rows(&self, ids: &RoaringTreemap) -> (RoaringBitmap, TranslationStats) {
        let mut rows = RoaringBitmap::new();
        let mut stats = TranslationStats::default();
        for id in ids.iter() {
            match self.row_of(id) {
                Some(row) => {
                    rows.insert(row);
                    stats.translated += 1;
                }
                None => stats.dropped += 1,
            }
        }

        if stats.dropped > 0 {
            tracing::debug!(
                translated = stats.translated,
                dropped = stats.dropped,
                "dropped unknown identities"
            );
        }
        (rows, stats)
    }
}

/// Identities of the physical rows in `rows`; rows past the end are dropped
pub fn rows_to_ids(
    index: &IndexColumn,
    rows: &RoaringBitmap,
) -> (RoaringTreemap, TranslationStats) {
    let ids = index.ids();
    let mut out = RoaringTreemap::new();
    let mut stats = TranslationStats::default();
    for row in rows.iter() {
        match ids.get(row as usize) {
            Some(id) => {
                out.insert(*id);
                stats.translated += 1;
            }
            None => stats.dropped += 1,
        }
    }

    if stats.dropped > 0 {
        tracing::debug!(
            header = index.header(),
            rows = ids.len(),
            dropped = stats.dropped,
            "dropped rows outside the index column"
        );
    }
    (out, stats)
}

/// Rows set in a per-row boolean mask
pub fn mask_to_rows(mask: &[bool]) -> RoaringBitmap {
    mask.iter()
        .enumerate()
        .filter(|(_, set)| **set)
        .filter_map(|(row, _)| u32::try_from(row).ok())
        .collect()
}

/// Rows whose identity is not in `filtered`
pub fn remaining_rows(index: &IndexColumn, filtered: &RoaringTreemap) -> RoaringBitmap {
    index
        .ids()
        .iter()
        .enumerate()
        .filter(|(_, id)| !filtered.contains(**id))
        .filter_map(|(row, _)| u32::try_from(row).ok())
        .collect()
}
