//! A view's connection to shared brushing state
//!
//! A [`BrushingLink`] belongs to one consumer. It publishes the consumer's
//! physical rows as identities, reads other consumers' state back as
//! physical rows of its own frame, and remembers which generation of each
//! channel it has already handled.

use roaring::{RoaringBitmap, RoaringTreemap};

use vizframe_core::DataFrame;

use crate::action::BrushingAction;
use crate::error::{BrushingError, Result};
use crate::manager::BrushingManager;
use crate::target::BrushingTarget;
use crate::translate::{remaining_rows, rows_to_ids, IdentityMap, TranslationStats};

/// Per-consumer handle onto a [`BrushingManager`]
#[derive(Debug, Clone, PartialEq)]
pub struct BrushingLink {
    source: String,
    target: BrushingTarget,
    seen: [u64; 3],
}

impl BrushingLink {
    /// Link for row brushing, filtering under the name `source`
    pub fn new(source: impl Into<String>) -> Self {
        Self::with_target(source, BrushingTarget::Row)
    }

    pub fn with_target(source: impl Into<String>, target: BrushingTarget) -> Self {
        Self {
            source: source.into(),
            target,
            seen: [0; 3],
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> BrushingTarget {
        self.target
    }

    // --- Publishing ---

    fn publish_rows(
        &self,
        manager: &mut BrushingManager,
        action: BrushingAction,
        frame: &DataFrame,
        rows: &RoaringBitmap,
    ) -> Result<TranslationStats> {
        let index = frame
            .index_column()
            .ok_or(BrushingError::MissingIndexColumn)?;
        let (ids, stats) = rows_to_ids(index, rows);
        manager.brush(action, self.target, &self.source, ids);
        Ok(stats)
    }

    /// Publish physical rows of `frame` as the selection
    pub fn select_rows(
        &self,
        manager: &mut BrushingManager,
        frame: &DataFrame,
        rows: &RoaringBitmap,
    ) -> Result<TranslationStats> {
        self.publish_rows(manager, BrushingAction::Select, frame, rows)
    }

    pub fn highlight_rows(
        &self,
        manager: &mut BrushingManager,
        frame: &DataFrame,
        rows: &RoaringBitmap,
    ) -> Result<TranslationStats> {
        self.publish_rows(manager, BrushingAction::Highlight, frame, rows)
    }

    /// Publish physical rows of `frame` as this link's filter
    pub fn filter_rows(
        &self,
        manager: &mut BrushingManager,
        frame: &DataFrame,
        rows: &RoaringBitmap,
    ) -> Result<TranslationStats> {
        self.publish_rows(manager, BrushingAction::Filter, frame, rows)
    }

    /// Publish identities directly
    pub fn brush_ids(
        &self,
        manager: &mut BrushingManager,
        action: BrushingAction,
        ids: RoaringTreemap,
    ) -> bool {
        manager.brush(action, self.target, &self.source, ids)
    }

    /// Remove this link's contribution to the filter
    pub fn clear_filter(&self, manager: &mut BrushingManager) -> bool {
        manager.clear_filter(self.target, &self.source)
    }

    /// Publish column positions as the column selection
    pub fn select_columns(&self, manager: &mut BrushingManager, columns: &RoaringBitmap) -> bool {
        let ids = columns.iter().map(u64::from).collect();
        manager.select(BrushingTarget::Column, ids)
    }

    // --- Change tracking ---

    pub fn is_modified(&self, manager: &BrushingManager, action: BrushingAction) -> bool {
        manager.generation(action, self.target) != self.seen[action.slot()]
    }

    pub fn is_selection_modified(&self, manager: &BrushingManager) -> bool {
        self.is_modified(manager, BrushingAction::Select)
    }

    pub fn is_highlight_modified(&self, manager: &BrushingManager) -> bool {
        self.is_modified(manager, BrushingAction::Highlight)
    }

    pub fn is_filter_modified(&self, manager: &BrushingManager) -> bool {
        self.is_modified(manager, BrushingAction::Filter)
    }

    /// Mark the current state of every channel as handled
    pub fn sync(&mut self, manager: &BrushingManager) {
        for action in BrushingAction::ALL {
            self.seen[action.slot()] = manager.generation(action, self.target);
        }
    }

    // --- Reading back ---

    /// Selected rows of `frame`
    pub fn selected_rows(
        &self,
        manager: &BrushingManager,
        frame: &DataFrame,
    ) -> Result<(RoaringBitmap, TranslationStats)> {
        let map = IdentityMap::from_frame(frame)?;
        Ok(map.ids_to_rows(manager.selected(self.target)))
    }

    /// Highlighted rows of `frame`
    pub fn highlighted_rows(
        &self,
        manager: &BrushingManager,
        frame: &DataFrame,
    ) -> Result<(RoaringBitmap, TranslationStats)> {
        let map = IdentityMap::from_frame(frame)?;
        Ok(map.ids_to_rows(manager.highlighted(self.target)))
    }

    /// Rows of `frame` left after every source's filter
    pub fn remaining_rows(
        &self,
        manager: &BrushingManager,
        frame: &DataFrame,
    ) -> Result<RoaringBitmap> {
        let index = frame
            .index_column()
            .ok_or(BrushingError::MissingIndexColumn)?;
        Ok(remaining_rows(index, manager.filtered(self.target)))
    }

    /// Selected column positions that exist in `frame`
    pub fn selected_columns(&self, manager: &BrushingManager, frame: &DataFrame) -> RoaringBitmap {
        let count = frame.num_columns() as u64;
        manager
            .selected(BrushingTarget::Column)
            .iter()
            .filter(|id| *id < count)
            .filter_map(|id| u32::try_from(id).ok())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vizframe_core::IndexColumn;

    fn frame_with_ids(ids: &[u64]) -> DataFrame {
        let mut frame = DataFrame::new();
        frame.add_column(IndexColumn::from_ids("index", ids.to_vec()));
        frame.add_column_from_vec("value", vec![0.0f32; ids.len()]);
        frame
    }

    fn rows(values: &[u32]) -> RoaringBitmap {
        values.iter().copied().collect()
    }

    #[test]
    fn test_selection_follows_identity() {
        let mut manager = BrushingManager::new();
        let a = BrushingLink::new("a");
        let mut b = BrushingLink::new("b");
        let frame_a = frame_with_ids(&[10, 20, 30]);
        let frame_b = frame_with_ids(&[30, 20, 10]);

        a.select_rows(&mut manager, &frame_a, &rows(&[0])).unwrap();
        assert!(b.is_selection_modified(&manager));

        let (selected, stats) = b.selected_rows(&manager, &frame_b).unwrap();
        assert_eq!(selected, rows(&[2]));
        assert!(stats.is_lossless());

        b.sync(&manager);
        assert!(!b.is_selection_modified(&manager));
    }

    #[test]
    fn test_republish_does_not_flag_change() {
        let mut manager = BrushingManager::new();
        let a = BrushingLink::new("a");
        let mut b = BrushingLink::new("b");
        let frame = frame_with_ids(&[1, 2]);

        a.highlight_rows(&mut manager, &frame, &rows(&[1])).unwrap();
        b.sync(&manager);
        a.highlight_rows(&mut manager, &frame, &rows(&[1])).unwrap();
        assert!(!b.is_highlight_modified(&manager));
    }

    #[test]
    fn test_remaining_rows_after_filters() {
        let mut manager = BrushingManager::new();
        let scatter = BrushingLink::new("scatterplot");
        let table = BrushingLink::new("table");
        let frame = frame_with_ids(&[10, 20, 30, 40]);

        scatter.filter_rows(&mut manager, &frame, &rows(&[0])).unwrap();
        table.filter_rows(&mut manager, &frame, &rows(&[3])).unwrap();
        assert_eq!(table.remaining_rows(&manager, &frame).unwrap(), rows(&[1, 2]));

        scatter.clear_filter(&mut manager);
        assert_eq!(table.remaining_rows(&manager, &frame).unwrap(), rows(&[0, 1, 2]));
    }

    #[test]
    fn test_missing_index_column() {
        let mut manager = BrushingManager::new();
        let link = BrushingLink::new("view");
        let mut frame = DataFrame::new();
        frame.add_column_from_vec("x", vec![1u8]);

        assert_eq!(
            link.select_rows(&mut manager, &frame, &rows(&[0])),
            Err(BrushingError::MissingIndexColumn)
        );
        assert!(link.remaining_rows(&manager, &frame).is_err());
    }

    #[test]
    fn test_column_selection() {
        let mut manager = BrushingManager::new();
        let link = BrushingLink::new("table");
        let frame = frame_with_ids(&[1]);

        assert!(link.select_columns(&mut manager, &rows(&[1, 5])));
        assert_eq!(link.selected_columns(&manager, &frame), rows(&[1]));
        assert!(manager.selected(BrushingTarget::Row).is_empty());
    }

    #[test]
    fn test_custom_target_link() {
        let mut manager = BrushingManager::new();
        let target = BrushingTarget::new("test-link-target");
        let mut link = BrushingLink::with_target("view", target);

        let ids: RoaringTreemap = [4u64].into_iter().collect();
        assert!(link.brush_ids(&mut manager, BrushingAction::Select, ids));
        assert!(link.is_selection_modified(&manager));
        link.sync(&manager);
        assert!(!link.is_modified(&manager, BrushingAction::Select));
        assert!(manager.is_selected(target, 4));
    }
}
