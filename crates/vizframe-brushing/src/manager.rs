//! Shared brushing state
//!
//! A [`BrushingManager`] is the relationship that linked views share. For
//! every target it keeps the selected, highlighted and filtered identity
//! sets together with a generation counter per channel. A counter only
//! moves when the channel's contents actually change, so republishing the
//! same set is a no-op.
//!
//! Filters are kept per source (for example "scatterplot" or "table") and
//! the filtered set of a target is the union over all sources.

use roaring::RoaringTreemap;
use std::collections::HashMap;

use crate::action::BrushingAction;
use crate::target::BrushingTarget;

#[derive(Debug, Clone)]
struct TargetState {
    selected: RoaringTreemap,
    highlighted: RoaringTreemap,
    filters: HashMap<String, RoaringTreemap>,
    filtered: RoaringTreemap,
    generations: [u64; 3],
}

impl TargetState {
    fn new() -> Self {
        Self {
            selected: RoaringTreemap::new(),
            highlighted: RoaringTreemap::new(),
            filters: HashMap::new(),
            filtered: RoaringTreemap::new(),
            generations: [0; 3],
        }
    }

    fn bump(&mut self, action: BrushingAction) {
        self.generations[action.slot()] += 1;
    }

    /// Recompute the filter union, reporting whether it changed
    fn refresh_filtered(&mut self) -> bool {
        let union = self
            .filters
            .values()
            .fold(RoaringTreemap::new(), |acc, ids| acc | ids);
        if union == self.filtered {
            return false;
        }
        self.filtered = union;
        self.bump(BrushingAction::Filter);
        true
    }
}

/// Selection, highlight and filter state shared by linked views
#[derive(Debug, Clone)]
pub struct BrushingManager {
    targets: HashMap<BrushingTarget, TargetState>,
    empty: RoaringTreemap,
}

impl Default for BrushingManager {
    fn default() -> Self {
        Self::new()
    }
}

impl BrushingManager {
    pub fn new() -> Self {
        Self {
            targets: HashMap::new(),
            empty: RoaringTreemap::new(),
        }
    }

    /// Replace the selected identities of `target`
    ///
    /// Returns whether the selection changed.
    pub fn select(&mut self, target: BrushingTarget, ids: RoaringTreemap) -> bool {
        let state = self.targets.entry(target).or_insert_with(TargetState::new);
        if state.selected == ids {
            return false;
        }
        tracing::debug!(brushing_target = %target, count = ids.len(), "selection changed");
        state.selected = ids;
        state.bump(BrushingAction::Select);
        true
    }

    /// Replace the highlighted identities of `target`
    pub fn highlight(&mut self, target: BrushingTarget, ids: RoaringTreemap) -> bool {
        let state = self.targets.entry(target).or_insert_with(TargetState::new);
        if state.highlighted == ids {
            return false;
        }
        tracing::debug!(brushing_target = %target, count = ids.len(), "highlight changed");
        state.highlighted = ids;
        state.bump(BrushingAction::Highlight);
        true
    }

    /// Replace the identities filtered out by `source`
    ///
    /// Returns whether the combined filter of `target` changed.
    pub fn filter(
        &mut self,
        target: BrushingTarget,
        source: &str,
        ids: RoaringTreemap,
    ) -> bool {
        let state = self.targets.entry(target).or_insert_with(TargetState::new);
        if state.filters.get(source) == Some(&ids) {
            return false;
        }
        state.filters.insert(source.to_string(), ids);
        let changed = state.refresh_filtered();
        if changed {
            tracing::debug!(
                brushing_target = %target,
                source,
                count = state.filtered.len(),
                "filter changed"
            );
        }
        changed
    }

    /// Drop the filter contributed by `source`
    pub fn clear_filter(&mut self, target: BrushingTarget, source: &str) -> bool {
        let Some(state) = self.targets.get_mut(&target) else {
            return false;
        };
        if state.filters.remove(source).is_none() {
            return false;
        }
        state.refresh_filtered()
    }

    /// Apply `action` with `ids`; `source` is only used by filters
    pub fn brush(
        &mut self,
        action: BrushingAction,
        target: BrushingTarget,
        source: &str,
        ids: RoaringTreemap,
    ) -> bool {
        match action {
            BrushingAction::Filter => self.filter(target, source, ids),
            BrushingAction::Select => self.select(target, ids),
            BrushingAction::Highlight => self.highlight(target, ids),
        }
    }

    /// Current identities of one channel
    pub fn ids(&self, action: BrushingAction, target: BrushingTarget) -> &RoaringTreemap {
        match self.targets.get(&target) {
            Some(state) => match action {
                BrushingAction::Filter => &state.filtered,
                BrushingAction::Select => &state.selected,
                BrushingAction::Highlight => &state.highlighted,
            },
            None => &self.empty,
        }
    }

    pub fn selected(&self, target: BrushingTarget) -> &RoaringTreemap {
        self.ids(BrushingAction::Select, target)
    }

    pub fn highlighted(&self, target: BrushingTarget) -> &RoaringTreemap {
        self.ids(BrushingAction::Highlight, target)
    }

    /// Union of the filters of every source
    pub fn filtered(&self, target: BrushingTarget) -> &RoaringTreemap {
        self.ids(BrushingAction::Filter, target)
    }

    /// Identities filtered out by a single source
    pub fn filtered_by(&self, target: BrushingTarget, source: &str) -> Option<&RoaringTreemap> {
        self.targets.get(&target)?.filters.get(source)
    }

    pub fn is_selected(&self, target: BrushingTarget, id: u64) -> bool {
        self.selected(target).contains(id)
    }

    pub fn is_highlighted(&self, target: BrushingTarget, id: u64) -> bool {
        self.highlighted(target).contains(id)
    }

    pub fn is_filtered(&self, target: BrushingTarget, id: u64) -> bool {
        self.filtered(target).contains(id)
    }

    /// Number of changes seen by one channel, 0 if never changed
    pub fn generation(&self, action: BrushingAction, target: BrushingTarget) -> u64 {
        self.targets
            .get(&target)
            .map_or(0, |state| state.generations[action.slot()])
    }
}
