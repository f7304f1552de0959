//! Brushing actions

use serde::{Deserialize, Serialize};
use std::fmt;

/// The three independent brushing channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrushingAction {
    /// Identities excluded from display
    Filter,
    /// Identities chosen by the user
    Select,
    /// Identities under transient emphasis, e.g. hover
    Highlight,
}

impl BrushingAction {
    pub const ALL: [BrushingAction; 3] = [
        BrushingAction::Filter,
        BrushingAction::Select,
        BrushingAction::Highlight,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BrushingAction::Filter => "filter",
            BrushingAction::Select => "select",
            BrushingAction::Highlight => "highlight",
        }
    }

    /// Slot of this channel in per-channel arrays
    pub(crate) fn slot(self) -> usize {
        match self {
            BrushingAction::Filter => 0,
            BrushingAction::Select => 1,
            BrushingAction::Highlight => 2,
        }
    }
}

impl fmt::Display for BrushingAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
