//! Routing key for brushing state
//!
//! Rows and columns are the built-in targets. Further targets are created
//! by name and interned in a process-wide registry, so two targets made
//! from the same name are the same value and compare by address.

use lazy_static::lazy_static;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Mutex, PoisonError};

const ROW_NAME: &str = "row";
const COLUMN_NAME: &str = "column";

lazy_static! {
    static ref REGISTRY: Mutex<Vec<&'static str>> = Mutex::new(Vec::new());
}

/// Return the interned copy of `name`, registering it on first use
fn intern(name: &str) -> &'static str {
    let mut registry = REGISTRY.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(existing) = registry.iter().copied().find(|entry| *entry == name) {
        return existing;
    }
    let interned: &'static str = Box::leak(name.to_string().into_boxed_str());
    registry.push(interned);
    tracing::debug!(target_name = interned, "registered brushing target");
    interned
}

/// What a brushing identity refers to
#[derive(Clone, Copy, Default)]
pub enum BrushingTarget {
    /// Identities are row identities from the index column
    #[default]
    Row,
    /// Identities are column positions
    Column,
    /// Interned extension target
    Custom(&'static str),
}

impl BrushingTarget {
    /// Target named `name`; "row" and "column" map to the built-in targets
    pub fn new(name: &str) -> Self {
        match name {
            ROW_NAME => BrushingTarget::Row,
            COLUMN_NAME => BrushingTarget::Column,
            _ => BrushingTarget::Custom(intern(name)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BrushingTarget::Row => ROW_NAME,
            BrushingTarget::Column => COLUMN_NAME,
            BrushingTarget::Custom(name) => *name,
        }
    }

    /// Number of extension targets registered so far
    pub fn registered_count() -> usize {
        REGISTRY
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl PartialEq for BrushingTarget {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (BrushingTarget::Row, BrushingTarget::Row) => true,
            (BrushingTarget::Column, BrushingTarget::Column) => true,
            (BrushingTarget::Custom(a), BrushingTarget::Custom(b)) => std::ptr::eq(*a, *b),
            _ => false,
        }
    }
}

impl Eq for BrushingTarget {}

impl Hash for BrushingTarget {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            BrushingTarget::Row => 0usize.hash(state),
            BrushingTarget::Column => 1usize.hash(state),
            BrushingTarget::Custom(name) => (name.as_ptr() as usize).hash(state),
        }
    }
}

impl fmt::Debug for BrushingTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BrushingTarget({:?})", self.as_str())
    }
}

impl fmt::Display for BrushingTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for BrushingTarget {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BrushingTarget {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(BrushingTarget::new(&name))
    }
}
