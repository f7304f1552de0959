//! Boxed per-cell values

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::element::ElementKind;

/// A single cell value of any supported element kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DataValue {
    Bool(bool),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    UInt8(u8),
    UInt16(u16),
    UInt32(u32),
    UInt64(u64),
    Float32(f32),
    Float64(f64),
    Vec2F32([f32; 2]),
    Vec3F32([f32; 3]),
    Vec4F32([f32; 4]),
    Vec2F64([f64; 2]),
    Vec3F64([f64; 3]),
    Vec4F64([f64; 4]),
    /// Resolved categorical value
    String(String),
}

/// One value per column for a single row
pub type DataItem = Vec<DataValue>;

impl DataValue {
    /// Element kind of the value, `None` for strings
    pub fn kind(&self) -> Option<ElementKind> {
        Some(match self {
            DataValue::Bool(_) => ElementKind::Bool,
            DataValue::Int8(_) => ElementKind::Int8,
            DataValue::Int16(_) => ElementKind::Int16,
            DataValue::Int32(_) => ElementKind::Int32,
            DataValue::Int64(_) => ElementKind::Int64,
            DataValue::UInt8(_) => ElementKind::UInt8,
            DataValue::UInt16(_) => ElementKind::UInt16,
            DataValue::UInt32(_) => ElementKind::UInt32,
            DataValue::UInt64(_) => ElementKind::UInt64,
            DataValue::Float32(_) => ElementKind::Float32,
            DataValue::Float64(_) => ElementKind::Float64,
            DataValue::Vec2F32(_) => ElementKind::Vec2F32,
            DataValue::Vec3F32(_) => ElementKind::Vec3F32,
            DataValue::Vec4F32(_) => ElementKind::Vec4F32,
            DataValue::Vec2F64(_) => ElementKind::Vec2F64,
            DataValue::Vec3F64(_) => ElementKind::Vec3F64,
            DataValue::Vec4F64(_) => ElementKind::Vec4F64,
            DataValue::String(_) => return None,
        })
    }

    /// The string of a resolved categorical value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            DataValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Check for a floating point NaN
    pub fn is_nan(&self) -> bool {
        match self {
            DataValue::Float32(v) => v.is_nan(),
            DataValue::Float64(v) => v.is_nan(),
            _ => false,
        }
    }
}

fn write_components<T: fmt::Display>(f: &mut fmt::Formatter<'_>, components: &[T]) -> fmt::Result {
    f.write_str("(")?;
    for (i, c) in components.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", c)?;
    }
    f.write_str(")")
}

impl fmt::Display for DataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataValue::Bool(v) => write!(f, "{}", v),
            DataValue::Int8(v) => write!(f, "{}", v),
            DataValue::Int16(v) => write!(f, "{}", v),
            DataValue::Int32(v) => write!(f, "{}", v),
            DataValue::Int64(v) => write!(f, "{}", v),
            DataValue::UInt8(v) => write!(f, "{}", v),
            DataValue::UInt16(v) => write!(f, "{}", v),
            DataValue::UInt32(v) => write!(f, "{}", v),
            DataValue::UInt64(v) => write!(f, "{}", v),
            DataValue::Float32(v) => write!(f, "{}", v),
            DataValue::Float64(v) => write!(f, "{}", v),
            DataValue::Vec2F32(v) => write_components(f, v),
            DataValue::Vec3F32(v) => write_components(f, v),
            DataValue::Vec4F32(v) => write_components(f, v),
            DataValue::Vec2F64(v) => write_components(f, v),
            DataValue::Vec3F64(v) => write_components(f, v),
            DataValue::Vec4F64(v) => write_components(f, v),
            DataValue::String(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(DataValue::Int32(3).to_string(), "3");
        assert_eq!(DataValue::Float32(1.5).to_string(), "1.5");
        assert_eq!(DataValue::Vec3F32([1.0, 2.5, 3.0]).to_string(), "(1, 2.5, 3)");
        assert_eq!(DataValue::String("a".into()).to_string(), "a");
    }

    #[test]
    fn test_kind_and_conversions() {
        assert_eq!(DataValue::UInt64(7).kind(), Some(ElementKind::UInt64));
        assert_eq!(DataValue::String("x".into()).kind(), None);
        assert!(DataValue::Float64(f64::NAN).is_nan());
    }

    #[test]
    fn test_serde_round_trip() {
        let value = DataValue::Vec2F32([0.5, 1.0]);
        let json = serde_json::to_string(&value).unwrap();
        let back: DataValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
    }
}
