//! Element kinds stored in column buffers
//!
//! Every concrete element type implements [`Element`], which ties the Rust
//! type to its [`ElementKind`] tag, its [`ColumnBuffer`] variant and its
//! [`DataValue`] variant. Generic column code goes through this trait.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::buffer::ColumnBuffer;
use crate::value::DataValue;

/// Tag identifying the element type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float32,
    Float64,
    Vec2F32,
    Vec3F32,
    Vec4F32,
    Vec2F64,
    Vec3F64,
    Vec4F64,
}

impl ElementKind {
    /// Format name shown in table summaries
    pub fn name(&self) -> &'static str {
        match self {
            ElementKind::Bool => "BOOL",
            ElementKind::Int8 => "INT8",
            ElementKind::Int16 => "INT16",
            ElementKind::Int32 => "INT32",
            ElementKind::Int64 => "INT64",
            ElementKind::UInt8 => "UINT8",
            ElementKind::UInt16 => "UINT16",
            ElementKind::UInt32 => "UINT32",
            ElementKind::UInt64 => "UINT64",
            ElementKind::Float32 => "FLOAT32",
            ElementKind::Float64 => "FLOAT64",
            ElementKind::Vec2F32 => "Vec2FLOAT32",
            ElementKind::Vec3F32 => "Vec3FLOAT32",
            ElementKind::Vec4F32 => "Vec4FLOAT32",
            ElementKind::Vec2F64 => "Vec2FLOAT64",
            ElementKind::Vec3F64 => "Vec3FLOAT64",
            ElementKind::Vec4F64 => "Vec4FLOAT64",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A concrete element type that can live in a column buffer
pub trait Element: Copy + Default + PartialEq + fmt::Debug + Send + Sync + 'static {
    /// Kind tag for this type
    const KIND: ElementKind;

    /// Parse a value from its string form
    fn parse_str(s: &str) -> Option<Self>;

    /// Box the value
    fn to_value(self) -> DataValue;

    /// Unbox a value of the same kind
    fn from_value(value: &DataValue) -> Option<Self>;

    /// Visit every scalar component as f64
    fn for_each_component(self, f: impl FnMut(f64));

    /// Wrap a vector into the matching buffer variant
    fn wrap(values: Vec<Self>) -> ColumnBuffer;

    /// Borrow the values if the buffer holds this type
    fn slice(buffer: &ColumnBuffer) -> Option<&[Self]>;

    /// Borrow the backing vector mutably if the buffer holds this type
    fn vec_mut(buffer: &mut ColumnBuffer) -> Option<&mut Vec<Self>>;
}

fn parse_integer<T: std::str::FromStr>(s: &str) -> Option<T> {
    s.trim().parse().ok()
}

fn parse_f32(s: &str) -> Option<f32> {
    let s = s.trim();
    if s.is_empty() {
        return Some(f32::NAN);
    }
    s.parse().ok()
}

fn parse_f64(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return Some(f64::NAN);
    }
    s.parse().ok()
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "true" | "yes" | "1" => Some(true),
        "false" | "no" | "0" => Some(false),
        _ => None,
    }
}

/// Split a vector literal like `(1, 2, 3)` or `1 2 3` into its components
fn split_components(s: &str) -> Vec<&str> {
    let s = s.trim();
    let s = s
        .strip_prefix('(')
        .and_then(|inner| inner.strip_suffix(')'))
        .or_else(|| s.strip_prefix('[').and_then(|inner| inner.strip_suffix(']')))
        .unwrap_or(s);
    s.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect()
}

macro_rules! impl_buffer_access {
    ($kind:ident) => {
        fn wrap(values: Vec<Self>) -> ColumnBuffer {
            ColumnBuffer::$kind(values)
        }

        fn slice(buffer: &ColumnBuffer) -> Option<&[Self]> {
            match buffer {
                ColumnBuffer::$kind(values) => Some(values.as_slice()),
                _ => None,
            }
        }

        fn vec_mut(buffer: &mut ColumnBuffer) -> Option<&mut Vec<Self>> {
            match buffer {
                ColumnBuffer::$kind(values) => Some(values),
                _ => None,
            }
        }

        fn to_value(self) -> DataValue {
            DataValue::$kind(self)
        }

        fn from_value(value: &DataValue) -> Option<Self> {
            match value {
                DataValue::$kind(v) => Some(*v),
                _ => None,
            }
        }
    };
}

macro_rules! impl_scalar_element {
    ($ty:ty, $kind:ident, $parse:path) => {
        impl Element for $ty {
            const KIND: ElementKind = ElementKind::$kind;

            fn parse_str(s: &str) -> Option<Self> {
                $parse(s)
            }

            fn for_each_component(self, mut f: impl FnMut(f64)) {
                f(self as f64)
            }

            impl_buffer_access!($kind);
        }
    };
}

macro_rules! impl_vector_element {
    ($scalar:ty, $n:literal, $kind:ident) => {
        impl Element for [$scalar; $n] {
            const KIND: ElementKind = ElementKind::$kind;

            fn parse_str(s: &str) -> Option<Self> {
                let parts = split_components(s);
                if parts.len() != $n {
                    return None;
                }
                let mut out = [<$scalar>::default(); $n];
                for (slot, part) in out.iter_mut().zip(parts) {
                    *slot = part.parse::<$scalar>().ok()?;
                }
                Some(out)
            }

            fn for_each_component(self, mut f: impl FnMut(f64)) {
                for component in self {
                    f(component as f64)
                }
            }

            impl_buffer_access!($kind);
        }
    };
}

impl Element for bool {
    const KIND: ElementKind = ElementKind::Bool;

    fn parse_str(s: &str) -> Option<Self> {
        parse_bool(s)
    }

    fn for_each_component(self, mut f: impl FnMut(f64)) {
        f(if self { 1.0 } else { 0.0 })
    }

    impl_buffer_access!(Bool);
}

impl_scalar_element!(i8, Int8, parse_integer);
impl_scalar_element!(i16, Int16, parse_integer);
impl_scalar_element!(i32, Int32, parse_integer);
impl_scalar_element!(i64, Int64, parse_integer);
impl_scalar_element!(u8, UInt8, parse_integer);
impl_scalar_element!(u16, UInt16, parse_integer);
impl_scalar_element!(u32, UInt32, parse_integer);
impl_scalar_element!(u64, UInt64, parse_integer);
impl_scalar_element!(f32, Float32, parse_f32);
impl_scalar_element!(f64, Float64, parse_f64);

impl_vector_element!(f32, 2, Vec2F32);
impl_vector_element!(f32, 3, Vec3F32);
impl_vector_element!(f32, 4, Vec4F32);
impl_vector_element!(f64, 2, Vec2F64);
impl_vector_element!(f64, 3, Vec3F64);
impl_vector_element!(f64, 4, Vec4F64);
