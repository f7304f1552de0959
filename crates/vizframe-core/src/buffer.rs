//! Typed contiguous storage behind columns
//!
//! [`ColumnBuffer`] is a closed set of `Vec<T>` variants, one per
//! [`ElementKind`]. Code that must run for whatever type a buffer holds uses
//! [`dispatch_buffer!`](crate::dispatch_buffer), which expands a generic
//! body once per variant.

use crate::element::{Element, ElementKind};
use crate::value::DataValue;

/// Apply an expression to the typed vector inside a [`ColumnBuffer`]
///
/// The body is instantiated for every variant, so it may call generic
/// functions bounded on [`Element`]. Works on both `&ColumnBuffer` and
/// `&mut ColumnBuffer`.
///
/// ```
/// use vizframe_core::{dispatch_buffer, ColumnBuffer};
///
/// let buffer = ColumnBuffer::from(vec![1.0f32, 2.0, 3.0]);
/// let len = dispatch_buffer!(&buffer, values => values.len());
/// assert_eq!(len, 3);
/// ```
#[macro_export]
macro_rules! dispatch_buffer {
    ($buffer:expr, $values:ident => $body:expr) => {
        match $buffer {
            $crate::buffer::ColumnBuffer::Bool($values) => $body,
            $crate::buffer::ColumnBuffer::Int8($values) => $body,
            $crate::buffer::ColumnBuffer::Int16($values) => $body,
            $crate::buffer::ColumnBuffer::Int32($values) => $body,
            $crate::buffer::ColumnBuffer::Int64($values) => $body,
            $crate::buffer::ColumnBuffer::UInt8($values) => $body,
            $crate::buffer::ColumnBuffer::UInt16($values) => $body,
            $crate::buffer::ColumnBuffer::UInt32($values) => $body,
            $crate::buffer::ColumnBuffer::UInt64($values) => $body,
            $crate::buffer::ColumnBuffer::Float32($values) => $body,
            $crate::buffer::ColumnBuffer::Float64($values) => $body,
            $crate::buffer::ColumnBuffer::Vec2F32($values) => $body,
            $crate::buffer::ColumnBuffer::Vec3F32($values) => $body,
            $crate::buffer::ColumnBuffer::Vec4F32($values) => $body,
            $crate::buffer::ColumnBuffer::Vec2F64($values) => $body,
            $crate::buffer::ColumnBuffer::Vec3F64($values) => $body,
            $crate::buffer::ColumnBuffer::Vec4F64($values) => $body,
        }
    };
}

/// Contiguous typed storage
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnBuffer {
    Bool(Vec<bool>),
    Int8(Vec<i8>),
    Int16(Vec<i16>),
    Int32(Vec<i32>),
    Int64(Vec<i64>),
    UInt8(Vec<u8>),
    UInt16(Vec<u16>),
    UInt32(Vec<u32>),
    UInt64(Vec<u64>),
    Float32(Vec<f32>),
    Float64(Vec<f64>),
    Vec2F32(Vec<[f32; 2]>),
    Vec3F32(Vec<[f32; 3]>),
    Vec4F32(Vec<[f32; 4]>),
    Vec2F64(Vec<[f64; 2]>),
    Vec3F64(Vec<[f64; 3]>),
    Vec4F64(Vec<[f64; 4]>),
}

impl ColumnBuffer {
    /// Create a default-filled buffer of the given kind
    pub fn new(kind: ElementKind, len: usize) -> Self {
        fn filled<T: Element>(len: usize) -> ColumnBuffer {
            T::wrap(vec![T::default(); len])
        }

        match kind {
            ElementKind::Bool => filled::<bool>(len),
            ElementKind::Int8 => filled::<i8>(len),
            ElementKind::Int16 => filled::<i16>(len),
            ElementKind::Int32 => filled::<i32>(len),
            ElementKind::Int64 => filled::<i64>(len),
            ElementKind::UInt8 => filled::<u8>(len),
            ElementKind::UInt16 => filled::<u16>(len),
            ElementKind::UInt32 => filled::<u32>(len),
            ElementKind::UInt64 => filled::<u64>(len),
            ElementKind::Float32 => filled::<f32>(len),
            ElementKind::Float64 => filled::<f64>(len),
            ElementKind::Vec2F32 => filled::<[f32; 2]>(len),
            ElementKind::Vec3F32 => filled::<[f32; 3]>(len),
            ElementKind::Vec4F32 => filled::<[f32; 4]>(len),
            ElementKind::Vec2F64 => filled::<[f64; 2]>(len),
            ElementKind::Vec3F64 => filled::<[f64; 3]>(len),
            ElementKind::Vec4F64 => filled::<[f64; 4]>(len),
        }
    }

    /// Element kind held by this buffer
    pub fn kind(&self) -> ElementKind {
        fn kind_of<T: Element>(_: &[T]) -> ElementKind {
            T::KIND
        }
        dispatch_buffer!(self, values => kind_of(values))
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        dispatch_buffer!(self, values => values.len())
    }

    /// Check if the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resize, filling new slots with the default value
    pub fn resize(&mut self, len: usize) {
        dispatch_buffer!(self, values => values.resize(len, Default::default()))
    }

    /// Shorten the buffer, keeping the first `len` elements
    pub fn truncate(&mut self, len: usize) {
        dispatch_buffer!(self, values => values.truncate(len))
    }

    /// Read one element as a boxed value
    pub fn get(&self, index: usize) -> Option<DataValue> {
        dispatch_buffer!(self, values => values.get(index).map(|v| v.to_value()))
    }

    /// Overwrite one element; fails if the index or value kind does not fit
    pub fn set(&mut self, index: usize, value: &DataValue) -> bool {
        fn store<T: Element>(values: &mut [T], index: usize, value: &DataValue) -> bool {
            match (values.get_mut(index), T::from_value(value)) {
                (Some(slot), Some(v)) => {
                    *slot = v;
                    true
                }
                _ => false,
            }
        }
        dispatch_buffer!(self, values => store(values, index, value))
    }

    /// Append one element; fails if the value kind does not match
    pub fn push(&mut self, value: &DataValue) -> bool {
        fn append<T: Element>(values: &mut Vec<T>, value: &DataValue) -> bool {
            match T::from_value(value) {
                Some(v) => {
                    values.push(v);
                    true
                }
                None => false,
            }
        }
        dispatch_buffer!(self, values => append(values, value))
    }

    /// Parse a string into a value of this buffer's kind without storing it
    pub fn parse(&self, s: &str) -> Option<DataValue> {
        fn parse_as<T: Element>(_: &[T], s: &str) -> Option<DataValue> {
            T::parse_str(s).map(Element::to_value)
        }
        dispatch_buffer!(self, values => parse_as(values, s))
    }

    /// Minimum and maximum over all scalar components, ignoring NaN
    pub fn min_max(&self) -> Option<(f64, f64)> {
        fn fold<T: Element>(values: &[T]) -> Option<(f64, f64)> {
            let mut result: Option<(f64, f64)> = None;
            for value in values {
                value.for_each_component(|c| {
                    if c.is_nan() {
                        return;
                    }
                    result = Some(match result {
                        Some((min, max)) => (min.min(c), max.max(c)),
                        None => (c, c),
                    });
                });
            }
            result
        }
        dispatch_buffer!(self, values => fold(values))
    }
}

impl<T: Element> From<Vec<T>> for ColumnBuffer {
    fn from(values: Vec<T>) -> Self {
        T::wrap(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_default_filled() {
        let buffer = ColumnBuffer::new(ElementKind::Vec2F32, 3);
        assert_eq!(buffer.kind(), ElementKind::Vec2F32);
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.get(2), Some(DataValue::Vec2F32([0.0, 0.0])));
    }

    #[test]
    fn test_resize_and_truncate() {
        let mut buffer = ColumnBuffer::from(vec![1i32, 2, 3]);
        buffer.resize(5);
        assert_eq!(buffer, ColumnBuffer::Int32(vec![1, 2, 3, 0, 0]));
        buffer.truncate(2);
        assert_eq!(buffer, ColumnBuffer::Int32(vec![1, 2]));
    }

    #[test]
    fn test_push_checks_kind() {
        let mut buffer = ColumnBuffer::from(vec![1.0f64]);
        assert!(buffer.push(&DataValue::Float64(2.0)));
        assert!(!buffer.push(&DataValue::Int32(3)));
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn test_set() {
        let mut buffer = ColumnBuffer::from(vec![1u8, 2]);
        assert!(buffer.set(1, &DataValue::UInt8(9)));
        assert!(!buffer.set(2, &DataValue::UInt8(9)));
        assert_eq!(buffer.get(1), Some(DataValue::UInt8(9)));
    }

    #[test]
    fn test_parse_uses_buffer_kind() {
        let buffer = ColumnBuffer::from(vec![0i64]);
        assert_eq!(buffer.parse("17"), Some(DataValue::Int64(17)));
        assert_eq!(buffer.parse("x"), None);
    }

    #[test]
    fn test_min_max_ignores_nan() {
        let buffer = ColumnBuffer::from(vec![3.0f32, f32::NAN, -1.0, 2.0]);
        assert_eq!(buffer.min_max(), Some((-1.0, 3.0)));

        let vectors = ColumnBuffer::from(vec![[1.0f64, 5.0], [-2.0, 0.5]]);
        assert_eq!(vectors.min_max(), Some((-2.0, 5.0)));

        let empty = ColumnBuffer::new(ElementKind::Int32, 0);
        assert_eq!(empty.min_max(), None);
    }
}
