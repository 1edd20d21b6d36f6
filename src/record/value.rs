use std::fmt;

use crate::schema::types::PhysicalType;

use super::Values;

/// A single value of a [`Record`](super::Record).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Boolean(bool),
    Int32(i32),
    Int64(i64),
    Int96([u32; 3]),
    Float(f32),
    Double(f64),
    ByteArray(Vec<u8>),
    FixedLenByteArray(Vec<u8>),
}

impl Value {
    /// The physical type of this value, `None` for [`Value::Null`].
    pub fn physical_type(&self) -> Option<PhysicalType> {
        Some(match self {
            Value::Null => return None,
            Value::Boolean(_) => PhysicalType::Boolean,
            Value::Int32(_) => PhysicalType::Int32,
            Value::Int64(_) => PhysicalType::Int64,
            Value::Int96(_) => PhysicalType::Int96,
            Value::Float(_) => PhysicalType::Float,
            Value::Double(_) => PhysicalType::Double,
            Value::ByteArray(_) => PhysicalType::ByteArray,
            Value::FixedLenByteArray(value) => PhysicalType::FixedLenByteArray(value.len()),
        })
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// A single-element container with this value. `None` for [`Value::Null`].
    pub(crate) fn to_values(&self) -> Option<Values> {
        Some(match self {
            Value::Null => return None,
            Value::Boolean(value) => Values::Boolean(vec![*value]),
            Value::Int32(value) => Values::Int32(vec![*value]),
            Value::Int64(value) => Values::Int64(vec![*value]),
            Value::Int96(value) => Values::Int96(vec![*value]),
            Value::Float(value) => Values::Float(vec![*value]),
            Value::Double(value) => Values::Double(vec![*value]),
            Value::ByteArray(value) => Values::ByteArray(vec![value.clone()]),
            Value::FixedLenByteArray(value) => Values::FixedLenByteArray(vec![value.clone()]),
        })
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int32(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int64(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Double(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::ByteArray(value.as_bytes().to_vec())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Value::Null)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Boolean(value) => write!(f, "{}", value),
            Value::Int32(value) => write!(f, "{}", value),
            Value::Int64(value) => write!(f, "{}", value),
            Value::Int96(value) => write!(f, "{:?}", value),
            Value::Float(value) => write!(f, "{}", value),
            Value::Double(value) => write!(f, "{}", value),
            Value::ByteArray(value) | Value::FixedLenByteArray(value) => {
                write!(f, "{}", String::from_utf8_lossy(value))
            }
        }
    }
}
