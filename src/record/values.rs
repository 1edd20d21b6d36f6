use crate::schema::types::PhysicalType;

/// A uniformly-typed sequence of values of a leaf column.
#[derive(Debug, Clone, PartialEq)]
pub enum Values {
    Boolean(Vec<bool>),
    Int32(Vec<i32>),
    Int64(Vec<i64>),
    Int96(Vec<[u32; 3]>),
    Float(Vec<f32>),
    Double(Vec<f64>),
    ByteArray(Vec<Vec<u8>>),
    FixedLenByteArray(Vec<Vec<u8>>),
}

impl Values {
    pub fn len(&self) -> usize {
        match self {
            Values::Boolean(values) => values.len(),
            Values::Int32(values) => values.len(),
            Values::Int64(values) => values.len(),
            Values::Int96(values) => values.len(),
            Values::Float(values) => values.len(),
            Values::Double(values) => values.len(),
            Values::ByteArray(values) => values.len(),
            Values::FixedLenByteArray(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether these values can be stored in a column of `physical_type`. For fixed-length
    /// byte arrays every value must have the column's length.
    pub fn matches(&self, physical_type: &PhysicalType) -> bool {
        match (self, physical_type) {
            (Values::Boolean(_), PhysicalType::Boolean)
            | (Values::Int32(_), PhysicalType::Int32)
            | (Values::Int64(_), PhysicalType::Int64)
            | (Values::Int96(_), PhysicalType::Int96)
            | (Values::Float(_), PhysicalType::Float)
            | (Values::Double(_), PhysicalType::Double)
            | (Values::ByteArray(_), PhysicalType::ByteArray) => true,
            (Values::FixedLenByteArray(values), PhysicalType::FixedLenByteArray(size)) => {
                values.iter().all(|value| value.len() == *size)
            }
            _ => false,
        }
    }

    /// Appends `other` to `self`.
    /// # Panic
    /// Panics if both containers do not hold the same physical type.
    pub fn append(&mut self, other: Values) {
        match (self, other) {
            (Values::Boolean(values), Values::Boolean(other)) => values.extend(other),
            (Values::Int32(values), Values::Int32(other)) => values.extend(other),
            (Values::Int64(values), Values::Int64(other)) => values.extend(other),
            (Values::Int96(values), Values::Int96(other)) => values.extend(other),
            (Values::Float(values), Values::Float(other)) => values.extend(other),
            (Values::Double(values), Values::Double(other)) => values.extend(other),
            (Values::ByteArray(values), Values::ByteArray(other)) => values.extend(other),
            (Values::FixedLenByteArray(values), Values::FixedLenByteArray(other)) => {
                values.extend(other)
            }
            (values, other) => panic!(
                "cannot merge values of different physical types ({} and {})",
                values.type_name(),
                other.type_name()
            ),
        }
    }

    /// A single value of `physical_type` standing for a null entry.
    pub(crate) fn placeholder(physical_type: &PhysicalType) -> Self {
        match physical_type {
            PhysicalType::Boolean => Values::Boolean(vec![false]),
            PhysicalType::Int32 => Values::Int32(vec![0]),
            PhysicalType::Int64 => Values::Int64(vec![0]),
            PhysicalType::Int96 => Values::Int96(vec![[0; 3]]),
            PhysicalType::Float => Values::Float(vec![0.0]),
            PhysicalType::Double => Values::Double(vec![0.0]),
            PhysicalType::ByteArray => Values::ByteArray(vec![vec![]]),
            PhysicalType::FixedLenByteArray(size) => Values::FixedLenByteArray(vec![vec![0; *size]]),
        }
    }

    /// The number of bytes the values at `positions` take once plain-encoded.
    pub(crate) fn plain_size(&self, positions: &[usize]) -> usize {
        match self {
            Values::Boolean(_) => crate::encoding::ceil8(positions.len()),
            Values::Int32(_) | Values::Float(_) => positions.len() * 4,
            Values::Int64(_) | Values::Double(_) => positions.len() * 8,
            Values::Int96(_) => positions.len() * 12,
            Values::ByteArray(values) => positions.iter().map(|i| 4 + values[*i].len()).sum(),
            Values::FixedLenByteArray(values) => positions.iter().map(|i| values[*i].len()).sum(),
        }
    }

    fn type_name(&self) -> &'static str {
        match self {
            Values::Boolean(_) => "BOOLEAN",
            Values::Int32(_) => "INT32",
            Values::Int64(_) => "INT64",
            Values::Int96(_) => "INT96",
            Values::Float(_) => "FLOAT",
            Values::Double(_) => "DOUBLE",
            Values::ByteArray(_) => "BYTE_ARRAY",
            Values::FixedLenByteArray(_) => "FIXED_LEN_BYTE_ARRAY",
        }
    }
}
