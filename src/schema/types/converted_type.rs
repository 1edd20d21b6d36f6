use parquet_format_safe::ConvertedType as ParquetConvertedType;

/// The (legacy) logical annotation of a schema element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConvertedType {
    Utf8,
    /// a map is converted as a repeated group containing a required `key` and a `value`
    Map,
    /// a key/value pair is converted into a group of two fields
    MapKeyValue,
    /// a list is converted into a group containing a single repeated `list` field
    List,
    /// an enum is converted into a binary field
    Enum,
    /// A decimal value.
    ///
    /// This may be used to annotate int32, int64, binary or fixed primitive types. The
    /// value of the decimal is the unscaled value * 10^{-scale}.
    // (precision, scale)
    Decimal(i32, i32),
    /// Stored as days since Unix epoch, encoded as the INT32 physical type.
    Date,
    /// The total number of milliseconds since midnight, stored as INT32.
    TimeMillis,
    /// The total number of microseconds since midnight, stored as INT64.
    TimeMicros,
    /// Milliseconds since the Unix epoch, stored as INT64.
    TimestampMillis,
    /// Microseconds since the Unix epoch, stored as INT64.
    TimestampMicros,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Int8,
    Int16,
    Int32,
    Int64,
    /// A JSON document embedded within a single UTF8 column.
    Json,
    /// A BSON document embedded within a single BINARY column.
    Bson,
    /// Months, days and milliseconds as three little-endian u32 in a FIXED_LEN_BYTE_ARRAY(12).
    Interval,
}

impl ConvertedType {
    /// Whether this annotation describes the shape of a group rather than its values.
    pub fn is_nested(&self) -> bool {
        matches!(
            self,
            ConvertedType::List | ConvertedType::Map | ConvertedType::MapKeyValue
        )
    }
}

/// Returns the thrift converted type and, for decimals, its `(precision, scale)`.
pub fn converted_type_to_thrift(
    converted_type: &ConvertedType,
) -> (ParquetConvertedType, Option<(i32, i32)>) {
    use ConvertedType::*;
    match converted_type {
        Utf8 => (ParquetConvertedType::UTF8, None),
        Map => (ParquetConvertedType::MAP, None),
        MapKeyValue => (ParquetConvertedType::MAP_KEY_VALUE, None),
        List => (ParquetConvertedType::LIST, None),
        Enum => (ParquetConvertedType::ENUM, None),
        Decimal(precision, scale) => (ParquetConvertedType::DECIMAL, Some((*precision, *scale))),
        Date => (ParquetConvertedType::DATE, None),
        TimeMillis => (ParquetConvertedType::TIME_MILLIS, None),
        TimeMicros => (ParquetConvertedType::TIME_MICROS, None),
        TimestampMillis => (ParquetConvertedType::TIMESTAMP_MILLIS, None),
        TimestampMicros => (ParquetConvertedType::TIMESTAMP_MICROS, None),
        Uint8 => (ParquetConvertedType::UINT_8, None),
        Uint16 => (ParquetConvertedType::UINT_16, None),
        Uint32 => (ParquetConvertedType::UINT_32, None),
        Uint64 => (ParquetConvertedType::UINT_64, None),
        Int8 => (ParquetConvertedType::INT_8, None),
        Int16 => (ParquetConvertedType::INT_16, None),
        Int32 => (ParquetConvertedType::INT_32, None),
        Int64 => (ParquetConvertedType::INT_64, None),
        Json => (ParquetConvertedType::JSON, None),
        Bson => (ParquetConvertedType::BSON, None),
        Interval => (ParquetConvertedType::INTERVAL, None),
    }
}
