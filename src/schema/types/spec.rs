// see https://github.com/apache/parquet-format/blob/master/LogicalTypes.md
use crate::error::{Error, Result};

use super::{ConvertedType, PhysicalType};

fn check_decimal_invariants(
    physical_type: &PhysicalType,
    precision: i32,
    scale: i32,
) -> Result<()> {
    if precision < 1 {
        return Err(schema_err!(
            "DECIMAL precision must be larger than 0; It is {}",
            precision
        ));
    }
    if scale < 0 || scale > precision {
        return Err(schema_err!(
            "Invalid DECIMAL: scale ({}) must be between 0 and the precision ({})",
            scale,
            precision
        ));
    }

    match physical_type {
        PhysicalType::Int32 => {
            if !(1..=9).contains(&precision) {
                return Err(schema_err!(
                    "Cannot represent INT32 as DECIMAL with precision {}",
                    precision
                ));
            }
        }
        PhysicalType::Int64 => {
            if !(1..=18).contains(&precision) {
                return Err(schema_err!(
                    "Cannot represent INT64 as DECIMAL with precision {}",
                    precision
                ));
            }
        }
        PhysicalType::FixedLenByteArray(length) => {
            let max_precision = (2f64.powi(8 * *length as i32 - 1) - 1f64).log10().floor() as i32;

            if precision > max_precision {
                return Err(schema_err!(
                    "Cannot represent FIXED_LEN_BYTE_ARRAY as DECIMAL with length {} and \
                    precision {}. The max precision can only be {}",
                    length,
                    precision,
                    max_precision
                ));
            }
        }
        PhysicalType::ByteArray => {}
        _ => {
            return Err(schema_err!(
                "DECIMAL can only annotate INT32, INT64, BYTE_ARRAY and FIXED_LEN_BYTE_ARRAY"
            ))
        }
    };
    Ok(())
}

/// Checks that a primitive converted type can annotate `physical_type`.
/// Nested annotations (LIST, MAP, MAP_KEY_VALUE) are checked when the tree is flattened.
pub fn check_converted_invariants(
    physical_type: &PhysicalType,
    converted_type: &Option<ConvertedType>,
) -> Result<()> {
    let converted_type = match converted_type {
        Some(converted_type) if !converted_type.is_nested() => converted_type,
        _ => return Ok(()),
    };

    match converted_type {
        ConvertedType::Utf8 | ConvertedType::Bson | ConvertedType::Json | ConvertedType::Enum => {
            if physical_type != &PhysicalType::ByteArray {
                return Err(schema_err!(
                    "{:?} can only annotate BYTE_ARRAY fields",
                    converted_type
                ));
            }
        }
        ConvertedType::Decimal(precision, scale) => {
            check_decimal_invariants(physical_type, *precision, *scale)?;
        }
        ConvertedType::Date
        | ConvertedType::TimeMillis
        | ConvertedType::Uint8
        | ConvertedType::Uint16
        | ConvertedType::Uint32
        | ConvertedType::Int8
        | ConvertedType::Int16
        | ConvertedType::Int32 => {
            if physical_type != &PhysicalType::Int32 {
                return Err(schema_err!("{:?} can only annotate INT32", converted_type));
            }
        }
        ConvertedType::TimeMicros
        | ConvertedType::TimestampMillis
        | ConvertedType::TimestampMicros
        | ConvertedType::Uint64
        | ConvertedType::Int64 => {
            if physical_type != &PhysicalType::Int64 {
                return Err(schema_err!("{:?} can only annotate INT64", converted_type));
            }
        }
        ConvertedType::Interval => {
            if physical_type != &PhysicalType::FixedLenByteArray(12) {
                return Err(schema_err!(
                    "INTERVAL can only annotate FIXED_LEN_BYTE_ARRAY(12)"
                ));
            }
        }
        ConvertedType::List | ConvertedType::Map | ConvertedType::MapKeyValue => {}
    };
    Ok(())
}
