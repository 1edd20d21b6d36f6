use crate::record::Values;
use crate::types::NativeType;

use super::bitpacked;

fn encode_native<T: NativeType>(values: &[T], positions: &[usize], buffer: &mut Vec<u8>) {
    buffer.reserve(positions.len() * std::mem::size_of::<T>());
    for i in positions {
        buffer.extend_from_slice(values[*i].to_le_bytes().as_ref());
    }
}

fn encode_binary(values: &[Vec<u8>], positions: &[usize], buffer: &mut Vec<u8>) {
    for i in positions {
        let value = &values[*i];
        buffer.extend_from_slice(&(value.len() as u32).to_le_bytes());
        buffer.extend_from_slice(value);
    }
}

fn encode_fixed_binary(values: &[Vec<u8>], positions: &[usize], buffer: &mut Vec<u8>) {
    for i in positions {
        buffer.extend_from_slice(&values[*i]);
    }
}

/// Plain-encodes the values at `positions` into `buffer`.
pub fn encode_plain(values: &Values, positions: &[usize], buffer: &mut Vec<u8>) {
    match values {
        Values::Boolean(values) => {
            bitpacked::encode_bool(positions.iter().map(|i| values[*i]), buffer)
        }
        Values::Int32(values) => encode_native(values, positions, buffer),
        Values::Int64(values) => encode_native(values, positions, buffer),
        Values::Int96(values) => encode_native(values, positions, buffer),
        Values::Float(values) => encode_native(values, positions, buffer),
        Values::Double(values) => encode_native(values, positions, buffer),
        Values::ByteArray(values) => encode_binary(values, positions, buffer),
        Values::FixedLenByteArray(values) => encode_fixed_binary(values, positions, buffer),
    }
}
