//! Bit packing of values, least significant bit first.
//! See <https://github.com/apache/parquet-format/blob/master/Encodings.md#bit-packed-deprecated-bit_packed--4>
use super::ceil8;

const BIT_MASK: [u8; 8] = [1, 2, 4, 8, 16, 32, 64, 128];

/// Sets bit at position `i` in `byte`
#[inline]
pub fn set(byte: u8, i: usize) -> u8 {
    byte | BIT_MASK[i]
}

/// Packs `values` into `buffer` using `num_bits` per value.
/// The last byte is zero-padded.
/// # Panics
/// This function panics iff `num_bits > 32`.
pub fn encode(values: &[u32], num_bits: u32, buffer: &mut Vec<u8>) {
    assert!(num_bits <= 32);
    if num_bits == 0 {
        return;
    }
    buffer.reserve(ceil8(values.len() * num_bits as usize));

    let mask = (1u64 << num_bits) - 1;
    let mut container = 0u64;
    let mut used = 0u32;
    for value in values {
        container |= (*value as u64 & mask) << used;
        used += num_bits;
        while used >= 8 {
            buffer.push(container as u8);
            container >>= 8;
            used -= 8;
        }
    }
    if used > 0 {
        buffer.push(container as u8);
    }
}

/// Packs booleans, one bit per value, appending to `buffer`.
pub fn encode_bool<I: Iterator<Item = bool>>(iterator: I, buffer: &mut Vec<u8>) {
    let mut byte = 0u8;
    let mut i = 0;
    for value in iterator {
        if value {
            byte = set(byte, i)
        }
        i += 1;
        if i == 8 {
            buffer.push(byte);
            byte = 0;
            i = 0;
        }
    }
    if i != 0 {
        buffer.push(byte);
    }
}
