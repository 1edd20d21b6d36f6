pub mod bitpacked;
pub mod hybrid_rle;
pub mod plain;
pub mod uleb128;

pub use crate::parquet_bridge::Encoding;

/// Returns the number of bits needed to represent `max`.
#[inline]
pub fn get_bit_width(max: u64) -> u32 {
    64 - max.leading_zeros()
}

/// Returns the ceil of value/8
#[inline]
pub fn ceil8(value: usize) -> usize {
    value / 8 + ((value % 8 != 0) as usize)
}
