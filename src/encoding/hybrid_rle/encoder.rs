use std::io::Write;

use crate::encoding::{bitpacked, ceil8, uleb128};

/// Runs shorter than this are bit-packed together with their neighbours.
const MIN_RLE_RUN: usize = 8;

fn write_header<W: Write>(writer: &mut W, header: u64) -> std::io::Result<()> {
    let mut container = [0; 10];
    let used = uleb128::encode(header, &mut container);
    writer.write_all(&container[..used])
}

/// writes a bit-packed run; `values` is padded with zeros up to a multiple of 8.
fn write_bitpacked<W: Write>(writer: &mut W, values: &[u32], num_bits: u32) -> std::io::Result<()> {
    if values.is_empty() {
        return Ok(());
    }
    let groups = ceil8(values.len());

    // the length + indicator
    write_header(writer, (groups as u64) << 1 | 1)?;

    let mut padded = values.to_vec();
    padded.resize(groups * 8, 0);
    let mut packed = Vec::with_capacity(groups * num_bits as usize);
    bitpacked::encode(&padded, num_bits, &mut packed);
    writer.write_all(&packed)
}

fn write_rle<W: Write>(
    writer: &mut W,
    value: u32,
    length: usize,
    num_bits: u32,
) -> std::io::Result<()> {
    write_header(writer, (length as u64) << 1)?;
    let width = ceil8(num_bits as usize);
    writer.write_all(&value.to_le_bytes()[..width])
}

#[inline]
fn run_length(values: &[u32]) -> usize {
    match values.first() {
        Some(first) => values.iter().take_while(|x| *x == first).count(),
        None => 0,
    }
}

/// Encodes `values` using the RLE/bit-packing hybrid with `num_bits` per value.
///
/// Runs of at least 8 equal values become RLE runs whenever the pending literals are a
/// whole number of groups of 8; everything else is bit-packed. Only the final bit-packed
/// run is padded.
pub fn encode_u32<W: Write>(writer: &mut W, values: &[u32], num_bits: u32) -> std::io::Result<()> {
    let mut literal_start = 0;
    let mut i = 0;
    while i < values.len() {
        let run = run_length(&values[i..]);
        if run >= MIN_RLE_RUN && (i - literal_start) % 8 == 0 {
            write_bitpacked(writer, &values[literal_start..i], num_bits)?;
            write_rle(writer, values[i], run, num_bits)?;
            i += run;
            literal_start = i;
        } else {
            i += 1;
        }
    }
    write_bitpacked(writer, &values[literal_start..], num_bits)
}
