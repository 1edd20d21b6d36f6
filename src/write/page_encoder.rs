use std::ops::Range;

use tracing::trace;

use crate::encoding::{get_bit_width, hybrid_rle, plain::encode_plain, Encoding};
use crate::error::Result;
use crate::metadata::ColumnDescriptor;
use crate::page::{DataPage, EncodedPage};
use crate::record::{ColumnData, Values};
use crate::schema::types::PhysicalType;

use super::{Dictionary, DictionaryPolicy, WriteOptions};

/// Where the page being accumulated starts and how many bits of values it holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SplitState {
    Empty,
    Accumulating { start: usize, bits: usize },
}

/// Splits the entries of a column into pages of at most `max_bits` of plain-encoded values.
/// A page is only closed before an entry that starts a record (repetition level 0), so it
/// exceeds the bound only when a single record does.
#[derive(Debug)]
struct PageSplitter {
    max_bits: usize,
    state: SplitState,
    pages: Vec<Range<usize>>,
}

impl PageSplitter {
    fn new(page_size: usize) -> Self {
        Self {
            max_bits: page_size * 8,
            state: SplitState::Empty,
            pages: vec![],
        }
    }

    fn push(&mut self, i: usize, rep_level: i16, bits: usize) {
        self.state = match self.state {
            SplitState::Empty => SplitState::Accumulating { start: i, bits },
            SplitState::Accumulating {
                start,
                bits: accumulated,
            } => {
                if rep_level == 0 && accumulated + bits > self.max_bits {
                    self.pages.push(start..i);
                    SplitState::Accumulating { start: i, bits }
                } else {
                    SplitState::Accumulating {
                        start,
                        bits: accumulated + bits,
                    }
                }
            }
        }
    }

    fn finish(mut self, length: usize) -> Vec<Range<usize>> {
        if let SplitState::Accumulating { start, .. } = self.state {
            self.pages.push(start..length);
        }
        self.pages
    }
}

enum ValuesEncoding {
    Plain,
    Dictionary { indices: Vec<u32>, bit_width: u32 },
}

#[inline]
fn value_bits(values: &Values, i: usize) -> usize {
    match values {
        Values::Boolean(_) => 1,
        _ => values.plain_size(&[i]) * 8,
    }
}

/// Inserts every defined value into `dictionary`, returning the index of every entry
/// (0 for undefined entries).
fn build_indices(data: &ColumnData, max_def_level: i16, dictionary: &mut Dictionary) -> Vec<u32> {
    let mut buffer = vec![];
    data.def_levels()
        .iter()
        .enumerate()
        .map(|(i, def_level)| {
            if *def_level == max_def_level {
                buffer.clear();
                encode_plain(data.values(), &[i], &mut buffer);
                dictionary.insert(buffer.clone())
            } else {
                0
            }
        })
        .collect()
}

fn select_encoding(
    descriptor: &ColumnDescriptor,
    policy: DictionaryPolicy,
    data: &ColumnData,
    dictionary: &mut Dictionary,
) -> ValuesEncoding {
    if descriptor.physical_type() == &PhysicalType::Boolean {
        return ValuesEncoding::Plain;
    }
    let max_distinct = match (descriptor.encoding(), policy) {
        (Some(Encoding::PlainDictionary), _) => None,
        (Some(_), _) | (None, DictionaryPolicy::Never) => return ValuesEncoding::Plain,
        (None, DictionaryPolicy::Cardinality { max_distinct }) => Some(max_distinct),
    };

    let max_def_level = descriptor.max_def_level();
    let indices = build_indices(data, max_def_level, dictionary);
    let distinct = dictionary.len();
    let defined = data
        .def_levels()
        .iter()
        .filter(|level| **level == max_def_level)
        .count();

    let use_dictionary = distinct > 0
        && max_distinct
            .map(|max_distinct| distinct <= max_distinct && 2 * distinct <= defined)
            .unwrap_or(true);
    if use_dictionary {
        ValuesEncoding::Dictionary {
            indices,
            bit_width: dictionary.bit_width(),
        }
    } else {
        dictionary.clear();
        ValuesEncoding::Plain
    }
}

/// Writes levels using the RLE/bit-packing hybrid, prefixed by their length as a 4-byte
/// little-endian integer. Nothing is written when `max_level` is 0.
fn write_levels(levels: &[i16], max_level: i16, buffer: &mut Vec<u8>) -> Result<()> {
    if max_level == 0 {
        return Ok(());
    }
    // the length is only known once the levels are encoded
    let start = buffer.len();
    buffer.extend_from_slice(&[0; 4]);

    let levels = levels.iter().map(|level| *level as u32).collect::<Vec<_>>();
    hybrid_rle::encode_u32(buffer, &levels, get_bit_width(max_level as u64))?;

    let length = (buffer.len() - start - 4) as u32;
    buffer[start..start + 4].copy_from_slice(&length.to_le_bytes());
    Ok(())
}

fn build_data_page(
    descriptor: &ColumnDescriptor,
    data: &ColumnData,
    range: Range<usize>,
    values_encoding: &ValuesEncoding,
) -> Result<DataPage> {
    let max_def_level = descriptor.max_def_level();

    let mut buffer = vec![];
    write_levels(
        &data.rep_levels()[range.clone()],
        descriptor.max_rep_level(),
        &mut buffer,
    )?;
    write_levels(&data.def_levels()[range.clone()], max_def_level, &mut buffer)?;

    let positions = range
        .clone()
        .filter(|i| data.def_levels()[*i] == max_def_level)
        .collect::<Vec<_>>();

    let encoding = match values_encoding {
        ValuesEncoding::Plain => {
            encode_plain(data.values(), &positions, &mut buffer);
            Encoding::Plain
        }
        ValuesEncoding::Dictionary { indices, bit_width } => {
            buffer.push(*bit_width as u8);
            let indices = positions.iter().map(|i| indices[*i]).collect::<Vec<_>>();
            hybrid_rle::encode_u32(&mut buffer, &indices, *bit_width)?;
            Encoding::PlainDictionary
        }
    };

    Ok(DataPage::new(buffer, range.len(), encoding))
}

/// Encodes all buffered entries of a column of a row group into pages: a dictionary page
/// (when the column is dictionary-encoded) followed by one or more data pages.
///
/// `dictionary` must be empty; it holds the column's dictionary afterwards.
pub fn encode_column(
    descriptor: &ColumnDescriptor,
    data: &ColumnData,
    options: &WriteOptions,
    dictionary: &mut Dictionary,
) -> Result<Vec<EncodedPage>> {
    if data.is_empty() {
        return Ok(vec![]);
    }
    let max_def_level = descriptor.max_def_level();

    let values_encoding = select_encoding(descriptor, options.dictionary, data, dictionary);

    let mut splitter = PageSplitter::new(options.page_size);
    for (i, (def_level, rep_level)) in data
        .def_levels()
        .iter()
        .zip(data.rep_levels().iter())
        .enumerate()
    {
        let bits = if *def_level == max_def_level {
            value_bits(data.values(), i)
        } else {
            0
        };
        splitter.push(i, *rep_level, bits);
    }
    let ranges = splitter.finish(data.len());

    let mut pages = Vec::with_capacity(ranges.len() + 1);
    if let ValuesEncoding::Dictionary { .. } = values_encoding {
        pages.push(EncodedPage::Dict(dictionary.to_page()));
    }
    for range in ranges {
        let page = build_data_page(descriptor, data, range, &values_encoding)?;
        pages.push(EncodedPage::Data(page));
    }
    trace!(
        column = descriptor.path_in_tree(),
        pages = pages.len(),
        dictionary = dictionary.len(),
        "encoded column"
    );
    Ok(pages)
}
