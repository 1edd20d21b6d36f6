use std::io::Write;

use parquet_format_safe::{ColumnChunk, ColumnMetaData, Encoding};

use crate::compression::Compression;
use crate::encoding::Encoding as PageEncoding;
use crate::error::Result;
use crate::metadata::ColumnDescriptor;
use crate::page::{CompressedPage, PageType};
use crate::schema::types::physical_type_to_type;

use super::page::{write_page, PageWriteSpec};

/// Writes the pages of a column chunk, starting at `offset`, and returns the chunk's metadata
/// together with the number of bytes written.
pub fn write_column_chunk<W: Write>(
    writer: &mut W,
    mut offset: u64,
    descriptor: &ColumnDescriptor,
    compression: Compression,
    compressed_pages: &[CompressedPage],
) -> Result<(ColumnChunk, u64)> {
    let initial = offset;

    let mut specs = Vec::with_capacity(compressed_pages.len());
    for compressed_page in compressed_pages {
        let spec = write_page(writer, offset, compressed_page)?;
        offset += spec.bytes_written;
        specs.push(spec);
    }
    let bytes_written = offset - initial;

    let column_chunk = build_column_chunk(&specs, initial, descriptor, compression);
    Ok((column_chunk, bytes_written))
}

fn build_column_chunk(
    specs: &[PageWriteSpec],
    chunk_offset: u64,
    descriptor: &ColumnDescriptor,
    compression: Compression,
) -> ColumnChunk {
    // the total compressed size is the total compressed size of each page + the header size
    let total_compressed_size = specs
        .iter()
        .map(|x| x.header_size as i64 + x.header.compressed_page_size as i64)
        .sum();
    // the total uncompressed size is the total uncompressed size of each page + the header size
    let total_uncompressed_size = specs
        .iter()
        .map(|x| x.header_size as i64 + x.header.uncompressed_page_size as i64)
        .sum();

    let dictionary_page_offset = specs
        .iter()
        .find(|spec| spec.page_type == PageType::DictionaryPage)
        .map(|spec| spec.offset as i64);
    let data_page_offset = specs
        .iter()
        .find(|spec| spec.page_type == PageType::DataPage)
        .map(|spec| spec.offset as i64)
        .unwrap_or(chunk_offset as i64);

    // only data pages contribute
    let num_values = specs
        .iter()
        .filter_map(|spec| spec.header.data_page_header.as_ref())
        .map(|header| header.num_values as i64)
        .sum();

    let mut encodings: Vec<Encoding> = vec![];
    for spec in specs {
        let page_encodings = match (
            &spec.header.data_page_header,
            &spec.header.dictionary_page_header,
        ) {
            (Some(header), _) => vec![header.encoding, PageEncoding::Rle.into()],
            (None, Some(header)) => vec![header.encoding],
            (None, None) => vec![],
        };
        for encoding in page_encodings {
            if !encodings.contains(&encoding) {
                encodings.push(encoding);
            }
        }
    }

    let metadata = ColumnMetaData {
        type_: physical_type_to_type(descriptor.physical_type()).0,
        encodings,
        path_in_schema: descriptor.path_in_schema().to_vec(),
        codec: compression.into(),
        num_values,
        total_uncompressed_size,
        total_compressed_size,
        key_value_metadata: None,
        data_page_offset,
        index_page_offset: None,
        dictionary_page_offset,
        statistics: None,
        encoding_stats: None,
        bloom_filter_offset: None,
    };

    ColumnChunk {
        file_path: None, // same file for now.
        file_offset: chunk_offset as i64,
        meta_data: Some(metadata),
        offset_index_offset: None,
        offset_index_length: None,
        column_index_offset: None,
        column_index_length: None,
        crypto_metadata: None,
        encrypted_column_metadata: None,
    }
}
