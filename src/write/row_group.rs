use std::io::Write;

use parquet_format_safe::RowGroup;
use tracing::trace;

use crate::compression::Compression;
use crate::error::Result;
use crate::metadata::ColumnDescriptor;
use crate::page::CompressedPage;

use super::column_chunk::write_column_chunk;

/// Writes the column chunks of a row group starting at `offset`, returning the row group's
/// metadata and the number of bytes written. Columns without pages are skipped.
pub fn write_row_group<'a, W, I>(
    writer: &mut W,
    mut offset: u64,
    columns: I,
    compression: Compression,
    num_rows: usize,
) -> Result<(RowGroup, u64)>
where
    W: Write,
    I: Iterator<Item = (&'a ColumnDescriptor, Vec<CompressedPage>)>,
{
    let initial = offset;

    let mut chunks = vec![];
    for (descriptor, pages) in columns {
        if pages.is_empty() {
            trace!(column = descriptor.path_in_tree(), "skipped column without values");
            continue;
        }
        let (chunk, bytes_written) =
            write_column_chunk(writer, offset, descriptor, compression, &pages)?;
        trace!(
            column = descriptor.path_in_tree(),
            offset,
            pages = pages.len(),
            bytes = bytes_written,
            "wrote column chunk"
        );
        offset += bytes_written;
        chunks.push(chunk);
    }
    let bytes_written = offset - initial;

    // compute row group stats
    let total_byte_size = chunks
        .iter()
        .filter_map(|chunk| chunk.meta_data.as_ref())
        .map(|metadata| metadata.total_compressed_size)
        .sum();

    Ok((
        RowGroup {
            columns: chunks,
            total_byte_size,
            num_rows: num_rows as i64,
            sorting_columns: None,
            file_offset: Some(initial as i64),
            total_compressed_size: Some(total_byte_size),
            ordinal: None,
        },
        bytes_written,
    ))
}
