mod schema;
mod write;

use std::convert::TryInto;

use parquet_format_safe::thrift::protocol::TCompactInputProtocol;
use parquet_format_safe::{ColumnMetaData, FileMetaData, PageHeader};

/// Checks the magic at both ends of `file` and deserializes its footer.
pub fn read_footer(file: &[u8]) -> FileMetaData {
    assert_eq!(&file[..4], b"PAR1");
    assert_eq!(&file[file.len() - 4..], b"PAR1");

    let length_start = file.len() - 8;
    let metadata_len =
        i32::from_le_bytes(file[length_start..length_start + 4].try_into().unwrap()) as usize;

    let mut reader = &file[length_start - metadata_len..length_start];
    let mut protocol = TCompactInputProtocol::new(&mut reader, usize::MAX);
    let metadata = FileMetaData::read_from_in_protocol(&mut protocol).unwrap();
    drop(protocol);
    assert!(reader.is_empty());
    metadata
}

/// Returns the headers of the pages of a column chunk, with the offset of each page.
pub fn read_page_headers(file: &[u8], metadata: &ColumnMetaData) -> Vec<(i64, PageHeader)> {
    let start = metadata
        .dictionary_page_offset
        .unwrap_or(metadata.data_page_offset);
    let end = start + metadata.total_compressed_size;

    let mut headers = vec![];
    let mut offset = start;
    while offset < end {
        let mut reader = &file[offset as usize..];
        let remaining = reader.len();
        let mut protocol = TCompactInputProtocol::new(&mut reader, usize::MAX);
        let header = PageHeader::read_from_in_protocol(&mut protocol).unwrap();
        drop(protocol);
        let header_size = (remaining - reader.len()) as i64;

        let next = offset + header_size + header.compressed_page_size as i64;
        headers.push((offset, header));
        offset = next;
    }
    assert_eq!(offset, end);
    headers
}
