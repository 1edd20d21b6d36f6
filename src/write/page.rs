use std::io::Write;

use parquet_format_safe::thrift::protocol::TCompactOutputProtocol;
use parquet_format_safe::{DataPageHeader, DictionaryPageHeader, Encoding, PageHeader};

use crate::error::{Error, Result};
use crate::page::{CompressedPage, PageType};

/// Contains page write metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct PageWriteSpec {
    pub header: PageHeader,
    pub header_size: u64,
    pub offset: u64,
    pub bytes_written: u64,
    pub page_type: PageType,
}

fn to_i32(size: usize) -> Result<i32> {
    size.try_into()
        .map_err(|_| Error::InvalidParameter(format!("a page of {} bytes is too large", size)))
}

fn assemble_page_header(page: &CompressedPage) -> Result<PageHeader> {
    let mut page_header = PageHeader {
        type_: page.page_type().into(),
        uncompressed_page_size: to_i32(page.uncompressed_size())?,
        compressed_page_size: to_i32(page.compressed_size())?,
        crc: None,
        data_page_header: None,
        index_page_header: None,
        dictionary_page_header: None,
        data_page_header_v2: None,
    };

    let num_values = to_i32(page.num_values())?;
    match page.page_type() {
        PageType::DataPage => {
            page_header.data_page_header = Some(DataPageHeader {
                num_values,
                encoding: page.encoding().into(),
                definition_level_encoding: Encoding::RLE,
                repetition_level_encoding: Encoding::RLE,
                statistics: None,
            });
        }
        PageType::DictionaryPage => {
            page_header.dictionary_page_header = Some(DictionaryPageHeader {
                num_values,
                encoding: page.encoding().into(),
                is_sorted: None,
            });
        }
    }
    Ok(page_header)
}

/// Writes the header and the buffer of `page` to `writer`, which is at `offset` in the file.
pub fn write_page<W: Write>(
    writer: &mut W,
    offset: u64,
    page: &CompressedPage,
) -> Result<PageWriteSpec> {
    let header = assemble_page_header(page)?;

    let header_size = write_page_header(writer, &header)?;
    writer.write_all(page.buffer())?;

    Ok(PageWriteSpec {
        header,
        header_size,
        offset,
        bytes_written: header_size + page.compressed_size() as u64,
        page_type: page.page_type(),
    })
}

/// writes the page header into `writer`, returning the number of bytes used in the process.
fn write_page_header<W: Write>(mut writer: &mut W, header: &PageHeader) -> Result<u64> {
    let mut protocol = TCompactOutputProtocol::new(&mut writer);
    Ok(header.write_to_out_protocol(&mut protocol)? as u64)
}
