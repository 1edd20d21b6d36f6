use crate::compression::{compress as compress_buffer, Compression};
use crate::encoding::Encoding;
use crate::error::Result;
use crate::page::{CompressedPage, DataPage, DictPage, EncodedPage, PageType};

/// Compresses a [`DataPage`] into a [`CompressedPage`].
fn compress_data(
    page: DataPage,
    mut compressed_buffer: Vec<u8>,
    compression: Compression,
) -> Result<CompressedPage> {
    let num_values = page.num_values();
    let encoding = page.encoding();
    let DataPage { mut buffer, .. } = page;
    let uncompressed_page_size = buffer.len();
    if compression != Compression::Uncompressed {
        compress_buffer(compression, &buffer, &mut compressed_buffer)?;
    } else {
        std::mem::swap(&mut buffer, &mut compressed_buffer);
    }
    Ok(CompressedPage::new(
        PageType::DataPage,
        compressed_buffer,
        compression,
        uncompressed_page_size,
        num_values,
        encoding,
    ))
}

fn compress_dict(
    page: DictPage,
    mut compressed_buffer: Vec<u8>,
    compression: Compression,
) -> Result<CompressedPage> {
    let num_values = page.num_values();
    let DictPage { mut buffer, .. } = page;
    let uncompressed_page_size = buffer.len();
    if compression != Compression::Uncompressed {
        compress_buffer(compression, &buffer, &mut compressed_buffer)?;
    } else {
        std::mem::swap(&mut buffer, &mut compressed_buffer);
    }
    Ok(CompressedPage::new(
        PageType::DictionaryPage,
        compressed_buffer,
        compression,
        uncompressed_page_size,
        num_values,
        Encoding::PlainDictionary,
    ))
}

/// Compresses an [`EncodedPage`], using `compressed_buffer` as the page's buffer.
pub fn compress(
    page: EncodedPage,
    compressed_buffer: Vec<u8>,
    compression: Compression,
) -> Result<CompressedPage> {
    match page {
        EncodedPage::Data(page) => compress_data(page, compressed_buffer, compression),
        EncodedPage::Dict(page) => compress_dict(page, compressed_buffer, compression),
    }
}
