pub use crate::parquet_bridge::PageType;

use crate::compression::Compression;
use crate::encoding::Encoding;

/// A [`DataPage`] is an uncompressed, encoded representation of a Parquet data page:
/// the repetition levels, the definition levels and the values, in this order.
#[derive(Debug, Clone, PartialEq)]
pub struct DataPage {
    pub(crate) buffer: Vec<u8>,
    num_values: usize,
    encoding: Encoding,
}

impl DataPage {
    pub fn new(buffer: Vec<u8>, num_values: usize, encoding: Encoding) -> Self {
        Self {
            buffer,
            num_values,
            encoding,
        }
    }

    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// The number of entries (levels) in this page, null or not.
    pub fn num_values(&self) -> usize {
        self.num_values
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }
}

/// An uncompressed dictionary page: the distinct values of a column, plain-encoded in the
/// order their indices were assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct DictPage {
    pub(crate) buffer: Vec<u8>,
    num_values: usize,
}

impl DictPage {
    pub fn new(buffer: Vec<u8>, num_values: usize) -> Self {
        Self { buffer, num_values }
    }

    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    pub fn num_values(&self) -> usize {
        self.num_values
    }
}

/// An uncompressed, encoded page.
#[derive(Debug, Clone, PartialEq)]
pub enum EncodedPage {
    Data(DataPage),
    Dict(DictPage),
}

impl EncodedPage {
    pub fn page_type(&self) -> PageType {
        match self {
            EncodedPage::Data(_) => PageType::DataPage,
            EncodedPage::Dict(_) => PageType::DictionaryPage,
        }
    }
}

/// A [`CompressedPage`] is a compressed, encoded representation of a Parquet page.
/// It holds actual data and thus cloning it is expensive.
#[derive(Debug)]
pub struct CompressedPage {
    page_type: PageType,
    pub(crate) buffer: Vec<u8>,
    compression: Compression,
    uncompressed_page_size: usize,
    num_values: usize,
    encoding: Encoding,
}

impl CompressedPage {
    pub fn new(
        page_type: PageType,
        buffer: Vec<u8>,
        compression: Compression,
        uncompressed_page_size: usize,
        num_values: usize,
        encoding: Encoding,
    ) -> Self {
        Self {
            page_type,
            buffer,
            compression,
            uncompressed_page_size,
            num_values,
            encoding,
        }
    }

    pub fn page_type(&self) -> PageType {
        self.page_type
    }

    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    pub fn compression(&self) -> Compression {
        self.compression
    }

    pub fn uncompressed_size(&self) -> usize {
        self.uncompressed_page_size
    }

    pub fn compressed_size(&self) -> usize {
        self.buffer.len()
    }

    pub fn num_values(&self) -> usize {
        self.num_values
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }
}

// write: EncodedPage -> CompressedPage
