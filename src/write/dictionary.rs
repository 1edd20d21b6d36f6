use indexmap::IndexSet;

use crate::encoding::get_bit_width;
use crate::page::DictPage;

/// The distinct values of a column in a row group, each identified by the index it was
/// first inserted at. Values are kept plain-encoded.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    values: IndexSet<Vec<u8>>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a plain-encoded value, returning its index.
    pub fn insert(&mut self, value: Vec<u8>) -> u32 {
        self.values.insert_full(value).0 as u32
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear()
    }

    /// The number of bits used to encode an index into this dictionary (at least 1).
    pub fn bit_width(&self) -> u32 {
        get_bit_width(self.len().saturating_sub(1) as u64).max(1)
    }

    /// The dictionary page: every value in index order.
    pub fn to_page(&self) -> DictPage {
        let buffer = self.values.iter().flatten().copied().collect::<Vec<_>>();
        DictPage::new(buffer, self.len())
    }
}
