mod column_chunk;
mod compression;
mod dictionary;
mod file;
mod page;
mod page_encoder;
mod row_group;

pub use compression::compress;
pub use dictionary::Dictionary;
pub use file::{FileWriter, State};
pub use page_encoder::encode_column;

use crate::compression::Compression;
use crate::metadata::KeyValue;

/// When a column without an encoding preference is dictionary-encoded.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DictionaryPolicy {
    /// Values are always plain-encoded.
    Never,
    /// A column is dictionary-encoded in a row group when it has at most `max_distinct`
    /// distinct values and every distinct value appears at least twice on average.
    Cardinality { max_distinct: usize },
}

/// Options of a [`FileWriter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOptions {
    pub compression: Compression,
    /// The maximum size of the values of a page, in bytes. A page only exceeds it when a
    /// single record does.
    pub page_size: usize,
    /// A row group is flushed once its buffered values reach this many bytes, even if it has
    /// fewer rows than the writer's threshold.
    pub row_group_size: usize,
    pub dictionary: DictionaryPolicy,
    pub created_by: Option<String>,
    pub key_value_metadata: Option<Vec<KeyValue>>,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            compression: Compression::default(),
            page_size: 8 * 1024,
            row_group_size: 128 * 1024 * 1024,
            dictionary: DictionaryPolicy::Cardinality {
                max_distinct: 65536,
            },
            created_by: None,
            key_value_metadata: None,
        }
    }
}
