#![forbid(unsafe_code)]
//! Writes records into parquet files.
//!
//! A schema is built as a [`schema::Tree`] of [`schema::Element`]s, flattened into the parquet
//! schema when a [`write::FileWriter`] is created. Records are then written one at a time,
//! either as the [`record::ColumnData`] of each leaf (with explicit definition and repetition
//! levels) or as a [`record::Record`] of non-repeated leaves, and buffered into row groups.
#[macro_use]
pub mod error;

pub mod compression;
pub mod encoding;
pub mod metadata;
pub mod page;
mod parquet_bridge;
pub mod record;
pub mod schema;
pub mod types;
pub mod write;

pub use error::{Error, Result};

const FOOTER_SIZE: u64 = 8;
const PARQUET_MAGIC: [u8; 4] = [b'P', b'A', b'R', b'1'];
