//! The schema of a parquet file: an ordered [`Tree`] of [`Element`]s that is flattened
//! into the schema of the footer and the descriptors of its leaf columns.
mod element;
mod io_thrift;
mod tree;
pub mod types;

pub use element::Element;
pub use tree::Tree;
pub use types::Repetition;
