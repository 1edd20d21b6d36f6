mod column_descriptor;
mod schema_descriptor;

pub use column_descriptor::ColumnDescriptor;
pub use parquet_format_safe::KeyValue;
pub use schema_descriptor::SchemaDescriptor;
