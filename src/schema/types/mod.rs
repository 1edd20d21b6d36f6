pub use crate::parquet_bridge::Repetition;

mod spec;
pub use spec::check_converted_invariants;

mod physical_type;
pub use physical_type::*;

mod converted_type;
pub use converted_type::*;
