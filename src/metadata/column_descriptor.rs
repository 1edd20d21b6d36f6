use crate::encoding::Encoding;
use crate::schema::types::{ConvertedType, PhysicalType, Repetition};
use crate::schema::Element;

/// A descriptor for leaf-level primitive columns.
/// This encapsulates information such as definition and repetition levels and is used to
/// validate and encode the values written to the column.
#[derive(Debug, PartialEq, Clone)]
pub struct ColumnDescriptor {
    // The path of this column in its tree. For instance, "a.b.c.d".
    path_in_tree: String,

    // The names of this column in the parquet schema.
    path_in_schema: Vec<String>,

    physical_type: PhysicalType,
    converted_type: Option<ConvertedType>,
    repetition: Repetition,

    // The maximum definition level for this column
    max_def_level: i16,

    // The maximum repetition level for this column
    max_rep_level: i16,

    encoding: Option<Encoding>,
}

impl ColumnDescriptor {
    /// Creates the descriptor of a flattened leaf.
    /// # Panic
    /// Panics if `element` is not a leaf.
    pub(crate) fn from_element(element: &Element) -> Self {
        let physical_type = *element
            .physical_type()
            .expect("only leaves have column descriptors");
        Self {
            path_in_tree: element.path_in_tree().to_string(),
            path_in_schema: element.path_in_schema().to_vec(),
            physical_type,
            converted_type: element.converted_type().copied(),
            repetition: element.repetition(),
            max_def_level: element.max_def_level(),
            max_rep_level: element.max_rep_level(),
            encoding: element.encoding(),
        }
    }

    /// Returns maximum definition level for this column.
    pub fn max_def_level(&self) -> i16 {
        self.max_def_level
    }

    /// Returns maximum repetition level for this column.
    pub fn max_rep_level(&self) -> i16 {
        self.max_rep_level
    }

    pub fn path_in_tree(&self) -> &str {
        &self.path_in_tree
    }

    pub fn path_in_schema(&self) -> &[String] {
        &self.path_in_schema
    }

    pub fn physical_type(&self) -> &PhysicalType {
        &self.physical_type
    }

    pub fn converted_type(&self) -> Option<&ConvertedType> {
        self.converted_type.as_ref()
    }

    pub fn repetition(&self) -> Repetition {
        self.repetition
    }

    /// The encoding requested for this column's values, if any.
    pub fn encoding(&self) -> Option<Encoding> {
        self.encoding
    }
}
