use indexmap::IndexMap;
use parquet_format_safe::SchemaElement;

use super::column_descriptor::ColumnDescriptor;

/// A flattened schema: the parquet schema elements (starting with the root) and the
/// descriptors of all leaf columns, in depth-first order.
#[derive(Debug, Clone)]
pub struct SchemaDescriptor {
    elements: Vec<SchemaElement>,
    // leaves keyed by their path in the tree
    leaves: IndexMap<String, ColumnDescriptor>,
}

impl SchemaDescriptor {
    pub(crate) fn new(elements: Vec<SchemaElement>, leaves: Vec<ColumnDescriptor>) -> Self {
        let leaves = leaves
            .into_iter()
            .map(|leaf| (leaf.path_in_tree().to_string(), leaf))
            .collect();
        Self { elements, leaves }
    }

    /// Returns the [`ColumnDescriptor`] of the leaf at `path` (its dotted path in the tree).
    pub fn column(&self, path: &str) -> Option<&ColumnDescriptor> {
        self.leaves.get(path)
    }

    /// Returns the [`ColumnDescriptor`]s in schema order.
    pub fn columns(&self) -> impl Iterator<Item = &ColumnDescriptor> {
        self.leaves.values()
    }

    /// Returns number of leaf-level columns.
    pub fn num_columns(&self) -> usize {
        self.leaves.len()
    }

    /// The schema elements as written to the footer, root first.
    pub fn elements(&self) -> &[SchemaElement] {
        &self.elements
    }
}
