use parquet_format_safe::SchemaElement;

use super::super::types::{converted_type_to_thrift, physical_type_to_type};
use super::super::Element;

impl Element {
    /// Converts this element (without its children) to its thrift representation.
    pub(crate) fn to_thrift(&self) -> SchemaElement {
        let (type_, type_length) = match &self.physical_type {
            Some(physical_type) => {
                let (type_, type_length) = physical_type_to_type(physical_type);
                (Some(type_), type_length)
            }
            None => (None, None),
        };
        let (converted_type, maybe_decimal) = self
            .converted_type
            .as_ref()
            .map(converted_type_to_thrift)
            .map(|(converted_type, maybe_decimal)| (Some(converted_type), maybe_decimal))
            .unwrap_or((None, None));

        let num_children = if self.is_leaf() {
            None
        } else {
            Some(self.children.len() as i32)
        };

        SchemaElement {
            type_,
            type_length,
            repetition_type: Some(self.repetition.into()),
            name: self.name.clone(),
            num_children,
            converted_type,
            scale: maybe_decimal.map(|x| x.1),
            precision: maybe_decimal.map(|x| x.0),
            field_id: self.field_id,
            logical_type: None,
        }
    }
}
