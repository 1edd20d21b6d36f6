use std::fmt;

use indexmap::IndexMap;
use parquet_format_safe::{FieldRepetitionType, SchemaElement};

use crate::error::{Error, Result};
use crate::metadata::{ColumnDescriptor, SchemaDescriptor};

use super::types::{ConvertedType, Repetition};
use super::Element;

/// An ordered collection of named [`Element`]s, addressed by dotted paths such as `"a.b.c"`.
///
/// Iteration follows insertion order; replacing an element keeps its position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tree {
    fields: IndexMap<String, Element>,
}

fn split_path(path: &str) -> Result<Vec<&str>> {
    if path.is_empty() {
        return Err(path_err!("path cannot be empty"));
    }
    let segments = path.split('.').collect::<Vec<_>>();
    if segments.iter().any(|segment| segment.is_empty()) {
        return Err(path_err!("path {} contains an empty segment", path));
    }
    Ok(segments)
}

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over the top-level keys and elements, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Element)> {
        self.fields.iter().map(|(key, element)| (key.as_str(), element))
    }

    /// Inserts `element` at `path`, replacing any element already there.
    /// # Error
    /// Errors if the path is malformed, if one of its parents does not exist or if a parent
    /// is a leaf.
    pub fn set(&mut self, path: &str, element: Element) -> Result<()> {
        let segments = split_path(path)?;
        let (last, parents) = segments
            .split_last()
            .ok_or_else(|| path_err!("path cannot be empty"))?;

        let mut current = self;
        for (i, segment) in parents.iter().enumerate() {
            let parent = current
                .fields
                .get_mut(*segment)
                .ok_or_else(|| path_err!("parent {} does not exist", segments[..=i].join(".")))?;
            if parent.is_leaf() {
                return Err(path_err!(
                    "parent {} is not a group element",
                    segments[..=i].join(".")
                ));
            }
            current = &mut parent.children;
        }
        current.fields.insert(last.to_string(), element);
        Ok(())
    }

    pub fn get(&self, path: &str) -> Option<&Element> {
        let segments = split_path(path).ok()?;
        let (last, parents) = segments.split_last()?;
        let mut current = self;
        for segment in parents {
            current = &current.fields.get(*segment)?.children;
        }
        current.fields.get(*last)
    }

    pub fn get_mut(&mut self, path: &str) -> Option<&mut Element> {
        let segments = split_path(path).ok()?;
        let (last, parents) = segments.split_last()?;
        let mut current = self;
        for segment in parents {
            current = &mut current.fields.get_mut(*segment)?.children;
        }
        current.fields.get_mut(*last)
    }

    /// Removes the element at `path` together with its children, keeping the order of its
    /// siblings. Returns the removed element, if any.
    pub fn delete(&mut self, path: &str) -> Option<Element> {
        let segments = split_path(path).ok()?;
        let (last, parents) = segments.split_last()?;
        let mut current = self;
        for segment in parents {
            current = &mut current.fields.get_mut(*segment)?.children;
        }
        current.fields.shift_remove(*last)
    }

    /// Derives the levels and paths of every element, validates the nested annotations and
    /// flattens the tree into its parquet schema: a root element followed by every element
    /// in depth-first order, plus the leaves in the same order.
    /// # Error
    /// Errors on the first structural violation found.
    pub fn to_flat_schema(&mut self) -> Result<SchemaDescriptor> {
        set_levels(self, 0, 0);

        let mut elements = vec![SchemaElement {
            type_: None,
            type_length: None,
            repetition_type: Some(FieldRepetitionType::REQUIRED),
            name: "schema".to_string(),
            num_children: Some(self.len() as i32),
            converted_type: None,
            scale: None,
            precision: None,
            field_id: None,
            logical_type: None,
        }];
        let mut leaves = vec![];
        flatten(self, "", &[], &mut elements, &mut leaves)?;

        Ok(SchemaDescriptor::new(elements, leaves))
    }
}

fn set_levels(tree: &mut Tree, max_def_level: i16, max_rep_level: i16) {
    for element in tree.fields.values_mut() {
        element.max_def_level = max_def_level;
        element.max_rep_level = max_rep_level;
        match element.repetition {
            Repetition::Required => {}
            Repetition::Optional => element.max_def_level += 1,
            Repetition::Repeated => {
                element.max_def_level += 1;
                element.max_rep_level += 1;
            }
        }
        set_levels(
            &mut element.children,
            element.max_def_level,
            element.max_rep_level,
        );
    }
}

fn validate(element: &Element, path: &str) -> Result<()> {
    match element.converted_type {
        Some(ConvertedType::List) => {
            if element.physical_type.is_some() {
                return Err(schema_err!(
                    "field {} annotated as LIST cannot have a physical type",
                    path
                ));
            }
            if element.children.len() != 1 {
                return Err(schema_err!(
                    "field {} annotated as LIST must have exactly one child",
                    path
                ));
            }
            let list = element.children.fields.get("list").ok_or_else(|| {
                schema_err!("field {} annotated as LIST must have a 'list' child", path)
            })?;
            if list.repetition != Repetition::Repeated {
                return Err(schema_err!("{}.list must be REPEATED", path));
            }
        }
        Some(ConvertedType::Map) => {
            if element.physical_type.is_some() {
                return Err(schema_err!(
                    "field {} annotated as MAP cannot have a physical type",
                    path
                ));
            }
            if element.repetition != Repetition::Repeated {
                return Err(schema_err!("field {} annotated as MAP must be REPEATED", path));
            }
            if element.children.len() != 2 {
                return Err(schema_err!(
                    "field {} annotated as MAP must have exactly two children",
                    path
                ));
            }
            let key = element.children.fields.get("key").ok_or_else(|| {
                schema_err!("field {} annotated as MAP must have a 'key' child", path)
            })?;
            if key.repetition != Repetition::Required {
                return Err(schema_err!("{}.key must be REQUIRED", path));
            }
            if !element.children.fields.contains_key("value") {
                return Err(schema_err!(
                    "field {} annotated as MAP must have a 'value' child",
                    path
                ));
            }
        }
        Some(converted_type) => {
            if element.physical_type.is_none() {
                return Err(schema_err!(
                    "field {} annotated as {:?} must have a physical type",
                    path,
                    converted_type
                ));
            }
        }
        None => {
            if element.physical_type.is_none() && element.children.is_empty() {
                return Err(schema_err!(
                    "field {} has neither a physical type nor children",
                    path
                ));
            }
        }
    }
    Ok(())
}

fn flatten(
    tree: &mut Tree,
    tree_prefix: &str,
    schema_prefix: &[String],
    elements: &mut Vec<SchemaElement>,
    leaves: &mut Vec<ColumnDescriptor>,
) -> Result<()> {
    for (key, element) in tree.fields.iter_mut() {
        let path_in_tree = if tree_prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", tree_prefix, key)
        };
        validate(element, &path_in_tree)?;

        let mut path_in_schema = schema_prefix.to_vec();
        path_in_schema.push(element.name.clone());
        element.path_in_tree = path_in_tree;
        element.path_in_schema = path_in_schema;

        elements.push(element.to_thrift());
        if element.is_leaf() {
            leaves.push(ColumnDescriptor::from_element(element));
        } else {
            flatten(
                &mut element.children,
                &element.path_in_tree,
                &element.path_in_schema,
                elements,
                leaves,
            )?;
        }
    }
    Ok(())
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, element)) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", key, element)?;
        }
        write!(f, "}}")
    }
}
