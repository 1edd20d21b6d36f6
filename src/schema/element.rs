use std::fmt;

use crate::encoding::Encoding;
use crate::error::{Error, Result};

use super::types::{check_converted_invariants, ConvertedType, PhysicalType, Repetition};
use super::Tree;

/// A node of a [`Tree`]: either a leaf carrying a [`PhysicalType`] or a group of children.
///
/// The levels and paths are derived when the tree is flattened
/// (see [`Tree::to_flat_schema`]) and are zero/empty before that.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub(super) name: String,
    pub(super) physical_type: Option<PhysicalType>,
    pub(super) converted_type: Option<ConvertedType>,
    pub(super) repetition: Repetition,
    pub(super) field_id: Option<i32>,
    pub(super) encoding: Option<Encoding>,
    pub(super) children: Tree,

    pub(super) max_def_level: i16,
    pub(super) max_rep_level: i16,
    pub(super) path_in_tree: String,
    pub(super) path_in_schema: Vec<String>,
}

impl Element {
    /// Creates a new [`Element`].
    ///
    /// # Error
    /// Errors if `converted_type` cannot annotate `physical_type` or if a fixed-length byte
    /// array has a zero length. Annotations describing nested types (LIST, MAP) are only
    /// validated when the tree is flattened.
    pub fn try_new(
        name: impl Into<String>,
        repetition: Repetition,
        physical_type: Option<PhysicalType>,
        converted_type: Option<ConvertedType>,
    ) -> Result<Self> {
        let name = name.into();
        if let Some(physical_type) = &physical_type {
            if let PhysicalType::FixedLenByteArray(0) = physical_type {
                return Err(schema_err!(
                    "field {} is a FIXED_LEN_BYTE_ARRAY of length 0",
                    name
                ));
            }
            check_converted_invariants(physical_type, &converted_type)
                .map_err(|e| match e {
                    Error::Schema(message) => Error::Schema(format!("field {}: {}", name, message)),
                    other => other,
                })?;
        }

        Ok(Self {
            name,
            physical_type,
            converted_type,
            repetition,
            field_id: None,
            encoding: None,
            children: Tree::default(),
            max_def_level: 0,
            max_rep_level: 0,
            path_in_tree: String::new(),
            path_in_schema: vec![],
        })
    }

    /// Creates a new leaf without annotation.
    pub fn from_physical(
        name: impl Into<String>,
        physical_type: PhysicalType,
        repetition: Repetition,
    ) -> Result<Self> {
        Self::try_new(name, repetition, Some(physical_type), None)
    }

    /// Creates a new group. Its children are added through [`Tree::set`].
    pub fn group(
        name: impl Into<String>,
        repetition: Repetition,
        converted_type: Option<ConvertedType>,
    ) -> Self {
        Self {
            name: name.into(),
            physical_type: None,
            converted_type,
            repetition,
            field_id: None,
            encoding: None,
            children: Tree::default(),
            max_def_level: 0,
            max_rep_level: 0,
            path_in_tree: String::new(),
            path_in_schema: vec![],
        }
    }

    pub fn with_field_id(mut self, field_id: i32) -> Self {
        self.field_id = Some(field_id);
        self
    }

    /// Forces the encoding of this leaf's values, overriding the writer's dictionary policy.
    /// # Error
    /// Errors if `encoding` is not a value encoding, or if it is
    /// [`Encoding::PlainDictionary`] and this is a boolean leaf: booleans are always plain.
    pub fn with_encoding(mut self, encoding: Encoding) -> Result<Self> {
        match encoding {
            Encoding::PlainDictionary if self.physical_type == Some(PhysicalType::Boolean) => {
                Err(Error::InvalidParameter(format!(
                    "the booleans of {} cannot be dictionary-encoded",
                    self.name
                )))
            }
            Encoding::Plain | Encoding::PlainDictionary => {
                self.encoding = Some(encoding);
                Ok(self)
            }
            other => Err(Error::InvalidParameter(format!(
                "{:?} cannot be used to encode the values of {}",
                other, self.name
            ))),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn physical_type(&self) -> Option<&PhysicalType> {
        self.physical_type.as_ref()
    }

    pub fn converted_type(&self) -> Option<&ConvertedType> {
        self.converted_type.as_ref()
    }

    pub fn repetition(&self) -> Repetition {
        self.repetition
    }

    pub fn field_id(&self) -> Option<i32> {
        self.field_id
    }

    pub fn encoding(&self) -> Option<Encoding> {
        self.encoding
    }

    pub fn children(&self) -> &Tree {
        &self.children
    }

    /// Whether this element stores values.
    pub fn is_leaf(&self) -> bool {
        self.physical_type.is_some()
    }

    pub fn max_def_level(&self) -> i16 {
        self.max_def_level
    }

    pub fn max_rep_level(&self) -> i16 {
        self.max_rep_level
    }

    /// The keys leading to this element in its [`Tree`], dot-joined.
    pub fn path_in_tree(&self) -> &str {
        &self.path_in_tree
    }

    /// The names leading to this element in the parquet schema.
    pub fn path_in_schema(&self) -> &[String] {
        &self.path_in_schema
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.name, self.repetition)?;
        if let Some(physical_type) = &self.physical_type {
            write!(f, " {:?}", physical_type)?;
        }
        if let Some(converted_type) = &self.converted_type {
            write!(f, " ({:?})", converted_type)?;
        }
        if !self.children.is_empty() {
            write!(f, " {}", self.children)?;
        }
        Ok(())
    }
}
