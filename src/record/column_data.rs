use crate::error::{Error, Result};
use crate::metadata::ColumnDescriptor;

use super::Values;

/// The values of one leaf column together with their definition and repetition levels.
///
/// The three sequences always have the same length. Values at positions whose definition
/// level is below the column's maximum are placeholders and are not written.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnData {
    values: Values,
    def_levels: Vec<i16>,
    rep_levels: Vec<i16>,
}

impl ColumnData {
    /// # Error
    /// Errors if the values and the levels do not have the same length.
    pub fn try_new(values: Values, def_levels: Vec<i16>, rep_levels: Vec<i16>) -> Result<Self> {
        if values.len() != def_levels.len() || values.len() != rep_levels.len() {
            return Err(Error::InvalidParameter(format!(
                "values ({}), definition levels ({}) and repetition levels ({}) must have the same length",
                values.len(),
                def_levels.len(),
                rep_levels.len()
            )));
        }
        Ok(Self {
            values,
            def_levels,
            rep_levels,
        })
    }

    /// Column data of a required, non-repeated column: all levels are zero.
    pub fn required(values: Values) -> Self {
        let length = values.len();
        Self {
            values,
            def_levels: vec![0; length],
            rep_levels: vec![0; length],
        }
    }

    pub fn len(&self) -> usize {
        self.def_levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.def_levels.is_empty()
    }

    pub fn values(&self) -> &Values {
        &self.values
    }

    pub fn def_levels(&self) -> &[i16] {
        &self.def_levels
    }

    pub fn rep_levels(&self) -> &[i16] {
        &self.rep_levels
    }

    /// Appends `other` after `self`.
    /// # Panic
    /// Panics if the two columns hold values of different physical types.
    pub fn merge(&mut self, other: ColumnData) {
        let ColumnData {
            values,
            def_levels,
            rep_levels,
        } = other;
        self.values.append(values);
        self.def_levels.extend(def_levels);
        self.rep_levels.extend(rep_levels);
    }

    /// The number of records in this column (entries starting a new record).
    pub fn num_records(&self) -> usize {
        self.rep_levels.iter().filter(|level| **level == 0).count()
    }

    /// Checks that this data can be written to the column described by `descriptor`.
    pub(crate) fn check(&self, descriptor: &ColumnDescriptor) -> Result<()> {
        let path = descriptor.path_in_tree();
        if !self.values.matches(descriptor.physical_type()) {
            return Err(Error::InvalidParameter(format!(
                "the values of {} do not match its physical type {:?}",
                path,
                descriptor.physical_type()
            )));
        }
        let max_def_level = descriptor.max_def_level();
        if let Some(level) = self
            .def_levels
            .iter()
            .find(|level| !(0..=max_def_level).contains(*level))
        {
            return Err(Error::InvalidParameter(format!(
                "definition level {} of {} is outside 0..={}",
                level, path, max_def_level
            )));
        }
        let max_rep_level = descriptor.max_rep_level();
        if let Some(level) = self.rep_levels.first().filter(|level| **level != 0) {
            return Err(Error::InvalidParameter(format!(
                "the data of {} starts with repetition level {} instead of a new record",
                path, level
            )));
        }
        if let Some(level) = self
            .rep_levels
            .iter()
            .find(|level| !(0..=max_rep_level).contains(*level))
        {
            return Err(Error::InvalidParameter(format!(
                "repetition level {} of {} is outside 0..={}",
                level, path, max_rep_level
            )));
        }
        Ok(())
    }
}
