use std::collections::HashMap;
use std::io::Write;

use indexmap::IndexMap;
use parquet_format_safe::thrift::protocol::TCompactOutputProtocol;
use parquet_format_safe::FileMetaData;
use tracing::debug;

use crate::error::{Error, Result};
use crate::metadata::SchemaDescriptor;
use crate::page::CompressedPage;
use crate::record::{ColumnData, Record, Value, Values};
use crate::schema::Tree;
use crate::{FOOTER_SIZE, PARQUET_MAGIC};

use super::compression::compress;
use super::page_encoder::encode_column;
use super::row_group::write_row_group;
use super::{Dictionary, WriteOptions};

pub(super) fn start_file<W: Write>(writer: &mut W) -> Result<u64> {
    writer.write_all(&PARQUET_MAGIC)?;
    Ok(PARQUET_MAGIC.len() as u64)
}

/// Writes the footer: the file metadata, its length and the trailing magic.
/// Returns the number of bytes written.
pub(super) fn end_file<W: Write>(mut writer: &mut W, metadata: &FileMetaData) -> Result<u64> {
    // Write file metadata
    let mut protocol = TCompactOutputProtocol::new(&mut writer);
    let metadata_len = metadata.write_to_out_protocol(&mut protocol)? as i32;

    // Write footer
    let metadata_bytes = metadata_len.to_le_bytes();
    let mut footer_buffer = [0u8; FOOTER_SIZE as usize];
    (0..4).for_each(|i| {
        footer_buffer[i] = metadata_bytes[i];
    });

    (&mut footer_buffer[4..]).write_all(&PARQUET_MAGIC)?;
    writer.write_all(&footer_buffer)?;
    writer.flush()?;
    Ok(metadata_len as u64 + FOOTER_SIZE)
}

/// The lifecycle of a [`FileWriter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Accepting records.
    Open,
    /// Writing a row group. A writer only stays in this state when the flush failed.
    Flushing,
    /// Writing the footer. A writer only stays in this state when writing the footer failed.
    Closing,
    /// The footer was written.
    Closed,
}

/// Writes records into a parquet file, one row group every `row_group_rows` records.
///
/// ```
/// use parquet_writer::record::{ColumnData, Values};
/// use parquet_writer::schema::types::PhysicalType;
/// use parquet_writer::schema::{Element, Repetition, Tree};
/// use parquet_writer::write::{FileWriter, WriteOptions};
///
/// # fn main() -> parquet_writer::error::Result<()> {
/// let mut tree = Tree::new();
/// tree.set("id", Element::from_physical("id", PhysicalType::Int64, Repetition::Required)?)?;
///
/// let mut writer = FileWriter::try_new(vec![], tree, 100, WriteOptions::default())?;
/// writer.write([("id", ColumnData::required(Values::Int64(vec![1])))])?;
/// let size = writer.close()?;
/// assert_eq!(writer.into_inner().len() as u64, size);
/// # Ok(())
/// # }
/// ```
pub struct FileWriter<W: Write> {
    writer: W,
    schema: SchemaDescriptor,
    options: WriteOptions,
    row_group_rows: usize,

    state: State,
    // the position of the next byte written to `writer`
    offset: u64,
    footer: FileMetaData,

    // the current row group
    buffered: IndexMap<String, ColumnData>,
    buffered_rows: usize,
    buffered_bytes: usize,
    dictionaries: HashMap<String, Dictionary>,
}

impl<W: Write> FileWriter<W> {
    /// Returns a new [`FileWriter`] that flushes a row group every `row_group_rows` records.
    /// # Error
    /// Errors if the tree is not a valid schema (nothing is written in this case), if
    /// `row_group_rows` or the page size is zero, or if writing the leading magic fails.
    pub fn try_new(
        mut writer: W,
        mut tree: Tree,
        row_group_rows: usize,
        options: WriteOptions,
    ) -> Result<Self> {
        if row_group_rows == 0 {
            return Err(Error::InvalidParameter(
                "a row group must have at least one row".to_string(),
            ));
        }
        if options.page_size == 0 {
            return Err(Error::InvalidParameter(
                "the page size must be positive".to_string(),
            ));
        }
        let schema = tree.to_flat_schema()?;

        let offset = start_file(&mut writer)?;

        let footer = FileMetaData {
            version: 1,
            schema: schema.elements().to_vec(),
            num_rows: 0,
            row_groups: vec![],
            key_value_metadata: options.key_value_metadata.clone(),
            created_by: options.created_by.clone(),
            column_orders: None,
            encryption_algorithm: None,
            footer_signing_key_metadata: None,
        };

        Ok(Self {
            writer,
            schema,
            options,
            row_group_rows,
            state: State::Open,
            offset,
            footer,
            buffered: IndexMap::new(),
            buffered_rows: 0,
            buffered_bytes: 0,
            dictionaries: HashMap::new(),
        })
    }

    pub fn schema(&self) -> &SchemaDescriptor {
        &self.schema
    }

    pub fn options(&self) -> &WriteOptions {
        &self.options
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// The number of records not yet flushed.
    pub fn buffered_rows(&self) -> usize {
        self.buffered_rows
    }

    /// The metadata of the file so far.
    pub fn metadata(&self) -> &FileMetaData {
        &self.footer
    }

    fn check_state(&self) -> Result<()> {
        match self.state {
            State::Open => Ok(()),
            State::Flushing => Err(Error::InvalidState(
                "a previous row group failed to be written".to_string(),
            )),
            State::Closing => Err(Error::InvalidState(
                "the footer failed to be written".to_string(),
            )),
            State::Closed => Err(Error::InvalidState("the writer is closed".to_string())),
        }
    }

    /// Writes one record, given as the data of each of its leaf columns keyed by the
    /// column's path in the tree. Flushes a row group when the threshold is reached.
    /// # Error
    /// Errors if a column is not a leaf of the schema or its data does not fit the column.
    /// Nothing is buffered in this case.
    pub fn write<I, S>(&mut self, columns: I) -> Result<()>
    where
        I: IntoIterator<Item = (S, ColumnData)>,
        S: Into<String>,
    {
        self.check_state()?;

        let mut record: IndexMap<String, ColumnData> = IndexMap::new();
        for (name, data) in columns {
            let name = name.into();
            let descriptor = self
                .schema
                .column(&name)
                .ok_or_else(|| Error::UnknownColumn(name.clone()))?;
            data.check(descriptor)?;
            match record.get_mut(&name) {
                Some(existing) => existing.merge(data),
                None => {
                    record.insert(name, data);
                }
            }
        }

        for (name, data) in record {
            let positions = (0..data.len()).collect::<Vec<_>>();
            self.buffered_bytes += data.values().plain_size(&positions);
            match self.buffered.get_mut(&name) {
                Some(buffered) => buffered.merge(data),
                None => {
                    self.buffered.insert(name, data);
                }
            }
        }
        self.buffered_rows += 1;

        if self.buffered_rows >= self.row_group_rows
            || self.buffered_bytes >= self.options.row_group_size
        {
            self.flush()?;
        }
        Ok(())
    }

    /// Writes a [`Record`] of non-repeated leaves. A present value is written as defined; a
    /// [`Value::Null`] or missing value as null at the leaf.
    /// # Error
    /// Errors if a name is not a leaf, if a leaf is repeated, if a required leaf has no value
    /// or if a value does not match its leaf's type.
    pub fn write_record(&mut self, record: &Record) -> Result<()> {
        self.check_state()?;
        if let Some((name, _)) = record
            .iter()
            .find(|(name, _)| self.schema.column(name).is_none())
        {
            return Err(Error::UnknownColumn(name.to_string()));
        }

        let mut columns = Vec::with_capacity(self.schema.num_columns());
        for descriptor in self.schema.columns() {
            let path = descriptor.path_in_tree();
            let max_def_level = descriptor.max_def_level();
            let value = record.get(path).unwrap_or(&Value::Null);
            let data = match value.to_values() {
                Some(_) if descriptor.max_rep_level() > 0 => {
                    return Err(Error::InvalidParameter(format!(
                        "{} is repeated and cannot be written from a record",
                        path
                    )))
                }
                Some(values) => ColumnData::try_new(values, vec![max_def_level], vec![0])?,
                None if max_def_level == 0 => {
                    return Err(Error::InvalidParameter(format!(
                        "{} is required but has no value",
                        path
                    )))
                }
                None => ColumnData::try_new(
                    Values::placeholder(descriptor.physical_type()),
                    vec![max_def_level - 1],
                    vec![0],
                )?,
            };
            columns.push((path.to_string(), data));
        }
        self.write(columns)
    }

    /// Writes the buffered records as a row group. Does nothing when no record is buffered.
    fn flush(&mut self) -> Result<()> {
        if self.buffered_rows == 0 {
            return Ok(());
        }
        self.state = State::Flushing;

        let buffered = std::mem::take(&mut self.buffered);
        let mut columns = Vec::with_capacity(self.schema.num_columns());
        for descriptor in self.schema.columns() {
            let pages = match buffered.get(descriptor.path_in_tree()) {
                Some(data) => {
                    let dictionary = self
                        .dictionaries
                        .entry(descriptor.path_in_tree().to_string())
                        .or_default();
                    encode_column(descriptor, data, &self.options, dictionary)?
                        .into_iter()
                        .map(|page| compress(page, vec![], self.options.compression))
                        .collect::<Result<Vec<CompressedPage>>>()?
                }
                None => vec![],
            };
            columns.push((descriptor, pages));
        }

        let (row_group, bytes_written) = write_row_group(
            &mut self.writer,
            self.offset,
            columns.into_iter(),
            self.options.compression,
            self.buffered_rows,
        )?;
        debug!(
            rows = self.buffered_rows,
            columns = row_group.columns.len(),
            offset = self.offset,
            bytes = bytes_written,
            "flushed row group"
        );

        self.offset += bytes_written;
        self.footer.num_rows += row_group.num_rows;
        self.footer.row_groups.push(row_group);
        self.buffered_rows = 0;
        self.buffered_bytes = 0;
        self.dictionaries.clear();
        self.state = State::Open;
        Ok(())
    }

    /// Flushes the last row group and writes the footer. Returns the size of the file.
    /// # Error
    /// Errors on the first failure to write; the file must then be discarded.
    pub fn close(&mut self) -> Result<u64> {
        self.check_state()?;
        self.flush()?;

        self.state = State::Closing;
        self.offset += end_file(&mut self.writer, &self.footer)?;
        self.state = State::Closed;
        debug!(
            size = self.offset,
            row_groups = self.footer.row_groups.len(),
            rows = self.footer.num_rows,
            "closed file"
        );
        Ok(self.offset)
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}
