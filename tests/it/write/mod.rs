mod nested;

use parquet_format_safe::{CompressionCodec, Encoding, FileMetaData, PageType};

use parquet_writer::compression::Compression;
use parquet_writer::error::{Error, Result};
use parquet_writer::metadata::KeyValue;
use parquet_writer::record::{ColumnData, Record, Value, Values};
use parquet_writer::schema::types::{ConvertedType, PhysicalType};
use parquet_writer::schema::{Element, Repetition, Tree};
use parquet_writer::write::{DictionaryPolicy, FileWriter, State, WriteOptions};

use super::{read_footer, read_page_headers};

fn three_columns() -> Result<Tree> {
    let mut tree = Tree::new();
    tree.set(
        "one",
        Element::from_physical("one", PhysicalType::Int32, Repetition::Required)?,
    )?;
    tree.set(
        "two",
        Element::try_new(
            "two",
            Repetition::Required,
            Some(PhysicalType::ByteArray),
            Some(ConvertedType::Utf8),
        )?,
    )?;
    tree.set(
        "three",
        Element::from_physical("three", PhysicalType::Boolean, Repetition::Required)?,
    )?;
    Ok(tree)
}

fn row(one: i32, two: &str, three: bool) -> Vec<(&'static str, ColumnData)> {
    vec![
        ("one", ColumnData::required(Values::Int32(vec![one]))),
        (
            "two",
            ColumnData::required(Values::ByteArray(vec![two.as_bytes().to_vec()])),
        ),
        ("three", ColumnData::required(Values::Boolean(vec![three]))),
    ]
}

fn paths(metadata: &FileMetaData, row_group: usize) -> Vec<Vec<String>> {
    metadata.row_groups[row_group]
        .columns
        .iter()
        .map(|chunk| chunk.meta_data.as_ref().unwrap().path_in_schema.clone())
        .collect()
}

#[test]
fn single_record() -> Result<()> {
    let mut writer = FileWriter::try_new(vec![], three_columns()?, 100, WriteOptions::default())?;
    writer.write(row(100, "foo", true))?;
    let size = writer.close()?;

    let file = writer.into_inner();
    assert_eq!(file.len() as u64, size);

    let metadata = read_footer(&file);
    assert_eq!(metadata.version, 1);
    assert_eq!(metadata.num_rows, 1);
    assert_eq!(metadata.row_groups.len(), 1);

    let row_group = &metadata.row_groups[0];
    assert_eq!(row_group.num_rows, 1);
    assert_eq!(row_group.file_offset, Some(4));
    assert_eq!(
        paths(&metadata, 0),
        vec![
            vec!["one".to_string()],
            vec!["two".to_string()],
            vec!["three".to_string()]
        ]
    );

    // root and three leaves
    assert_eq!(metadata.schema.len(), 4);
    assert_eq!(metadata.schema[0].name, "schema");
    assert_eq!(metadata.schema[0].num_children, Some(3));

    // the chunks are contiguous, after the leading magic
    let mut offset = 4;
    for chunk in &row_group.columns {
        let column = chunk.meta_data.as_ref().unwrap();
        assert_eq!(column.codec, CompressionCodec::SNAPPY);
        assert_eq!(column.num_values, 1);
        assert_eq!(column.dictionary_page_offset, None);
        assert_eq!(column.data_page_offset, offset);
        offset += column.total_compressed_size;
    }
    Ok(())
}

#[test]
fn empty_file() -> Result<()> {
    let mut writer = FileWriter::try_new(vec![], three_columns()?, 10, WriteOptions::default())?;
    writer.close()?;

    let metadata = read_footer(&writer.into_inner());
    assert_eq!(metadata.num_rows, 0);
    assert!(metadata.row_groups.is_empty());
    assert_eq!(metadata.schema.len(), 4);
    Ok(())
}

#[test]
fn row_group_threshold() -> Result<()> {
    let mut writer = FileWriter::try_new(vec![], three_columns()?, 3, WriteOptions::default())?;
    for i in 0..7 {
        writer.write(row(i, "a", i % 2 == 0))?;
    }
    assert_eq!(writer.metadata().row_groups.len(), 2);
    assert_eq!(writer.buffered_rows(), 1);

    writer.close()?;
    let metadata = read_footer(&writer.into_inner());
    assert_eq!(
        metadata
            .row_groups
            .iter()
            .map(|row_group| row_group.num_rows)
            .collect::<Vec<_>>(),
        vec![3, 3, 1]
    );
    assert_eq!(metadata.num_rows, 7);

    // each row group starts where the previous one ends
    let mut offset = 4;
    for row_group in &metadata.row_groups {
        assert_eq!(row_group.file_offset, Some(offset));
        offset += row_group.total_byte_size;
    }
    Ok(())
}

#[test]
fn row_group_size() -> Result<()> {
    let options = WriteOptions {
        row_group_size: 10,
        ..Default::default()
    };
    let mut writer = FileWriter::try_new(vec![], three_columns()?, 100, options)?;
    // 4 + 7 + 1 bytes of plain-encoded values
    writer.write(row(1, "abc", true))?;
    assert_eq!(writer.buffered_rows(), 0);
    writer.close()?;

    let metadata = read_footer(&writer.into_inner());
    assert_eq!(metadata.row_groups.len(), 1);
    Ok(())
}

#[test]
fn unknown_column() -> Result<()> {
    let mut writer = FileWriter::try_new(vec![], three_columns()?, 10, WriteOptions::default())?;

    let mut columns = row(1, "a", true);
    columns.push(("four", ColumnData::required(Values::Int32(vec![1]))));
    let result = writer.write(columns);
    assert_eq!(result, Err(Error::UnknownColumn("four".to_string())));
    assert_eq!(writer.buffered_rows(), 0);
    assert_eq!(writer.state(), State::Open);

    writer.write(row(1, "a", true))?;
    writer.close()?;
    let metadata = read_footer(&writer.into_inner());
    assert_eq!(metadata.num_rows, 1);
    assert_eq!(metadata.row_groups[0].columns[0].meta_data.as_ref().unwrap().num_values, 1);
    Ok(())
}

#[test]
fn missing_columns_are_skipped() -> Result<()> {
    let mut writer = FileWriter::try_new(vec![], three_columns()?, 10, WriteOptions::default())?;
    writer.write([(
        "two",
        ColumnData::required(Values::ByteArray(vec![b"a".to_vec()])),
    )])?;
    writer.close()?;

    let metadata = read_footer(&writer.into_inner());
    assert_eq!(metadata.num_rows, 1);
    assert_eq!(paths(&metadata, 0), vec![vec!["two".to_string()]]);
    Ok(())
}

#[test]
fn dictionary_per_row_group() -> Result<()> {
    let options = WriteOptions {
        compression: Compression::Uncompressed,
        ..Default::default()
    };
    let mut writer = FileWriter::try_new(vec![], three_columns()?, 4, options)?;
    for (i, two) in ["a", "b", "a", "b", "c", "d", "c", "d"].iter().enumerate() {
        writer.write(row(i as i32, two, true))?;
    }
    writer.close()?;

    let file = writer.into_inner();
    let metadata = read_footer(&file);
    assert_eq!(metadata.row_groups.len(), 2);

    let expected: [&[u8]; 2] = [
        &[1, 0, 0, 0, b'a', 1, 0, 0, 0, b'b'],
        &[1, 0, 0, 0, b'c', 1, 0, 0, 0, b'd'],
    ];
    for (row_group, expected) in metadata.row_groups.iter().zip(expected) {
        let two = row_group.columns[1].meta_data.as_ref().unwrap();
        let headers = read_page_headers(&file, two);
        assert_eq!(headers.len(), 2);

        let (_, header) = &headers[0];
        assert_eq!(header.type_, PageType::DICTIONARY_PAGE);
        assert_eq!(header.dictionary_page_header.as_ref().unwrap().num_values, 2);

        // the dictionary page ends where the data page starts
        let end = two.data_page_offset as usize;
        let start = end - header.compressed_page_size as usize;
        assert_eq!(&file[start..end], expected);
    }
    Ok(())
}

#[test]
fn dictionary() -> Result<()> {
    let options = WriteOptions {
        compression: Compression::Uncompressed,
        ..Default::default()
    };
    let mut writer = FileWriter::try_new(vec![], three_columns()?, 10, options)?;
    for i in 0..10 {
        writer.write(row(i, if i % 2 == 0 { "a" } else { "b" }, true))?;
    }
    writer.close()?;

    let file = writer.into_inner();
    let metadata = read_footer(&file);
    assert_eq!(metadata.row_groups.len(), 1);
    let columns = &metadata.row_groups[0].columns;

    // 10 distinct values out of 10 are plain-encoded
    let one = columns[0].meta_data.as_ref().unwrap();
    assert_eq!(one.dictionary_page_offset, None);
    assert_eq!(one.encodings, vec![Encoding::PLAIN, Encoding::RLE]);

    let two = columns[1].meta_data.as_ref().unwrap();
    let dictionary_offset = two.dictionary_page_offset.unwrap();
    assert_eq!(dictionary_offset, 4 + one.total_compressed_size);
    assert!(two.data_page_offset > dictionary_offset);
    assert!(two.encodings.contains(&Encoding::PLAIN_DICTIONARY));
    assert!(two.encodings.contains(&Encoding::RLE));
    assert_eq!(two.num_values, 10);

    let headers = read_page_headers(&file, two);
    assert_eq!(headers.len(), 2);

    let (offset, header) = &headers[0];
    assert_eq!(*offset, dictionary_offset);
    assert_eq!(header.type_, PageType::DICTIONARY_PAGE);
    let dictionary = header.dictionary_page_header.as_ref().unwrap();
    assert_eq!(dictionary.num_values, 2);
    assert_eq!(dictionary.encoding, Encoding::PLAIN_DICTIONARY);
    // two values of 4 bytes of length and 1 byte each
    assert_eq!(header.uncompressed_page_size, 10);

    let (offset, header) = &headers[1];
    assert_eq!(*offset, two.data_page_offset);
    assert_eq!(header.type_, PageType::DATA_PAGE);
    let data = header.data_page_header.as_ref().unwrap();
    assert_eq!(data.num_values, 10);
    assert_eq!(data.encoding, Encoding::PLAIN_DICTIONARY);

    // booleans are never dictionary-encoded
    let three = columns[2].meta_data.as_ref().unwrap();
    assert_eq!(three.dictionary_page_offset, None);
    Ok(())
}

#[test]
fn page_size() -> Result<()> {
    let mut tree = Tree::new();
    tree.set(
        "a",
        Element::from_physical("a", PhysicalType::Int64, Repetition::Required)?,
    )?;
    let options = WriteOptions {
        compression: Compression::Uncompressed,
        page_size: 16,
        dictionary: DictionaryPolicy::Never,
        ..Default::default()
    };
    let mut writer = FileWriter::try_new(vec![], tree, 10, options)?;
    for i in 0..5 {
        writer.write([("a", ColumnData::required(Values::Int64(vec![i])))])?;
    }
    writer.close()?;

    let file = writer.into_inner();
    let metadata = read_footer(&file);
    let column = metadata.row_groups[0].columns[0].meta_data.as_ref().unwrap();
    let headers = read_page_headers(&file, column);
    assert_eq!(
        headers
            .iter()
            .map(|(_, header)| header.data_page_header.as_ref().unwrap().num_values)
            .collect::<Vec<_>>(),
        vec![2, 2, 1]
    );
    assert!(headers
        .iter()
        .all(|(_, header)| header.uncompressed_page_size <= 16));
    Ok(())
}

#[test]
fn records() -> Result<()> {
    let mut tree = Tree::new();
    tree.set(
        "id",
        Element::from_physical("id", PhysicalType::Int64, Repetition::Required)?,
    )?;
    tree.set("user", Element::group("user", Repetition::Optional, None))?;
    tree.set(
        "user.name",
        Element::try_new(
            "name",
            Repetition::Optional,
            Some(PhysicalType::ByteArray),
            Some(ConvertedType::Utf8),
        )?,
    )?;
    let options = WriteOptions {
        created_by: Some("writer tests".to_string()),
        key_value_metadata: Some(vec![KeyValue {
            key: "origin".to_string(),
            value: Some("tests".to_string()),
        }]),
        ..Default::default()
    };
    let mut writer = FileWriter::try_new(vec![], tree, 10, options)?;

    let mut record = Record::new();
    record.set("id", 1i64);
    record.set("user.name", "alice");
    writer.write_record(&record)?;

    let record = [("id", Value::Int64(2))].into_iter().collect::<Record>();
    writer.write_record(&record)?;

    let record = [("id", Value::Int64(3)), ("user", Value::Null)]
        .into_iter()
        .collect::<Record>();
    assert_eq!(
        writer.write_record(&record),
        Err(Error::UnknownColumn("user".to_string()))
    );
    writer.close()?;

    let metadata = read_footer(&writer.into_inner());
    assert_eq!(metadata.num_rows, 2);
    assert_eq!(metadata.created_by.as_deref(), Some("writer tests"));
    assert_eq!(metadata.key_value_metadata.as_ref().unwrap()[0].key, "origin");

    let name = metadata.row_groups[0].columns[1].meta_data.as_ref().unwrap();
    assert_eq!(name.path_in_schema, vec!["user".to_string(), "name".to_string()]);
    assert_eq!(name.num_values, 2);
    Ok(())
}

#[cfg(feature = "gzip")]
#[test]
fn gzip() -> Result<()> {
    let options = WriteOptions {
        compression: Compression::Gzip,
        ..Default::default()
    };
    let mut writer = FileWriter::try_new(vec![], three_columns()?, 10, options)?;
    writer.write(row(1, "a", true))?;
    writer.close()?;

    let metadata = read_footer(&writer.into_inner());
    assert!(metadata.row_groups[0]
        .columns
        .iter()
        .all(|chunk| chunk.meta_data.as_ref().unwrap().codec == CompressionCodec::GZIP));
    Ok(())
}
