use parquet_format_safe::{ConvertedType as ParquetConvertedType, FieldRepetitionType};

use parquet_writer::compression::Compression;
use parquet_writer::error::{Error, Result};
use parquet_writer::record::{ColumnData, Values};
use parquet_writer::schema::types::{ConvertedType, PhysicalType};
use parquet_writer::schema::{Element, Repetition, Tree};
use parquet_writer::write::{FileWriter, WriteOptions};

use super::super::{read_footer, read_page_headers};

fn names() -> Result<Tree> {
    let mut tree = Tree::new();
    tree.set(
        "names",
        Element::group("names", Repetition::Optional, Some(ConvertedType::List)),
    )?;
    tree.set("names.list", Element::group("list", Repetition::Repeated, None))?;
    tree.set(
        "names.list.element",
        Element::try_new(
            "element",
            Repetition::Required,
            Some(PhysicalType::ByteArray),
            Some(ConvertedType::Utf8),
        )?,
    )?;
    Ok(tree)
}

fn strings(values: &[&str]) -> Values {
    Values::ByteArray(values.iter().map(|x| x.as_bytes().to_vec()).collect())
}

#[test]
fn list() -> Result<()> {
    let options = WriteOptions {
        compression: Compression::Uncompressed,
        ..Default::default()
    };
    let mut writer = FileWriter::try_new(vec![], names()?, 10, options)?;

    let descriptor = writer.schema().column("names.list.element").unwrap();
    assert_eq!(descriptor.max_def_level(), 2);
    assert_eq!(descriptor.max_rep_level(), 1);

    // ["a", "b", "c"]
    let data = ColumnData::try_new(strings(&["a", "b", "c"]), vec![2, 2, 2], vec![0, 1, 1])?;
    writer.write([("names.list.element", data)])?;
    // []
    let data = ColumnData::try_new(strings(&[""]), vec![1], vec![0])?;
    writer.write([("names.list.element", data)])?;
    // null
    let data = ColumnData::try_new(strings(&[""]), vec![0], vec![0])?;
    writer.write([("names.list.element", data)])?;
    writer.close()?;

    let file = writer.into_inner();
    let metadata = read_footer(&file);
    assert_eq!(metadata.num_rows, 3);

    let schema = &metadata.schema;
    assert_eq!(
        schema.iter().map(|e| e.name.as_str()).collect::<Vec<_>>(),
        vec!["schema", "names", "list", "element"]
    );
    assert_eq!(schema[1].converted_type, Some(ParquetConvertedType::LIST));
    assert_eq!(schema[1].num_children, Some(1));
    assert_eq!(schema[2].repetition_type, Some(FieldRepetitionType::REPEATED));
    assert_eq!(schema[3].converted_type, Some(ParquetConvertedType::UTF8));
    assert_eq!(schema[3].num_children, None);

    let column = metadata.row_groups[0].columns[0].meta_data.as_ref().unwrap();
    assert_eq!(
        column.path_in_schema,
        vec!["names".to_string(), "list".to_string(), "element".to_string()]
    );
    assert_eq!(column.num_values, 5);

    let headers = read_page_headers(&file, column);
    let (_, header) = headers.last().unwrap();
    assert_eq!(header.data_page_header.as_ref().unwrap().num_values, 5);
    Ok(())
}

#[test]
fn levels_out_of_range() -> Result<()> {
    let mut writer = FileWriter::try_new(vec![], names()?, 10, WriteOptions::default())?;

    let data = ColumnData::try_new(strings(&["a"]), vec![3], vec![0])?;
    let result = writer.write([("names.list.element", data)]);
    assert!(matches!(result, Err(Error::InvalidParameter(_))));

    let data = ColumnData::try_new(strings(&["a"]), vec![2], vec![2])?;
    let result = writer.write([("names.list.element", data)]);
    assert!(matches!(result, Err(Error::InvalidParameter(_))));

    // a record cannot start in the middle of a list
    let data = ColumnData::try_new(strings(&["a", "b"]), vec![2, 2], vec![1, 0])?;
    let result = writer.write([("names.list.element", data)]);
    assert!(matches!(result, Err(Error::InvalidParameter(_))));

    assert!(matches!(
        writer.write([("names.list", ColumnData::required(strings(&["a"])))]),
        Err(Error::UnknownColumn(_))
    ));
    assert_eq!(writer.buffered_rows(), 0);
    Ok(())
}

#[test]
fn map() -> Result<()> {
    let mut tree = Tree::new();
    tree.set(
        "counts",
        Element::group("counts", Repetition::Repeated, Some(ConvertedType::Map)),
    )?;
    tree.set(
        "counts.key",
        Element::try_new(
            "key",
            Repetition::Required,
            Some(PhysicalType::ByteArray),
            Some(ConvertedType::Utf8),
        )?,
    )?;
    tree.set(
        "counts.value",
        Element::from_physical("value", PhysicalType::Int64, Repetition::Optional)?,
    )?;
    let mut writer = FileWriter::try_new(vec![], tree, 10, WriteOptions::default())?;

    // {"a": 1, "b": null}
    writer.write([
        (
            "counts.key",
            ColumnData::try_new(strings(&["a", "b"]), vec![1, 1], vec![0, 1])?,
        ),
        (
            "counts.value",
            ColumnData::try_new(Values::Int64(vec![1, 0]), vec![2, 1], vec![0, 1])?,
        ),
    ])?;
    writer.close()?;

    let metadata = read_footer(&writer.into_inner());
    assert_eq!(metadata.num_rows, 1);
    assert_eq!(metadata.schema[1].converted_type, Some(ParquetConvertedType::MAP));
    assert_eq!(metadata.schema[1].num_children, Some(2));
    let columns = &metadata.row_groups[0].columns;
    assert_eq!(columns.len(), 2);
    assert!(columns
        .iter()
        .all(|chunk| chunk.meta_data.as_ref().unwrap().num_values == 2));
    Ok(())
}

#[test]
fn invalid_list() -> Result<()> {
    let mut tree = names()?;
    tree.delete("names.list");
    tree.set(
        "names.items",
        Element::from_physical("items", PhysicalType::Int32, Repetition::Repeated)?,
    )?;

    let mut buffer = vec![];
    let result = FileWriter::try_new(&mut buffer, tree, 10, WriteOptions::default());
    assert!(matches!(result, Err(Error::Schema(_))));
    assert!(buffer.is_empty());
    Ok(())
}
