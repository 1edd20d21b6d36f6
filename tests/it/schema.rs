use parquet_format_safe::{FieldRepetitionType, Type};

use parquet_writer::error::{Error, Result};
use parquet_writer::schema::types::{ConvertedType, PhysicalType};
use parquet_writer::schema::{Element, Repetition, Tree};

fn leaf(name: &str, physical_type: PhysicalType, repetition: Repetition) -> Element {
    Element::from_physical(name, physical_type, repetition).unwrap()
}

#[test]
fn flatten() -> Result<()> {
    let mut tree = Tree::new();
    tree.set("id", leaf("id", PhysicalType::Int64, Repetition::Required))?;
    tree.set("address", Element::group("address", Repetition::Optional, None))?;
    tree.set(
        "address.zip",
        leaf("zip", PhysicalType::FixedLenByteArray(5), Repetition::Required),
    )?;
    tree.set(
        "address.amount",
        Element::try_new(
            "amount",
            Repetition::Optional,
            Some(PhysicalType::Int32),
            Some(ConvertedType::Decimal(9, 2)),
        )?
        .with_field_id(7),
    )?;

    let schema = tree.to_flat_schema()?;
    let elements = schema.elements();
    assert_eq!(elements.len(), 5);
    assert_eq!(elements[0].num_children, Some(2));

    let zip = &elements[3];
    assert_eq!(zip.name, "zip");
    assert_eq!(zip.type_, Some(Type::FIXED_LEN_BYTE_ARRAY));
    assert_eq!(zip.type_length, Some(5));
    assert_eq!(zip.repetition_type, Some(FieldRepetitionType::REQUIRED));

    let amount = &elements[4];
    assert_eq!(amount.precision, Some(9));
    assert_eq!(amount.scale, Some(2));
    assert_eq!(amount.field_id, Some(7));

    let amount = schema.column("address.amount").unwrap();
    assert_eq!(amount.max_def_level(), 2);
    assert_eq!(amount.max_rep_level(), 0);
    assert_eq!(amount.path_in_schema(), &["address", "amount"]);
    Ok(())
}

#[test]
fn edits() -> Result<()> {
    let mut tree = Tree::new();
    tree.set("a", leaf("a", PhysicalType::Int32, Repetition::Required))?;
    tree.set("b", leaf("b", PhysicalType::Int32, Repetition::Required))?;

    // replacing keeps the position
    tree.set("a", leaf("a", PhysicalType::Double, Repetition::Optional))?;
    assert_eq!(
        tree.iter().map(|(key, _)| key).collect::<Vec<_>>(),
        vec!["a", "b"]
    );
    assert_eq!(
        tree.get("a").and_then(|a| a.physical_type()),
        Some(&PhysicalType::Double)
    );

    assert!(matches!(
        tree.set("c.d", leaf("d", PhysicalType::Int32, Repetition::Required)),
        Err(Error::Path(_))
    ));
    assert!(matches!(
        tree.set("a.d", leaf("d", PhysicalType::Int32, Repetition::Required)),
        Err(Error::Path(_))
    ));

    assert!(tree.delete("a").is_some());
    assert!(tree.delete("a").is_none());
    assert_eq!(tree.len(), 1);
    Ok(())
}

#[test]
fn display() -> Result<()> {
    let mut tree = Tree::new();
    tree.set("a", Element::group("a", Repetition::Optional, None))?;
    tree.set("a.b", leaf("b", PhysicalType::Boolean, Repetition::Required))?;
    assert_eq!(tree.to_string(), "{a: a Optional {b: b Required Boolean}}");
    Ok(())
}
