use crate::model::{Field, FieldCard, RecordModel, ScalarKind, Schema, SchemaError};

#[test]
fn identifier_field_is_guaranteed() {
    let schema = Schema::builder()
        .record(RecordModel::builder("note").field(Field::scalar("text", ScalarKind::Text)))
        .build()
        .expect("schema should build");

    let model = schema.record("note").expect("record type");
    assert_eq!(model.id_field, "id");
    assert_eq!(model.fields[0].name, "id");
    assert_eq!(model.fields[0].card, FieldCard::Scalar(ScalarKind::Uint));
}

#[test]
fn identifier_field_name_is_overridable() {
    let schema = Schema::builder()
        .record(
            RecordModel::builder("legacy")
                .id_field("pk")
                .field(Field::scalar("pk", ScalarKind::Uint))
                .field(Field::scalar("text", ScalarKind::Text)),
        )
        .build()
        .expect("schema should build");

    assert_eq!(schema.record("legacy").expect("record type").id_field, "pk");
}

#[test]
fn declared_identifier_must_be_unsigned() {
    let err = Schema::builder()
        .record(RecordModel::builder("note").field(Field::scalar("id", ScalarKind::Text)))
        .build()
        .expect_err("schema should fail");

    assert!(matches!(err, SchemaError::IdFieldNotUint { .. }));
}

#[test]
fn duplicate_names_are_rejected() {
    let err = Schema::builder()
        .record(
            RecordModel::builder("note")
                .field(Field::scalar("text", ScalarKind::Text))
                .field(Field::scalar("text", ScalarKind::Text)),
        )
        .build()
        .expect_err("schema should fail");
    assert!(matches!(err, SchemaError::DuplicateField { .. }));

    let err = Schema::builder()
        .record(RecordModel::builder("note"))
        .record(RecordModel::builder("note"))
        .build()
        .expect_err("schema should fail");
    assert!(matches!(err, SchemaError::DuplicateRecord { .. }));
}

#[test]
fn nested_target_must_resolve() {
    let err = Schema::builder()
        .record(RecordModel::builder("note").field(Field::nested("owner", "ghost")))
        .build()
        .expect_err("schema should fail");

    assert!(matches!(err, SchemaError::UnknownRecordType { .. }));
}

#[test]
fn dotted_source_must_end_in_the_field_name() {
    let err = Schema::builder()
        .record(
            RecordModel::builder("note")
                .field(Field::scalar("city", ScalarKind::Text).source("owner.town")),
        )
        .build()
        .expect_err("schema should fail");

    assert!(matches!(err, SchemaError::SourceLeafMismatch { .. }));
}

#[test]
fn dotted_source_traverses_nested_single_fields_only() {
    // 'tags' is a many-relation, not a nested-single hop
    let err = Schema::builder()
        .record(RecordModel::builder("tag").field(Field::scalar("label", ScalarKind::Text)))
        .record(
            RecordModel::builder("note")
                .field(Field::relation("tags", "tag"))
                .field(Field::scalar("label", ScalarKind::Text).source("tags.label")),
        )
        .build()
        .expect_err("schema should fail");

    assert!(matches!(err, SchemaError::SourceNotNested { .. }));
}

#[test]
fn dotted_source_segments_must_exist() {
    let err = Schema::builder()
        .record(
            RecordModel::builder("note")
                .field(Field::scalar("city", ScalarKind::Text).source("owner.city")),
        )
        .build()
        .expect_err("schema should fail");

    assert!(matches!(err, SchemaError::UnknownSourceField { .. }));
}

#[test]
fn source_depth_is_bounded() {
    let err = Schema::builder()
        .record(
            RecordModel::builder("note")
                .field(Field::scalar("x", ScalarKind::Text).source("a.b.c.d.e.f.g.h.x")),
        )
        .build()
        .expect_err("schema should fail");

    assert!(matches!(err, SchemaError::SourceDepthExceeded { .. }));
}

#[test]
fn empty_source_segments_are_rejected() {
    let err = Schema::builder()
        .record(
            RecordModel::builder("note")
                .field(Field::scalar("x", ScalarKind::Text).source("a..x")),
        )
        .build()
        .expect_err("schema should fail");

    assert!(matches!(err, SchemaError::EmptySourceSegment { .. }));
}
