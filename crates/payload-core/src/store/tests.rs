use crate::{
    store::{Filter, MemoryStore, Record, RecordStore, StoreError, StoreEvent},
    test_support::text_fields,
    types::RecordId,
    value::{Payload, Value},
};

#[test]
fn create_assigns_monotonic_ids() {
    let mut store = MemoryStore::new();

    let first = store
        .create("note", text_fields(&[("text", "a")]))
        .expect("create");
    let second = store
        .create("note", text_fields(&[("text", "b")]))
        .expect("create");

    assert_eq!(first.id(), RecordId::new(1));
    assert_eq!(second.id(), RecordId::new(2));
    assert_eq!(store.count("note"), 2);
}

#[test]
fn seeding_advances_id_assignment() {
    let mut store = MemoryStore::new();
    store.seed("note", RecordId::new(9), text_fields(&[("text", "x")]));

    let created = store.create("note", Payload::new()).expect("create");
    assert_eq!(created.id(), RecordId::new(10));
}

#[test]
fn query_returns_store_order() {
    let mut store = MemoryStore::new();
    for text in ["a", "b", "c"] {
        store
            .create("note", text_fields(&[("text", text)]))
            .expect("create");
    }

    // filter order does not leak into result order
    let filter = Filter::id_in([RecordId::new(3), RecordId::new(1)]);
    let records = store.query("note", &filter).expect("query");

    let ids: Vec<RecordId> = records.iter().map(Record::id).collect();
    assert_eq!(ids, vec![RecordId::new(1), RecordId::new(3)]);
}

#[test]
fn query_eq_filter() {
    let mut store = MemoryStore::new();
    store
        .create("note", text_fields(&[("text", "keep")]))
        .expect("create");
    store
        .create("note", text_fields(&[("text", "drop")]))
        .expect("create");

    let records = store
        .query("note", &Filter::eq("text", Value::Text("keep".to_string())))
        .expect("query");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id(), RecordId::new(1));
}

#[test]
fn query_unknown_kind_is_empty() {
    let store = MemoryStore::new();
    assert!(store.query("ghost", &Filter::All).expect("query").is_empty());
}

#[test]
fn get_missing_record_is_not_found() {
    let store = MemoryStore::new();
    let err = store.get("note", RecordId::new(1)).expect_err("missing");

    assert_eq!(err, StoreError::not_found("note", RecordId::new(1)));
}

#[test]
fn save_persists_field_changes() {
    let mut store = MemoryStore::new();
    let mut record = store
        .create("note", text_fields(&[("text", "old")]))
        .expect("create");

    record.set("text", Value::Text("new".to_string()));
    store.save(&record).expect("save");

    let reloaded = store.get("note", record.id()).expect("get");
    assert_eq!(reloaded.get("text"), Some(&Value::Text("new".to_string())));
}

#[test]
fn relate_replaces_the_related_set() {
    let mut store = MemoryStore::new();
    let record = store.create("note", Payload::new()).expect("create");

    store
        .relate("note", record.id(), "tags", &[RecordId::new(4)])
        .expect("relate");

    let reloaded = store.get("note", record.id()).expect("get");
    assert_eq!(
        reloaded.get("tags"),
        Some(&Value::List(vec![Value::Ref(RecordId::new(4))]))
    );

    let err = store
        .relate("note", RecordId::new(99), "tags", &[])
        .expect_err("missing");
    assert!(matches!(err, StoreError::NotFound { .. }));
}

#[test]
fn journal_records_write_sequencing() {
    let mut store = MemoryStore::new();
    let record = store.create("note", Payload::new()).expect("create");
    store
        .relate("note", record.id(), "tags", &[RecordId::new(1)])
        .expect("relate");
    store.save(&record).expect("save");

    assert_eq!(
        store.journal(),
        vec![
            StoreEvent::Created {
                kind: "note".to_string(),
                id: record.id()
            },
            StoreEvent::Related {
                kind: "note".to_string(),
                id: record.id(),
                field: "tags".to_string()
            },
            StoreEvent::Saved {
                kind: "note".to_string(),
                id: record.id()
            },
        ]
    );
}
