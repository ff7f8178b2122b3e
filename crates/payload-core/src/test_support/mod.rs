use crate::{
    model::{Field, RecordModel, ScalarKind, Schema},
    store::MemoryStore,
    types::RecordId,
    value::{Payload, Value},
};

/// Fixture schema shared by core tests.
///
/// `author.city` is sourced through `profile.address.city`, giving the
/// dotted-path walk two intermediate hops. `article` carries one of
/// each plural capability.
pub(crate) fn schema() -> Schema {
    Schema::builder()
        .record(
            RecordModel::builder("address")
                .field(Field::scalar("city", ScalarKind::Text))
                .field(Field::scalar("street", ScalarKind::Text)),
        )
        .record(
            RecordModel::builder("profile")
                .field(Field::nested("address", "address"))
                .field(Field::scalar("bio", ScalarKind::Text)),
        )
        .record(
            RecordModel::builder("author")
                .field(Field::scalar("name", ScalarKind::Text).required())
                .field(Field::nested("profile", "profile"))
                .field(Field::scalar("city", ScalarKind::Text).source("profile.address.city")),
        )
        .record(
            RecordModel::builder("tag")
                .field(Field::scalar("label", ScalarKind::Text).required()),
        )
        .record(
            RecordModel::builder("comment")
                .field(Field::scalar("body", ScalarKind::Text).required()),
        )
        .record(
            RecordModel::builder("article")
                .field(Field::scalar("title", ScalarKind::Text).required())
                .field(Field::scalar("body", ScalarKind::Text))
                .field(Field::scalar("published_at", ScalarKind::Timestamp))
                .field(Field::scalar("reading_time", ScalarKind::Duration))
                .field(Field::nested("author", "author"))
                .field(Field::relation("tags", "tag"))
                .field(Field::nested_many("comments", "comment")),
        )
        .build()
        .expect("fixture schema should build")
}

/// Single text-field payload.
pub(crate) fn text_fields(pairs: &[(&str, &str)]) -> Payload {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), Value::Text((*v).to_string())))
        .collect()
}

/// Store with two articles (1, 2), an author chain for the dotted-path
/// tests, and a pair of tags.
pub(crate) fn seeded_store() -> MemoryStore {
    let mut store = MemoryStore::new();

    store.seed("address", RecordId::new(1), text_fields(&[("city", "basel"), ("street", "old")]));

    let mut profile = Payload::new();
    profile.insert("address".to_string(), Value::Ref(RecordId::new(1)));
    profile.insert("bio".to_string(), Value::Text("editor".to_string()));
    store.seed("profile", RecordId::new(1), profile);

    let mut author = text_fields(&[("name", "sam")]);
    author.insert("profile".to_string(), Value::Ref(RecordId::new(1)));
    store.seed("author", RecordId::new(1), author);

    store.seed("tag", RecordId::new(1), text_fields(&[("label", "rust")]));
    store.seed("tag", RecordId::new(2), text_fields(&[("label", "news")]));

    let mut first = text_fields(&[("title", "one"), ("body", "alpha")]);
    first.insert("author".to_string(), Value::Ref(RecordId::new(1)));
    store.seed("article", RecordId::new(1), first);
    store.seed(
        "article",
        RecordId::new(2),
        text_fields(&[("title", "two"), ("body", "beta")]),
    );

    store.clear_journal();
    store
}
