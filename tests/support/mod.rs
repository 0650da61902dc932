// tests/support/mod.rs
// Shared fixtures for the integration suites. Each test binary uses its own
// subset, so dead_code is allowed at module level to keep output clean.
#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use regex::Regex;
use uuid::Uuid;

use slugging_core::infrastructure::SharedHistory;
use slugging_core::{
    Clock, InMemorySlugStore, KeyAssignable, KeyKind, RecordKey, Slug, SlugAssigner, SlugConfig,
    Sluggable, SourceField,
};

/* -------------------------------- integer-keyed fixtures -------------------------------- */

#[derive(Debug, Clone, Default)]
pub struct Widget {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub other: Option<String>,
    pub more: Option<String>,
    pub slug: Option<Slug>,
}

impl Widget {
    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_owned()),
            ..Self::default()
        }
    }
}

impl Sluggable for Widget {
    fn entity_type() -> &'static str {
        "widget"
    }

    fn primary_key(&self) -> Option<RecordKey> {
        self.id.map(RecordKey::Int)
    }

    fn slug(&self) -> Option<&Slug> {
        self.slug.as_ref()
    }
}

impl KeyAssignable for Widget {
    fn assign_primary_key(&mut self, key: RecordKey) {
        match key {
            RecordKey::Int(value) => self.id = Some(value),
            RecordKey::Uuid(_) => panic!("widget keys are integers"),
        }
    }
}

/// Second integer-keyed type, for owner-type scoping tests against a shared
/// history ledger.
#[derive(Debug, Clone, Default)]
pub struct Gadget {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub slug: Option<Slug>,
}

impl Gadget {
    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_owned()),
            ..Self::default()
        }
    }
}

impl Sluggable for Gadget {
    fn entity_type() -> &'static str {
        "gadget"
    }

    fn primary_key(&self) -> Option<RecordKey> {
        self.id.map(RecordKey::Int)
    }

    fn slug(&self) -> Option<&Slug> {
        self.slug.as_ref()
    }
}

impl KeyAssignable for Gadget {
    fn assign_primary_key(&mut self, key: RecordKey) {
        match key {
            RecordKey::Int(value) => self.id = Some(value),
            RecordKey::Uuid(_) => panic!("gadget keys are integers"),
        }
    }
}

/* -------------------------------- uuid-keyed fixture -------------------------------- */

#[derive(Debug, Clone, Default)]
pub struct Document {
    pub id: Option<Uuid>,
    pub title: Option<String>,
    pub slug: Option<Slug>,
}

impl Document {
    pub fn titled(title: &str) -> Self {
        Self {
            title: Some(title.to_owned()),
            ..Self::default()
        }
    }
}

impl Sluggable for Document {
    fn entity_type() -> &'static str {
        "document"
    }

    fn primary_key(&self) -> Option<RecordKey> {
        self.id.map(RecordKey::Uuid)
    }

    fn slug(&self) -> Option<&Slug> {
        self.slug.as_ref()
    }
}

impl KeyAssignable for Document {
    fn assign_primary_key(&mut self, key: RecordKey) {
        match key {
            RecordKey::Uuid(value) => self.id = Some(value),
            RecordKey::Int(_) => panic!("document keys are uuids"),
        }
    }
}

/* -------------------------------- configs and stores -------------------------------- */

pub fn widget_name_field() -> SourceField<Widget> {
    SourceField::new("name", |widget: &Widget| widget.name.clone())
}

pub fn widget_other_field() -> SourceField<Widget> {
    SourceField::new("other", |widget: &Widget| widget.other.clone())
}

pub fn widget_more_field() -> SourceField<Widget> {
    SourceField::new("more", |widget: &Widget| widget.more.clone())
}

pub fn widget_name_config() -> SlugConfig<Widget> {
    SlugConfig::builder().source(widget_name_field()).build()
}

pub fn gadget_name_config() -> SlugConfig<Gadget> {
    SlugConfig::builder()
        .source(SourceField::new("name", |gadget: &Gadget| {
            gadget.name.clone()
        }))
        .build()
}

pub fn document_title_config() -> SlugConfig<Document> {
    SlugConfig::builder()
        .source(SourceField::new("title", |document: &Document| {
            document.title.clone()
        }))
        .build()
}

pub fn widget_store() -> Arc<InMemorySlugStore<Widget>> {
    Arc::new(InMemorySlugStore::new(KeyKind::Int))
}

pub fn widget_store_sharing(history: SharedHistory) -> Arc<InMemorySlugStore<Widget>> {
    Arc::new(InMemorySlugStore::with_shared_history(KeyKind::Int, history))
}

pub fn gadget_store_sharing(history: SharedHistory) -> Arc<InMemorySlugStore<Gadget>> {
    Arc::new(InMemorySlugStore::with_shared_history(KeyKind::Int, history))
}

pub fn document_store() -> Arc<InMemorySlugStore<Document>> {
    Arc::new(InMemorySlugStore::new(KeyKind::Uuid))
}

/* -------------------------------- clock -------------------------------- */

pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    pub fn default_instant() -> Self {
        Self(Utc.with_ymd_and_hms(2024, 5, 17, 12, 0, 0).unwrap())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/* -------------------------------- create flows -------------------------------- */

/// Full creation protocol: assign, apply the slug, persist, then commit the
/// pending history write with the key the store handed out.
pub async fn create_widget(
    store: &Arc<InMemorySlugStore<Widget>>,
    assigner: &SlugAssigner<Widget>,
    clock: &dyn Clock,
    mut widget: Widget,
) -> Widget {
    let assignment = assigner.assign(&widget).await.expect("assign");
    widget.slug = Some(assignment.slug.clone());
    let created = store.insert(widget).expect("insert");
    if let Some(pending) = assignment.pending_history {
        pending
            .commit(store.as_ref(), created.primary_key().expect("key"), clock)
            .await
            .expect("history commit");
    }
    created
}

pub async fn create_gadget(
    store: &Arc<InMemorySlugStore<Gadget>>,
    assigner: &SlugAssigner<Gadget>,
    clock: &dyn Clock,
    mut gadget: Gadget,
) -> Gadget {
    let assignment = assigner.assign(&gadget).await.expect("assign");
    gadget.slug = Some(assignment.slug.clone());
    let created = store.insert(gadget).expect("insert");
    if let Some(pending) = assignment.pending_history {
        pending
            .commit(store.as_ref(), created.primary_key().expect("key"), clock)
            .await
            .expect("history commit");
    }
    created
}

pub async fn create_document(
    store: &Arc<InMemorySlugStore<Document>>,
    assigner: &SlugAssigner<Document>,
    clock: &dyn Clock,
    mut document: Document,
) -> Document {
    let assignment = assigner.assign(&document).await.expect("assign");
    document.slug = Some(assignment.slug.clone());
    let created = store.insert(document).expect("insert");
    if let Some(pending) = assignment.pending_history {
        pending
            .commit(store.as_ref(), created.primary_key().expect("key"), clock)
            .await
            .expect("history commit");
    }
    created
}

/* -------------------------------- assertions -------------------------------- */

pub fn assert_uuid_suffixed(slug: &Slug, base: &str) {
    let pattern = Regex::new(&format!(
        "^{base}-[0-9a-f]{{8}}-[0-9a-f]{{4}}-[0-9a-f]{{4}}-[0-9a-f]{{4}}-[0-9a-f]{{12}}$"
    ))
    .unwrap();
    assert!(
        pattern.is_match(slug.as_str()),
        "slug `{slug}` is not `{base}` plus a uuid suffix"
    );
}

pub fn assert_bare_uuid(slug: &Slug) {
    let pattern =
        Regex::new("^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$").unwrap();
    assert!(
        pattern.is_match(slug.as_str()),
        "slug `{slug}` is not a bare uuid"
    );
}
