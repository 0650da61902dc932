use crate::domain::errors::SluggingResult;
use crate::domain::history::entity::HistoryEntry;
use crate::domain::slug::value_objects::{KeyKind, RecordKey};
use async_trait::async_trait;

/// Which set of existing slugs a candidate is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniquenessScope<'a> {
    /// The slug column of the entity type's own table.
    LiveTable,
    /// Every ledger entry recorded for `owner_type`, current or retired.
    History { owner_type: &'a str },
}

/// Persistence collaborator for one sluggable entity type. The core never
/// writes entity rows itself; it only probes existence, loads records, and
/// appends ledger entries through this trait.
#[async_trait]
pub trait SlugStore<E>: Send + Sync {
    /// Schema introspection, evaluated once per resolver dispatch. Adapters
    /// report schemas keyed by anything other than integers or UUIDs as a
    /// `Configuration` error.
    fn primary_key_kind(&self) -> SluggingResult<KeyKind>;

    /// Is `slug` currently held within `scope` by a record other than
    /// `excluding`? `excluding` is the probing entity's own key, present only
    /// once that key is known.
    async fn slug_exists(
        &self,
        scope: UniquenessScope<'_>,
        slug: &str,
        excluding: Option<&RecordKey>,
    ) -> SluggingResult<bool>;

    async fn find_by_key(&self, key: &RecordKey) -> SluggingResult<Option<E>>;

    async fn find_by_slug(&self, slug: &str) -> SluggingResult<Option<E>>;

    /// History-ledger indirection: map a slug (current or retired) to the key
    /// of the record that owns it.
    async fn resolve_owner_via_history(
        &self,
        owner_type: &str,
        slug: &str,
    ) -> SluggingResult<Option<RecordKey>>;

    /// Append one used-slug fact. Only callable after the owning record's own
    /// write has committed, since integer keys do not exist before that.
    async fn append_history_entry(&self, entry: HistoryEntry) -> SluggingResult<()>;
}
