// src/infrastructure/repositories/memory.rs
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::{SluggingError, SluggingResult};
use crate::domain::history::entity::HistoryEntry;
use crate::domain::slug::entity::Sluggable;
use crate::domain::slug::repository::{SlugStore, UniquenessScope};
use crate::domain::slug::value_objects::{KeyKind, RecordKey};

/// Entities the in-memory store can persist: it hands out keys at insert
/// time, the way a database sequence or uuid default would.
pub trait KeyAssignable: Sluggable {
    fn assign_primary_key(&mut self, key: RecordKey);
}

/// Ledger storage shared between stores, so several entity types can append
/// to one history table the way they would in a real database.
pub type SharedHistory = Arc<Mutex<Vec<HistoryEntry>>>;

/// Reference `SlugStore` adapter backed by process memory. Used by the test
/// suites and by embedders that want slugging without a database. Enforces a
/// unique constraint on the slug column at write time, which makes it a
/// faithful stand-in for the final-arbiter role a database plays.
pub struct InMemorySlugStore<E> {
    key_kind: KeyKind,
    next_id: AtomicI64,
    rows: Mutex<HashMap<RecordKey, E>>,
    history: SharedHistory,
}

impl<E: KeyAssignable + Clone> InMemorySlugStore<E> {
    #[must_use]
    pub fn new(key_kind: KeyKind) -> Self {
        Self::with_shared_history(key_kind, SharedHistory::default())
    }

    #[must_use]
    pub fn with_shared_history(key_kind: KeyKind, history: SharedHistory) -> Self {
        Self {
            key_kind,
            next_id: AtomicI64::new(1),
            rows: Mutex::new(HashMap::new()),
            history,
        }
    }

    #[must_use]
    pub fn history_handle(&self) -> SharedHistory {
        Arc::clone(&self.history)
    }

    /// Insert a record, assigning a key when the caller has not provided one.
    pub fn insert(&self, mut entity: E) -> SluggingResult<E> {
        let key = match entity.primary_key() {
            Some(key) => {
                if key.kind() != self.key_kind {
                    return Err(SluggingError::Configuration(format!(
                        "record key {key} does not match the store's key kind"
                    )));
                }
                if let RecordKey::Int(value) = key {
                    self.next_id.fetch_max(value + 1, Ordering::SeqCst);
                }
                key
            }
            None => match self.key_kind {
                KeyKind::Int => RecordKey::Int(self.next_id.fetch_add(1, Ordering::SeqCst)),
                KeyKind::Uuid => RecordKey::Uuid(Uuid::new_v4()),
            },
        };
        entity.assign_primary_key(key);

        let mut rows = self.rows()?;
        if rows.contains_key(&key) {
            return Err(SluggingError::Conflict(format!(
                "record with key {key} already exists"
            )));
        }
        Self::check_slug_constraint(&rows, &entity, key)?;
        rows.insert(key, entity.clone());
        Ok(entity)
    }

    /// Replace a stored record in place, keeping the unique slug constraint.
    pub fn update(&self, entity: E) -> SluggingResult<E> {
        let key = entity.primary_key().ok_or_else(|| {
            SluggingError::Configuration("cannot update a record without a primary key".into())
        })?;
        let mut rows = self.rows()?;
        if !rows.contains_key(&key) {
            return Err(SluggingError::NotFound(format!(
                "no record with key {key}"
            )));
        }
        Self::check_slug_constraint(&rows, &entity, key)?;
        rows.insert(key, entity.clone());
        Ok(entity)
    }

    fn check_slug_constraint(
        rows: &HashMap<RecordKey, E>,
        entity: &E,
        key: RecordKey,
    ) -> SluggingResult<()> {
        if let Some(slug) = entity.slug() {
            let held_elsewhere = rows
                .iter()
                .any(|(other, row)| *other != key && row.slug() == Some(slug));
            if held_elsewhere {
                return Err(SluggingError::Conflict(format!(
                    "slug `{slug}` already exists"
                )));
            }
        }
        Ok(())
    }

    fn rows(&self) -> SluggingResult<MutexGuard<'_, HashMap<RecordKey, E>>> {
        self.rows
            .lock()
            .map_err(|_| SluggingError::Persistence("row store mutex poisoned".into()))
    }

    fn entries(&self) -> SluggingResult<MutexGuard<'_, Vec<HistoryEntry>>> {
        self.history
            .lock()
            .map_err(|_| SluggingError::Persistence("history ledger mutex poisoned".into()))
    }
}

#[async_trait]
impl<E> SlugStore<E> for InMemorySlugStore<E>
where
    E: KeyAssignable + Clone + 'static,
{
    fn primary_key_kind(&self) -> SluggingResult<KeyKind> {
        Ok(self.key_kind)
    }

    async fn slug_exists(
        &self,
        scope: UniquenessScope<'_>,
        slug: &str,
        excluding: Option<&RecordKey>,
    ) -> SluggingResult<bool> {
        match scope {
            UniquenessScope::LiveTable => {
                let rows = self.rows()?;
                Ok(rows.iter().any(|(key, row)| {
                    row.slug().is_some_and(|held| held.as_str() == slug)
                        && excluding.is_none_or(|own| own != key)
                }))
            }
            UniquenessScope::History { owner_type } => {
                let entries = self.entries()?;
                Ok(entries.iter().any(|entry| {
                    entry.owner_type == owner_type
                        && entry.slug.as_str() == slug
                        && excluding.is_none_or(|own| *own != entry.owner_id)
                }))
            }
        }
    }

    async fn find_by_key(&self, key: &RecordKey) -> SluggingResult<Option<E>> {
        Ok(self.rows()?.get(key).cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> SluggingResult<Option<E>> {
        let rows = self.rows()?;
        Ok(rows
            .values()
            .find(|row| row.slug().is_some_and(|held| held.as_str() == slug))
            .cloned())
    }

    async fn resolve_owner_via_history(
        &self,
        owner_type: &str,
        slug: &str,
    ) -> SluggingResult<Option<RecordKey>> {
        let entries = self.entries()?;
        Ok(entries
            .iter()
            .find(|entry| entry.owner_type == owner_type && entry.slug.as_str() == slug)
            .map(|entry| entry.owner_id))
    }

    async fn append_history_entry(&self, entry: HistoryEntry) -> SluggingResult<()> {
        self.entries()?.push(entry);
        Ok(())
    }
}
