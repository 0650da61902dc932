// src/domain/slug/services/resolver.rs
use std::sync::Arc;

use uuid::Uuid;

use crate::domain::errors::{SluggingError, SluggingResult};
use crate::domain::slug::config::SlugConfig;
use crate::domain::slug::entity::Sluggable;
use crate::domain::slug::repository::SlugStore;
use crate::domain::slug::value_objects::{Identifier, KeyKind, RecordKey};

/// Maps an arbitrary caller-supplied identifier to a record, dispatching on
/// the entity type's declared primary-key kind and indirecting through the
/// history ledger when one is configured.
pub struct KeyResolver<E: Sluggable> {
    store: Arc<dyn SlugStore<E>>,
    config: SlugConfig<E>,
}

impl<E: Sluggable> KeyResolver<E> {
    pub fn new(store: Arc<dyn SlugStore<E>>, config: SlugConfig<E>) -> Self {
        Self { store, config }
    }

    pub async fn resolve(&self, identifier: impl Into<Identifier>) -> SluggingResult<Option<E>> {
        let identifier = identifier.into();
        let kind = self.store.primary_key_kind()?;
        tracing::debug!(
            entity_type = E::entity_type(),
            identifier = %identifier,
            kind = ?kind,
            "resolving identifier"
        );
        match kind {
            KeyKind::Int => self.resolve_int(identifier).await,
            KeyKind::Uuid => self.resolve_uuid(identifier).await,
        }
    }

    /// Strict variant: absence becomes a `NotFound` error.
    pub async fn resolve_required(&self, identifier: impl Into<Identifier>) -> SluggingResult<E> {
        let identifier = identifier.into();
        self.resolve(identifier.clone()).await?.ok_or_else(|| {
            SluggingError::NotFound(format!(
                "no {} record matches `{identifier}`",
                E::entity_type()
            ))
        })
    }

    async fn resolve_int(&self, identifier: Identifier) -> SluggingResult<Option<E>> {
        match identifier {
            Identifier::Int(value) => self.store.find_by_key(&RecordKey::Int(value)).await,
            Identifier::Text(text) => {
                if is_digits(&text) {
                    // Digit-only strings address the key column only; no slug
                    // fallback even when the key is unoccupied. A value too
                    // large for i64 cannot name any row.
                    match text.parse::<i64>() {
                        Ok(value) => self.store.find_by_key(&RecordKey::Int(value)).await,
                        Err(_) => Ok(None),
                    }
                } else {
                    self.find_by_slug_indirect(&text).await
                }
            }
        }
    }

    async fn resolve_uuid(&self, identifier: Identifier) -> SluggingResult<Option<E>> {
        match identifier {
            Identifier::Text(text) => {
                // Slug wins over key for uuid-keyed types; a slug lookup is
                // always attempted first.
                if let Some(found) = self.find_by_slug_indirect(&text).await? {
                    return Ok(Some(found));
                }
                match canonical_uuid(&text) {
                    Some(key) => self.store.find_by_key(&RecordKey::Uuid(key)).await,
                    None => Ok(None),
                }
            }
            Identifier::Int(value) => Err(SluggingError::Configuration(format!(
                "integer identifier `{value}` cannot address uuid-keyed {} records",
                E::entity_type()
            ))),
        }
    }

    async fn find_by_slug_indirect(&self, slug: &str) -> SluggingResult<Option<E>> {
        if self.config.history_table().is_some() {
            match self
                .store
                .resolve_owner_via_history(E::entity_type(), slug)
                .await?
            {
                Some(owner) => self.store.find_by_key(&owner).await,
                None => Ok(None),
            }
        } else {
            self.store.find_by_slug(slug).await
        }
    }
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|byte| byte.is_ascii_digit())
}

/// Accepts only the canonical 8-4-4-4-12 hex grouping, not the other textual
/// forms `Uuid::parse_str` tolerates.
fn canonical_uuid(text: &str) -> Option<Uuid> {
    let bytes = text.as_bytes();
    if bytes.len() != 36 {
        return None;
    }
    for (index, byte) in bytes.iter().enumerate() {
        let valid = match index {
            8 | 13 | 18 | 23 => *byte == b'-',
            _ => byte.is_ascii_hexdigit(),
        };
        if !valid {
            return None;
        }
    }
    Uuid::parse_str(text).ok()
}
