use std::sync::Arc;

use crate::domain::errors::SluggingResult;
use crate::domain::slug::config::{SlugConfig, SlugSettings};
use crate::domain::slug::entity::Sluggable;
use crate::domain::slug::repository::{SlugStore, UniquenessScope};

/// Decides whether a candidate may be assigned as-is: non-empty, not
/// reserved, and free within the configured uniqueness scope.
pub struct SlugUniquenessOracle<E: Sluggable> {
    store: Arc<dyn SlugStore<E>>,
    settings: SlugSettings,
}

impl<E: Sluggable> SlugUniquenessOracle<E> {
    pub fn new(store: Arc<dyn SlugStore<E>>, settings: SlugSettings) -> Self {
        Self { store, settings }
    }

    pub async fn is_acceptable(
        &self,
        candidate: &str,
        entity: &E,
        config: &SlugConfig<E>,
    ) -> SluggingResult<bool> {
        if candidate.is_empty() {
            return Ok(false);
        }
        if self.settings.is_reserved(candidate) {
            tracing::debug!(candidate, "candidate is a reserved word");
            return Ok(false);
        }

        let scope = match config.history_table() {
            Some(_) => UniquenessScope::History {
                owner_type: E::entity_type(),
            },
            None => UniquenessScope::LiveTable,
        };
        // A record's own prior slug does not count against itself on update.
        let own_key = entity.primary_key();
        let taken = self
            .store
            .slug_exists(scope, candidate, own_key.as_ref())
            .await?;
        Ok(!taken)
    }
}
