// src/domain/slug/services/assigner.rs
use std::sync::Arc;

use uuid::Uuid;

use crate::application::ports::time::Clock;
use crate::domain::errors::SluggingResult;
use crate::domain::history::entity::HistoryEntry;
use crate::domain::slug::config::{SlugConfig, SlugSettings};
use crate::domain::slug::entity::Sluggable;
use crate::domain::slug::repository::SlugStore;
use crate::domain::slug::services::candidates;
use crate::domain::slug::services::oracle::SlugUniquenessOracle;
use crate::domain::slug::value_objects::{RecordKey, Slug};

/// Outcome of one assignment: the chosen slug plus, when a history ledger is
/// configured, the deferred ledger write the caller commits after the
/// entity's own write succeeds.
#[derive(Debug)]
pub struct SlugAssignment {
    pub slug: Slug,
    pub pending_history: Option<PendingHistoryWrite>,
}

/// Deferred history insert. Integer keys do not exist until the owning row is
/// inserted, so the ledger entry is completed with the key at commit time.
#[derive(Debug, Clone)]
pub struct PendingHistoryWrite {
    slug: Slug,
    owner_type: &'static str,
}

impl PendingHistoryWrite {
    #[must_use]
    pub fn slug(&self) -> &Slug {
        &self.slug
    }

    #[must_use]
    pub const fn owner_type(&self) -> &'static str {
        self.owner_type
    }

    pub async fn commit<E>(
        self,
        store: &dyn SlugStore<E>,
        owner_id: RecordKey,
        clock: &dyn Clock,
    ) -> SluggingResult<()> {
        store
            .append_history_entry(HistoryEntry {
                slug: self.slug,
                owner_id,
                owner_type: self.owner_type.to_owned(),
                created_at: clock.now(),
            })
            .await
    }
}

/// Orchestrates candidate generation and the uniqueness oracle into a final
/// slug. Invoked before create always, and before update when the config's
/// regenerate predicate says so.
pub struct SlugAssigner<E: Sluggable> {
    config: SlugConfig<E>,
    settings: SlugSettings,
    oracle: SlugUniquenessOracle<E>,
}

impl<E: Sluggable> SlugAssigner<E> {
    pub fn new(store: Arc<dyn SlugStore<E>>, config: SlugConfig<E>, settings: SlugSettings) -> Self {
        let oracle = SlugUniquenessOracle::new(store, settings.clone());
        Self {
            config,
            settings,
            oracle,
        }
    }

    /// Two-phase assignment over the candidate sequence, then an absolute
    /// fallback. Never returns an empty slug.
    pub async fn assign(&self, entity: &E) -> SluggingResult<SlugAssignment> {
        let candidates = candidates::generate(entity, &self.config, &self.settings)?;

        for candidate in &candidates {
            if candidate.is_empty() {
                continue;
            }
            if self.oracle.is_acceptable(candidate, entity, &self.config).await? {
                tracing::debug!(
                    entity_type = E::entity_type(),
                    slug = %candidate,
                    "assigned free candidate"
                );
                return self.finish(Slug::new(candidate.clone())?);
            }
        }

        // Every candidate was taken or reserved. Suffix the first non-empty
        // one with a fresh UUID; the randomness stands in for a uniqueness
        // check and may push the slug past the length bound.
        for candidate in &candidates {
            if !candidate.is_empty() {
                let slug = Slug::new(format!("{candidate}-{}", Uuid::new_v4()))?;
                tracing::debug!(
                    entity_type = E::entity_type(),
                    slug = %slug,
                    "all candidates taken, appended random suffix"
                );
                return self.finish(slug);
            }
        }

        // No usable source text at all.
        let slug = Slug::new(Uuid::new_v4().to_string())?;
        tracing::debug!(
            entity_type = E::entity_type(),
            slug = %slug,
            "no non-empty candidate, assigned random slug"
        );
        self.finish(slug)
    }

    /// Update-path entry point: re-runs assignment only when the regenerate
    /// predicate accepts the entity's pre-update state.
    pub async fn assign_for_update(&self, entity: &E) -> SluggingResult<Option<SlugAssignment>> {
        if self.config.should_regenerate(entity) {
            Ok(Some(self.assign(entity).await?))
        } else {
            Ok(None)
        }
    }

    fn finish(&self, slug: Slug) -> SluggingResult<SlugAssignment> {
        let pending_history = self.config.history_table().map(|_| PendingHistoryWrite {
            slug: slug.clone(),
            owner_type: E::entity_type(),
        });
        Ok(SlugAssignment {
            slug,
            pending_history,
        })
    }
}
