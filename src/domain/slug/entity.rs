// src/domain/slug/entity.rs
use crate::domain::slug::value_objects::{RecordKey, Slug};

/// Contract a record must satisfy to take part in slug assignment and
/// resolution. The core reads the primary key and the slug field through this
/// trait; source text fields are reached through the accessors registered on
/// the entity's `SlugConfig`.
pub trait Sluggable: Send + Sync {
    /// Stable name of the entity type, used as `owner_type` in the history
    /// ledger and in error messages.
    fn entity_type() -> &'static str
    where
        Self: Sized;

    /// Primary key, `None` until the first persistence write has assigned one.
    fn primary_key(&self) -> Option<RecordKey>;

    /// Currently held slug, `None` before assignment.
    fn slug(&self) -> Option<&Slug>;
}
