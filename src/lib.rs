//! Slug assignment and identifier resolution for persistent records.
//!
//! The crate derives URL-safe slugs from configured source fields, arbitrates
//! uniqueness against a live table or an append-only history ledger, and
//! resolves caller-supplied identifiers (primary key or slug, current or
//! retired) back to the owning record. Persistence stays behind the
//! [`SlugStore`] trait; an in-memory adapter ships for tests and embedding.

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::ports::time::Clock;
pub use application::ports::util::Slugifier;
pub use domain::errors::{SluggingError, SluggingResult};
pub use domain::history::HistoryEntry;
pub use domain::slug::{
    FieldValue, Identifier, KeyKind, KeyResolver, PendingHistoryWrite, RecordKey, Slug,
    SlugAssigner, SlugAssignment, SlugConfig, SlugConfigBuilder, SlugSettings, SlugStore,
    SlugUniquenessOracle, Sluggable, SourceField, UniquenessScope,
};
pub use infrastructure::{DefaultSlugifier, InMemorySlugStore, KeyAssignable, SystemClock};
