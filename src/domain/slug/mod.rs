pub mod config;
pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use config::{FieldValue, SlugConfig, SlugConfigBuilder, SlugSettings, SourceField};
pub use entity::Sluggable;
pub use repository::{SlugStore, UniquenessScope};
pub use services::{
    KeyResolver, PendingHistoryWrite, SlugAssigner, SlugAssignment, SlugUniquenessOracle,
};
pub use value_objects::{Identifier, KeyKind, RecordKey, Slug};
