use crate::domain::errors::{SluggingError, SluggingResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A normalized, URL-safe identifier for a record. Never empty once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> SluggingResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(SluggingError::Configuration("slug cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

/// Primary key of a sluggable record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordKey {
    Int(i64),
    Uuid(Uuid),
}

impl RecordKey {
    #[must_use]
    pub const fn kind(&self) -> KeyKind {
        match self {
            Self::Int(_) => KeyKind::Int,
            Self::Uuid(_) => KeyKind::Uuid,
        }
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Uuid(value) => write!(f, "{value}"),
        }
    }
}

impl From<i64> for RecordKey {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<Uuid> for RecordKey {
    fn from(value: Uuid) -> Self {
        Self::Uuid(value)
    }
}

/// Declared primary-key kind of an entity type's schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    Int,
    Uuid,
}

/// What a caller hands to the resolver: either a numeric key or an opaque
/// string that may be a key rendering or a slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identifier {
    Int(i64),
    Text(String),
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<i64> for Identifier {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Identifier {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Uuid> for Identifier {
    fn from(value: Uuid) -> Self {
        Self::Text(value.to_string())
    }
}
