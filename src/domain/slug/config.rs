// src/domain/slug/config.rs
use crate::application::ports::util::Slugifier;
use crate::infrastructure::util::DefaultSlugifier;
use std::collections::HashSet;
use std::sync::Arc;

pub const DEFAULT_MAX_LENGTH: usize = 50;

/// Crate-wide knobs, built once by the caller and threaded through the
/// generator, oracle, and assigner. Cloning is cheap; the slugifier is shared.
#[derive(Clone)]
pub struct SlugSettings {
    slugifier: Arc<dyn Slugifier>,
    max_length: usize,
    reserved_words: HashSet<String>,
}

impl SlugSettings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_slugifier(mut self, slugifier: Arc<dyn Slugifier>) -> Self {
        self.slugifier = slugifier;
        self
    }

    #[must_use]
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    #[must_use]
    pub fn with_reserved_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reserved_words = words.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn slugifier(&self) -> &dyn Slugifier {
        self.slugifier.as_ref()
    }

    #[must_use]
    pub const fn max_length(&self) -> usize {
        self.max_length
    }

    #[must_use]
    pub fn is_reserved(&self, candidate: &str) -> bool {
        self.reserved_words.contains(candidate)
    }
}

impl Default for SlugSettings {
    fn default() -> Self {
        Self {
            slugifier: Arc::new(DefaultSlugifier),
            max_length: DEFAULT_MAX_LENGTH,
            reserved_words: HashSet::new(),
        }
    }
}

/// Value read from a configured source field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Absent,
    Text(String),
    /// Anything that is neither a string nor null. The payload names the
    /// offending type for the `SourceType` error.
    Unsupported(&'static str),
}

impl FieldValue {
    #[must_use]
    pub fn from_json(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Absent,
            serde_json::Value::String(text) => Self::Text(text.clone()),
            serde_json::Value::Bool(_) => Self::Unsupported("boolean"),
            serde_json::Value::Number(_) => Self::Unsupported("number"),
            serde_json::Value::Array(_) => Self::Unsupported("array"),
            serde_json::Value::Object(_) => Self::Unsupported("object"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Option<String>> for FieldValue {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Absent, Self::Text)
    }
}

impl From<Option<&str>> for FieldValue {
    fn from(value: Option<&str>) -> Self {
        value.map_or(Self::Absent, |text| Self::Text(text.to_owned()))
    }
}

impl From<serde_json::Value> for FieldValue {
    fn from(value: serde_json::Value) -> Self {
        Self::from_json(&value)
    }
}

/// A named, typed accessor for one source field, resolved when the config is
/// built. The name only serves error reporting.
pub struct SourceField<E> {
    name: String,
    accessor: Arc<dyn Fn(&E) -> FieldValue + Send + Sync>,
}

impl<E> SourceField<E> {
    pub fn new<F, V>(name: impl Into<String>, accessor: F) -> Self
    where
        F: Fn(&E) -> V + Send + Sync + 'static,
        V: Into<FieldValue>,
    {
        Self {
            name: name.into(),
            accessor: Arc::new(move |entity| accessor(entity).into()),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn read(&self, entity: &E) -> FieldValue {
        (self.accessor)(entity)
    }
}

impl<E> Clone for SourceField<E> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            accessor: Arc::clone(&self.accessor),
        }
    }
}

type RegeneratePredicate<E> = Arc<dyn Fn(&E) -> bool + Send + Sync>;

/// Per-entity-type slugging configuration. Immutable once built; subtype
/// configs are made by cloning a parent builder output and amending it.
pub struct SlugConfig<E> {
    groups: Vec<Vec<SourceField<E>>>,
    regenerate: Option<RegeneratePredicate<E>>,
    history_table: Option<String>,
}

impl<E> SlugConfig<E> {
    #[must_use]
    pub fn builder() -> SlugConfigBuilder<E> {
        SlugConfigBuilder::new()
    }

    #[must_use]
    pub fn groups(&self) -> &[Vec<SourceField<E>>] {
        &self.groups
    }

    #[must_use]
    pub fn history_table(&self) -> Option<&str> {
        self.history_table.as_deref()
    }

    /// Whether an update should re-run assignment, judged against the
    /// pre-update state. Without a predicate the slug is kept as-is.
    #[must_use]
    pub fn should_regenerate(&self, entity: &E) -> bool {
        self.regenerate.as_ref().is_some_and(|predicate| predicate(entity))
    }

    /// Reconstitute a builder seeded with this config, for deriving a
    /// variant configuration without restating the shared parts.
    #[must_use]
    pub fn to_builder(&self) -> SlugConfigBuilder<E> {
        SlugConfigBuilder {
            groups: self.groups.clone(),
            regenerate: self.regenerate.as_ref().map(Arc::clone),
            history_table: self.history_table.clone(),
        }
    }
}

impl<E> Clone for SlugConfig<E> {
    fn clone(&self) -> Self {
        Self {
            groups: self.groups.clone(),
            regenerate: self.regenerate.as_ref().map(Arc::clone),
            history_table: self.history_table.clone(),
        }
    }
}

pub struct SlugConfigBuilder<E> {
    groups: Vec<Vec<SourceField<E>>>,
    regenerate: Option<RegeneratePredicate<E>>,
    history_table: Option<String>,
}

impl<E> SlugConfigBuilder<E> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            groups: Vec::new(),
            regenerate: None,
            history_table: None,
        }
    }

    /// Append a one-field candidate group.
    #[must_use]
    pub fn source(mut self, field: SourceField<E>) -> Self {
        self.groups.push(vec![field]);
        self
    }

    /// Append a multi-field candidate group; values are joined with a space
    /// before normalization.
    #[must_use]
    pub fn source_group(mut self, fields: impl IntoIterator<Item = SourceField<E>>) -> Self {
        self.groups.push(fields.into_iter().collect());
        self
    }

    #[must_use]
    pub fn regenerate_when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&E) -> bool + Send + Sync + 'static,
    {
        self.regenerate = Some(Arc::new(predicate));
        self
    }

    /// Route uniqueness checks and slug lookups through the named append-only
    /// ledger instead of the live table.
    #[must_use]
    pub fn history_table(mut self, table: impl Into<String>) -> Self {
        self.history_table = Some(table.into());
        self
    }

    #[must_use]
    pub fn build(self) -> SlugConfig<E> {
        SlugConfig {
            groups: self.groups,
            regenerate: self.regenerate,
            history_table: self.history_table,
        }
    }
}

impl<E> Default for SlugConfigBuilder<E> {
    fn default() -> Self {
        Self::new()
    }
}
