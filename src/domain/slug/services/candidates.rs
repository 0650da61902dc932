use crate::domain::errors::{SluggingError, SluggingResult};
use crate::domain::slug::config::{FieldValue, SlugConfig, SlugSettings, SourceField};

/// Build the ordered candidate sequence: one candidate per source group, in
/// config order. Candidates may be empty; emptiness is arbitrated later.
pub(super) fn generate<E>(
    entity: &E,
    config: &SlugConfig<E>,
    settings: &SlugSettings,
) -> SluggingResult<Vec<String>> {
    config
        .groups()
        .iter()
        .map(|group| group_candidate(entity, group, settings))
        .collect()
}

fn group_candidate<E>(
    entity: &E,
    group: &[SourceField<E>],
    settings: &SlugSettings,
) -> SluggingResult<String> {
    let mut parts = Vec::with_capacity(group.len());
    for field in group {
        match field.read(entity) {
            FieldValue::Text(text) => parts.push(text),
            // Absent joins as the empty string; the slugifier collapses the
            // resulting separator runs.
            FieldValue::Absent => parts.push(String::new()),
            FieldValue::Unsupported(found) => {
                return Err(SluggingError::SourceType {
                    field: field.name().to_owned(),
                    found,
                });
            }
        }
    }

    let normalized = settings.slugifier().normalize(&parts.join(" "));
    Ok(truncate_chars(normalized, settings.max_length()))
}

fn truncate_chars(value: String, max: usize) -> String {
    match value.char_indices().nth(max) {
        Some((boundary, _)) => value[..boundary].to_owned(),
        None => value,
    }
}
