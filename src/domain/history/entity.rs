// src/domain/history/entity.rs
use crate::domain::slug::value_objects::{RecordKey, Slug};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One used-slug fact, scoped by owner type. The ledger is append-only; the
/// core never updates or deletes entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub slug: Slug,
    pub owner_id: RecordKey,
    pub owner_type: String,
    pub created_at: DateTime<Utc>,
}
