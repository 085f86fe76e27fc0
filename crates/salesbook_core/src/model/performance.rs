//! Social performance record domain model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A dated evaluation entry attributed to a salesman.
///
/// The entity carries no owner id of its own; callers pass the salesman id
/// alongside the record, and the store persists both together. Identity for
/// update/delete is the `(salesman_id, date)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialPerformanceRecord {
    pub description: String,
    /// Calendar day of the evaluation, no time component. Persisted as
    /// ISO-8601 text (`YYYY-MM-DD`), which sorts lexicographically.
    pub date: NaiveDate,
    /// Evaluation score. Documented range is 1-10; not enforced on write.
    pub score: i32,
}

impl SocialPerformanceRecord {
    /// Creates an evaluation value for the given day.
    pub fn new(description: impl Into<String>, date: NaiveDate, score: i32) -> Self {
        Self {
            description: description.into(),
            date,
            score,
        }
    }
}
