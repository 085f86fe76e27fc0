//! Salesman domain model.

use serde::{Deserialize, Serialize};

/// Caller-assigned identifier for a salesman.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type SalesmanId = i64;

/// A tracked employee identified by an integer id.
///
/// The store never assigns or rewrites `id`; keeping it unique among stored
/// salesmen is the caller's responsibility and is not checked on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesMan {
    /// Serialized as `sid` to match the storage field name.
    #[serde(rename = "sid")]
    pub id: SalesmanId,
    #[serde(rename = "firstname")]
    pub first_name: String,
    #[serde(rename = "lastname")]
    pub last_name: String,
}

impl SalesMan {
    /// Creates a salesman value with a caller-assigned id.
    pub fn new(
        id: SalesmanId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}
