// src/models/student.rs

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A student entry in the `students` collection of the store.
/// Seeded outside the service; never written by it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,

    #[serde(default)]
    pub name: String,

    /// Teacher's free-text notes on how the student usually performs.
    #[serde(default)]
    pub performance_summary: String,

    /// Seeded fields the service does not use (grade, class, ...).
    /// Kept so that rewriting the store does not drop them.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
