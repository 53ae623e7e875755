//! Todo entity definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single to-do item.
///
/// The `id` is assigned by the store on creation and is immutable, as is
/// `created_at`. Only `name` can change after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    /// Store-assigned identifier.
    pub id: i64,
    /// The to-do text.
    pub name: String,
    /// When this record was created.
    pub created_at: DateTime<Utc>,
}

impl Todo {
    /// Creates a to-do with the given id and name, timestamped now.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            created_at: Utc::now(),
        }
    }
}
