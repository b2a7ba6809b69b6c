//! Domain model for a person known to the ledger.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A person the current user shares expenses with.
///
/// Identity is always by `id`. Name and email are display data:
/// renaming a person never changes historical balance computation,
/// which is id-keyed throughout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl Person {
    /// Generate a unique ID for a new person.
    pub fn generate_id() -> String {
        Uuid::new_v4().to_string()
    }

    /// Default email for a friend created without one.
    /// Whitespace is stripped so "Jane Doe" becomes "janedoe@example.com".
    /// Cosmetic only, never used for identity comparisons.
    pub fn synthetic_email(name: &str) -> String {
        let compact: String = name.to_lowercase().split_whitespace().collect();
        format!("{}@example.com", compact)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FriendValidationError {
    #[error("Friend name cannot be empty")]
    EmptyName,
    #[error("This friend is already in your list")]
    AlreadyExists,
}
