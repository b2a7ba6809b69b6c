//! Domain model for a group of people who share expenses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::person::Person;

/// A named set of people who split expenses together.
///
/// Members keep their insertion order and include the current user by
/// convention. A group holds no financial state of its own: spend
/// totals are always derived by filtering expenses on `group_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub members: Vec<Person>,
    pub created_at: DateTime<Utc>,
}

impl Group {
    /// Generate a unique ID for a new group.
    pub fn generate_id() -> String {
        Uuid::new_v4().to_string()
    }

    /// Whether the given person is a member of this group.
    pub fn has_member(&self, person_id: &str) -> bool {
        self.members.iter().any(|m| m.id == person_id)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GroupValidationError {
    #[error("Group name cannot be empty")]
    EmptyName,
    #[error("A group needs at least one member besides you")]
    NoMembers,
}
