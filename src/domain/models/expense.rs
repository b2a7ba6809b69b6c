//! Domain model for a shared expense.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One participant's resolved share of an expense.
///
/// By the time an expense is persisted, `share` is always an absolute
/// currency amount, not a percentage or weight. Splitting is resolved
/// once at creation time and never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub user_id: String,
    pub share: f64,
}

/// A shared expense paid by one person and split among participants.
///
/// `paid_by` need not appear in `participants`: a payer can cover an
/// expense without taking a share of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    pub description: String,
    pub amount: f64,
    pub paid_by: String,
    pub participants: Vec<Participant>,
    pub date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Expense {
    /// Generate a unique ID for a new expense.
    pub fn generate_id() -> String {
        Uuid::new_v4().to_string()
    }

    /// Sum of all participant shares.
    pub fn total_shares(&self) -> f64 {
        self.participants.iter().map(|p| p.share).sum()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExpenseValidationError {
    #[error("Please enter a description")]
    EmptyDescription,
    #[error("Please enter a valid amount")]
    InvalidAmount,
    #[error("Select at least one person to split with")]
    NoParticipants,
}
