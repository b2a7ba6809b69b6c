//! Domain model for a direct payment between two people.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A direct payment from `from` to `to` that offsets computed
/// balances. The aggregator applies settlements as plain linear
/// offsets and never clamps overshoot; the service layer is the one
/// that rejects payments larger than the outstanding balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    pub id: String,
    pub from: String,
    pub to: String,
    pub amount: f64,
    pub date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
}

impl Settlement {
    /// Generate a unique ID for a new settlement.
    pub fn generate_id() -> String {
        Uuid::new_v4().to_string()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettlementValidationError {
    #[error("Please enter a valid amount")]
    InvalidAmount,
    #[error("Maximum amount is {max:.2}")]
    ExceedsOutstandingBalance { max: f64 },
    #[error("There is nothing outstanding with this person")]
    NothingOutstanding,
}
