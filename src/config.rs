//! Ledger configuration.
//!
//! Every balance is expressed relative to one fixed reference
//! identity. That id is resolved exactly once when the ledger is
//! constructed and threaded through every service as a value, so no
//! call site carries its own copy of the literal.

use serde::{Deserialize, Serialize};

/// Reserved id used for the current user when no stored profile
/// provides one.
pub const DEFAULT_CURRENT_USER_ID: &str = "current-user";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// The id every pairwise balance is computed against.
    pub current_user_id: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            current_user_id: DEFAULT_CURRENT_USER_ID.to_string(),
        }
    }
}

impl LedgerConfig {
    pub fn new(current_user_id: impl Into<String>) -> Self {
        Self {
            current_user_id: current_user_id.into(),
        }
    }
}
