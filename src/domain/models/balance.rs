//! Computed balance views handed to the presentation layer.

use serde::{Deserialize, Serialize};

use super::person::Person;

/// A person together with their net balance against the current user.
///
/// Sign convention (load-bearing across every consumer):
/// `balance > 0` means this person owes the current user,
/// `balance < 0` means the current user owes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FriendBalance {
    pub person: Person,
    pub balance: f64,
}

/// Aggregate figures for the home screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceSummary {
    /// Total others owe the current user (sum of positive balances).
    pub total_owed: f64,
    /// Total the current user owes others (absolute sum of negative balances).
    pub total_owing: f64,
    /// `total_owed - total_owing`.
    pub net: f64,
    pub expense_count: usize,
}
