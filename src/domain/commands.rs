//! Command and result types for the service surface.
//!
//! Services take explicit command structs so callers (UI forms) hand
//! over exactly the raw user input, and get back result structs
//! wrapping the created records.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::models::expense::Expense;
use super::models::group::Group;
use super::models::person::Person;
use super::models::settlement::Settlement;
use super::split_service::SplitStrategy;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddFriendCommand {
    pub name: String,
    /// Optional; a synthetic example.com address is derived when absent.
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddFriendResult {
    pub friend: Person,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveFriendCommand {
    pub friend_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveFriendResult {
    /// False when no friend with that id existed.
    pub removed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGroupCommand {
    pub name: String,
    pub icon: Option<String>,
    /// Ids of existing friends to include as members.
    pub friend_ids: Vec<String>,
    /// Names of people who are not friends yet; member records are
    /// synthesized for them.
    pub custom_member_names: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGroupResult {
    pub group: Group,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateExpenseCommand {
    pub description: String,
    pub amount: f64,
    /// Defaults to the current user when `None`.
    pub paid_by: Option<String>,
    /// The people the expense is split with, besides the current user.
    pub split_with: Vec<String>,
    pub strategy: SplitStrategy,
    /// Raw per-participant inputs as typed by the user (percentages,
    /// exact amounts, or weights depending on the strategy).
    pub raw_inputs: HashMap<String, String>,
    pub group_id: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateExpenseResult {
    pub expense: Expense,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordSettlementCommand {
    /// The other party; payment direction is derived from the sign of
    /// the outstanding balance with them.
    pub counterparty_id: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordSettlementResult {
    pub settlement: Settlement,
}
