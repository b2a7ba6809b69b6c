//! Domain models for the split ledger.
//!
//! Entities are plain value objects with no back-references:
//! relationships (`paid_by`, `user_id`, `from`, `to`, `group_id`) are
//! id lookups resolved at read time.

pub mod activity;
pub mod balance;
pub mod expense;
pub mod group;
pub mod person;
pub mod settlement;

pub use activity::Activity;
pub use balance::{BalanceSummary, FriendBalance};
pub use expense::{Expense, ExpenseValidationError, Participant};
pub use group::{Group, GroupValidationError};
pub use person::{FriendValidationError, Person};
pub use settlement::{Settlement, SettlementValidationError};
