//! # Storage Traits
//!
//! Storage abstraction for the ledger. The persistence surface is
//! deliberately coarse: every collection is read and replaced whole,
//! there is no partial-update API. Appending a record is a
//! read-modify-write performed by the caller.
//!
//! All operations are synchronous; the domain layer works with any
//! backend that can hand over fully-materialized collections.

use anyhow::Result;

use crate::domain::models::expense::Expense;
use crate::domain::models::group::Group;
use crate::domain::models::person::Person;
use crate::domain::models::settlement::Settlement;

/// Storage for the current user's own profile record.
pub trait ProfileStorage: Send + Sync {
    /// Retrieve the stored user profile, if one exists.
    fn get_user(&self) -> Result<Option<Person>>;

    /// Replace the stored user profile.
    fn set_user(&self, user: &Person) -> Result<()>;
}

/// Storage for the explicit friends list.
pub trait FriendStorage: Send + Sync {
    /// Retrieve all friends. A missing collection is an empty list.
    fn get_friends(&self) -> Result<Vec<Person>>;

    /// Replace the whole friends collection.
    fn set_friends(&self, friends: &[Person]) -> Result<()>;
}

/// Storage for groups.
pub trait GroupStorage: Send + Sync {
    fn get_groups(&self) -> Result<Vec<Group>>;

    /// Replace the whole groups collection.
    fn set_groups(&self, groups: &[Group]) -> Result<()>;
}

/// Storage for the append-only expense history.
pub trait ExpenseStorage: Send + Sync {
    fn get_expenses(&self) -> Result<Vec<Expense>>;

    /// Replace the whole expense collection.
    fn set_expenses(&self, expenses: &[Expense]) -> Result<()>;
}

/// Storage for the append-only settlement history.
pub trait SettlementStorage: Send + Sync {
    fn get_settlements(&self) -> Result<Vec<Settlement>>;

    /// Replace the whole settlement collection.
    fn set_settlements(&self, settlements: &[Settlement]) -> Result<()>;
}

/// Trait defining the interface for storage connections.
///
/// Abstracts the concrete backend (JSON files, a database, ...) behind
/// factory methods so the domain layer can be written against any
/// implementation.
pub trait Connection: Send + Sync + Clone {
    type ProfileRepository: ProfileStorage;
    type FriendRepository: FriendStorage;
    type GroupRepository: GroupStorage;
    type ExpenseRepository: ExpenseStorage;
    type SettlementRepository: SettlementStorage;

    fn create_profile_repository(&self) -> Self::ProfileRepository;
    fn create_friend_repository(&self) -> Self::FriendRepository;
    fn create_group_repository(&self) -> Self::GroupRepository;
    fn create_expense_repository(&self) -> Self::ExpenseRepository;
    fn create_settlement_repository(&self) -> Self::SettlementRepository;
}
