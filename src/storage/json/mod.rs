//! # JSON Storage Module
//!
//! File-based storage keeping one JSON document per collection under a
//! base directory:
//!
//! ```text
//! user.json         the current user's profile record
//! friends.json      explicit friends list
//! groups.json       groups with embedded member records
//! expenses.json     append-only expense history
//! settlements.json  append-only settlement history
//! ```
//!
//! Collections are always read and replaced whole, matching the
//! whole-collection contract of the storage traits. Writes are atomic
//! (temp file + rename).

pub mod connection;
pub mod expense_repository;
pub mod friend_repository;
pub mod group_repository;
pub mod profile_repository;
pub mod settlement_repository;

pub use connection::JsonConnection;
pub use expense_repository::ExpenseRepository;
pub use friend_repository::FriendRepository;
pub use group_repository::GroupRepository;
pub use profile_repository::ProfileRepository;
pub use settlement_repository::SettlementRepository;
