//! Storage layer: abstraction traits plus the JSON file backend.

pub mod json;
pub mod traits;

pub use json::JsonConnection;
pub use traits::{
    Connection, ExpenseStorage, FriendStorage, GroupStorage, ProfileStorage, SettlementStorage,
};
