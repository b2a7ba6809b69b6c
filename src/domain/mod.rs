//! Domain layer: models, the balance derivation core, and the
//! services around it.

pub mod activity_service;
pub mod balance_service;
pub mod commands;
pub mod currency_service;
pub mod expense_service;
pub mod friend_service;
pub mod group_service;
pub mod models;
pub mod profile_service;
pub mod roster_service;
pub mod settlement_service;
pub mod split_service;

pub use activity_service::ActivityService;
pub use balance_service::{compute_balances, BalanceService};
pub use currency_service::CurrencyService;
pub use expense_service::ExpenseService;
pub use friend_service::FriendService;
pub use group_service::{GroupOverview, GroupService};
pub use profile_service::ProfileService;
pub use roster_service::unify_roster;
pub use settlement_service::SettlementService;
pub use split_service::{compute_shares, SplitError, SplitStrategy, SPLIT_TOLERANCE};
