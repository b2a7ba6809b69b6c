//! # split-ledger
//!
//! An expense-splitting ledger: friends and groups share expenses,
//! and every balance is derived as a signed net amount between one
//! fixed "current user" and each other person. Direct settlements
//! offset the computed balances.
//!
//! The crate is organized as a storage-agnostic domain layer
//! ([`domain`]) over whole-collection repositories ([`storage`]).
//! The balance derivation core ([`domain::compute_balances`],
//! [`domain::unify_roster`], [`domain::compute_shares`]) is pure:
//! materialized collections in, computed values out.
//!
//! [`Ledger`] wires everything to one JSON-file storage directory.

pub mod config;
pub mod domain;
pub mod storage;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use config::{LedgerConfig, DEFAULT_CURRENT_USER_ID};
use domain::models::person::Person;
use domain::{
    ActivityService, BalanceService, CurrencyService, ExpenseService, FriendService, GroupService,
    ProfileService, SettlementService,
};
use storage::json::JsonConnection;
use storage::traits::{Connection, ProfileStorage};

/// All services wired to one storage directory.
pub struct Ledger {
    pub config: LedgerConfig,
    pub profile_service: ProfileService,
    pub friend_service: FriendService,
    pub group_service: GroupService,
    pub expense_service: ExpenseService,
    pub settlement_service: SettlementService,
    pub balance_service: BalanceService<JsonConnection>,
    pub activity_service: ActivityService,
    pub currency_service: CurrencyService,
}

impl Ledger {
    /// Open (or initialize) a ledger stored under `data_directory`.
    ///
    /// The current-user id is resolved here, once: the stored
    /// profile's id when a profile exists, otherwise the reserved
    /// default. Every service receives it through [`LedgerConfig`].
    pub fn new(data_directory: impl AsRef<Path>) -> Result<Self> {
        let connection = Arc::new(JsonConnection::new(data_directory)?);

        let current_user_id = connection
            .create_profile_repository()
            .get_user()?
            .map(|user| user.id)
            .unwrap_or_else(|| DEFAULT_CURRENT_USER_ID.to_string());
        let config = LedgerConfig::new(current_user_id);

        Ok(Self {
            profile_service: ProfileService::new(connection.clone()),
            friend_service: FriendService::new(connection.clone()),
            group_service: GroupService::new(connection.clone(), &config),
            expense_service: ExpenseService::new(connection.clone(), &config),
            settlement_service: SettlementService::new(connection.clone(), &config),
            balance_service: BalanceService::new(connection.clone(), &config),
            activity_service: ActivityService::new(connection.clone()),
            currency_service: CurrencyService::new(connection, &config),
            config,
        })
    }

    /// Replace the stored profile and invalidate the currency cache,
    /// so a changed currency preference is visible on the next read.
    pub fn update_profile(&self, user: &Person) -> Result<()> {
        self.profile_service.set_current_user(user)?;
        self.currency_service.invalidate();
        Ok(())
    }
}
