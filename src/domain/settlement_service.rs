//! Service for recording direct payments that settle balances.

use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use log::info;

use crate::config::LedgerConfig;
use crate::storage::json::{JsonConnection, SettlementRepository};
use crate::storage::traits::{Connection, SettlementStorage};

use super::balance_service::BalanceService;
use super::commands::{RecordSettlementCommand, RecordSettlementResult};
use super::models::settlement::{Settlement, SettlementValidationError};

#[derive(Clone)]
pub struct SettlementService {
    settlement_repository: SettlementRepository,
    balance_service: Arc<BalanceService<JsonConnection>>,
    current_user_id: String,
}

impl SettlementService {
    pub fn new(connection: Arc<JsonConnection>, config: &LedgerConfig) -> Self {
        Self {
            settlement_repository: connection.create_settlement_repository(),
            balance_service: Arc::new(BalanceService::new(connection, config)),
            current_user_id: config.current_user_id.clone(),
        }
    }

    /// Record a settlement against one counterparty.
    ///
    /// Payment direction follows the outstanding balance: a negative
    /// balance means the current user pays, a positive one means the
    /// counterparty pays. Paying more than the absolute outstanding
    /// balance is rejected here as a business rule; the aggregator
    /// itself would compute an overshoot correctly.
    pub fn record_settlement(
        &self,
        command: RecordSettlementCommand,
    ) -> Result<RecordSettlementResult> {
        if !command.amount.is_finite() || command.amount <= 0.0 {
            return Err(SettlementValidationError::InvalidAmount.into());
        }

        let outstanding = self.balance_service.balance_with(&command.counterparty_id)?;
        if outstanding == 0.0 {
            return Err(SettlementValidationError::NothingOutstanding.into());
        }
        if command.amount > outstanding.abs() {
            return Err(SettlementValidationError::ExceedsOutstandingBalance {
                max: outstanding.abs(),
            }
            .into());
        }

        let (from, to) = if outstanding < 0.0 {
            (self.current_user_id.clone(), command.counterparty_id)
        } else {
            (command.counterparty_id, self.current_user_id.clone())
        };

        let settlement = Settlement {
            id: Settlement::generate_id(),
            from,
            to,
            amount: command.amount,
            date: Utc::now(),
            group_id: None,
        };

        let mut settlements = self.settlement_repository.get_settlements()?;
        settlements.push(settlement.clone());
        self.settlement_repository.set_settlements(&settlements)?;

        info!(
            "Recorded settlement {}: {} -> {} ({:.2})",
            settlement.id, settlement.from, settlement.to, settlement.amount
        );
        Ok(RecordSettlementResult { settlement })
    }

    /// Full settlement history in insertion order.
    pub fn list_settlements(&self) -> Result<Vec<Settlement>> {
        self.settlement_repository.get_settlements()
    }
}
