//! Service for recording shared expenses.
//!
//! Splitting is resolved here, once, at creation time: the split
//! calculator turns raw user inputs into absolute per-participant
//! shares, and only a split that passes validation is ever persisted.

use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use log::info;

use crate::config::LedgerConfig;
use crate::storage::json::{ExpenseRepository, JsonConnection};
use crate::storage::traits::{Connection, ExpenseStorage};

use super::commands::{CreateExpenseCommand, CreateExpenseResult};
use super::models::expense::{Expense, ExpenseValidationError};
use super::split_service::compute_shares;

#[derive(Clone)]
pub struct ExpenseService {
    expense_repository: ExpenseRepository,
    current_user_id: String,
}

impl ExpenseService {
    pub fn new(connection: Arc<JsonConnection>, config: &LedgerConfig) -> Self {
        Self {
            expense_repository: connection.create_expense_repository(),
            current_user_id: config.current_user_id.clone(),
        }
    }

    /// Validate and persist a new expense. The participant list is the
    /// current user plus everyone in `split_with` (deduplicated,
    /// order preserved).
    pub fn create_expense(&self, command: CreateExpenseCommand) -> Result<CreateExpenseResult> {
        let description = command.description.trim().to_string();
        if description.is_empty() {
            return Err(ExpenseValidationError::EmptyDescription.into());
        }
        if !command.amount.is_finite() || command.amount <= 0.0 {
            return Err(ExpenseValidationError::InvalidAmount.into());
        }
        if command.split_with.is_empty() {
            return Err(ExpenseValidationError::NoParticipants.into());
        }

        let mut participant_ids: Vec<String> = vec![self.current_user_id.clone()];
        for id in &command.split_with {
            if !participant_ids.contains(id) {
                participant_ids.push(id.clone());
            }
        }

        let participants = compute_shares(
            command.amount,
            &participant_ids,
            command.strategy,
            &command.raw_inputs,
        )?;

        let expense = Expense {
            id: Expense::generate_id(),
            description,
            amount: command.amount,
            paid_by: command
                .paid_by
                .unwrap_or_else(|| self.current_user_id.clone()),
            participants,
            date: Utc::now(),
            group_id: command.group_id,
            category: command.category,
        };

        let mut expenses = self.expense_repository.get_expenses()?;
        expenses.push(expense.clone());
        self.expense_repository.set_expenses(&expenses)?;

        info!(
            "Recorded expense {} ({:.2}, {} participants)",
            expense.id,
            expense.amount,
            expense.participants.len()
        );
        Ok(CreateExpenseResult { expense })
    }

    /// Full expense history in insertion order.
    pub fn list_expenses(&self) -> Result<Vec<Expense>> {
        self.expense_repository.get_expenses()
    }
}
