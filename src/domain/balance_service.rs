//! Balance aggregation for the split ledger.
//!
//! Derives, for every known person, the net amount between them and
//! the current user from the full expense and settlement history.
//! The core is a pure function over materialized collections; the
//! service wraps it with storage access and the roster unifier.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use log::{debug, info};

use crate::config::LedgerConfig;
use crate::storage::traits::{
    Connection, ExpenseStorage, FriendStorage, GroupStorage, SettlementStorage,
};

use super::models::balance::{BalanceSummary, FriendBalance};
use super::models::expense::Expense;
use super::models::person::Person;
use super::models::settlement::Settlement;
use super::roster_service::unify_roster;

/// Compute the net balance per person relative to `current_user_id`.
///
/// Sign convention (load-bearing): `balance > 0` means that person
/// owes the current user, `balance < 0` means the current user owes
/// them.
///
/// Every person in `known_people` gets an entry, zero if they have no
/// activity. Expenses referencing ids outside the roster still record
/// their deltas under those ids; whether such ids surface anywhere is
/// the roster's concern, not the aggregator's.
///
/// Expenses where the current user is neither payer nor participant
/// contribute nothing: this ledger tracks pairwise balances against a
/// single reference user, not the full all-pairs debt matrix.
///
/// Pure and deterministic; identical inputs yield identical output.
pub fn compute_balances(
    expenses: &[Expense],
    settlements: &[Settlement],
    current_user_id: &str,
    known_people: &[Person],
) -> HashMap<String, f64> {
    let mut balances: HashMap<String, f64> = HashMap::with_capacity(known_people.len());
    for person in known_people {
        balances.insert(person.id.clone(), 0.0);
    }

    for expense in expenses {
        let total_shares = expense.total_shares();
        // A fully-waived split (all shares zero) is a valid no-op,
        // not a divide-by-zero error.
        if total_shares == 0.0 {
            continue;
        }

        for participant in &expense.participants {
            let owed_amount = (participant.share / total_shares) * expense.amount;

            if participant.user_id == current_user_id && expense.paid_by != current_user_id {
                // The current user owes the payer.
                *balances.entry(expense.paid_by.clone()).or_insert(0.0) -= owed_amount;
            } else if participant.user_id != current_user_id && expense.paid_by == current_user_id {
                // That participant owes the current user.
                *balances.entry(participant.user_id.clone()).or_insert(0.0) += owed_amount;
            }
        }
    }

    for settlement in settlements {
        if settlement.from == current_user_id {
            *balances.entry(settlement.to.clone()).or_insert(0.0) -= settlement.amount;
        } else if settlement.to == current_user_id {
            *balances.entry(settlement.from.clone()).or_insert(0.0) += settlement.amount;
        }
    }

    balances
}

/// Service producing balance views from stored collections.
pub struct BalanceService<C: Connection> {
    friend_repository: C::FriendRepository,
    group_repository: C::GroupRepository,
    expense_repository: C::ExpenseRepository,
    settlement_repository: C::SettlementRepository,
    current_user_id: String,
}

impl<C: Connection> BalanceService<C> {
    pub fn new(connection: Arc<C>, config: &LedgerConfig) -> Self {
        Self {
            friend_repository: connection.create_friend_repository(),
            group_repository: connection.create_group_repository(),
            expense_repository: connection.create_expense_repository(),
            settlement_repository: connection.create_settlement_repository(),
            current_user_id: config.current_user_id.clone(),
        }
    }

    /// Load all collections, unify the roster and run the aggregator.
    fn load_and_compute(&self) -> Result<(Vec<Person>, HashMap<String, f64>, usize)> {
        let friends = self.friend_repository.get_friends()?;
        let groups = self.group_repository.get_groups()?;
        let expenses = self.expense_repository.get_expenses()?;
        let settlements = self.settlement_repository.get_settlements()?;

        let roster = unify_roster(&friends, &groups, &self.current_user_id);
        let balances = compute_balances(&expenses, &settlements, &self.current_user_id, &roster);

        debug!(
            "Computed balances for {} people over {} expenses and {} settlements",
            roster.len(),
            expenses.len(),
            settlements.len()
        );
        Ok((roster, balances, expenses.len()))
    }

    fn to_friend_balances(
        roster: Vec<Person>,
        balances: &HashMap<String, f64>,
    ) -> Vec<FriendBalance> {
        roster
            .into_iter()
            .map(|person| {
                let balance = balances.get(&person.id).copied().unwrap_or(0.0);
                FriendBalance { person, balance }
            })
            .collect()
    }

    /// Net balance for every known person, in roster order (friends
    /// first, then first-seen group members).
    pub fn balances(&self) -> Result<Vec<FriendBalance>> {
        let (roster, balances, _) = self.load_and_compute()?;
        Ok(Self::to_friend_balances(roster, &balances))
    }

    /// Net balance against one specific person. Ids outside the
    /// roster still resolve: the aggregator records deltas for every
    /// id the history references. Unknown and inactive ids are 0.
    pub fn balance_with(&self, person_id: &str) -> Result<f64> {
        let (_, balances, _) = self.load_and_compute()?;
        Ok(balances.get(person_id).copied().unwrap_or(0.0))
    }

    /// Aggregate owed/owing totals for the overview screen, derived
    /// from one snapshot of the collections.
    pub fn summary(&self) -> Result<BalanceSummary> {
        let (roster, balance_map, expense_count) = self.load_and_compute()?;
        let balances = Self::to_friend_balances(roster, &balance_map);

        let total_owed: f64 = balances
            .iter()
            .filter(|b| b.balance > 0.0)
            .map(|b| b.balance)
            .sum();
        let total_owing: f64 = balances
            .iter()
            .filter(|b| b.balance < 0.0)
            .map(|b| -b.balance)
            .sum();

        info!(
            "Balance summary: owed {:.2}, owing {:.2}, {} expenses",
            total_owed, total_owing, expense_count
        );

        Ok(BalanceSummary {
            total_owed,
            total_owing,
            net: total_owed - total_owing,
            expense_count,
        })
    }
}
