//! Merged activity feed of expenses and settlements.

use std::sync::Arc;

use anyhow::Result;
use log::debug;

use crate::storage::json::{ExpenseRepository, JsonConnection, SettlementRepository};
use crate::storage::traits::{Connection, ExpenseStorage, SettlementStorage};

use super::models::activity::Activity;

#[derive(Clone)]
pub struct ActivityService {
    expense_repository: ExpenseRepository,
    settlement_repository: SettlementRepository,
}

impl ActivityService {
    pub fn new(connection: Arc<JsonConnection>) -> Self {
        Self {
            expense_repository: connection.create_expense_repository(),
            settlement_repository: connection.create_settlement_repository(),
        }
    }

    /// Every expense and settlement as one feed, most recent first.
    pub fn feed(&self) -> Result<Vec<Activity>> {
        let expenses = self.expense_repository.get_expenses()?;
        let settlements = self.settlement_repository.get_settlements()?;

        let mut feed: Vec<Activity> = expenses
            .into_iter()
            .map(Activity::Expense)
            .chain(settlements.into_iter().map(Activity::Settlement))
            .collect();
        feed.sort_by(|a, b| b.date().cmp(&a.date()));

        debug!("Built activity feed with {} entries", feed.len());
        Ok(feed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::expense::{Expense, Participant};
    use crate::domain::models::settlement::Settlement;
    use chrono::{Duration, Utc};
    use tempfile::TempDir;

    #[test]
    fn feed_merges_and_sorts_most_recent_first() {
        let temp_dir = TempDir::new().unwrap();
        let connection = Arc::new(JsonConnection::new(temp_dir.path()).unwrap());
        let now = Utc::now();

        let expense = Expense {
            id: "e1".to_string(),
            description: "Dinner".to_string(),
            amount: 20.0,
            paid_by: "me".to_string(),
            participants: vec![Participant {
                user_id: "f1".to_string(),
                share: 20.0,
            }],
            date: now - Duration::hours(2),
            group_id: None,
            category: None,
        };
        let settlement = Settlement {
            id: "s1".to_string(),
            from: "f1".to_string(),
            to: "me".to_string(),
            amount: 20.0,
            date: now,
            group_id: None,
        };
        connection
            .create_expense_repository()
            .set_expenses(std::slice::from_ref(&expense))
            .unwrap();
        connection
            .create_settlement_repository()
            .set_settlements(std::slice::from_ref(&settlement))
            .unwrap();

        let service = ActivityService::new(connection);
        let feed = service.feed().unwrap();

        assert_eq!(feed.len(), 2);
        assert!(matches!(feed[0], Activity::Settlement(_)));
        assert!(matches!(feed[1], Activity::Expense(_)));
        assert_eq!(feed[0].id(), "s1");
        assert_eq!(feed[1].amount(), 20.0);
    }

    #[test]
    fn empty_history_yields_empty_feed() {
        let temp_dir = TempDir::new().unwrap();
        let connection = Arc::new(JsonConnection::new(temp_dir.path()).unwrap());
        let service = ActivityService::new(connection);
        assert!(service.feed().unwrap().is_empty());
    }
}
