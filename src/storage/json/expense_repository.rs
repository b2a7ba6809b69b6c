//! JSON-backed storage for the expense history.

use anyhow::Result;
use log::info;

use crate::domain::models::expense::Expense;
use crate::storage::traits::ExpenseStorage;

use super::connection::JsonConnection;

const EXPENSES_FILE: &str = "expenses.json";

#[derive(Clone)]
pub struct ExpenseRepository {
    connection: JsonConnection,
}

impl ExpenseRepository {
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }
}

impl ExpenseStorage for ExpenseRepository {
    fn get_expenses(&self) -> Result<Vec<Expense>> {
        self.connection.read_collection(EXPENSES_FILE)
    }

    fn set_expenses(&self, expenses: &[Expense]) -> Result<()> {
        info!("Storing {} expenses", expenses.len());
        self.connection.write_collection(EXPENSES_FILE, &expenses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::expense::Participant;
    use chrono::Utc;
    use tempfile::TempDir;

    #[test]
    fn expense_round_trip_keeps_optional_fields() {
        let temp_dir = TempDir::new().unwrap();
        let repo = ExpenseRepository::new(JsonConnection::new(temp_dir.path()).unwrap());

        let expense = Expense {
            id: Expense::generate_id(),
            description: "Dinner".to_string(),
            amount: 60.0,
            paid_by: "current-user".to_string(),
            participants: vec![
                Participant {
                    user_id: "current-user".to_string(),
                    share: 30.0,
                },
                Participant {
                    user_id: "f1".to_string(),
                    share: 30.0,
                },
            ],
            date: Utc::now(),
            group_id: None,
            category: Some("food".to_string()),
        };
        repo.set_expenses(std::slice::from_ref(&expense)).unwrap();

        let loaded = repo.get_expenses().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].category.as_deref(), Some("food"));
        assert_eq!(loaded[0].group_id, None);
        assert_eq!(loaded[0].participants, expense.participants);
    }
}
