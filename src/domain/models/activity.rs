//! Activity feed entries.
//!
//! Expenses and settlements share enough shape (id, date, amount) that
//! the feed could get away with structural overlap; instead they are
//! kept as an explicit tagged union so consumers always know which
//! record they are looking at.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::expense::Expense;
use super::settlement::Settlement;

/// One entry in the merged activity feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Activity {
    Expense(Expense),
    Settlement(Settlement),
}

impl Activity {
    pub fn id(&self) -> &str {
        match self {
            Activity::Expense(e) => &e.id,
            Activity::Settlement(s) => &s.id,
        }
    }

    pub fn date(&self) -> DateTime<Utc> {
        match self {
            Activity::Expense(e) => e.date,
            Activity::Settlement(s) => s.date,
        }
    }

    pub fn amount(&self) -> f64 {
        match self {
            Activity::Expense(e) => e.amount,
            Activity::Settlement(s) => s.amount,
        }
    }
}
