//! JSON-backed storage for the settlement history.

use anyhow::Result;
use log::info;

use crate::domain::models::settlement::Settlement;
use crate::storage::traits::SettlementStorage;

use super::connection::JsonConnection;

const SETTLEMENTS_FILE: &str = "settlements.json";

#[derive(Clone)]
pub struct SettlementRepository {
    connection: JsonConnection,
}

impl SettlementRepository {
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }
}

impl SettlementStorage for SettlementRepository {
    fn get_settlements(&self) -> Result<Vec<Settlement>> {
        self.connection.read_collection(SETTLEMENTS_FILE)
    }

    fn set_settlements(&self, settlements: &[Settlement]) -> Result<()> {
        info!("Storing {} settlements", settlements.len());
        self.connection.write_collection(SETTLEMENTS_FILE, &settlements)
    }
}
