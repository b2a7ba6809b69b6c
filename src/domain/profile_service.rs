//! Service for the current user's own profile record.

use std::sync::Arc;

use anyhow::Result;
use log::info;

use crate::storage::json::{JsonConnection, ProfileRepository};
use crate::storage::traits::{Connection, ProfileStorage};

use super::models::person::Person;

#[derive(Clone)]
pub struct ProfileService {
    profile_repository: ProfileRepository,
}

impl ProfileService {
    pub fn new(connection: Arc<JsonConnection>) -> Self {
        Self {
            profile_repository: connection.create_profile_repository(),
        }
    }

    pub fn get_current_user(&self) -> Result<Option<Person>> {
        self.profile_repository.get_user()
    }

    /// Replace the stored profile. Callers that change the currency
    /// preference this way must also invalidate the currency cache;
    /// [`crate::Ledger::update_profile`] does both.
    pub fn set_current_user(&self, user: &Person) -> Result<()> {
        info!("Updating profile for {}", user.id);
        self.profile_repository.set_user(user)
    }
}
