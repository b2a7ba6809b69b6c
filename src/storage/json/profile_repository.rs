//! JSON-backed storage for the current user's profile.

use anyhow::Result;
use log::info;

use crate::domain::models::person::Person;
use crate::storage::traits::ProfileStorage;

use super::connection::JsonConnection;

const USER_FILE: &str = "user.json";

#[derive(Clone)]
pub struct ProfileRepository {
    connection: JsonConnection,
}

impl ProfileRepository {
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }
}

impl ProfileStorage for ProfileRepository {
    fn get_user(&self) -> Result<Option<Person>> {
        self.connection.read_collection(USER_FILE)
    }

    fn set_user(&self, user: &Person) -> Result<()> {
        info!("Storing user profile {}", user.id);
        self.connection.write_collection(USER_FILE, user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn profile_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let repo = ProfileRepository::new(JsonConnection::new(temp_dir.path()).unwrap());

        assert!(repo.get_user().unwrap().is_none());

        let user = Person {
            id: "current-user".to_string(),
            name: "You".to_string(),
            email: "you@example.com".to_string(),
            avatar: None,
            currency: Some("EUR".to_string()),
        };
        repo.set_user(&user).unwrap();

        let loaded = repo.get_user().unwrap().unwrap();
        assert_eq!(loaded, user);
    }
}
