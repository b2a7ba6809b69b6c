//! JSON-backed storage for groups.

use anyhow::Result;
use log::info;

use crate::domain::models::group::Group;
use crate::storage::traits::GroupStorage;

use super::connection::JsonConnection;

const GROUPS_FILE: &str = "groups.json";

#[derive(Clone)]
pub struct GroupRepository {
    connection: JsonConnection,
}

impl GroupRepository {
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }
}

impl GroupStorage for GroupRepository {
    fn get_groups(&self) -> Result<Vec<Group>> {
        self.connection.read_collection(GROUPS_FILE)
    }

    fn set_groups(&self, groups: &[Group]) -> Result<()> {
        info!("Storing {} groups", groups.len());
        self.connection.write_collection(GROUPS_FILE, &groups)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::person::Person;
    use chrono::Utc;
    use tempfile::TempDir;

    #[test]
    fn groups_round_trip_keeps_members() {
        let temp_dir = TempDir::new().unwrap();
        let repo = GroupRepository::new(JsonConnection::new(temp_dir.path()).unwrap());

        assert!(repo.get_groups().unwrap().is_empty());

        let group = Group {
            id: "g1".to_string(),
            name: "Trip".to_string(),
            icon: Some("airplane".to_string()),
            members: vec![Person {
                id: "f1".to_string(),
                name: "Alice".to_string(),
                email: Person::synthetic_email("Alice"),
                avatar: None,
                currency: None,
            }],
            created_at: Utc::now(),
        };
        repo.set_groups(std::slice::from_ref(&group)).unwrap();

        let loaded = repo.get_groups().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].members, group.members);
        assert_eq!(loaded[0].icon.as_deref(), Some("airplane"));
    }
}
