//! JSON-backed storage for the friends list.

use anyhow::Result;
use log::info;

use crate::domain::models::person::Person;
use crate::storage::traits::FriendStorage;

use super::connection::JsonConnection;

const FRIENDS_FILE: &str = "friends.json";

#[derive(Clone)]
pub struct FriendRepository {
    connection: JsonConnection,
}

impl FriendRepository {
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }
}

impl FriendStorage for FriendRepository {
    fn get_friends(&self) -> Result<Vec<Person>> {
        self.connection.read_collection(FRIENDS_FILE)
    }

    fn set_friends(&self, friends: &[Person]) -> Result<()> {
        info!("Storing {} friends", friends.len());
        self.connection.write_collection(FRIENDS_FILE, &friends)
    }
}
