//! Service for managing the friends list.

use std::sync::Arc;

use anyhow::Result;
use log::{info, warn};

use crate::storage::json::{FriendRepository, GroupRepository, JsonConnection};
use crate::storage::traits::{Connection, FriendStorage, GroupStorage};

use super::commands::{AddFriendCommand, AddFriendResult, RemoveFriendCommand, RemoveFriendResult};
use super::models::person::{FriendValidationError, Person};

#[derive(Clone)]
pub struct FriendService {
    friend_repository: FriendRepository,
    group_repository: GroupRepository,
}

impl FriendService {
    pub fn new(connection: Arc<JsonConnection>) -> Self {
        Self {
            friend_repository: connection.create_friend_repository(),
            group_repository: connection.create_group_repository(),
        }
    }

    /// Add a friend, rejecting duplicates by case-insensitive name or
    /// email.
    pub fn add_friend(&self, command: AddFriendCommand) -> Result<AddFriendResult> {
        let name = command.name.trim().to_string();
        if name.is_empty() {
            return Err(FriendValidationError::EmptyName.into());
        }

        let email = command
            .email
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty());

        let friends = self.friend_repository.get_friends()?;
        let exists = friends.iter().any(|f| {
            f.name.to_lowercase() == name.to_lowercase()
                || email
                    .as_ref()
                    .is_some_and(|e| f.email.to_lowercase() == e.to_lowercase())
        });
        if exists {
            warn!("Refusing to add duplicate friend {}", name);
            return Err(FriendValidationError::AlreadyExists.into());
        }

        let friend = Person {
            id: Person::generate_id(),
            email: email.unwrap_or_else(|| Person::synthetic_email(&name)),
            name,
            avatar: None,
            currency: None,
        };

        let mut updated = friends;
        updated.push(friend.clone());
        self.friend_repository.set_friends(&updated)?;

        info!("Added friend {} ({})", friend.name, friend.id);
        Ok(AddFriendResult { friend })
    }

    /// List all friends in insertion order.
    pub fn list_friends(&self) -> Result<Vec<Person>> {
        self.friend_repository.get_friends()
    }

    /// Remove a friend and cascade the removal into every group's
    /// member list. Expense and settlement history is never touched.
    pub fn remove_friend(&self, command: RemoveFriendCommand) -> Result<RemoveFriendResult> {
        let friends = self.friend_repository.get_friends()?;
        let before = friends.len();
        let updated: Vec<Person> = friends
            .into_iter()
            .filter(|f| f.id != command.friend_id)
            .collect();
        let removed = updated.len() != before;

        if !removed {
            warn!("Attempted to remove non-existent friend {}", command.friend_id);
            return Ok(RemoveFriendResult { removed: false });
        }

        self.friend_repository.set_friends(&updated)?;

        let mut groups = self.group_repository.get_groups()?;
        for group in &mut groups {
            group.members.retain(|m| m.id != command.friend_id);
        }
        self.group_repository.set_groups(&groups)?;

        info!("Removed friend {} (and from all groups)", command.friend_id);
        Ok(RemoveFriendResult { removed: true })
    }
}
