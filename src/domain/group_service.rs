//! Service for managing groups and their derived spend figures.

use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use log::info;
use serde::{Deserialize, Serialize};

use crate::config::LedgerConfig;
use crate::storage::json::{
    ExpenseRepository, FriendRepository, GroupRepository, JsonConnection, ProfileRepository,
};
use crate::storage::traits::{
    Connection, ExpenseStorage, FriendStorage, GroupStorage, ProfileStorage,
};

use super::commands::{CreateGroupCommand, CreateGroupResult};
use super::models::expense::Expense;
use super::models::group::{Group, GroupValidationError};
use super::models::person::Person;

/// Derived view of one group: its expenses and spend totals. Nothing
/// here is stored; it is recomputed from the expense history on every
/// request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupOverview {
    pub group: Group,
    pub expenses: Vec<Expense>,
    pub total_spent: f64,
    pub average_per_member: f64,
}

#[derive(Clone)]
pub struct GroupService {
    group_repository: GroupRepository,
    friend_repository: FriendRepository,
    expense_repository: ExpenseRepository,
    profile_repository: ProfileRepository,
    current_user_id: String,
}

impl GroupService {
    pub fn new(connection: Arc<JsonConnection>, config: &LedgerConfig) -> Self {
        Self {
            group_repository: connection.create_group_repository(),
            friend_repository: connection.create_friend_repository(),
            expense_repository: connection.create_expense_repository(),
            profile_repository: connection.create_profile_repository(),
            current_user_id: config.current_user_id.clone(),
        }
    }

    /// Create a group from selected friends plus ad-hoc members. The
    /// current user is always the first member.
    pub fn create_group(&self, command: CreateGroupCommand) -> Result<CreateGroupResult> {
        let name = command.name.trim().to_string();
        if name.is_empty() {
            return Err(GroupValidationError::EmptyName.into());
        }

        let friends = self.friend_repository.get_friends()?;
        let selected: Vec<Person> = friends
            .into_iter()
            .filter(|f| command.friend_ids.contains(&f.id))
            .collect();

        let custom: Vec<Person> = command
            .custom_member_names
            .iter()
            .map(|n| n.trim())
            .filter(|n| !n.is_empty())
            .map(|n| Person {
                id: Person::generate_id(),
                name: n.to_string(),
                email: String::new(),
                avatar: None,
                currency: None,
            })
            .collect();

        if selected.is_empty() && custom.is_empty() {
            return Err(GroupValidationError::NoMembers.into());
        }

        let mut members = Vec::with_capacity(1 + selected.len() + custom.len());
        members.push(self.current_user_member()?);
        members.extend(selected);
        members.extend(custom);

        let group = Group {
            id: Group::generate_id(),
            name,
            icon: command.icon,
            members,
            created_at: Utc::now(),
        };

        let mut groups = self.group_repository.get_groups()?;
        groups.push(group.clone());
        self.group_repository.set_groups(&groups)?;

        info!(
            "Created group {} ({}) with {} members",
            group.name,
            group.id,
            group.members.len()
        );
        Ok(CreateGroupResult { group })
    }

    pub fn list_groups(&self) -> Result<Vec<Group>> {
        self.group_repository.get_groups()
    }

    pub fn get_group(&self, group_id: &str) -> Result<Option<Group>> {
        let groups = self.group_repository.get_groups()?;
        Ok(groups.into_iter().find(|g| g.id == group_id))
    }

    /// Spend overview for one group, derived by filtering the expense
    /// history on `group_id`.
    pub fn group_overview(&self, group_id: &str) -> Result<Option<GroupOverview>> {
        let group = match self.get_group(group_id)? {
            Some(group) => group,
            None => return Ok(None),
        };

        let expenses: Vec<Expense> = self
            .expense_repository
            .get_expenses()?
            .into_iter()
            .filter(|e| e.group_id.as_deref() == Some(group_id))
            .collect();

        let total_spent: f64 = expenses.iter().map(|e| e.amount).sum();
        let average_per_member = if group.members.is_empty() {
            0.0
        } else {
            total_spent / group.members.len() as f64
        };

        Ok(Some(GroupOverview {
            group,
            expenses,
            total_spent,
            average_per_member,
        }))
    }

    /// The current user's member record, from the stored profile when
    /// one exists.
    fn current_user_member(&self) -> Result<Person> {
        if let Some(user) = self.profile_repository.get_user()? {
            if user.id == self.current_user_id {
                return Ok(user);
            }
        }
        Ok(Person {
            id: self.current_user_id.clone(),
            name: "You".to_string(),
            email: "you@example.com".to_string(),
            avatar: None,
            currency: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::expense::Participant;
    use tempfile::TempDir;

    fn setup() -> (GroupService, Arc<JsonConnection>, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let connection = Arc::new(JsonConnection::new(temp_dir.path()).unwrap());
        let config = LedgerConfig::new("me");
        (
            GroupService::new(connection.clone(), &config),
            connection,
            temp_dir,
        )
    }

    fn friend(id: &str, name: &str) -> Person {
        Person {
            id: id.to_string(),
            name: name.to_string(),
            email: Person::synthetic_email(name),
            avatar: None,
            currency: None,
        }
    }

    #[test]
    fn create_group_puts_current_user_first() {
        let (service, connection, _tmp) = setup();
        connection
            .create_friend_repository()
            .set_friends(&[friend("f1", "Alice")])
            .unwrap();

        let result = service
            .create_group(CreateGroupCommand {
                name: "Trip to Paris".to_string(),
                icon: Some("airplane".to_string()),
                friend_ids: vec!["f1".to_string()],
                custom_member_names: vec!["Walk-in".to_string()],
            })
            .unwrap();

        let members = &result.group.members;
        assert_eq!(members.len(), 3);
        assert_eq!(members[0].id, "me");
        assert_eq!(members[1].id, "f1");
        assert_eq!(members[2].name, "Walk-in");
        assert!(result.group.has_member("f1"));
    }

    #[test]
    fn create_group_requires_a_member() {
        let (service, _conn, _tmp) = setup();
        let err = service
            .create_group(CreateGroupCommand {
                name: "Empty".to_string(),
                icon: None,
                friend_ids: vec![],
                custom_member_names: vec![],
            })
            .unwrap_err();
        assert!(err.to_string().contains("at least one member"));
    }

    #[test]
    fn overview_derives_totals_from_expense_history() {
        let (service, connection, _tmp) = setup();
        connection
            .create_friend_repository()
            .set_friends(&[friend("f1", "Alice")])
            .unwrap();
        let group = service
            .create_group(CreateGroupCommand {
                name: "Flat".to_string(),
                icon: None,
                friend_ids: vec!["f1".to_string()],
                custom_member_names: vec![],
            })
            .unwrap()
            .group;

        let make = |group_id: Option<&str>, amount: f64| Expense {
            id: Expense::generate_id(),
            description: "x".to_string(),
            amount,
            paid_by: "me".to_string(),
            participants: vec![Participant {
                user_id: "f1".to_string(),
                share: amount,
            }],
            date: Utc::now(),
            group_id: group_id.map(|s| s.to_string()),
            category: None,
        };
        connection
            .create_expense_repository()
            .set_expenses(&[
                make(Some(&group.id), 40.0),
                make(Some(&group.id), 20.0),
                make(None, 99.0),
            ])
            .unwrap();

        let overview = service.group_overview(&group.id).unwrap().unwrap();
        assert_eq!(overview.expenses.len(), 2);
        assert_eq!(overview.total_spent, 60.0);
        assert_eq!(overview.average_per_member, 30.0);
    }

    #[test]
    fn overview_of_unknown_group_is_none() {
        let (service, _conn, _tmp) = setup();
        assert!(service.group_overview("nope").unwrap().is_none());
    }
}
