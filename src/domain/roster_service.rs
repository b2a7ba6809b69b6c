//! Roster unifier.
//!
//! Builds the universe of "known people" for balance computation by
//! merging the explicit friends list with people discovered through
//! group membership.

use std::collections::HashSet;

use log::debug;

use super::models::group::Group;
use super::models::person::Person;

/// Merge friends and group members into one deduplicated roster.
///
/// Friends come first, as-is; then every group member whose id is
/// neither the current user nor already present, in first-seen order.
/// Later duplicates are dropped (first insertion wins), so the result
/// is a stable superset the aggregator can zero-initialize balances
/// from.
///
/// A member stored without an email gets `lowercase(name)@example.com`
/// synthesized. That default is cosmetic; identity is always by id.
pub fn unify_roster(friends: &[Person], groups: &[Group], current_user_id: &str) -> Vec<Person> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut roster: Vec<Person> = Vec::with_capacity(friends.len());

    for friend in friends {
        if seen.insert(friend.id.as_str()) {
            roster.push(friend.clone());
        }
    }

    for group in groups {
        for member in &group.members {
            if member.id == current_user_id || seen.contains(member.id.as_str()) {
                continue;
            }
            let mut person = member.clone();
            if person.email.is_empty() {
                person.email = format!("{}@example.com", person.name.to_lowercase());
            }
            roster.push(person);
            seen.insert(member.id.as_str());
        }
    }

    debug!(
        "Unified roster: {} friends + groups -> {} people",
        friends.len(),
        roster.len()
    );
    roster
}
