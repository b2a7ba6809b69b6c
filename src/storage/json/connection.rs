//! JSON storage connection.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::storage::traits::Connection;

use super::expense_repository::ExpenseRepository;
use super::friend_repository::FriendRepository;
use super::group_repository::GroupRepository;
use super::profile_repository::ProfileRepository;
use super::settlement_repository::SettlementRepository;

/// Connection to a directory of per-collection JSON files.
///
/// Each collection lives in its own file (`friends.json`,
/// `expenses.json`, ...) and is always read and replaced whole. A
/// missing file reads as an empty collection.
#[derive(Debug, Clone)]
pub struct JsonConnection {
    base_directory: PathBuf,
}

impl JsonConnection {
    /// Create a connection rooted at `base_directory`, creating the
    /// directory if needed.
    pub fn new(base_directory: impl AsRef<Path>) -> Result<Self> {
        let base_directory = base_directory.as_ref().to_path_buf();
        fs::create_dir_all(&base_directory).with_context(|| {
            format!("Failed to create data directory {:?}", base_directory)
        })?;
        debug!("Opened JSON storage at {:?}", base_directory);
        Ok(Self { base_directory })
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Path of a collection file under the base directory.
    pub(crate) fn collection_path(&self, file_name: &str) -> PathBuf {
        self.base_directory.join(file_name)
    }

    /// Read a whole collection file, treating a missing file as the
    /// type's default (empty list, absent profile).
    pub(crate) fn read_collection<T>(&self, file_name: &str) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        let path = self.collection_path(file_name);
        if !path.exists() {
            debug!("Collection file {:?} does not exist yet", path);
            return Ok(T::default());
        }
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {:?}", path))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse {:?}", path))
    }

    /// Replace a whole collection file. Writes go through a temp file
    /// and rename so readers never observe a half-written collection.
    pub(crate) fn write_collection<T>(&self, file_name: &str, value: &T) -> Result<()>
    where
        T: Serialize,
    {
        let path = self.collection_path(file_name);
        let contents = serde_json::to_string_pretty(value)
            .with_context(|| format!("Failed to serialize {:?}", path))?;

        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, contents)
            .with_context(|| format!("Failed to write {:?}", temp_path))?;
        fs::rename(&temp_path, &path)
            .with_context(|| format!("Failed to replace {:?}", path))?;

        debug!("Wrote collection {:?}", path);
        Ok(())
    }
}

impl Connection for JsonConnection {
    type ProfileRepository = ProfileRepository;
    type FriendRepository = FriendRepository;
    type GroupRepository = GroupRepository;
    type ExpenseRepository = ExpenseRepository;
    type SettlementRepository = SettlementRepository;

    fn create_profile_repository(&self) -> ProfileRepository {
        ProfileRepository::new(self.clone())
    }

    fn create_friend_repository(&self) -> FriendRepository {
        FriendRepository::new(self.clone())
    }

    fn create_group_repository(&self) -> GroupRepository {
        GroupRepository::new(self.clone())
    }

    fn create_expense_repository(&self) -> ExpenseRepository {
        ExpenseRepository::new(self.clone())
    }

    fn create_settlement_repository(&self) -> SettlementRepository {
        SettlementRepository::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_collection_reads_as_default() {
        let temp_dir = TempDir::new().unwrap();
        let conn = JsonConnection::new(temp_dir.path()).unwrap();
        let items: Vec<String> = conn.read_collection("nothing.json").unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn write_then_read_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let conn = JsonConnection::new(temp_dir.path()).unwrap();
        conn.write_collection("items.json", &vec!["a".to_string(), "b".to_string()])
            .unwrap();
        let items: Vec<String> = conn.read_collection("items.json").unwrap();
        assert_eq!(items, vec!["a", "b"]);
        // No leftover temp file
        assert!(!conn.collection_path("items.tmp").exists());
    }
}
