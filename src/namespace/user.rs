//! Users and the folder registry each one owns.

use std::collections::HashMap;

use tracing::debug;

use super::folder::Folder;
use super::sort::{sorted, CreatedAt, SortSpec};
use super::validation::{normalize_name, validate_name};
use crate::error::{EntityKind, VfsError};
use crate::Result;

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    username: String,
    folders: HashMap<String, Folder>,
}

impl User {
    pub(crate) fn new(username: String) -> Self {
        Self {
            username,
            folders: HashMap::new(),
        }
    }

    /// Normalized username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Look up a folder by name (case-insensitive).
    pub fn folder(&self, foldername: &str) -> Result<&Folder> {
        let foldername = normalize_name(foldername);
        self.folders
            .get(&foldername)
            .ok_or_else(|| VfsError::not_found(EntityKind::Folder, foldername))
    }

    pub(crate) fn folder_mut(&mut self, foldername: &str) -> Result<&mut Folder> {
        let foldername = normalize_name(foldername);
        self.folders
            .get_mut(&foldername)
            .ok_or_else(|| VfsError::not_found(EntityKind::Folder, foldername))
    }

    /// Number of folders owned by the user.
    pub fn folder_count(&self) -> usize {
        self.folders.len()
    }

    /// List the folders ordered by `spec`.
    pub fn list_folders(&self, spec: SortSpec) -> Vec<&Folder> {
        sorted(self.folders.values(), spec)
    }

    pub(crate) fn create_folder(
        &mut self,
        foldername: &str,
        description: &str,
        stamp: impl FnOnce() -> CreatedAt,
    ) -> Result<()> {
        let foldername = normalize_name(foldername);
        validate_name(&foldername)?;

        if self.folders.contains_key(&foldername) {
            return Err(VfsError::already_exists(EntityKind::Folder, foldername));
        }

        let folder = Folder::new(foldername.clone(), description.to_string(), stamp());
        self.folders.insert(foldername.clone(), folder);
        debug!("Created folder {} for {}", foldername, self.username);
        Ok(())
    }

    /// Remove a folder together with every file in it.
    pub(crate) fn delete_folder(&mut self, foldername: &str) -> Result<()> {
        let foldername = normalize_name(foldername);
        let folder = self
            .folders
            .remove(&foldername)
            .ok_or_else(|| VfsError::not_found(EntityKind::Folder, foldername))?;

        debug!(
            "Deleted folder {} for {} ({} files)",
            folder.name(),
            self.username,
            folder.file_count()
        );
        Ok(())
    }

    /// Move a folder to a new key. Files and creation time travel with it.
    ///
    /// Renaming a folder to its own name is a collision like any other.
    pub(crate) fn rename_folder(&mut self, foldername: &str, new_name: &str) -> Result<()> {
        let foldername = normalize_name(foldername);
        let new_name = normalize_name(new_name);
        validate_name(&new_name)?;

        if !self.folders.contains_key(&foldername) {
            return Err(VfsError::not_found(EntityKind::Folder, foldername));
        }
        if self.folders.contains_key(&new_name) {
            return Err(VfsError::already_exists(EntityKind::Folder, new_name));
        }

        let mut folder = self
            .folders
            .remove(&foldername)
            .ok_or_else(|| VfsError::not_found(EntityKind::Folder, foldername.clone()))?;
        folder.set_name(new_name.clone());
        self.folders.insert(new_name.clone(), folder);

        debug!(
            "Renamed folder {} to {} for {}",
            foldername, new_name, self.username
        );
        Ok(())
    }
}
