//! The namespace store: the user registry and the entry point for every
//! folder and file operation.

use std::collections::HashMap;

use chrono::Utc;
use tracing::info;

use super::file::File;
use super::folder::Folder;
use super::sort::{CreatedAt, SortSpec};
use super::user::User;
use super::validation::{normalize_name, validate_name};
use crate::error::{EntityKind, VfsError};
use crate::Result;

/// Hands out creation stamps with a strictly increasing sequence number.
#[derive(Debug, Default)]
struct Clock {
    next_seq: u64,
}

impl Clock {
    fn tick(&mut self) -> CreatedAt {
        let seq = self.next_seq;
        self.next_seq += 1;
        CreatedAt::new(Utc::now(), seq)
    }
}

fn find_user_mut<'a>(users: &'a mut HashMap<String, User>, username: &str) -> Result<&'a mut User> {
    let username = normalize_name(username);
    users
        .get_mut(&username)
        .ok_or_else(|| VfsError::not_found(EntityKind::User, username))
}

/// In-memory namespace of users, their folders and the files in them.
///
/// Every lookup is case-insensitive. Any operation naming an unknown user
/// fails with a user `NotFound` before folder or file checks run.
///
/// # Examples
///
/// ```
/// use vfs::namespace::{Namespace, SortSpec};
///
/// let mut ns = Namespace::new();
/// ns.register("alice")?;
/// ns.create_folder("alice", "Docs", "my docs")?;
/// ns.create_file("alice", "docs", "readme", "notes")?;
///
/// let files = ns.list_files("alice", "DOCS", SortSpec::parse("name", "asc"))?;
/// assert_eq!(files[0].name(), "readme");
/// # Ok::<(), vfs::VfsError>(())
/// ```
#[derive(Debug, Default)]
pub struct Namespace {
    users: HashMap<String, User>,
    clock: Clock,
}

impl Namespace {
    /// Create an empty namespace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered users.
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Register a new user.
    pub fn register(&mut self, username: &str) -> Result<()> {
        let username = normalize_name(username);
        validate_name(&username)?;

        if self.users.contains_key(&username) {
            return Err(VfsError::already_exists(EntityKind::User, username));
        }

        self.users.insert(username.clone(), User::new(username.clone()));
        info!("Registered user {}", username);
        Ok(())
    }

    /// Look up a user.
    pub fn user(&self, username: &str) -> Result<&User> {
        let username = normalize_name(username);
        self.users
            .get(&username)
            .ok_or_else(|| VfsError::not_found(EntityKind::User, username))
    }

    /// Look up a folder owned by a user.
    pub fn folder(&self, username: &str, foldername: &str) -> Result<&Folder> {
        self.user(username)?.folder(foldername)
    }

    /// Create a folder for a user.
    pub fn create_folder(
        &mut self,
        username: &str,
        foldername: &str,
        description: &str,
    ) -> Result<()> {
        let clock = &mut self.clock;
        find_user_mut(&mut self.users, username)?.create_folder(foldername, description, || {
            clock.tick()
        })
    }

    /// Delete a folder and all of its files.
    pub fn delete_folder(&mut self, username: &str, foldername: &str) -> Result<()> {
        find_user_mut(&mut self.users, username)?.delete_folder(foldername)
    }

    /// Rename a folder.
    pub fn rename_folder(
        &mut self,
        username: &str,
        foldername: &str,
        new_name: &str,
    ) -> Result<()> {
        find_user_mut(&mut self.users, username)?.rename_folder(foldername, new_name)
    }

    /// List a user's folders.
    pub fn list_folders(&self, username: &str, spec: SortSpec) -> Result<Vec<&Folder>> {
        Ok(self.user(username)?.list_folders(spec))
    }

    /// Create a file in a user's folder.
    pub fn create_file(
        &mut self,
        username: &str,
        foldername: &str,
        filename: &str,
        description: &str,
    ) -> Result<()> {
        let clock = &mut self.clock;
        find_user_mut(&mut self.users, username)?
            .folder_mut(foldername)?
            .create_file(filename, description, || clock.tick())
    }

    /// Delete a file from a user's folder.
    pub fn delete_file(&mut self, username: &str, foldername: &str, filename: &str) -> Result<()> {
        find_user_mut(&mut self.users, username)?
            .folder_mut(foldername)?
            .delete_file(filename)
    }

    /// List the files in a user's folder.
    pub fn list_files(
        &self,
        username: &str,
        foldername: &str,
        spec: SortSpec,
    ) -> Result<Vec<&File>> {
        Ok(self.folder(username, foldername)?.list_files(spec))
    }
}
