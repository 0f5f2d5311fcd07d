//! Folders and the file registry each one owns.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::debug;

use super::file::File;
use super::sort::{sorted, CreatedAt, Listable, SortSpec};
use super::validation::{normalize_name, validate_name};
use crate::error::{EntityKind, VfsError};
use crate::Result;

/// A folder owned by a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folder {
    name: String,
    description: String,
    files: HashMap<String, File>,
    created: CreatedAt,
}

impl Folder {
    pub(crate) fn new(name: String, description: String, created: CreatedAt) -> Self {
        Self {
            name,
            description,
            files: HashMap::new(),
            created,
        }
    }

    /// Normalized folder name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Folder description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// When the folder was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created.time()
    }

    /// Look up a file by name (case-insensitive).
    pub fn file(&self, filename: &str) -> Option<&File> {
        self.files.get(&normalize_name(filename))
    }

    /// Number of files in the folder.
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Check if the folder holds no files.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// List the files ordered by `spec`.
    pub fn list_files(&self, spec: SortSpec) -> Vec<&File> {
        sorted(self.files.values(), spec)
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    /// Add a file. The stamp is taken only once the name is accepted.
    pub(crate) fn create_file(
        &mut self,
        filename: &str,
        description: &str,
        stamp: impl FnOnce() -> CreatedAt,
    ) -> Result<()> {
        let filename = normalize_name(filename);
        validate_name(&filename)?;

        if self.files.contains_key(&filename) {
            return Err(VfsError::already_exists(EntityKind::File, filename));
        }

        let file = File::new(filename.clone(), description.to_string(), stamp());
        self.files.insert(filename.clone(), file);
        debug!("Created file {} in folder {}", filename, self.name);
        Ok(())
    }

    pub(crate) fn delete_file(&mut self, filename: &str) -> Result<()> {
        let filename = normalize_name(filename);
        match self.files.remove(&filename) {
            Some(_) => {
                debug!("Deleted file {} from folder {}", filename, self.name);
                Ok(())
            }
            None => Err(VfsError::not_found(EntityKind::File, filename)),
        }
    }
}

impl Listable for Folder {
    fn name(&self) -> &str {
        &self.name
    }

    fn created(&self) -> CreatedAt {
        self.created
    }
}
