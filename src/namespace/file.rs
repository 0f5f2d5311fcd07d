//! File entries.

use chrono::{DateTime, Utc};

use super::sort::{CreatedAt, Listable};

/// A file inside a folder. Only its name and metadata exist; there is no content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    name: String,
    description: String,
    created: CreatedAt,
}

impl File {
    pub(crate) fn new(name: String, description: String, created: CreatedAt) -> Self {
        Self {
            name,
            description,
            created,
        }
    }

    /// Normalized file name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// File description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// When the file was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created.time()
    }
}

impl Listable for File {
    fn name(&self) -> &str {
        &self.name
    }

    fn created(&self) -> CreatedAt {
        self.created
    }
}
