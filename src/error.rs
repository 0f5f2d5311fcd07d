//! Error types for the virtual file system.

use std::fmt;

use thiserror::Error;

use crate::namespace::ValidationError;

/// Level of the namespace an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// A registered user.
    User,
    /// A folder owned by a user.
    Folder,
    /// A file inside a folder.
    File,
}

impl EntityKind {
    /// Get the lowercase name used in messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::User => "user",
            EntityKind::Folder => "folder",
            EntityKind::File => "file",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Common error type for the virtual file system.
#[derive(Error, Debug)]
pub enum VfsError {
    /// The name failed the character policy.
    #[error("{0}")]
    InvalidName(#[from] ValidationError),

    /// The referenced user, folder or file does not exist.
    #[error("the {kind} {name} doesn't exist")]
    NotFound { kind: EntityKind, name: String },

    /// A user, folder or file with the same name already exists in that scope.
    #[error("the {kind} {name} has already existed")]
    AlreadyExists { kind: EntityKind, name: String },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl VfsError {
    pub(crate) fn not_found(kind: EntityKind, name: impl Into<String>) -> Self {
        VfsError::NotFound {
            kind,
            name: name.into(),
        }
    }

    pub(crate) fn already_exists(kind: EntityKind, name: impl Into<String>) -> Self {
        VfsError::AlreadyExists {
            kind,
            name: name.into(),
        }
    }

    /// Check whether this is a `NotFound` error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, VfsError::NotFound { .. })
    }

    /// Check whether this is an `AlreadyExists` error.
    pub fn is_already_exists(&self) -> bool {
        matches!(self, VfsError::AlreadyExists { .. })
    }

    /// Check whether this is an `InvalidName` error.
    pub fn is_invalid_name(&self) -> bool {
        matches!(self, VfsError::InvalidName(_))
    }

    /// The namespace level a `NotFound` or `AlreadyExists` error refers to.
    pub fn kind(&self) -> Option<EntityKind> {
        match self {
            VfsError::NotFound { kind, .. } | VfsError::AlreadyExists { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

/// Result type alias for virtual file system operations.
pub type Result<T> = std::result::Result<T, VfsError>;
