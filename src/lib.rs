//! VFS - Virtual File System
//!
//! An in-memory namespace of users, folders and files with an interactive
//! shell, implemented in Rust.

pub mod config;
pub mod datetime;
pub mod error;
pub mod logging;
pub mod namespace;
pub mod shell;

pub use config::Config;
pub use error::{EntityKind, Result, VfsError};
pub use namespace::{
    normalize_name, validate_name, File, Folder, Namespace, SortKey, SortOrder, SortSpec, User,
    ValidationError, FORBIDDEN_CHARS,
};
pub use shell::{parse_input, Command, CommandError, Outcome, Shell};
