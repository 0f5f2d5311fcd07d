//! Namespace module.
//!
//! This module provides the in-memory naming layer:
//! - User registry (globally unique, case-insensitive usernames)
//! - Per-user folder registry with description and creation time
//! - Per-folder file registry
//! - Name validation against a forbidden-character policy
//! - Sorted listings by name or creation time

mod file;
mod folder;
mod sort;
mod store;
mod user;
mod validation;

pub use file::File;
pub use folder::Folder;
pub use sort::{sorted, CreatedAt, Listable, SortKey, SortOrder, SortSpec};
pub use store::Namespace;
pub use user::User;
pub use validation::{
    is_forbidden_char, normalize_name, validate_name, ValidationError, FORBIDDEN_CHARS,
};
