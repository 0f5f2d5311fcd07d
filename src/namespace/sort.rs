//! Ordering of folder and file listings.

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, Utc};

/// Creation time of an entry.
///
/// Ordered by wall-clock time first, then by a store-wide sequence number,
/// so entries created within the same instant still compare in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CreatedAt {
    at: DateTime<Utc>,
    seq: u64,
}

impl CreatedAt {
    /// Create a new stamp.
    pub fn new(at: DateTime<Utc>, seq: u64) -> Self {
        Self { at, seq }
    }

    /// Get the wall-clock time.
    pub fn time(&self) -> DateTime<Utc> {
        self.at
    }
}

/// An entry that can appear in a listing.
pub trait Listable {
    /// Normalized name.
    fn name(&self) -> &str;
    /// Creation stamp.
    fn created(&self) -> CreatedAt;
}

/// Field to sort a listing by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Lexicographic by normalized name.
    #[default]
    Name,
    /// Chronological by creation time.
    Created,
}

impl SortKey {
    /// Parse a sort key. Returns `None` for anything but `name` or `created`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "name" => Some(SortKey::Name),
            "created" => Some(SortKey::Created),
            _ => None,
        }
    }

    /// Get the key as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Created => "created",
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Ascending.
    #[default]
    Asc,
    /// Descending.
    Desc,
}

impl SortOrder {
    /// Parse a direction. Anything but `desc` is ascending.
    pub fn parse(s: &str) -> Self {
        match s {
            "desc" => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }

    /// Get the direction as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// How to order a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortSpec {
    /// Field to compare.
    pub key: SortKey,
    /// Direction.
    pub order: SortOrder,
}

impl SortSpec {
    /// Create a new sort spec.
    pub fn new(key: SortKey, order: SortOrder) -> Self {
        Self { key, order }
    }

    /// Build a spec from loosely-typed strings.
    ///
    /// An unrecognized sort key yields name-ascending no matter which order
    /// was requested. An unrecognized order yields ascending.
    pub fn parse(sort_by: &str, order: &str) -> Self {
        match SortKey::parse(sort_by) {
            Some(key) => Self::new(key, SortOrder::parse(order)),
            None => Self::default(),
        }
    }

    fn compare<T: Listable>(&self, a: &T, b: &T) -> Ordering {
        let ordering = match self.key {
            SortKey::Name => a.name().cmp(b.name()),
            SortKey::Created => a.created().cmp(&b.created()),
        };
        match self.order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.key.as_str(), self.order.as_str())
    }
}

/// Materialize entries into a new vector ordered by `spec`.
///
/// The source collection is left untouched.
pub fn sorted<'a, T, I>(entries: I, spec: SortSpec) -> Vec<&'a T>
where
    T: Listable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut list: Vec<&T> = entries.into_iter().collect();
    list.sort_by(|a, b| spec.compare(*a, *b));
    list
}
