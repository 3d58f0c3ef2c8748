//! Core type definitions for the blog API.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a user.
///
/// User IDs are monotonically increasing and never reused, even after the
/// user is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl UserId {
    /// Creates a new user ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Returns the next user ID.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a post.
///
/// Same assignment rules as [`UserId`], with its own counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub u64);

impl PostId {
    /// Creates a new post ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Returns the next post ID.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Point in time attached to every stored record.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_ordering() {
        let a = UserId::new(1);
        let b = a.next();
        assert!(a < b);
        assert_eq!(b.as_u64(), 2);
    }

    #[test]
    fn post_id_serializes_as_number() {
        let json = serde_json::to_string(&PostId::new(42)).unwrap();
        assert_eq!(json, "42");
    }

    #[test]
    fn ids_display_raw_value() {
        assert_eq!(format!("{}", UserId::new(7)), "7");
        assert_eq!(format!("{}", PostId::new(9)), "9");
    }
}
