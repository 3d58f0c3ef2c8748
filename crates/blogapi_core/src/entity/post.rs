//! Post records and their joined view.

use crate::entity::User;
use crate::types::{PostId, Timestamp, UserId};
use serde::Serialize;

/// A post as held by the store. The author is referenced by id only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRecord {
    /// Store-assigned identifier.
    pub id: PostId,
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
    /// Whether the post is visible to readers.
    pub published: bool,
    /// Owning user.
    pub author_id: UserId,
    /// Creation time.
    pub created_at: Timestamp,
    /// Last modification time.
    pub updated_at: Timestamp,
}

impl PostRecord {
    /// Builds the read view with the given author attached.
    #[must_use]
    pub fn with_author(&self, author: Option<User>) -> Post {
        Post {
            id: self.id,
            title: self.title.clone(),
            content: self.content.clone(),
            published: self.published,
            author_id: self.author_id,
            author,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub(crate) fn apply(&mut self, patch: PostPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(author_id) = patch.author_id {
            self.author_id = author_id;
        }
        if let Some(published) = patch.published {
            self.published = published;
        }
    }
}

/// A post as returned to callers, with its author joined at read time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Store-assigned identifier.
    pub id: PostId,
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
    /// Whether the post is visible to readers.
    pub published: bool,
    /// Owning user.
    pub author_id: UserId,
    /// The owning user, absent only if the store is inconsistent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<User>,
    /// Creation time.
    pub created_at: Timestamp,
    /// Last modification time.
    pub updated_at: Timestamp,
}

/// Input for creating a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
    /// Owning user. Not checked by the store.
    pub author_id: UserId,
    /// Whether the post is visible to readers.
    pub published: bool,
}

/// Partial update for a post. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostPatch {
    /// New title.
    pub title: Option<String>,
    /// New body.
    pub content: Option<String>,
    /// New owner.
    pub author_id: Option<UserId>,
    /// New visibility.
    pub published: Option<bool>,
}
