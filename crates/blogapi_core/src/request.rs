//! Request payloads accepted by the API.
//!
//! Every field is optional at the serde level. Missing required fields are
//! reported by [`crate::validation`] with a proper message instead of a
//! generic decode failure.

use crate::types::UserId;
use serde::Deserialize;

/// Body of `POST /api/users`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    /// Display name, at least two characters.
    pub name: Option<String>,
    /// Email address.
    pub email: Option<String>,
    /// Optional password; a default is stored when absent or empty.
    pub password: Option<String>,
}

/// Body of `PUT /api/users/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    /// New display name.
    pub name: Option<String>,
    /// New email address.
    pub email: Option<String>,
    /// New password.
    pub password: Option<String>,
}

/// Body of `POST /api/posts`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    /// Post title.
    pub title: Option<String>,
    /// Post body.
    pub content: Option<String>,
    /// Owning user.
    pub author_id: Option<u64>,
    /// Visibility, false when absent.
    pub published: Option<bool>,
}

/// Body of `PUT /api/posts/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    /// New title.
    pub title: Option<String>,
    /// New body.
    pub content: Option<String>,
    /// New owner.
    pub author_id: Option<u64>,
    /// New visibility.
    pub published: Option<bool>,
}

/// Body of `POST /api/auth/login`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Account email.
    pub email: Option<String>,
    /// Account password.
    pub password: Option<String>,
}

/// Query string of `GET /api/posts`.
///
/// Kept as raw strings so that a bad `authorId` disables the filter instead
/// of failing the request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostQuery {
    /// Author filter.
    pub author_id: Option<String>,
    /// Published filter.
    pub published: Option<String>,
}

/// Author restriction derived from `?authorId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorFilter {
    /// Only posts by this author.
    Author(UserId),
    /// A negative id: no author can match.
    Nobody,
}

impl PostQuery {
    /// Builds a query from decoded `key=value` pairs.
    ///
    /// When a key repeats, the first value wins and the rest are ignored.
    /// Unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "authorId" => &mut query.author_id,
                "published" => &mut query.published,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }

    /// The author filter, if present and an integer.
    ///
    /// Anything that is not an integer disables the filter. A negative
    /// integer is kept as [`AuthorFilter::Nobody`].
    #[must_use]
    pub fn author_filter(&self) -> Option<AuthorFilter> {
        let raw: i64 = self.author_id.as_deref()?.trim().parse().ok()?;
        Some(match u64::try_from(raw) {
            Ok(id) => AuthorFilter::Author(UserId::new(id)),
            Err(_) => AuthorFilter::Nobody,
        })
    }

    /// The published filter. Only the literal `"true"` selects published
    /// posts; any other value selects unpublished ones.
    #[must_use]
    pub fn published_filter(&self) -> Option<bool> {
        self.published.as_deref().map(|raw| raw == "true")
    }
}

/// Canonical form of an email: trimmed and lowercased.
#[must_use]
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_post_reads_camel_case() {
        let req: CreatePostRequest =
            serde_json::from_str(r#"{"title":"T","content":"C","authorId":1}"#).unwrap();
        assert_eq!(req.author_id, Some(1));
        assert_eq!(req.published, None);
    }

    #[test]
    fn bad_author_filter_is_ignored() {
        let query = PostQuery {
            author_id: Some("abc".into()),
            published: None,
        };
        assert_eq!(query.author_filter(), None);
        assert_eq!(query.published_filter(), None);
    }

    #[test]
    fn negative_author_filter_matches_nobody() {
        let query = |v: &str| PostQuery {
            author_id: Some(v.into()),
            published: None,
        };
        assert_eq!(query("-1").author_filter(), Some(AuthorFilter::Nobody));
        assert_eq!(
            query(" 2 ").author_filter(),
            Some(AuthorFilter::Author(UserId::new(2)))
        );
        assert_eq!(query("1.5").author_filter(), None);
    }

    #[test]
    fn repeated_query_keys_keep_first_value() {
        let pairs = [
            ("published", "true"),
            ("published", "false"),
            ("page", "2"),
            ("authorId", "1"),
        ]
        .map(|(k, v)| (k.to_string(), v.to_string()));
        let query = PostQuery::from_pairs(pairs);
        assert_eq!(query.published.as_deref(), Some("true"));
        assert_eq!(query.author_id.as_deref(), Some("1"));
    }

    #[test]
    fn published_filter_values() {
        let query = |v: &str| PostQuery {
            author_id: None,
            published: Some(v.into()),
        };
        assert_eq!(query("true").published_filter(), Some(true));
        assert_eq!(query("false").published_filter(), Some(false));
        assert_eq!(query("yes").published_filter(), Some(false));
    }

    #[test]
    fn email_normalization() {
        assert_eq!(normalize_email("  Ana@X.com "), "ana@x.com");
    }
}
