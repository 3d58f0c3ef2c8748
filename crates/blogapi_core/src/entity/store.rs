//! Entity store for CRUD operations.

use crate::entity::{NewPost, NewUser, Post, PostPatch, PostRecord, User, UserPatch, UserRecord};
use crate::types::{PostId, Timestamp, UserId};
use chrono::{DateTime, Duration, Utc};

/// In-memory owner of the user and post collections.
///
/// Both collections keep insertion order and are searched linearly. The store
/// does not enforce email uniqueness or author existence; callers check those
/// before writing. What it does guarantee:
/// - ids come from per-collection counters and are never reused
/// - `updated_at` strictly increases on every update
/// - deleting a user removes every post it authored
///
/// Mutating methods take `&mut self`, so a shared store has to sit behind a
/// lock; each call is atomic with respect to that lock.
///
/// # Example
///
/// ```rust
/// use blogapi_core::{EntityStore, NewUser};
///
/// let mut store = EntityStore::new();
/// let user = store.create_user(NewUser {
///     name: "Ana".into(),
///     email: "ana@x.com".into(),
///     password: None,
/// });
/// assert_eq!(user.id.as_u64(), 1);
/// assert!(store.find_user_by_id(user.id).is_some());
/// ```
#[derive(Debug, Clone)]
pub struct EntityStore {
    users: Vec<UserRecord>,
    posts: Vec<PostRecord>,
    next_user_id: UserId,
    next_post_id: PostId,
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityStore {
    /// Creates an empty store. The first ids handed out are 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            posts: Vec::new(),
            next_user_id: UserId::new(1),
            next_post_id: PostId::new(1),
        }
    }

    /// Creates a store holding the demonstration data set.
    ///
    /// Two users (ids 1 and 2) and one post by each; the next ids are 3.
    #[must_use]
    pub fn seeded() -> Self {
        let jan_1 = seed_date(1_704_067_200);
        let jan_2 = seed_date(1_704_153_600);

        let users = vec![
            UserRecord {
                id: UserId::new(1),
                name: "João Silva".into(),
                email: "joao@exemplo.com".into(),
                password: Some("hashedpassword123".into()),
                created_at: jan_1,
                updated_at: jan_1,
            },
            UserRecord {
                id: UserId::new(2),
                name: "Maria Santos".into(),
                email: "maria@exemplo.com".into(),
                password: Some("hashedpassword456".into()),
                created_at: jan_2,
                updated_at: jan_2,
            },
        ];
        let posts = vec![
            PostRecord {
                id: PostId::new(1),
                title: "Primeiro Post".into(),
                content: "Este é o conteúdo do primeiro post.".into(),
                published: true,
                author_id: UserId::new(1),
                created_at: jan_1,
                updated_at: jan_1,
            },
            PostRecord {
                id: PostId::new(2),
                title: "Segundo Post".into(),
                content: "Conteúdo do segundo post com mais detalhes.".into(),
                published: false,
                author_id: UserId::new(2),
                created_at: jan_2,
                updated_at: jan_2,
            },
        ];

        Self {
            users,
            posts,
            next_user_id: UserId::new(3),
            next_post_id: PostId::new(3),
        }
    }

    /// Returns the number of live users.
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Returns the number of live posts.
    pub fn post_count(&self) -> usize {
        self.posts.len()
    }

    // ---- users ----

    /// Returns every user in insertion order, without passwords.
    pub fn find_all_users(&self) -> Vec<User> {
        self.users.iter().map(UserRecord::to_public).collect()
    }

    /// Looks up a user by id, without password.
    pub fn find_user_by_id(&self, id: UserId) -> Option<User> {
        self.user_record(id).map(UserRecord::to_public)
    }

    /// Exact, case-sensitive lookup by email. Includes the password.
    pub fn find_user_by_email(&self, email: &str) -> Option<&UserRecord> {
        self.users.iter().find(|u| u.email == email)
    }

    /// Stores a new user and returns it without password.
    pub fn create_user(&mut self, data: NewUser) -> User {
        let id = self.next_user_id;
        self.next_user_id = id.next();

        let now = Utc::now();
        let record = UserRecord {
            id,
            name: data.name,
            email: data.email,
            password: data.password,
            created_at: now,
            updated_at: now,
        };
        let user = record.to_public();
        self.users.push(record);
        tracing::debug!(user_id = %id, "user created");
        user
    }

    /// Merges `patch` into the user and refreshes `updated_at`.
    ///
    /// Returns `None` if no user has this id.
    pub fn update_user(&mut self, id: UserId, patch: UserPatch) -> Option<User> {
        let record = self.users.iter_mut().find(|u| u.id == id)?;
        record.apply(patch);
        record.updated_at = advance(record.updated_at);
        Some(record.to_public())
    }

    /// Removes the user and every post it authored.
    ///
    /// Returns `false` if no user has this id.
    pub fn delete_user(&mut self, id: UserId) -> bool {
        let Some(index) = self.users.iter().position(|u| u.id == id) else {
            return false;
        };
        self.users.remove(index);

        let before = self.posts.len();
        self.posts.retain(|p| p.author_id != id);
        tracing::debug!(
            user_id = %id,
            cascaded_posts = before - self.posts.len(),
            "user deleted"
        );
        true
    }

    // ---- posts ----

    /// Returns every post in insertion order with its author attached.
    pub fn find_all_posts(&self) -> Vec<Post> {
        self.posts.iter().map(|p| self.join_author(p)).collect()
    }

    /// Looks up a post by id with its author attached.
    pub fn find_post_by_id(&self, id: PostId) -> Option<Post> {
        self.posts
            .iter()
            .find(|p| p.id == id)
            .map(|p| self.join_author(p))
    }

    /// Returns the posts of one author, in insertion order.
    pub fn find_posts_by_author_id(&self, author_id: UserId) -> Vec<Post> {
        self.posts
            .iter()
            .filter(|p| p.author_id == author_id)
            .map(|p| self.join_author(p))
            .collect()
    }

    /// Stores a new post. The author id is taken as given.
    pub fn create_post(&mut self, data: NewPost) -> Post {
        let id = self.next_post_id;
        self.next_post_id = id.next();

        let now = Utc::now();
        let record = PostRecord {
            id,
            title: data.title,
            content: data.content,
            published: data.published,
            author_id: data.author_id,
            created_at: now,
            updated_at: now,
        };
        let post = self.join_author(&record);
        self.posts.push(record);
        tracing::debug!(post_id = %id, author_id = %data.author_id, "post created");
        post
    }

    /// Merges `patch` into the post, refreshes `updated_at` and re-joins the
    /// author.
    pub fn update_post(&mut self, id: PostId, patch: PostPatch) -> Option<Post> {
        let index = self.posts.iter().position(|p| p.id == id)?;
        let record = &mut self.posts[index];
        record.apply(patch);
        record.updated_at = advance(record.updated_at);
        Some(self.join_author(&self.posts[index]))
    }

    /// Removes a post. Returns `false` if no post has this id.
    pub fn delete_post(&mut self, id: PostId) -> bool {
        let Some(index) = self.posts.iter().position(|p| p.id == id) else {
            return false;
        };
        self.posts.remove(index);
        true
    }

    fn user_record(&self, id: UserId) -> Option<&UserRecord> {
        self.users.iter().find(|u| u.id == id)
    }

    fn join_author(&self, post: &PostRecord) -> Post {
        post.with_author(self.find_user_by_id(post.author_id))
    }
}

/// Current time, bumped past `previous` if the clock has not moved.
fn advance(previous: Timestamp) -> Timestamp {
    let now = Utc::now();
    if now > previous {
        now
    } else {
        previous + Duration::microseconds(1)
    }
}

fn seed_date(unix_secs: i64) -> Timestamp {
    DateTime::from_timestamp(unix_secs, 0).unwrap_or_default()
}
