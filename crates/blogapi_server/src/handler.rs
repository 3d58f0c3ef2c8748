//! Request handlers for the user, post and login endpoints.
//!
//! Handlers are transport-agnostic: they take decoded payloads and typed ids
//! and return domain values or an [`ApiError`]. The HTTP layer in
//! [`crate::routes`] wraps them in the response envelope.

use crate::auth::TokenIssuer;
use crate::config::ServerConfig;
use crate::error::{ApiError, ApiResult};
use blogapi_core::request::{
    normalize_email, AuthorFilter, CreatePostRequest, CreateUserRequest, LoginRequest, PostQuery,
    UpdatePostRequest, UpdateUserRequest,
};
use blogapi_core::validation::{
    validate_post, validate_post_update, validate_user, validate_user_update,
};
use blogapi_core::{
    EntityStore, NewPost, NewUser, Post, PostId, PostPatch, User, UserId, UserPatch,
};
use parking_lot::RwLock;
use serde::Serialize;
use std::sync::Arc;

const USER_NOT_FOUND: &str = "Usuário não encontrado";
const EMAIL_EXISTS: &str = "Usuário com este email já existe";
const EMAIL_TAKEN: &str = "Email já está em uso por outro usuário";
const POST_NOT_FOUND: &str = "Post não encontrado";
const AUTHOR_NOT_FOUND: &str = "Autor não encontrado";
const NEW_AUTHOR_NOT_FOUND: &str = "Novo autor não encontrado";
const CREDENTIALS_REQUIRED: &str = "Email e senha são obrigatórios";
const INVALID_CREDENTIALS: &str = "Credenciais inválidas";

/// Context for request handling.
pub struct HandlerContext {
    /// Server configuration.
    pub config: ServerConfig,
    /// The entity store. Mutating handlers hold the write lock for their
    /// whole check-then-write sequence.
    store: RwLock<EntityStore>,
    tokens: TokenIssuer,
}

impl HandlerContext {
    /// Creates a context with a fresh store, seeded per `config`.
    pub fn new(config: ServerConfig) -> Self {
        let store = if config.seed_demo_data {
            EntityStore::seeded()
        } else {
            EntityStore::new()
        };
        Self::with_store(config, store)
    }

    /// Creates a context around an existing store.
    pub fn with_store(config: ServerConfig, store: EntityStore) -> Self {
        let tokens = TokenIssuer::new(config.token_prefix.clone());
        Self {
            config,
            store: RwLock::new(store),
            tokens,
        }
    }

    /// Returns `(users, posts)` currently stored.
    pub fn counts(&self) -> (usize, usize) {
        let store = self.store.read();
        (store.user_count(), store.post_count())
    }
}

/// Payload of a successful login.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    /// The authenticated user, without password.
    pub user: User,
    /// Illustrative session token.
    pub token: String,
}

/// Handler for API requests. Cheap to clone; all clones share one context.
#[derive(Clone)]
pub struct RequestHandler {
    context: Arc<HandlerContext>,
}

impl RequestHandler {
    /// Creates a new request handler.
    pub fn new(context: Arc<HandlerContext>) -> Self {
        Self { context }
    }

    /// Returns the shared context.
    pub fn context(&self) -> &HandlerContext {
        &self.context
    }

    // ---- users ----

    /// `GET /api/users`
    pub fn list_users(&self) -> ApiResult<Vec<User>> {
        Ok(self.context.store.read().find_all_users())
    }

    /// `GET /api/users/{id}`
    pub fn get_user(&self, id: UserId) -> ApiResult<User> {
        self.context
            .store
            .read()
            .find_user_by_id(id)
            .ok_or_else(|| ApiError::NotFound(USER_NOT_FOUND.into()))
    }

    /// `POST /api/users`
    ///
    /// Stores the trimmed name and normalized email; an absent or empty
    /// password is replaced by the configured default.
    pub fn create_user(&self, request: CreateUserRequest) -> ApiResult<User> {
        validate_user(&request)?;

        let name = request.name.unwrap_or_default().trim().to_string();
        let email = normalize_email(&request.email.unwrap_or_default());
        let password = request
            .password
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| self.context.config.default_password.clone());

        let mut store = self.context.store.write();
        if store.find_user_by_email(&email).is_some() {
            return Err(ApiError::Conflict(EMAIL_EXISTS.into()));
        }
        let user = store.create_user(NewUser {
            name,
            email,
            password: Some(password),
        });
        tracing::info!(user_id = %user.id, "user created");
        Ok(user)
    }

    /// `PUT /api/users/{id}`
    pub fn update_user(&self, id: UserId, request: UpdateUserRequest) -> ApiResult<User> {
        validate_user_update(&request)?;

        let mut store = self.context.store.write();
        let existing = store
            .find_user_by_id(id)
            .ok_or_else(|| ApiError::NotFound(USER_NOT_FOUND.into()))?;

        let email = request.email.as_deref().map(normalize_email);
        if let Some(email) = &email {
            if *email != existing.email && store.find_user_by_email(email).is_some() {
                return Err(ApiError::Conflict(EMAIL_TAKEN.into()));
            }
        }

        let patch = UserPatch {
            name: request.name.map(|n| n.trim().to_string()),
            email,
            password: request.password,
        };
        if patch.is_empty() {
            tracing::debug!(user_id = %id, "user update without field changes");
        }
        let user = store
            .update_user(id, patch)
            .ok_or_else(|| ApiError::NotFound(USER_NOT_FOUND.into()))?;
        tracing::info!(user_id = %id, "user updated");
        Ok(user)
    }

    /// `DELETE /api/users/{id}`. Also removes the user's posts.
    pub fn delete_user(&self, id: UserId) -> ApiResult<()> {
        if !self.context.store.write().delete_user(id) {
            return Err(ApiError::NotFound(USER_NOT_FOUND.into()));
        }
        tracing::info!(user_id = %id, "user deleted");
        Ok(())
    }

    // ---- posts ----

    /// `GET /api/posts?authorId=&published=`
    pub fn list_posts(&self, query: &PostQuery) -> ApiResult<Vec<Post>> {
        let store = self.context.store.read();
        let mut posts = match query.author_filter() {
            Some(AuthorFilter::Author(author_id)) => store.find_posts_by_author_id(author_id),
            Some(AuthorFilter::Nobody) => Vec::new(),
            None => store.find_all_posts(),
        };
        if let Some(published) = query.published_filter() {
            posts.retain(|p| p.published == published);
        }
        tracing::debug!(count = posts.len(), "posts listed");
        Ok(posts)
    }

    /// `GET /api/posts/{id}`
    pub fn get_post(&self, id: PostId) -> ApiResult<Post> {
        self.context
            .store
            .read()
            .find_post_by_id(id)
            .ok_or_else(|| ApiError::NotFound(POST_NOT_FOUND.into()))
    }

    /// `POST /api/posts`
    pub fn create_post(&self, request: CreatePostRequest) -> ApiResult<Post> {
        validate_post(&request)?;

        let author_id = UserId::new(request.author_id.unwrap_or_default());
        let mut store = self.context.store.write();
        if store.find_user_by_id(author_id).is_none() {
            return Err(ApiError::NotFound(AUTHOR_NOT_FOUND.into()));
        }
        let post = store.create_post(NewPost {
            title: request.title.unwrap_or_default().trim().to_string(),
            content: request.content.unwrap_or_default().trim().to_string(),
            author_id,
            published: request.published.unwrap_or(false),
        });
        tracing::info!(post_id = %post.id, author_id = %author_id, "post created");
        Ok(post)
    }

    /// `PUT /api/posts/{id}`
    pub fn update_post(&self, id: PostId, request: UpdatePostRequest) -> ApiResult<Post> {
        validate_post_update(&request)?;

        let mut store = self.context.store.write();
        let existing = store
            .find_post_by_id(id)
            .ok_or_else(|| ApiError::NotFound(POST_NOT_FOUND.into()))?;

        let author_id = request.author_id.map(UserId::new);
        if let Some(author_id) = author_id {
            if author_id != existing.author_id && store.find_user_by_id(author_id).is_none() {
                return Err(ApiError::NotFound(NEW_AUTHOR_NOT_FOUND.into()));
            }
        }

        let patch = PostPatch {
            title: request.title.map(|t| t.trim().to_string()),
            content: request.content.map(|c| c.trim().to_string()),
            author_id,
            published: request.published,
        };
        let post = store
            .update_post(id, patch)
            .ok_or_else(|| ApiError::NotFound(POST_NOT_FOUND.into()))?;
        tracing::info!(post_id = %id, "post updated");
        Ok(post)
    }

    /// `DELETE /api/posts/{id}`
    pub fn delete_post(&self, id: PostId) -> ApiResult<()> {
        if !self.context.store.write().delete_post(id) {
            return Err(ApiError::NotFound(POST_NOT_FOUND.into()));
        }
        tracing::info!(post_id = %id, "post deleted");
        Ok(())
    }

    // ---- auth ----

    /// `POST /api/auth/login`
    ///
    /// The password is required but not compared; any user that has a
    /// password on record is accepted.
    pub fn login(&self, request: LoginRequest) -> ApiResult<LoginResponse> {
        let email = request.email.filter(|e| !e.is_empty());
        let password = request.password.filter(|p| !p.is_empty());
        let (Some(email), Some(_password)) = (email, password) else {
            return Err(ApiError::Validation(CREDENTIALS_REQUIRED.into()));
        };

        let store = self.context.store.read();
        let record = store
            .find_user_by_email(&normalize_email(&email))
            .filter(|u| u.password.is_some())
            .ok_or_else(|| ApiError::Unauthorized(INVALID_CREDENTIALS.into()))?;

        let token = self.context.tokens.issue(record.id);
        tracing::info!(user_id = %record.id, "login succeeded");
        Ok(LoginResponse {
            user: record.to_public(),
            token,
        })
    }
}
