//! # Blog API Core
//!
//! Data model and in-memory persistence for the blog API.
//!
//! This crate provides:
//! - User and post records, with password-free public views
//! - The [`EntityStore`], sole owner of both collections
//! - Request payload types and their validation rules
//!
//! The store is deliberately policy-free: it assigns ids and timestamps,
//! joins authors onto posts and cascades user deletes, but email uniqueness
//! and author existence are checked by the caller before writing.

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub mod entity;
mod error;
pub mod request;
mod types;
pub mod validation;

pub use entity::{
    EntityStore, NewPost, NewUser, Post, PostPatch, PostRecord, User, UserPatch, UserRecord,
};
pub use error::{ValidationError, ValidationErrors, ValidationResult};
pub use types::{PostId, Timestamp, UserId};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
