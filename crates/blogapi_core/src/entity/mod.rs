//! Entity types and storage.

mod post;
mod store;
mod user;

pub use post::{NewPost, Post, PostPatch, PostRecord};
pub use store::EntityStore;
pub use user::{NewUser, User, UserPatch, UserRecord};
