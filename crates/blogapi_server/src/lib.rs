//! # Blog API Server
//!
//! HTTP front end for the blog API.
//!
//! This crate provides:
//! - Request handlers for users, posts and login
//! - The axum router and the `{ success, data, message, error }` envelope
//! - Error taxonomy mapped to HTTP status codes
//! - Server configuration
//!
//! # Architecture
//!
//! Handlers own the policy the store leaves out: payload validation, email
//! uniqueness and author existence. Each mutating request runs its checks and
//! its write under a single exclusive lock on the store, so concurrent
//! requests cannot interleave between check and write.
//!
//! ```rust,ignore
//! use blogapi_server::{BlogServer, ServerConfig};
//!
//! let server = BlogServer::new(ServerConfig::default());
//! server.serve().await?;
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod auth;
mod config;
mod envelope;
mod error;
mod handler;
pub mod routes;
mod server;

pub use auth::TokenIssuer;
pub use config::ServerConfig;
pub use envelope::ApiResponse;
pub use error::{ApiError, ApiResult, INTERNAL_ERROR_MESSAGE};
pub use handler::{HandlerContext, LoginResponse, RequestHandler};
pub use server::BlogServer;
