//! Main blog API server.

use crate::config::ServerConfig;
use crate::handler::{HandlerContext, RequestHandler};
use crate::routes;
use axum::Router;
use blogapi_core::EntityStore;
use std::io;
use std::sync::Arc;
use tokio::net::TcpListener;

/// The blog API server.
///
/// Owns one [`HandlerContext`] (and therefore one store) for its lifetime.
///
/// # Example
///
/// ```no_run
/// use blogapi_server::{BlogServer, ServerConfig};
///
/// # async fn run() -> std::io::Result<()> {
/// let server = BlogServer::new(ServerConfig::default());
/// server.serve().await
/// # }
/// ```
pub struct BlogServer {
    handler: RequestHandler,
}

impl BlogServer {
    /// Creates a new server with a store seeded per `config`.
    pub fn new(config: ServerConfig) -> Self {
        let context = Arc::new(HandlerContext::new(config));
        Self {
            handler: RequestHandler::new(context),
        }
    }

    /// Creates a server around an existing store.
    pub fn with_store(config: ServerConfig, store: EntityStore) -> Self {
        let context = Arc::new(HandlerContext::with_store(config, store));
        Self {
            handler: RequestHandler::new(context),
        }
    }

    /// Returns the request handler.
    pub fn handler(&self) -> &RequestHandler {
        &self.handler
    }

    /// Builds the HTTP router.
    pub fn router(&self) -> Router {
        routes::router(self.handler.clone())
    }

    /// Binds the configured address and serves until Ctrl-C.
    pub async fn serve(self) -> io::Result<()> {
        let context = self.handler.context();
        let listener = TcpListener::bind(context.config.bind_addr).await?;
        let (users, posts) = context.counts();
        tracing::info!(
            addr = %listener.local_addr()?,
            users,
            posts,
            "blog API listening"
        );

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown requested"),
        Err(e) => {
            tracing::warn!(error = %e, "cannot listen for Ctrl-C, running until killed");
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_lifecycle() {
        let server = BlogServer::new(ServerConfig::default());
        assert_eq!(server.handler().context().counts(), (2, 2));
    }

    #[test]
    fn unseeded_server_is_empty() {
        let server = BlogServer::new(ServerConfig::default().with_seed_demo_data(false));
        assert_eq!(server.handler().context().counts(), (0, 0));
    }

    #[test]
    fn shared_store() {
        let server = BlogServer::with_store(ServerConfig::default(), EntityStore::seeded());
        server.handler().delete_user(blogapi_core::UserId::new(2)).unwrap();
        assert_eq!(server.handler().context().counts(), (1, 1));
    }
}
