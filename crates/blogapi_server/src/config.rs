//! Server configuration.

use std::net::SocketAddr;

/// Configuration for the blog API server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to.
    pub bind_addr: SocketAddr,
    /// Whether to start with the demonstration users and posts.
    pub seed_demo_data: bool,
    /// Prefix of issued login tokens.
    pub token_prefix: String,
    /// Password stored for users created without one.
    pub default_password: String,
}

impl ServerConfig {
    /// Creates a new server configuration.
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            seed_demo_data: true,
            token_prefix: "mock-jwt-token".into(),
            default_password: "defaultpassword".into(),
        }
    }

    /// Sets whether the store starts with demonstration data.
    pub fn with_seed_demo_data(mut self, seed: bool) -> Self {
        self.seed_demo_data = seed;
        self
    }

    /// Sets the login token prefix.
    pub fn with_token_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.token_prefix = prefix.into();
        self
    }

    /// Sets the password stored for users created without one.
    pub fn with_default_password(mut self, password: impl Into<String>) -> Self {
        self.default_password = password.into();
        self
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(SocketAddr::from(([127, 0, 0, 1], 3000)))
    }
}
