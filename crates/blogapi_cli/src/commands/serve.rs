//! Serve command implementation.

use blogapi_server::{BlogServer, ServerConfig};
use std::net::SocketAddr;

/// Runs the server until Ctrl-C.
pub fn run(bind: SocketAddr, empty: bool) -> Result<(), Box<dyn std::error::Error>> {
    tracing::debug!(%bind, seed = !empty, "starting server");
    let config = ServerConfig::new(bind).with_seed_demo_data(!empty);
    let server = BlogServer::new(config);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(server.serve())?;
    Ok(())
}
