//! Blog API CLI
//!
//! Command-line launcher for the blog API.
//!
//! # Commands
//!
//! - `serve` - Run the HTTP server
//! - `routes` - List the HTTP endpoints
//! - `inspect` - Show the data a fresh server starts with

mod commands;

use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;

/// Demonstration CRUD API for users and posts.
#[derive(Parser)]
#[command(name = "blogapi")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve {
        /// Address to listen on
        #[arg(short, long, env = "BLOGAPI_BIND", default_value = "127.0.0.1:3000")]
        bind: SocketAddr,

        /// Start without the demonstration users and posts
        #[arg(short, long)]
        empty: bool,
    },

    /// List the HTTP endpoints
    Routes {
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Show the data a fresh server starts with
    Inspect {
        /// Inspect an empty store instead of the demonstration data
        #[arg(short, long)]
        empty: bool,

        /// Include posts
        #[arg(short, long)]
        posts: bool,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Show version information
    Version,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // RUST_LOG wins over --verbose
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Serve { bind, empty } => {
            commands::serve::run(bind, empty)?;
        }
        Commands::Routes { format } => {
            commands::routes::run(&format)?;
        }
        Commands::Inspect {
            empty,
            posts,
            format,
        } => {
            commands::inspect::run(empty, posts, &format)?;
        }
        Commands::Version => {
            println!("blogapi CLI v{}", env!("CARGO_PKG_VERSION"));
            println!("blogapi core v{}", blogapi_core::VERSION);
        }
    }

    Ok(())
}
