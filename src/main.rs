//! Application server mounted behind a reverse proxy (v1)
//!
//! # Architecture Overview
//!
//! ```text
//!   Reverse proxy                 ┌──────────────────────────────────────────────┐
//!   strips /app, sets             │                 APPLICATION                  │
//!   X-Forwarded-Prefix: /app      │                                              │
//!   ──────────────────────────────┼─▶ ForwardedPrefixLayer                       │
//!                                 │     resolver   → /app                        │
//!                                 │     reconciler → script_name  = /app         │
//!                                 │                  path_info    = /dashboard   │
//!                                 │                  path         = /app/dashb.. │
//!                                 │                  url prefix   = /app (scope) │
//!                                 │        │                                     │
//!                                 │        ▼                                     │
//!                                 │   Router (matches path_info)                 │
//!                                 │        │                                     │
//!                                 │        ▼                                     │
//!   Location: /app/profile/       │   handlers → UrlMap (links, redirects)       │
//!   ◀─────────────────────────────┼──                                            │
//!                                 └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;

use forwarded_prefix::config::load_config;
use forwarded_prefix::lifecycle::startup;

#[derive(Parser)]
#[command(name = "forwarded-prefix")]
#[command(about = "Web application that honours reverse proxy mount prefixes", long_about = None)]
struct Cli {
    /// TOML configuration file; defaults are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    startup::run(config).await
}
