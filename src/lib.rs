//! Reverse-proxy prefix reconciliation for web applications mounted
//! under a URL sub-path.

pub mod app;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod prefix;
pub mod routing;
pub mod services;

pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use prefix::{ForwardedPrefixLayer, MountPrefix, MountState};
