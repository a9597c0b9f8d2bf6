//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (axum serve, graceful shutdown)
//!     → prefix::ForwardedPrefixLayer (before route matching)
//!     → Router dispatch on routing remainder
//!     → request ids, tracing, timeout (route layers)
//!     → app handlers (read Mount from request.rs)
//! ```

pub mod request;
pub mod server;

pub use request::{request_id, Mount, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
