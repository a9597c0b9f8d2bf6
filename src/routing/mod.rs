//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route table (at startup):
//!     app::routes() (name, path)
//!     → axum Router (dispatch on routing remainder)
//!     → urls.rs UrlMap (name → template, frozen)
//!
//! Link generation (per request):
//!     route name + params + mount prefix
//!     → urls.rs → outward URL / redirect Location
//! ```
//!
//! # Design Decisions
//! - One route table feeds both dispatch and reverse routing
//! - Reverse routing never reads shared mutable state

pub mod urls;

pub use urls::{login_redirect, ReverseError, UrlMap};
