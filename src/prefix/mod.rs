//! Reverse-proxy mount prefix subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (X-Forwarded-Prefix header, configured fallback)
//!     → resolver.rs (pick + normalize prefix, or None)
//!     → reconciler.rs (routing base, remainder, observed path, link prefix)
//!     → layer.rs (rewrite URI, store MountState, open task-local scope)
//!     → Router dispatch on the remainder
//!     → handlers / routing::urls read MountState or scope.rs
//! ```
//!
//! # Design Decisions
//! - The prefix is resolved once; every derived value comes from it
//! - No prefix means no mutation at all
//! - The link prefix lives in per-request context only, never in a global

pub mod layer;
pub mod reconciler;
pub mod resolver;
pub mod scope;
pub mod state;

pub use layer::{ForwardedPrefix, ForwardedPrefixLayer};
pub use reconciler::{reconcile, reconcile_request, Outcome};
pub use resolver::{resolve, resolve_from_headers, MountPrefix, X_FORWARDED_PREFIX};
pub use scope::current_prefix;
pub use state::MountState;
