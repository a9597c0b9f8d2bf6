//! Request-side helpers.
//!
//! # Responsibilities
//! - Name the request ID header set by tower-http
//! - Expose the reconciled `MountState` to handlers as an extractor
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - Handlers never re-derive paths from the URI; they read `Mount`

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::HeaderMap;

use crate::prefix::MountState;

pub const X_REQUEST_ID: &str = "x-request-id";

/// Request ID of the current request, or `"unknown"`.
pub fn request_id(headers: &HeaderMap) -> &str {
    headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
}

/// Mount state of the current request.
///
/// Requests that passed through without a prefix get an unmounted state
/// built from the URI, so handlers do not have to special-case them.
#[derive(Debug, Clone)]
pub struct Mount(pub MountState);

impl<S> FromRequestParts<S> for Mount
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let state = parts
            .extensions
            .get::<MountState>()
            .cloned()
            .unwrap_or_else(|| MountState::from_path(parts.uri.path()));
        Ok(Mount(state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefix::{reconcile_request, MountPrefix};
    use axum::http::Request;

    #[tokio::test]
    async fn test_mount_reads_extension() {
        let mut req = Request::builder().uri("/app/x").body(()).unwrap();
        reconcile_request(&mut req, &MountPrefix::normalize("app").unwrap());
        let (mut parts, _) = req.into_parts();

        let Mount(state) = Mount::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(state.script_name(), "/app");
        assert_eq!(state.path_info(), "/x");
    }

    #[tokio::test]
    async fn test_mount_without_prefix() {
        let req = Request::builder().uri("/x?y=1").body(()).unwrap();
        let (mut parts, _) = req.into_parts();

        let Mount(state) = Mount::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(state.script_name(), "");
        assert_eq!(state.path(), "/x");
        assert!(state.url_prefix().is_none());
    }

    #[test]
    fn test_request_id_default() {
        assert_eq!(request_id(&HeaderMap::new()), "unknown");
    }
}
