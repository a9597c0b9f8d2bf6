//! Tower middleware applying the mount prefix.
//!
//! Wrap the whole `Router` with it, not individual routes, so it runs
//! before route matching:
//!
//! ```ignore
//! let app = ForwardedPrefixLayer::new().with_fallback("billing").layer(router);
//! axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;
//! ```

use std::sync::Arc;
use std::task::{Context, Poll};

use axum::http::{HeaderName, Request};
use tokio::task::futures::TaskLocalFuture;
use tower::{Layer, Service};

use crate::config::PrefixConfig;
use crate::observability::metrics;
use crate::prefix::reconciler::reconcile_request;
use crate::prefix::resolver::{resolve_from_headers, MountPrefix, X_FORWARDED_PREFIX};
use crate::prefix::scope;

/// Layer producing [`ForwardedPrefix`] services.
#[derive(Debug, Clone)]
pub struct ForwardedPrefixLayer {
    header: HeaderName,
    fallback: Option<Arc<str>>,
}

impl ForwardedPrefixLayer {
    /// Read `X-Forwarded-Prefix`, no fallback.
    pub fn new() -> Self {
        Self {
            header: HeaderName::from_static(X_FORWARDED_PREFIX),
            fallback: None,
        }
    }

    pub fn with_header(mut self, header: HeaderName) -> Self {
        self.header = header;
        self
    }

    /// Static prefix used when the header is absent.
    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = Some(Arc::from(fallback.into()));
        self
    }

    pub fn from_config(config: &PrefixConfig) -> Self {
        let header = HeaderName::try_from(config.header.as_str()).unwrap_or_else(|_| {
            tracing::warn!(header = %config.header, "Invalid prefix header name, using default");
            HeaderName::from_static(X_FORWARDED_PREFIX)
        });
        let mut layer = Self::new().with_header(header);
        if let Some(fallback) = &config.fallback {
            layer = layer.with_fallback(fallback.clone());
        }
        layer
    }

    /// Header the prefix is read from.
    pub fn header(&self) -> &HeaderName {
        &self.header
    }
}

impl Default for ForwardedPrefixLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Layer<S> for ForwardedPrefixLayer {
    type Service = ForwardedPrefix<S>;

    fn layer(&self, inner: S) -> Self::Service {
        ForwardedPrefix {
            inner,
            header: self.header.clone(),
            fallback: self.fallback.clone(),
        }
    }
}

/// Resolves the prefix, reconciles the request, and runs the inner
/// service with the prefix in scope for link generation.
#[derive(Debug, Clone)]
pub struct ForwardedPrefix<S> {
    inner: S,
    header: HeaderName,
    fallback: Option<Arc<str>>,
}

impl<S, B> Service<Request<B>> for ForwardedPrefix<S>
where
    S: Service<Request<B>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = TaskLocalFuture<Option<MountPrefix>, S::Future>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<B>) -> Self::Future {
        let prefix = resolve_from_headers(req.headers(), &self.header, self.fallback.as_deref());

        match prefix {
            Some(prefix) => {
                let outcome = reconcile_request(&mut req, &prefix);
                metrics::record_prefix_outcome(outcome.as_str());
                scope::scope(Some(prefix), self.inner.call(req))
            }
            None => {
                metrics::record_prefix_outcome("passthrough");
                scope::scope(None, self.inner.call(req))
            }
        }
    }
}
