//! State reconciliation.
//!
//! # Responsibilities
//! - Set the routing base to the prefix
//! - Recompute the routing remainder from the original path
//! - Record the prefix for link generation
//! - Make sure the observed path carries the prefix exactly once
//!
//! # Design Decisions
//! - Every step is guarded, so running twice equals running once
//! - A path outside the prefix is not rejected: only the routing base and
//!   the link prefix change, the remainder stays as received
//! - Pure over `(prefix, state)`; no I/O and no failure path

use axum::extract::OriginalUri;
use axum::http::uri::PathAndQuery;
use axum::http::{Request, Uri};
use url::Url;

use crate::prefix::resolver::MountPrefix;
use crate::prefix::state::MountState;

/// How a prefix ended up being applied to a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Path was under the prefix; routing now sees the remainder only.
    Mounted,
    /// An earlier layer had already set the routing base.
    AlreadyApplied,
    /// Path was outside the prefix; only link generation uses it.
    LinkOnly,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Mounted => "mounted",
            Outcome::AlreadyApplied => "already_applied",
            Outcome::LinkOnly => "link_only",
        }
    }
}

/// Reconcile `state` against `prefix`.
pub fn reconcile(state: &mut MountState, prefix: &MountPrefix) -> Outcome {
    let outcome = reconcile_routing(state, prefix);
    state.set_url_prefix(prefix);
    if !prefix.covers(state.path()) {
        let observed = prefix.apply_to(state.path());
        state.set_path(observed);
    }
    outcome
}

fn reconcile_routing(state: &mut MountState, prefix: &MountPrefix) -> Outcome {
    if prefix.covers(state.script_name()) {
        return Outcome::AlreadyApplied;
    }

    state.set_script_name(prefix);
    match prefix.strip_from(state.original_path()) {
        Some(remainder) => {
            state.set_path_info(remainder);
            Outcome::Mounted
        }
        None => Outcome::LinkOnly,
    }
}

/// Reconcile a live request.
///
/// Starts from a `MountState` extension when an upstream layer left one,
/// otherwise from the request URI. Afterwards the URI path equals the
/// routing remainder, `OriginalUri` carries the observed path and the
/// updated state is stored back as an extension.
pub fn reconcile_request<B>(req: &mut Request<B>, prefix: &MountPrefix) -> Outcome {
    let mut state = req
        .extensions_mut()
        .remove::<MountState>()
        .unwrap_or_else(|| MountState::from_path(req.uri().path()));

    let outcome = reconcile(&mut state, prefix);

    if req.uri().path() != state.path_info() {
        match with_path(req.uri(), state.path_info()) {
            Some(uri) => *req.uri_mut() = uri,
            None => tracing::warn!(
                prefix = %prefix,
                path_info = %state.path_info(),
                "Routing remainder is not a valid URI path; leaving URI untouched"
            ),
        }
    }

    match with_path(req.uri(), state.path()) {
        Some(observed) => {
            req.extensions_mut().insert(OriginalUri(observed));
        }
        None => tracing::warn!(
            prefix = %prefix,
            path = %state.path(),
            "Observed path is not a valid URI path; OriginalUri not set"
        ),
    }

    tracing::debug!(
        prefix = %prefix,
        script_name = %state.script_name(),
        path_info = %state.path_info(),
        path = %state.path(),
        outcome = outcome.as_str(),
        "Mount prefix reconciled"
    );

    req.extensions_mut().insert(state);
    outcome
}

/// Copy of `uri` with its path replaced and its query kept.
///
/// A path the URI grammar rejects as-is (a prefix with a space, say) is
/// percent-encoded first.
fn with_path(uri: &Uri, path: &str) -> Option<Uri> {
    let path_and_query = join_query(path, uri.query())
        .parse::<PathAndQuery>()
        .ok()
        .or_else(|| join_query(&encode_path(path)?, uri.query()).parse().ok())?;
    let mut parts = uri.clone().into_parts();
    parts.path_and_query = Some(path_and_query);
    Uri::from_parts(parts).ok()
}

fn join_query(path: &str, query: Option<&str>) -> String {
    match query {
        Some(query) => format!("{}?{}", path, query),
        None => path.to_string(),
    }
}

fn encode_path(path: &str) -> Option<String> {
    let mut url = Url::parse("http://localhost/").ok()?;
    url.set_path(path);
    Some(url.path().to_string())
}
