//! Mount prefix resolution.
//!
//! # Responsibilities
//! - Pick the raw prefix: forwarded header first, configured fallback second
//! - Normalize it to exactly one leading `/` and no trailing `/`
//! - Collapse empty and root-only values to "no prefix"
//!
//! # Design Decisions
//! - No validation beyond normalization; the header is trusted because the
//!   reverse proxy is required to overwrite any client-supplied copy
//! - An empty header value counts as absent, so the fallback still applies
//! - A header of `/` is an explicit root mount and wins over the fallback

use axum::http::{HeaderMap, HeaderName};
use serde::Serialize;

/// Default header a reverse proxy uses to announce the stripped sub-path.
pub const X_FORWARDED_PREFIX: &str = "x-forwarded-prefix";

/// A normalized mount prefix such as `/app`.
///
/// Always starts with a single `/`, never ends with one, and is never the
/// root path itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MountPrefix(String);

impl MountPrefix {
    /// Normalize a raw prefix value.
    ///
    /// Returns `None` for `""`, `"/"` and any value made only of slashes.
    pub fn normalize(raw: &str) -> Option<Self> {
        let trimmed = raw.trim_matches('/');
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(format!("/{}", trimmed)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if `path` is this prefix or lies below it.
    ///
    /// Matching is per segment: `/app` covers `/app` and `/app/x` but not `/apps`.
    pub fn covers(&self, path: &str) -> bool {
        match path.strip_prefix(self.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }

    /// Strip the prefix from `path` once, defaulting to `/` for an empty rest.
    ///
    /// Returns `None` when the prefix does not cover the path.
    pub fn strip_from(&self, path: &str) -> Option<String> {
        if !self.covers(path) {
            return None;
        }
        let rest = &path[self.0.len()..];
        if rest.is_empty() {
            Some("/".to_string())
        } else {
            Some(rest.to_string())
        }
    }

    /// Prepend the prefix to `path` unless it already carries it.
    pub fn apply_to(&self, path: &str) -> String {
        if self.covers(path) {
            path.to_string()
        } else if path.starts_with('/') {
            format!("{}{}", self.0, path)
        } else {
            format!("{}/{}", self.0, path)
        }
    }
}

impl AsRef<str> for MountPrefix {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for MountPrefix {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl std::fmt::Display for MountPrefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolve the prefix for one request.
///
/// The header wins over the fallback; when neither yields a value the
/// result is `None` and the rest of the pipeline is a passthrough.
pub fn resolve(header_value: Option<&str>, configured_fallback: Option<&str>) -> Option<MountPrefix> {
    let raw = match header_value {
        Some(value) if !value.is_empty() => value,
        _ => configured_fallback?,
    };
    MountPrefix::normalize(raw)
}

/// Header-map front end for [`resolve`].
///
/// A value that is not valid visible ASCII is treated like a missing header.
pub fn resolve_from_headers(
    headers: &HeaderMap,
    header: &HeaderName,
    configured_fallback: Option<&str>,
) -> Option<MountPrefix> {
    let header_value = headers.get(header).and_then(|v| v.to_str().ok());
    resolve(header_value, configured_fallback)
}
