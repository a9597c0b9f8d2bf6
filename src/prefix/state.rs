//! Per-request mount state.
//!
//! One value per request, carried as a request extension. It holds the
//! three views of "the current path" that different consumers read, plus
//! the prefix link generation must use:
//!
//! | field | consumer |
//! |---|---|
//! | `script_name` | routing base, already consumed, never matched |
//! | `path_info` | routing remainder, matched against routes |
//! | `path` | observed full path, used for "return here" targets |
//! | `url_prefix` | link generation |
//!
//! `original_path` is recorded once when the state is created and never
//! changes; the remainder is always derived from it.

use serde::Serialize;

use crate::prefix::resolver::MountPrefix;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MountState {
    original_path: String,
    script_name: String,
    path_info: String,
    path: String,
    url_prefix: Option<MountPrefix>,
}

impl MountState {
    /// Fresh state for a request path nobody has touched yet.
    pub fn from_path(path: &str) -> Self {
        let path = if path.is_empty() { "/" } else { path };
        Self {
            original_path: path.to_string(),
            script_name: String::new(),
            path_info: path.to_string(),
            path: path.to_string(),
            url_prefix: None,
        }
    }

    /// State as left behind by an upstream layer that already split the path.
    pub fn from_parts(
        original_path: impl Into<String>,
        script_name: impl Into<String>,
        path_info: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            original_path: original_path.into(),
            script_name: script_name.into(),
            path_info: path_info.into(),
            path: path.into(),
            url_prefix: None,
        }
    }

    pub fn original_path(&self) -> &str {
        &self.original_path
    }

    pub fn script_name(&self) -> &str {
        &self.script_name
    }

    pub fn path_info(&self) -> &str {
        &self.path_info
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn url_prefix(&self) -> Option<&MountPrefix> {
        self.url_prefix.as_ref()
    }

    pub(crate) fn set_script_name(&mut self, prefix: &MountPrefix) {
        self.script_name = prefix.as_str().to_string();
    }

    pub(crate) fn set_path_info(&mut self, path_info: String) {
        self.path_info = path_info;
    }

    pub(crate) fn set_path(&mut self, path: String) {
        self.path = path;
    }

    pub(crate) fn set_url_prefix(&mut self, prefix: &MountPrefix) {
        self.url_prefix = Some(prefix.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path_starts_unmounted() {
        let state = MountState::from_path("/app/dashboard");
        assert_eq!(state.original_path(), "/app/dashboard");
        assert_eq!(state.script_name(), "");
        assert_eq!(state.path_info(), "/app/dashboard");
        assert_eq!(state.path(), "/app/dashboard");
        assert!(state.url_prefix().is_none());
    }

    #[test]
    fn test_empty_path_becomes_root() {
        let state = MountState::from_path("");
        assert_eq!(state.path_info(), "/");
        assert_eq!(state.path(), "/");
    }

    #[test]
    fn test_serializes_prefix_as_string() {
        let mut state = MountState::from_path("/x");
        state.set_url_prefix(&MountPrefix::normalize("x").unwrap());
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["url_prefix"], "/x");
        assert_eq!(json["script_name"], "");
    }
}
