//! Link generation (reverse routing).
//!
//! # Responsibilities
//! - Map route names to path templates
//! - Fill `{param}` placeholders
//! - Prepend the request's mount prefix exactly once
//! - Build redirects and "return here" login targets
//!
//! # Design Decisions
//! - Table is immutable after startup and shared via Arc
//! - The prefix comes from the caller (explicit `MountState`) or from the
//!   task-local scope of the request being served; never from a global
//! - Always prepends: a route whose own path starts with the prefix's
//!   segment is still a distinct route

use std::collections::HashMap;

use axum::response::Redirect;
use thiserror::Error;

use crate::prefix::{current_prefix, MountPrefix, MountState};

/// Reverse routing failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReverseError {
    #[error("no route named '{0}'")]
    UnknownRoute(String),
    #[error("route '{route}' needs parameter '{param}'")]
    MissingParam { route: String, param: String },
}

/// Named route table.
#[derive(Debug, Clone, Default)]
pub struct UrlMap {
    routes: HashMap<String, String>,
}

impl UrlMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `template` (e.g. `/items/{id}/`) under `name`.
    pub fn route(mut self, name: impl Into<String>, template: impl Into<String>) -> Self {
        self.routes.insert(name.into(), template.into());
        self
    }

    pub fn template(&self, name: &str) -> Option<&str> {
        self.routes.get(name).map(String::as_str)
    }

    /// Build the outward URL for `name` under `prefix`.
    pub fn reverse(
        &self,
        name: &str,
        params: &[(&str, &str)],
        prefix: Option<&MountPrefix>,
    ) -> Result<String, ReverseError> {
        let template = self
            .template(name)
            .ok_or_else(|| ReverseError::UnknownRoute(name.to_string()))?;
        let path = fill(name, template, params)?;

        Ok(match prefix {
            Some(prefix) => format!("{}{}", prefix, path),
            None => path,
        })
    }

    /// [`reverse`](Self::reverse) using the prefix recorded in `state`.
    pub fn reverse_for(
        &self,
        state: Option<&MountState>,
        name: &str,
        params: &[(&str, &str)],
    ) -> Result<String, ReverseError> {
        self.reverse(name, params, state.and_then(MountState::url_prefix))
    }

    /// [`reverse`](Self::reverse) using the prefix of the request in scope.
    pub fn url_for(&self, name: &str, params: &[(&str, &str)]) -> Result<String, ReverseError> {
        self.reverse(name, params, current_prefix().as_ref())
    }

    /// 303 redirect to a named route of the current request's mount.
    pub fn redirect_to(&self, state: Option<&MountState>, name: &str) -> Result<Redirect, ReverseError> {
        let location = self.reverse_for(state, name, &[])?;
        Ok(Redirect::to(&location))
    }
}

fn fill(route: &str, template: &str, params: &[(&str, &str)]) -> Result<String, ReverseError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        let Some(close) = rest[open..].find('}') else {
            break;
        };
        out.push_str(&rest[..open]);

        let key = rest[open + 1..open + close].trim_start_matches('*');
        let value = params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
            .ok_or_else(|| ReverseError::MissingParam {
                route: route.to_string(),
                param: key.to_string(),
            })?;
        out.push_str(value);

        rest = &rest[open + close + 1..];
    }
    out.push_str(rest);
    Ok(out)
}

/// Login URL carrying `next` as the return target.
pub fn login_redirect(login_url: &str, next: &str) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("next", next)
        .finish();
    format!("{}?{}", login_url, query)
}
