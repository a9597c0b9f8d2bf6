//! The web application mounted behind the proxy.
//!
//! Small on purpose: each view exercises one consumer of the mount state
//! (links, redirects, "return here" targets, introspection).

pub mod handlers;

use axum::routing::get;
use axum::Router;

use crate::http::AppState;
use crate::routing::UrlMap;

pub const HOME: &str = "/";
pub const PROFILE: &str = "/profile/";
pub const SETTINGS: &str = "/settings/";
pub const LOGIN: &str = "/login/";
pub const DEBUG_PREFIX: &str = "/debug-prefix/";
pub const CALL_HELLO: &str = "/hello/";
pub const HEALTH: &str = "/health";

/// Route names and paths. Feeds both dispatch and link generation.
pub const ROUTES: &[(&str, &str)] = &[
    ("home", HOME),
    ("profile", PROFILE),
    ("settings", SETTINGS),
    ("login", LOGIN),
    ("debug_prefix", DEBUG_PREFIX),
    ("call_hello", CALL_HELLO),
    ("health", HEALTH),
];

pub fn url_map() -> UrlMap {
    ROUTES
        .iter()
        .fold(UrlMap::new(), |urls, (name, path)| urls.route(*name, *path))
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(HOME, get(handlers::home))
        .route(PROFILE, get(handlers::profile).post(handlers::profile_save))
        .route(SETTINGS, get(handlers::settings))
        .route(LOGIN, get(handlers::login))
        .route(DEBUG_PREFIX, get(handlers::debug_prefix))
        .route(CALL_HELLO, get(handlers::call_hello))
        .route(HEALTH, get(handlers::health))
        .with_state(state)
}
