use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::http::{request_id, AppState, Mount};
use crate::prefix::current_prefix;
use crate::routing::{login_redirect, ReverseError};

const HELLO_UNAVAILABLE: &str = "(failed to contact hello service)";

impl IntoResponse for ReverseError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Link generation failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Link generation failed").into_response()
    }
}

/// Landing page. Links come from the task-local prefix.
pub async fn home(State(state): State<AppState>) -> Result<Html<String>, ReverseError> {
    let urls = &state.urls;
    Ok(Html(format!(
        "<!doctype html>\n<title>Home</title>\n<ul>\n\
         <li><a href=\"{}\">Profile</a></li>\n\
         <li><a href=\"{}\">Settings</a></li>\n\
         <li><a href=\"{}\">Hello</a></li>\n\
         <li><a href=\"{}\">Debug prefix</a></li>\n\
         </ul>\n",
        urls.url_for("profile", &[])?,
        urls.url_for("settings", &[])?,
        urls.url_for("call_hello", &[])?,
        urls.url_for("debug_prefix", &[])?,
    )))
}

pub async fn profile(
    State(state): State<AppState>,
    Mount(mount): Mount,
) -> Result<Html<String>, ReverseError> {
    let action = state.urls.reverse_for(Some(&mount), "profile", &[])?;
    let home = state.urls.reverse_for(Some(&mount), "home", &[])?;
    Ok(Html(format!(
        "<!doctype html>\n<title>Profile</title>\n\
         <form method=\"post\" action=\"{}\"><button>Save</button></form>\n\
         <a href=\"{}\">Back</a>\n",
        action, home
    )))
}

/// Save, then reload the profile page.
pub async fn profile_save(
    State(state): State<AppState>,
    Mount(mount): Mount,
) -> Result<Redirect, ReverseError> {
    state.urls.redirect_to(Some(&mount), "profile")
}

/// Requires a session cookie; otherwise bounces to login with a return target.
pub async fn settings(
    State(state): State<AppState>,
    Mount(mount): Mount,
    headers: HeaderMap,
) -> Result<Response, ReverseError> {
    if has_session(&headers) {
        return Ok(Html("<!doctype html>\n<title>Settings</title>\n").into_response());
    }

    let login = state.urls.reverse_for(Some(&mount), "login", &[])?;
    tracing::debug!(
        request_id = %request_id(&headers),
        next = %mount.path(),
        "No session, redirecting to login"
    );
    Ok(Redirect::to(&login_redirect(&login, mount.path())).into_response())
}

fn has_session(headers: &HeaderMap) -> bool {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .any(|c| c.trim().starts_with("session="))
}

#[derive(Debug, Deserialize)]
pub struct LoginQuery {
    next: Option<String>,
}

pub async fn login(
    State(state): State<AppState>,
    Mount(mount): Mount,
    Query(query): Query<LoginQuery>,
) -> Result<Json<serde_json::Value>, ReverseError> {
    let next = match query.next {
        Some(next) => next,
        None => state.urls.reverse_for(Some(&mount), "home", &[])?,
    };
    Ok(Json(json!({
        "login": state.urls.reverse_for(Some(&mount), "login", &[])?,
        "next": next,
    })))
}

/// Introspection of what the prefix layer did to this request.
pub async fn debug_prefix(
    State(state): State<AppState>,
    Mount(mount): Mount,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, ReverseError> {
    let raw_header = headers
        .get(&state.prefix_header)
        .and_then(|v| v.to_str().ok());

    Ok(Json(json!({
        "header": raw_header,
        "mount": mount,
        "scoped_prefix": current_prefix(),
        "urls": {
            "home": state.urls.reverse_for(Some(&mount), "home", &[])?,
            "profile": state.urls.reverse_for(Some(&mount), "profile", &[])?,
            "login": state.urls.reverse_for(Some(&mount), "login", &[])?,
        },
    })))
}

pub async fn call_hello(State(state): State<AppState>, headers: HeaderMap) -> Json<serde_json::Value> {
    let hello = match state.hello.greet().await {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(
                request_id = %request_id(&headers),
                url = %state.hello.url(),
                error = %e,
                "hello service unreachable"
            );
            HELLO_UNAVAILABLE.to_string()
        }
    };
    Json(json!({ "hello": hello }))
}

pub async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
