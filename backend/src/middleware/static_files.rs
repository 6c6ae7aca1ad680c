//! Static file guard
//!
//! The front-end is served straight from disk, so paths that name dotfiles
//! or the configuration tree are refused before they reach the file service.

use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Top-level directory holding environment configuration files
const CONFIG_DIR: &str = "config";

/// Respond 404 to any path that must never be served from disk
pub async fn reject_hidden_paths(request: Request, next: Next) -> Response {
    if is_hidden_path(request.uri().path()) {
        tracing::debug!(path = %request.uri().path(), "refused hidden path");
        return StatusCode::NOT_FOUND.into_response();
    }

    next.run(request).await
}

/// Whether any segment is a dotfile or the path sits under the config tree
fn is_hidden_path(path: &str) -> bool {
    let mut segments = path.split('/').filter(|segment| !segment.is_empty());

    let first_is_config = segments
        .clone()
        .next()
        .is_some_and(|first| first.eq_ignore_ascii_case(CONFIG_DIR));

    first_is_config
        || segments.any(|segment| {
            let segment = segment.to_ascii_lowercase();
            segment.starts_with('.') || segment.starts_with("%2e")
        })
}
