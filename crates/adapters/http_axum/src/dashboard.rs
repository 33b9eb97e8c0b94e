//! Server-side rendered HTML overview (no JavaScript).
//!
//! - `GET /`                  — devices grouped by the connection they report over
//! - `GET /dashboard/devices` — devices grouped by reporting state
//!
//! Pages reload themselves through `<meta http-equiv="refresh">`.

pub mod connections;
pub mod devices;

use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::error::INTERNAL_ERROR;

/// Seconds between automatic page reloads.
const REFRESH_SECONDS: u32 = 10;

/// Render `template` as an HTML response, or a plain 500 if rendering fails.
fn render(template: &impl Template) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to render page");
            (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR).into_response()
        }
    }
}
