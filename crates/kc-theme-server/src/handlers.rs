//! Page rendering handlers.
//!
//! The identity server posts a context and gets the page back. Preview
//! routes render the built-in mock contexts so the theme can be worked on
//! without a running identity server.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use kc_theme::mock::{mock_context, story_names, DEFAULT_STORY};
use kc_theme::{KcContext, PageId, SocialIcon, ThemeError};

use crate::state::AppState;

/// Page identifiers listed by the preview index.
const PREVIEW_PAGES: &[&str] = &["login.ftl", "register.ftl", "login-otp.ftl", "info.ftl"];

/// Query parameters of the preview route.
#[derive(Debug, Deserialize)]
pub struct PreviewQuery {
    /// Story name.
    pub story: Option<String>,
}

/// A previewable page and its stories.
#[derive(Debug, Serialize)]
pub struct PreviewPage {
    page_id: String,
    stories: Vec<&'static str>,
}

/// Turns a render result into a response.
fn page_response(result: kc_theme::Result<String>) -> Response {
    match result {
        Ok(html) => Html(html).into_response(),
        Err(e) => error_response(&e),
    }
}

fn error_response(error: &ThemeError) -> Response {
    if error.is_client_error() {
        tracing::warn!("Rejected context: {}", error);
        (StatusCode::BAD_REQUEST, error.to_string()).into_response()
    } else {
        tracing::error!("Template render error: {}", error);
        (StatusCode::INTERNAL_SERVER_ERROR, "Template error").into_response()
    }
}

/// Renders the page described by a posted context.
pub async fn render_page(
    State(state): State<AppState>,
    Path(realm): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let ctx = match KcContext::from_value(body) {
        Ok(ctx) => ctx,
        Err(e) => return error_response(&e),
    };

    let realm_name = &ctx.common().realm.name;
    if !realm_name.is_empty() && realm_name != &realm {
        tracing::warn!(realm = %realm, context_realm = %realm_name, "Realm mismatch in posted context");
    }
    tracing::debug!(realm = %realm, page_id = %ctx.page_id(), "Rendering posted context");

    page_response(state.theme().render(&ctx))
}

/// Lists the previewable pages and their stories.
pub async fn preview_index(State(state): State<AppState>) -> Response {
    if !state.config().preview_enabled {
        return StatusCode::NOT_FOUND.into_response();
    }

    let pages: Vec<PreviewPage> = PREVIEW_PAGES
        .iter()
        .map(|id| PreviewPage {
            page_id: (*id).to_string(),
            stories: story_names(&PageId::parse(id)).to_vec(),
        })
        .collect();
    Json(pages).into_response()
}

/// Renders a mock context.
pub async fn preview_page(
    State(state): State<AppState>,
    Path(page_id): Path<String>,
    Query(query): Query<PreviewQuery>,
) -> Response {
    if !state.config().preview_enabled {
        return StatusCode::NOT_FOUND.into_response();
    }

    let story = query.story.as_deref().unwrap_or(DEFAULT_STORY);
    match mock_context(&PageId::parse(&page_id), story) {
        Some(ctx) => page_response(state.theme().render(&ctx)),
        None => (
            StatusCode::NOT_FOUND,
            format!("Unknown story '{story}' for {page_id}"),
        )
            .into_response(),
    }
}

/// Serves a bundled social provider icon.
pub async fn social_icon(Path(file): Path<String>) -> Response {
    match SocialIcon::from_file_name(&file) {
        Some(icon) => (
            [
                (header::CONTENT_TYPE, "image/svg+xml"),
                (header::CACHE_CONTROL, "public, max-age=31536000, immutable"),
            ],
            icon.svg(),
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
