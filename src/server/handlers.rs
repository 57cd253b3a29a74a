//! Request handlers for the web UI and JSON API.

use axum::extract::{Form, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Json, Response};
use serde::Deserialize;

use crate::error::NlpError;
use crate::services::summarize::{self, Strategy};
use crate::services::{annotate_entities, preview};

use super::templates;
use super::AppState;

const STYLESHEET: &str = include_str!("style.css");

/// Health check endpoint for container orchestration.
pub async fn health() -> impl IntoResponse {
    StatusCode::OK
}

pub async fn serve_css() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLESHEET)
}

// ============================================================================
// Pages
// ============================================================================

pub async fn about_page() -> Html<String> {
    Html(templates::about_page())
}

pub async fn summarize_page() -> Html<String> {
    Html(templates::summarize_page(None, None))
}

pub async fn entities_page() -> Html<String> {
    Html(templates::entities_page(None, None))
}

pub async fn url_page() -> Html<String> {
    Html(templates::url_page(None, None))
}

#[derive(Debug, Deserialize)]
pub struct SummarizeForm {
    pub text: String,
    pub strategy: String,
}

pub async fn summarize_submit(Form(form): Form<SummarizeForm>) -> Html<String> {
    let result = form
        .strategy
        .parse::<Strategy>()
        .and_then(|strategy| summarize::summarize(&form.text, strategy));

    match result {
        Ok(summary) => Html(templates::summarize_page(Some(&summary), None)),
        Err(e) => {
            tracing::warn!("summarize failed: {}", e);
            Html(templates::summarize_page(None, Some(&e.to_string())))
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TextForm {
    pub text: String,
}

pub async fn entities_submit(
    State(state): State<AppState>,
    Form(form): Form<TextForm>,
) -> Html<String> {
    if form.text.trim().is_empty() {
        return Html(templates::entities_page(
            None,
            Some("enter some text to analyze"),
        ));
    }

    let fragment = annotate_entities(&state.ner, &form.text);
    Html(templates::entities_page(Some(&fragment), None))
}

#[derive(Debug, Deserialize)]
pub struct UrlForm {
    pub url: String,
    pub divisor: u32,
}

/// Result of the URL flow: lengths, preview, and the annotated summary.
pub struct UrlReport {
    pub full_length: usize,
    pub preview_length: usize,
    pub preview: String,
    pub annotated_summary: String,
}

pub async fn url_submit(State(state): State<AppState>, Form(form): Form<UrlForm>) -> Html<String> {
    match analyze_url(&state, &form.url, form.divisor).await {
        Ok(report) => Html(templates::url_page(Some(&report), None)),
        Err(e) => {
            tracing::warn!("url analysis failed: {}", e);
            Html(templates::url_page(None, Some(&e.to_string())))
        }
    }
}

/// Fetch a page, then preview, summarize, and annotate its paragraph text.
async fn analyze_url(state: &AppState, url: &str, divisor: u32) -> Result<UrlReport, NlpError> {
    let full_text = state.fetcher.fetch_paragraph_text(url).await?;
    let preview_text = preview::preview(&full_text, divisor).to_string();

    let summary = summarize::summarize(&full_text, Strategy::GraphRank)?;
    let annotated_summary = annotate_entities(&state.ner, &summary);

    Ok(UrlReport {
        full_length: full_text.chars().count(),
        preview_length: preview_text.chars().count(),
        preview: preview_text,
        annotated_summary,
    })
}

// ============================================================================
// JSON API
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ApiSummarizeRequest {
    pub text: String,
    pub strategy: String,
}

pub async fn api_summarize(Json(req): Json<ApiSummarizeRequest>) -> Response {
    let result = req
        .strategy
        .parse::<Strategy>()
        .and_then(|strategy| summarize::summarize(&req.text, strategy));

    match result {
        Ok(summary) => Json(serde_json::json!({ "summary": summary })).into_response(),
        Err(e) => error_response(e),
    }
}

#[derive(Debug, Deserialize)]
pub struct ApiTextRequest {
    pub text: String,
}

pub async fn api_entities(
    State(state): State<AppState>,
    Json(req): Json<ApiTextRequest>,
) -> Response {
    if req.text.trim().is_empty() {
        return error_response(NlpError::Input("text is empty".into()));
    }

    let spans = state.ner.annotate(&req.text);
    let html = crate::services::render::render_entities(&req.text, &spans);
    Json(serde_json::json!({ "html": html, "entities": spans })).into_response()
}

#[derive(Debug, Deserialize)]
pub struct ApiFetchRequest {
    pub url: String,
}

pub async fn api_fetch(State(state): State<AppState>, Json(req): Json<ApiFetchRequest>) -> Response {
    match state.fetcher.fetch_paragraph_text(&req.url).await {
        Ok(text) => Json(serde_json::json!({ "text": text })).into_response(),
        Err(e) => error_response(e),
    }
}

fn error_response(e: NlpError) -> Response {
    let status = match &e {
        NlpError::Input(_) => StatusCode::UNPROCESSABLE_ENTITY,
        NlpError::Network(_) => StatusCode::BAD_GATEWAY,
        NlpError::ModelUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
    };
    (
        status,
        Json(serde_json::json!({ "error": e.to_string(), "kind": e.kind() })),
    )
        .into_response()
}
