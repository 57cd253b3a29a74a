//! Web UI and JSON API for the summarizer and entity annotator.
//!
//! Each request runs to completion on its own; the only shared resources
//! are the NER model and the HTTP client, both read-only after startup.

mod handlers;
mod routes;
mod templates;

pub use routes::create_router;

use std::net::SocketAddr;
use std::sync::Arc;

use crate::config::Settings;
use crate::services::fetch::PageFetcher;
use crate::services::ner::NerModel;

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    /// NER model, loaded once at startup and reused read-only.
    pub ner: Arc<NerModel>,
    pub fetcher: Arc<PageFetcher>,
}

impl AppState {
    pub fn new(settings: &Settings) -> anyhow::Result<Self> {
        let ner = NerModel::load()?;
        let fetcher = PageFetcher::new(settings.fetch_timeout(), &settings.user_agent)?;

        Ok(Self {
            ner: Arc::new(ner),
            fetcher: Arc::new(fetcher),
        })
    }
}

/// Start the web server.
pub async fn serve(state: AppState, host: &str, port: u16) -> anyhow::Result<()> {
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    fn test_app() -> axum::Router {
        let state = AppState::new(&Settings::default()).unwrap();
        create_router(state)
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn json_post(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn form_post(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_about_page() {
        let response = test_app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("<!DOCTYPE html>"));
        assert!(html.contains("textlens"));
    }

    #[tokio::test]
    async fn test_form_pages_render() {
        for uri in ["/summarize", "/entities", "/url"] {
            let response = test_app()
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK, "GET {uri}");
            let html = body_string(response).await;
            assert!(html.contains("<form"), "GET {uri} should render a form");
        }
    }

    #[tokio::test]
    async fn test_static_css() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/static/style.css")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap_or(""));
        assert!(content_type.unwrap_or("").contains("css"));
    }

    #[tokio::test]
    async fn test_api_health() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_api_summarize_graph_rank() {
        let text = "The city council approved the new transit plan on Monday. \
            The transit plan adds four rapid bus lines across the city. \
            Funding for the transit plan comes from a regional sales tax. \
            Critics argue the sales tax burdens low-income riders.";
        let response = test_app()
            .oneshot(json_post(
                "/api/summarize",
                serde_json::json!({ "text": text, "strategy": "graph-rank" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json: serde_json::Value =
            serde_json::from_str(&body_string(response).await).unwrap();
        let summary = json["summary"].as_str().unwrap();
        assert!(!summary.is_empty());
    }

    #[tokio::test]
    async fn test_api_summarize_short_text_is_422() {
        let response = test_app()
            .oneshot(json_post(
                "/api/summarize",
                serde_json::json!({ "text": "Too short.", "strategy": "graph-rank" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json: serde_json::Value =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["kind"], "input");
    }

    #[tokio::test]
    async fn test_api_summarize_unknown_strategy_is_422() {
        let response = test_app()
            .oneshot(json_post(
                "/api/summarize",
                serde_json::json!({ "text": "Some text. More text.", "strategy": "markov" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_api_entities() {
        let response = test_app()
            .oneshot(json_post(
                "/api/entities",
                serde_json::json!({ "text": "Barack Obama was president." }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json: serde_json::Value =
            serde_json::from_str(&body_string(response).await).unwrap();
        let entities = json["entities"].as_array().unwrap();
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0]["label"], "person");
        assert_eq!(entities[0]["start"], 0);
        assert_eq!(entities[0]["end"], 12);
        assert!(json["html"].as_str().unwrap().contains("<mark"));
    }

    #[tokio::test]
    async fn test_api_entities_empty_text_is_422() {
        let response = test_app()
            .oneshot(json_post(
                "/api/entities",
                serde_json::json!({ "text": "   " }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_api_fetch_malformed_url_is_422() {
        let response = test_app()
            .oneshot(json_post(
                "/api/fetch",
                serde_json::json!({ "url": "not a url" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json: serde_json::Value =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["kind"], "input");
    }

    #[tokio::test]
    async fn test_summarize_form_reports_error_inline() {
        let response = test_app()
            .oneshot(form_post(
                "/summarize",
                "text=Too+short.&strategy=graph-rank",
            ))
            .await
            .unwrap();

        // Errors surface as a message in the page, not as a 5xx.
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("class=\"error\""));
    }

    #[tokio::test]
    async fn test_entities_form_renders_highlight() {
        let response = test_app()
            .oneshot(form_post(
                "/entities",
                "text=Barack+Obama+was+president.",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("<mark"));
        assert!(html.contains("Barack Obama"));
    }

    #[tokio::test]
    async fn test_url_form_rejects_bad_url_inline() {
        let response = test_app()
            .oneshot(form_post("/url", "url=not+a+url&divisor=50"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("class=\"error\""));
    }
}
