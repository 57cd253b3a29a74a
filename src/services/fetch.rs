//! Page fetching and paragraph-text extraction.
//!
//! One outbound GET per call, no retries. Parsing is split out as a pure
//! function so the extraction contract is testable without a network.

use std::sync::LazyLock;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use scraper::{Html, Selector};
use url::Url;

use crate::error::{NlpError, Result};

static PARAGRAPH: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p").expect("paragraph selector should parse"));

/// HTTP fetcher that pulls visible paragraph text out of a page.
#[derive(Clone)]
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    /// Build a fetcher with a bounded request timeout.
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .gzip(true)
            .brotli(true)
            .build()
            .map_err(|e| NlpError::Network(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// Fetch `raw_url` and return the text of every paragraph element,
    /// joined by single spaces in document order.
    ///
    /// Malformed URLs are rejected before any network call. Non-2xx statuses
    /// and non-HTML responses are distinguishable network errors.
    pub async fn fetch_paragraph_text(&self, raw_url: &str) -> Result<String> {
        let url = Url::parse(raw_url.trim())
            .map_err(|e| NlpError::Input(format!("malformed URL {raw_url:?}: {e}")))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(NlpError::Input(format!(
                "unsupported URL scheme {:?}",
                url.scheme()
            )));
        }

        tracing::info!("fetching {}", url);
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| NlpError::Network(format!("request to {url} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(NlpError::Network(format!("{url} returned HTTP {status}")));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();
        if !content_type.is_empty() && !content_type.contains("html") {
            return Err(NlpError::Network(format!(
                "{url} returned non-HTML content ({content_type})"
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| NlpError::Network(format!("failed to read body from {url}: {e}")))?;

        Ok(extract_paragraph_text(&body))
    }
}

/// Concatenate the text of every `<p>` element in `html`, joined by single
/// spaces in document order. Whitespace inside a paragraph is normalized;
/// empty paragraphs are skipped.
pub fn extract_paragraph_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut parts: Vec<String> = Vec::new();
    for element in document.select(&PARAGRAPH) {
        let raw: String = element.text().collect();
        let text = raw.split_whitespace().collect::<Vec<_>>().join(" ");
        if !text.is_empty() {
            parts.push(text);
        }
    }
    parts.join(" ")
}
