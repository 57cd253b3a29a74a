//! HTML templates for the web interface.

use super::handlers::UrlReport;
use crate::services::preview::{MAX_PREVIEW_DIVISOR, MIN_PREVIEW_DIVISOR};
use crate::utils::html_escape;

/// Base HTML shell with navigation.
fn base_template(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - textlens</title>
    <link rel="stylesheet" href="/static/style.css">
</head>
<body>
    <header id="main-header">
        <nav>
            <a href="/" class="logo">textlens</a>
            <a href="/summarize">summarize</a>
            <a href="/entities">entities</a>
            <a href="/url">from url</a>
        </nav>
    </header>
    <main>
        <h1>{title}</h1>
        {content}
    </main>
</body>
</html>"#
    )
}

/// Bordered scroll container around annotated output.
fn entity_wrapper(fragment: &str) -> String {
    format!(
        r#"<div class="entity-output" style="overflow-x: auto; border: 1px solid #e6e9ef; border-radius: 0.25rem; padding: 1rem">{fragment}</div>"#
    )
}

fn error_block(message: &str) -> String {
    format!(r#"<p class="error">{}</p>"#, html_escape(message))
}

pub fn about_page() -> String {
    let content = r#"
    <p>textlens helps you condense a document and spot the people, places,
    organizations, and dates it mentions. Paste text to summarize it or
    highlight its entities, or point it at a URL to analyze a page.</p>
    <div class="info">
        <strong>Extractive frequency</strong>: removes stopwords, stems the
        remaining words, and selects the most salient sentences by word
        frequency. Summaries keep the original sentence order. English only.
    </div>
    <div class="info">
        <strong>Graph rank</strong>: an unsupervised graph-based approach.
        Sentences become nodes linked by similarity, and importance is
        computed with eigenvector centrality, so well-connected sentences
        rank highest.
    </div>
    "#;
    base_template("Natural Language Processing", content)
}

pub fn summarize_page(summary: Option<&str>, error: Option<&str>) -> String {
    let mut content = format!(
        r#"
    <form method="post" action="/summarize">
        <label for="text">Enter text here</label>
        <textarea id="text" name="text" rows="10" placeholder="Paste a document..."></textarea>
        <label for="strategy">Summarizer type</label>
        <select id="strategy" name="strategy">
            <option value="extractive-frequency">Extractive frequency</option>
            <option value="graph-rank">Graph rank</option>
        </select>
        <button type="submit">Summarize</button>
    </form>
    "#
    );

    if let Some(summary) = summary {
        content.push_str(&format!(
            r#"<h2>Summary</h2><div class="success result-text">{}</div>"#,
            html_escape(summary)
        ));
    }
    if let Some(error) = error {
        content.push_str(&error_block(error));
    }

    base_template("Summarize Document", &content)
}

pub fn entities_page(fragment: Option<&str>, error: Option<&str>) -> String {
    let mut content = String::from(
        r#"
    <form method="post" action="/entities">
        <label for="text">Enter text here</label>
        <textarea id="text" name="text" rows="10" placeholder="Paste a document..."></textarea>
        <button type="submit">Analyze</button>
    </form>
    "#,
    );

    if let Some(fragment) = fragment {
        content.push_str("<h2>Entities</h2>");
        content.push_str(&entity_wrapper(fragment));
    }
    if let Some(error) = error {
        content.push_str(&error_block(error));
    }

    base_template("Named-Entity Recognition Checker", &content)
}

pub fn url_page(report: Option<&UrlReport>, error: Option<&str>) -> String {
    let mut content = format!(
        r#"
    <form method="post" action="/url">
        <label for="url">Enter URL here</label>
        <input type="url" id="url" name="url" placeholder="https://example.com/article">
        <label for="divisor">Length to preview</label>
        <input type="range" id="divisor" name="divisor" min="{MIN_PREVIEW_DIVISOR}" max="{MAX_PREVIEW_DIVISOR}" value="{MIN_PREVIEW_DIVISOR}">
        <button type="submit">Analyze</button>
    </form>
    "#
    );

    if let Some(report) = report {
        content.push_str(&format!(
            r#"
    <div class="success">Length of full text: {}</div>
    <div class="success">Length of short text: {}</div>
    <div class="info result-text">{}</div>
    <h2>Summary entities</h2>
    {}
    "#,
            report.full_length,
            report.preview_length,
            html_escape(&report.preview),
            entity_wrapper(&report.annotated_summary),
        ));
    }
    if let Some(error) = error {
        content.push_str(&error_block(error));
    }

    base_template("Summary & NER from URL", &content)
}
