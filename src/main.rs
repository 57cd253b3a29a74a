//! textlens - interactive text summarization and entity annotation.
//!
//! A small web application that condenses pasted text or fetched pages and
//! highlights named entities inline.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (before anything else)
    let _ = dotenvy::dotenv();

    // Initialize logging based on verbosity
    let default_filter = if textlens::cli::is_verbose() {
        "textlens=info"
    } else {
        "textlens=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Run CLI
    textlens::cli::run().await
}
