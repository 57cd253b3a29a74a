//! Web server command.

use anyhow::Context;
use console::style;

use crate::config::Settings;
use crate::server::AppState;

/// Start the web server.
pub async fn cmd_serve(settings: &Settings, bind: &str) -> anyhow::Result<()> {
    let (host, port) = parse_bind_address(bind)?;

    // The NER model must load before the server accepts requests; a missing
    // model is a fatal startup error, not a per-request failure.
    println!("{} Loading NER model...", style("→").cyan());
    let state = AppState::new(settings)?;
    println!(
        "  {} Model ready ({})",
        style("✓").green(),
        state.ner.backend_id()
    );

    println!(
        "{} Starting textlens server at http://{}:{}",
        style("→").cyan(),
        host,
        port
    );
    println!("  Press Ctrl+C to stop");

    crate::server::serve(state, &host, port).await
}

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3030;

/// Accepts a bare port ("8080"), a bare host ("0.0.0.0"), or "host:port".
/// Missing pieces fall back to the loopback host and the default port.
fn parse_bind_address(bind: &str) -> anyhow::Result<(String, u16)> {
    if let Ok(port) = bind.parse::<u16>() {
        return Ok((DEFAULT_HOST.to_string(), port));
    }

    match bind.rsplit_once(':') {
        Some((host, port)) => {
            let port = port
                .parse::<u16>()
                .with_context(|| format!("invalid port in bind address {bind:?}"))?;
            Ok((host.to_string(), port))
        }
        None => Ok((bind.to_string(), DEFAULT_PORT)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_port_binds_loopback() {
        let (host, port) = parse_bind_address("9090").unwrap();
        assert_eq!(host, "127.0.0.1");
        assert_eq!(port, 9090);
    }

    #[test]
    fn test_bare_host_gets_default_port() {
        let (host, port) = parse_bind_address("0.0.0.0").unwrap();
        assert_eq!(host, "0.0.0.0");
        assert_eq!(port, DEFAULT_PORT);
    }

    #[test]
    fn test_host_and_port() {
        let (host, port) = parse_bind_address("example.internal:8443").unwrap();
        assert_eq!(host, "example.internal");
        assert_eq!(port, 8443);
    }

    #[test]
    fn test_unparseable_port_is_an_error() {
        assert!(parse_bind_address("localhost:web").is_err());
        assert!(parse_bind_address("localhost:70000").is_err());
    }
}
