//! Command-line interface.

mod commands;

use clap::{Parser, Subcommand};

use crate::config::Settings;

#[derive(Parser)]
#[command(name = "textlens", version, about = "Interactive text summarization and entity annotation")]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the web UI.
    Serve {
        /// Bind address (port, host, or host:port).
        #[arg(short, long, env = "TEXTLENS_BIND")]
        bind: Option<String>,
    },
}

/// Whether `--verbose` appears on the raw command line. Checked before clap
/// parses so logging can be initialized first.
pub fn is_verbose() -> bool {
    std::env::args().any(|a| a == "-v" || a == "--verbose")
}

/// Parse arguments and dispatch.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load()?;

    match cli.command {
        Command::Serve { bind } => {
            let bind = bind.unwrap_or_else(|| settings.bind.clone());
            commands::cmd_serve(&settings, &bind).await
        }
    }
}
