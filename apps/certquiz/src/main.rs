//! # certquiz - Gated Certification Quiz
//!
//! The main binary for the certquiz progression engine.
//!
//! This application provides:
//! - Interactive terminal session (default command)
//! - HTTP JSON API server (axum-based)
//! - Catalog validation and rank lookup
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    apps/certquiz (THE BINARY)                   │
//! │                                                                 │
//! │  ┌─────────────┐    ┌─────────────┐    ┌──────────────────┐     │
//! │  │   CLI       │    │   HTTP API  │    │ Terminal session │     │
//! │  │  (clap)     │    │   (axum)    │    │ (BufRead/Write)  │     │
//! │  └──────┬──────┘    └──────┬──────┘    └────────┬─────────┘     │
//! │         │                  │                    │               │
//! │         └──────────────────┼────────────────────┘               │
//! │                            ▼                                    │
//! │                    ┌───────────────┐                            │
//! │                    │ certquiz-core │                            │
//! │                    │ (THE LOGIC)   │                            │
//! │                    └───────────────┘                            │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Play in the terminal
//! certquiz --catalog demos/catalog.json
//!
//! # Start the HTTP server
//! certquiz serve --host 0.0.0.0 --port 8080
//!
//! # Inspect a catalog
//! certquiz validate -C demos/catalog.json --json-mode
//! certquiz rank --percentage 87
//! ```

use certquiz::cli;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

#[tokio::main]
async fn main() {
    // CERTQUIZ_LOG_FORMAT=json switches to machine-parseable output.
    let log_format = std::env::var("CERTQUIZ_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "certquiz=info,certquiz_core=info,tower_http=debug".into());

    // Logs go to stderr; stdout belongs to the terminal session.
    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    let cli = cli::Cli::parse();

    if !cli.quiet && !cli.json_mode {
        print_banner();
    }

    if let Err(e) = cli::execute(cli).await {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the certquiz startup banner.
fn print_banner() {
    println!(
        r#"
  ┌─┐┌─┐┬─┐┌┬┐┌─┐ ┬ ┬┬┌─┐
  │  ├┤ ├┬┘ │ │─┼┐│ │││┌─┘
  └─┘└─┘┴└─ ┴ └─┘└└─┘┴└─┘

  Certification Quiz v{}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
