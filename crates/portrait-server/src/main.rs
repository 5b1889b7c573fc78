//! portrait-server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`) for the
//! listen address, resolves the portrait provider from `PORTRAIT_*`
//! environment variables, and serves the portrait API over HTTP.
//!
//! ```sh
//! PORTRAIT_PROVIDER=openai OPENAI_API_KEY=sk-... cargo run -p portrait-server
//! ```

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use portrait_server::{ServerConfig, app, resolve_backend};
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Portrait generation server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let server_cfg = ServerConfig::load(&cli.config)
    .with_context(|| format!("failed to read config from {}", cli.config.display()))?;

  // Provider configuration is read once; requests never consult the
  // environment again.
  let backend = resolve_backend();
  tracing::info!(provider = backend.name(), "portrait backend ready");

  let app = app(Arc::new(backend));
  let address = server_cfg.address();

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("server error")?;

  Ok(())
}

async fn shutdown_signal() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    tracing::warn!(error = %e, "failed to listen for ctrl-c");
    std::future::pending::<()>().await;
  }
  tracing::info!("shutting down");
}
