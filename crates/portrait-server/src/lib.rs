//! Server assembly: configuration, backend resolution and the HTTP app.

use std::{path::Path, sync::Arc};

use axum::Router;
use portrait_core::PortraitGenerator;
use portrait_providers::{FactoryError, GeneratorFactory, PortraitBackend};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

/// Prefix of the server's own environment variables
/// (`PORTRAIT_SERVER_HOST`, `PORTRAIT_SERVER_PORT`).
pub const ENV_PREFIX: &str = "PORTRAIT_SERVER";

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and the
/// environment.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host: String,
  #[serde(default = "default_port")]
  pub port: u16,
}

fn default_host() -> String {
  "127.0.0.1".to_string()
}

fn default_port() -> u16 {
  3000
}

impl Default for ServerConfig {
  fn default() -> Self {
    ServerConfig { host: default_host(), port: default_port() }
  }
}

impl ServerConfig {
  /// Read `path` (if it exists), then overlay `PORTRAIT_SERVER_*` variables.
  pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
    Self::from_sources(
      config::File::from(path).required(false),
      config::Environment::with_prefix(ENV_PREFIX),
    )
  }

  fn from_sources<F>(file: F, env: config::Environment) -> Result<Self, config::ConfigError>
  where
    F: config::Source + Send + Sync + 'static,
  {
    config::Config::builder()
      .add_source(file)
      .add_source(env)
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String {
    format!("{}:{}", self.host, self.port)
  }
}

// ─── Backend ──────────────────────────────────────────────────────────────────

/// Resolve the portrait backend from the environment, once.
///
/// A misconfigured provider does not stop the server: it is logged and
/// replaced by [`PortraitBackend::Unavailable`], so every request receives
/// the fallback image.
pub fn resolve_backend() -> PortraitBackend {
  backend_or_unavailable(GeneratorFactory::create_from_env())
}

fn backend_or_unavailable(result: Result<PortraitBackend, FactoryError>) -> PortraitBackend {
  match result {
    Ok(backend) => backend,
    Err(e) => {
      tracing::error!(
        error = %e,
        "portrait provider is not usable; every request will receive the fallback image"
      );
      PortraitBackend::unavailable(e)
    }
  }
}

// ─── App ──────────────────────────────────────────────────────────────────────

/// The full HTTP application with request tracing.
pub fn app<G>(generator: Arc<G>) -> Router
where
  G: PortraitGenerator + 'static,
{
  portrait_api::router(generator).layer(TraceLayer::new_for_http())
}
