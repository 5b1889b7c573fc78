//! Error type for provider construction.

use thiserror::Error;

use crate::settings::ProviderKind;

/// Why a portrait backend could not be built from configuration.
#[derive(Debug, Error)]
pub enum FactoryError {
  #[error("failed to read provider settings: {0}")]
  Settings(#[from] config::ConfigError),

  #[error("no portrait provider configured (set PORTRAIT_PROVIDER)")]
  MissingProvider,

  #[error("unknown portrait provider {0:?} (expected one of: openai, fixed)")]
  UnknownProvider(String),

  #[error("provider {0} requires an API key (set PORTRAIT_API_KEY)")]
  MissingApiKey(ProviderKind),

  #[error("provider fixed requires PORTRAIT_FIXED_URL")]
  MissingFixedUrl,

  #[error("invalid {field}: {reason}")]
  InvalidUrl { field: &'static str, reason: String },

  #[error("PORTRAIT_TIMEOUT_SECS must be at least 1")]
  InvalidTimeout,

  #[error("failed to build HTTP client: {0}")]
  HttpClient(#[source] reqwest::Error),
}

impl From<FactoryError> for portrait_core::Error {
  fn from(e: FactoryError) -> Self {
    portrait_core::Error::Configuration(e.to_string())
  }
}
