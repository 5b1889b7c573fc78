//! Provider settings, read from `PORTRAIT_*` environment variables.
//!
//! | Variable | Meaning |
//! |----------|---------|
//! | `PORTRAIT_PROVIDER` | `openai` or `fixed` (required) |
//! | `PORTRAIT_API_KEY` | Bearer token; falls back to `OPENAI_API_KEY` |
//! | `PORTRAIT_MODEL` | Image model, default `dall-e-3` |
//! | `PORTRAIT_BASE_URL` | API root, default `https://api.openai.com/v1` |
//! | `PORTRAIT_SIZE` | Image size, default `1024x1024` |
//! | `PORTRAIT_FIXED_URL` | URL returned by the `fixed` provider (`http(s)` or a `/` path) |
//! | `PORTRAIT_TIMEOUT_SECS` | Optional request timeout in seconds (at least 1) |

use std::{fmt, str::FromStr};

use serde::Deserialize;

use crate::error::FactoryError;

/// Prefix shared by every provider variable.
pub const ENV_PREFIX: &str = "PORTRAIT";

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "dall-e-3";
pub const DEFAULT_SIZE: &str = "1024x1024";

// ─── Provider kind ────────────────────────────────────────────────────────────

/// The recognised portrait providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
  /// Any service speaking the OpenAI images API.
  OpenAi,
  /// Always answers with one configured URL.
  Fixed,
}

impl ProviderKind {
  pub fn name(&self) -> &'static str {
    match self {
      ProviderKind::OpenAi => "openai",
      ProviderKind::Fixed => "fixed",
    }
  }
}

impl fmt::Display for ProviderKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for ProviderKind {
  type Err = FactoryError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "openai" => Ok(ProviderKind::OpenAi),
      "fixed" => Ok(ProviderKind::Fixed),
      _ => Err(FactoryError::UnknownProvider(s.to_string())),
    }
  }
}

// ─── Settings ─────────────────────────────────────────────────────────────────

/// Raw provider configuration. Blank values count as absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderSettings {
  pub provider:     Option<String>,
  pub api_key:      Option<String>,
  pub model:        Option<String>,
  pub base_url:     Option<String>,
  pub size:         Option<String>,
  pub fixed_url:    Option<String>,
  pub timeout_secs: Option<u64>,
}

impl ProviderSettings {
  /// Read settings from the process environment.
  pub fn from_env() -> Result<Self, FactoryError> {
    let settings = Self::load(config::Environment::with_prefix(ENV_PREFIX))?;
    Ok(settings.with_api_key_fallback(std::env::var("OPENAI_API_KEY").ok()))
  }

  /// Read settings from an explicit set of `PORTRAIT_*` variables instead of
  /// the process environment.
  pub fn from_vars<I, K, V>(vars: I) -> Result<Self, FactoryError>
  where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
  {
    let map = vars
      .into_iter()
      .map(|(k, v)| (k.into(), v.into()))
      .collect::<config::Map<String, String>>();
    Self::load(config::Environment::with_prefix(ENV_PREFIX).source(Some(map)))
  }

  fn load(env: config::Environment) -> Result<Self, FactoryError> {
    let settings: ProviderSettings = config::Config::builder()
      .add_source(env)
      .build()?
      .try_deserialize()?;
    Ok(settings.normalised())
  }

  /// Use `key` as the API key if none was configured.
  pub fn with_api_key_fallback(mut self, key: Option<String>) -> Self {
    if self.api_key.is_none() {
      self.api_key = key.and_then(non_blank);
    }
    self
  }

  /// Parse the configured provider name.
  pub fn provider_kind(&self) -> Result<ProviderKind, FactoryError> {
    self
      .provider
      .as_deref()
      .ok_or(FactoryError::MissingProvider)?
      .parse()
  }

  fn normalised(self) -> Self {
    ProviderSettings {
      provider:     self.provider.and_then(non_blank),
      api_key:      self.api_key.and_then(non_blank),
      model:        self.model.and_then(non_blank),
      base_url:     self.base_url.and_then(non_blank),
      size:         self.size.and_then(non_blank),
      fixed_url:    self.fixed_url.and_then(non_blank),
      timeout_secs: self.timeout_secs,
    }
  }
}

fn non_blank(s: String) -> Option<String> {
  let trimmed = s.trim();
  (!trimmed.is_empty()).then(|| trimmed.to_string())
}
