//! OpenAI-compatible image generation backend.
//!
//! Calls `POST {base_url}/images/generations` and returns the first image of
//! the response, either as its hosted URL or as an inline `data:` URL when
//! the provider only returns base64.

use std::{fmt, time::Duration};

use portrait_core::{Error, Person, PortraitGenerator, Result, prompt::portrait_prompt};
use reqwest::{Client, StatusCode, Url};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
  error::FactoryError,
  settings::{DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_SIZE, ProviderKind, ProviderSettings},
};

// ─── Configuration ────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct OpenAiConfig {
  /// API root, e.g. `https://api.openai.com/v1`.
  pub base_url: Url,
  pub api_key:  String,
  pub model:    String,
  /// Requested image size, e.g. `1024x1024`.
  pub size:     String,
  /// `None` leaves the HTTP client's default in place.
  pub timeout:  Option<Duration>,
}

impl fmt::Debug for OpenAiConfig {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("OpenAiConfig")
      .field("base_url", &self.base_url.as_str())
      .field("api_key", &"<redacted>")
      .field("model", &self.model)
      .field("size", &self.size)
      .field("timeout", &self.timeout)
      .finish()
  }
}

impl OpenAiConfig {
  pub fn from_settings(settings: &ProviderSettings) -> Result<Self, FactoryError> {
    let api_key = settings
      .api_key
      .clone()
      .ok_or(FactoryError::MissingApiKey(ProviderKind::OpenAi))?;

    let raw_base = settings.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
    let base_url = Url::parse(raw_base).map_err(|e| FactoryError::InvalidUrl {
      field:  "PORTRAIT_BASE_URL",
      reason: format!("{raw_base:?}: {e}"),
    })?;
    if !matches!(base_url.scheme(), "http" | "https") {
      return Err(FactoryError::InvalidUrl {
        field:  "PORTRAIT_BASE_URL",
        reason: format!("{raw_base:?}: scheme must be http or https"),
      });
    }

    // A zero timeout would fail every request.
    let timeout = match settings.timeout_secs {
      Some(0) => return Err(FactoryError::InvalidTimeout),
      secs => secs.map(Duration::from_secs),
    };

    Ok(OpenAiConfig {
      base_url,
      api_key,
      model: settings.model.clone().unwrap_or_else(|| DEFAULT_MODEL.to_string()),
      size: settings.size.clone().unwrap_or_else(|| DEFAULT_SIZE.to_string()),
      timeout,
    })
  }
}

// ─── Wire types ───────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct ImageRequest<'a> {
  model:  &'a str,
  prompt: &'a str,
  n:      u32,
  size:   &'a str,
}

#[derive(Debug, Deserialize)]
struct ImageResponse {
  #[serde(default)]
  data: Vec<ImageData>,
}

#[derive(Debug, Deserialize)]
struct ImageData {
  url:      Option<String>,
  b64_json: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
  error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
  message: String,
}

// ─── Backend ──────────────────────────────────────────────────────────────────

/// Portrait generator backed by an OpenAI-compatible images endpoint.
///
/// Cheap to clone; the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Debug, Clone)]
pub struct OpenAiGenerator {
  client:   Client,
  config:   OpenAiConfig,
  endpoint: String,
}

impl OpenAiGenerator {
  pub fn new(config: OpenAiConfig) -> Result<Self, FactoryError> {
    let mut builder = Client::builder();
    if let Some(timeout) = config.timeout {
      builder = builder.timeout(timeout);
    }
    let client = builder.build().map_err(FactoryError::HttpClient)?;

    let endpoint = format!(
      "{}/images/generations",
      config.base_url.as_str().trim_end_matches('/')
    );

    info!(endpoint = %endpoint, model = %config.model, "OpenAI portrait backend created");
    Ok(OpenAiGenerator { client, config, endpoint })
  }

  pub fn config(&self) -> &OpenAiConfig {
    &self.config
  }
}

impl PortraitGenerator for OpenAiGenerator {
  async fn generate_portrait(&self, person: &Person) -> Result<String> {
    let prompt = portrait_prompt(person);
    debug!(model = %self.config.model, prompt = %prompt, "requesting portrait");

    let resp = self
      .client
      .post(&self.endpoint)
      .bearer_auth(&self.config.api_key)
      .json(&ImageRequest {
        model:  &self.config.model,
        prompt: &prompt,
        n:      1,
        size:   &self.config.size,
      })
      .send()
      .await
      .map_err(|e| Error::Transport(Box::new(e)))?;

    let status = resp.status();
    if !status.is_success() {
      let body = resp.text().await.unwrap_or_default();
      return Err(Error::Provider(describe_failure(status, &body)));
    }

    let body: ImageResponse = resp
      .json()
      .await
      .map_err(|e| Error::Provider(format!("undecodable response: {e}")))?;
    first_image(body)
  }
}

fn first_image(body: ImageResponse) -> Result<String> {
  let image = body
    .data
    .into_iter()
    .next()
    .ok_or_else(|| Error::Provider("response contained no images".to_string()))?;

  match (image.url, image.b64_json) {
    (Some(url), _) if !url.is_empty() => Ok(url),
    (_, Some(b64)) if !b64.is_empty() => Ok(format!("data:image/png;base64,{b64}")),
    _ => Err(Error::Provider("image carried neither url nor b64_json".to_string())),
  }
}

/// Human-readable summary of a non-2xx provider response.
fn describe_failure(status: StatusCode, body: &str) -> String {
  if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
    return format!("{status}: {}", envelope.error.message);
  }
  let snippet: String = body.chars().take(200).collect();
  if snippet.trim().is_empty() {
    status.to_string()
  } else {
    format!("{status}: {}", snippet.trim())
  }
}
