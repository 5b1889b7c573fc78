//! A provider that answers every request with the same URL.
//!
//! Useful for local development and demos where calling a paid image API is
//! undesirable.

use portrait_core::{Person, PortraitGenerator, Result};
use reqwest::Url;

use crate::{error::FactoryError, settings::ProviderSettings};

#[derive(Debug, Clone)]
pub struct FixedGenerator {
  url: String,
}

impl FixedGenerator {
  pub fn new(url: impl Into<String>) -> Self {
    FixedGenerator { url: url.into() }
  }

  /// Accepts an absolute `http(s)` URL or a path on the serving host
  /// (e.g. `/blank-profilepic.svg`).
  pub fn from_settings(settings: &ProviderSettings) -> Result<Self, FactoryError> {
    let url = settings
      .fixed_url
      .as_deref()
      .ok_or(FactoryError::MissingFixedUrl)?;
    check_url(url)?;
    Ok(FixedGenerator::new(url))
  }

  pub fn url(&self) -> &str {
    &self.url
  }
}

impl PortraitGenerator for FixedGenerator {
  async fn generate_portrait(&self, person: &Person) -> Result<String> {
    tracing::debug!(person = %person.full_name(), url = %self.url, "serving fixed portrait");
    Ok(self.url.clone())
  }
}

fn check_url(url: &str) -> Result<(), FactoryError> {
  if url.starts_with('/') && !url.starts_with("//") {
    return Ok(());
  }
  let invalid = |reason: String| FactoryError::InvalidUrl { field: "PORTRAIT_FIXED_URL", reason };
  let parsed = Url::parse(url).map_err(|e| invalid(format!("{url:?}: {e}")))?;
  if !matches!(parsed.scheme(), "http" | "https") {
    return Err(invalid(format!("{url:?}: must be an http(s) URL or start with '/'")));
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_support::ada;

  #[tokio::test]
  async fn returns_configured_url() {
    let g = FixedGenerator::new("https://cdn.example/placeholder.png");
    let url = g.generate_portrait(&ada()).await.unwrap();
    assert_eq!(url, "https://cdn.example/placeholder.png");
  }

  #[test]
  fn requires_a_url() {
    let err = FixedGenerator::from_settings(&ProviderSettings::default()).unwrap_err();
    assert!(matches!(err, FactoryError::MissingFixedUrl));
  }

  #[test]
  fn accepts_absolute_and_rooted_urls() {
    for url in ["https://cdn.example/p.png", "http://localhost:3000/p.png", "/blank-profilepic.svg"] {
      let settings = ProviderSettings { fixed_url: Some(url.into()), ..Default::default() };
      let g = FixedGenerator::from_settings(&settings).unwrap();
      assert_eq!(g.url(), url);
    }
  }

  #[test]
  fn rejects_unusable_urls() {
    for url in ["portraits/p.png", "ftp://cdn.example/p.png", "//cdn.example/p.png", "javascript:alert(1)"] {
      let settings = ProviderSettings { fixed_url: Some(url.into()), ..Default::default() };
      let err = FixedGenerator::from_settings(&settings).unwrap_err();
      assert!(
        matches!(err, FactoryError::InvalidUrl { field: "PORTRAIT_FIXED_URL", .. }),
        "{url} produced {err}"
      );
    }
  }
}
