//! Backend selection.

use std::fmt;

use portrait_core::{Error, Person, PortraitGenerator, Result};

use crate::{
  error::FactoryError,
  fixed::FixedGenerator,
  openai::{OpenAiConfig, OpenAiGenerator},
  settings::{ProviderKind, ProviderSettings},
};

// ─── Backend ──────────────────────────────────────────────────────────────────

/// A constructed portrait backend.
#[derive(Debug, Clone)]
pub enum PortraitBackend {
  OpenAi(OpenAiGenerator),
  Fixed(FixedGenerator),
  /// Stand-in installed when configuration failed at startup. Every call
  /// fails with a configuration error carrying the original reason.
  Unavailable(String),
}

impl PortraitBackend {
  pub fn unavailable(reason: impl fmt::Display) -> Self {
    PortraitBackend::Unavailable(reason.to_string())
  }

  pub fn name(&self) -> &'static str {
    match self {
      PortraitBackend::OpenAi(_) => ProviderKind::OpenAi.name(),
      PortraitBackend::Fixed(_) => ProviderKind::Fixed.name(),
      PortraitBackend::Unavailable(_) => "unavailable",
    }
  }
}

impl PortraitGenerator for PortraitBackend {
  async fn generate_portrait(&self, person: &Person) -> Result<String> {
    match self {
      PortraitBackend::OpenAi(g) => g.generate_portrait(person).await,
      PortraitBackend::Fixed(g) => g.generate_portrait(person).await,
      PortraitBackend::Unavailable(reason) => Err(Error::Configuration(reason.clone())),
    }
  }
}

// ─── Factory ──────────────────────────────────────────────────────────────────

/// Builds a [`PortraitBackend`] from provider settings.
pub struct GeneratorFactory;

impl GeneratorFactory {
  /// Read `PORTRAIT_*` variables and build the selected backend.
  pub fn create_from_env() -> Result<PortraitBackend, FactoryError> {
    Self::create(&ProviderSettings::from_env()?)
  }

  /// Build the backend selected by `settings`, failing fast on anything
  /// missing or invalid.
  pub fn create(settings: &ProviderSettings) -> Result<PortraitBackend, FactoryError> {
    let backend = match settings.provider_kind()? {
      ProviderKind::OpenAi => {
        PortraitBackend::OpenAi(OpenAiGenerator::new(OpenAiConfig::from_settings(settings)?)?)
      }
      ProviderKind::Fixed => PortraitBackend::Fixed(FixedGenerator::from_settings(settings)?),
    };
    tracing::info!(provider = backend.name(), "portrait backend selected");
    Ok(backend)
  }
}

#[cfg(test)]
mod tests {
  use portrait_core::ErrorKind;

  use super::*;
  use crate::test_support::ada;

  #[test]
  fn selects_openai() {
    let settings = ProviderSettings::from_vars([
      ("PORTRAIT_PROVIDER", "openai"),
      ("PORTRAIT_API_KEY", "sk-test"),
      ("PORTRAIT_MODEL", "dall-e-2"),
    ])
    .unwrap();
    let backend = GeneratorFactory::create(&settings).unwrap();
    match backend {
      PortraitBackend::OpenAi(g) => assert_eq!(g.config().model, "dall-e-2"),
      other => panic!("expected openai backend, got {}", other.name()),
    }
  }

  #[test]
  fn selects_fixed() {
    let settings = ProviderSettings::from_vars([
      ("PORTRAIT_PROVIDER", "fixed"),
      ("PORTRAIT_FIXED_URL", "https://cdn.example/p.png"),
    ])
    .unwrap();
    let backend = GeneratorFactory::create(&settings).unwrap();
    assert!(matches!(&backend, PortraitBackend::Fixed(g) if g.url() == "https://cdn.example/p.png"));
  }

  #[test]
  fn construction_fails_fast() {
    let cases: [(&[(&str, &str)], fn(&FactoryError) -> bool); 7] = [
      (&[], |e| matches!(e, FactoryError::MissingProvider)),
      (&[("PORTRAIT_PROVIDER", "dalle")], |e| matches!(e, FactoryError::UnknownProvider(_))),
      (&[("PORTRAIT_PROVIDER", "openai")], |e| matches!(e, FactoryError::MissingApiKey(_))),
      (&[("PORTRAIT_PROVIDER", "fixed")], |e| matches!(e, FactoryError::MissingFixedUrl)),
      (
        &[("PORTRAIT_PROVIDER", "fixed"), ("PORTRAIT_FIXED_URL", "portraits/p.png")],
        |e| matches!(e, FactoryError::InvalidUrl { field: "PORTRAIT_FIXED_URL", .. }),
      ),
      (
        &[
          ("PORTRAIT_PROVIDER", "openai"),
          ("PORTRAIT_API_KEY", "sk-test"),
          ("PORTRAIT_BASE_URL", "not a url"),
        ],
        |e| matches!(e, FactoryError::InvalidUrl { field: "PORTRAIT_BASE_URL", .. }),
      ),
      (
        &[
          ("PORTRAIT_PROVIDER", "openai"),
          ("PORTRAIT_API_KEY", "sk-test"),
          ("PORTRAIT_TIMEOUT_SECS", "0"),
        ],
        |e| matches!(e, FactoryError::InvalidTimeout),
      ),
    ];
    for (vars, expected) in cases {
      let settings = ProviderSettings::from_vars(vars.iter().copied()).unwrap();
      let err = GeneratorFactory::create(&settings).unwrap_err();
      assert!(expected(&err), "{vars:?} produced {err}");
    }
  }

  #[test]
  fn unreadable_settings_are_reported() {
    let err = ProviderSettings::from_vars([
      ("PORTRAIT_PROVIDER", "openai"),
      ("PORTRAIT_TIMEOUT_SECS", "soon"),
    ])
    .unwrap_err();
    assert!(matches!(err, FactoryError::Settings(_)), "{err}");
  }

  #[test]
  fn explicit_timeout_is_kept() {
    let settings = ProviderSettings::from_vars([
      ("PORTRAIT_PROVIDER", "openai"),
      ("PORTRAIT_API_KEY", "sk-test"),
      ("PORTRAIT_TIMEOUT_SECS", "30"),
    ])
    .unwrap();
    match GeneratorFactory::create(&settings).unwrap() {
      PortraitBackend::OpenAi(g) => {
        assert_eq!(g.config().timeout, Some(std::time::Duration::from_secs(30)))
      }
      other => panic!("expected openai backend, got {}", other.name()),
    }
  }

  #[tokio::test]
  async fn unavailable_backend_reports_configuration_error() {
    let backend = PortraitBackend::unavailable(FactoryError::MissingProvider);
    let err = backend.generate_portrait(&ada()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert!(err.to_string().contains("PORTRAIT_PROVIDER"), "{err}");
  }

  #[tokio::test]
  async fn backend_delegates_to_selected_provider() {
    let backend = PortraitBackend::Fixed(FixedGenerator::new("/portraits/1.png"));
    assert_eq!(backend.generate_portrait(&ada()).await.unwrap(), "/portraits/1.png");
  }
}
