//! Error types for `portrait-core`.
//!
//! Every failure on the portrait path is eventually collapsed into the
//! fallback image. [`ErrorKind`] survives that collapse so logs can still
//! tell the four failure classes apart.

use std::fmt;

use thiserror::Error;

/// The coarse class of a portrait failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
  /// The provider could not be reached.
  Transport,
  /// The provider answered, but not with a usable image.
  Provider,
  /// The inbound request did not have the expected shape.
  MalformedPayload,
  /// The provider is missing or misconfigured.
  Configuration,
}

impl ErrorKind {
  pub fn as_str(&self) -> &'static str {
    match self {
      ErrorKind::Transport => "transport",
      ErrorKind::Provider => "provider",
      ErrorKind::MalformedPayload => "malformed_payload",
      ErrorKind::Configuration => "configuration",
    }
  }
}

impl fmt::Display for ErrorKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[derive(Debug, Error)]
pub enum Error {
  #[error("transport error: {0}")]
  Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

  #[error("provider error: {0}")]
  Provider(String),

  #[error("malformed payload: {0}")]
  MalformedPayload(String),

  #[error("configuration error: {0}")]
  Configuration(String),
}

impl Error {
  pub fn kind(&self) -> ErrorKind {
    match self {
      Error::Transport(_) => ErrorKind::Transport,
      Error::Provider(_) => ErrorKind::Provider,
      Error::MalformedPayload(_) => ErrorKind::MalformedPayload,
      Error::Configuration(_) => ErrorKind::Configuration,
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
