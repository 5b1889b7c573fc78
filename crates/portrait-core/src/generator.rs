//! The `PortraitGenerator` trait.
//!
//! Implemented by the provider backends (`portrait-providers`). The endpoint
//! depends on this abstraction, not on any concrete provider.

use std::future::Future;

use crate::{Result, person::Person};

/// Something that can turn a [`Person`] into an image URL.
///
/// Returns a `Send` future so the trait can be used from axum handlers on a
/// multi-threaded tokio runtime.
pub trait PortraitGenerator: Send + Sync {
  /// Render a portrait for `person` and return where it can be fetched.
  ///
  /// The returned URL may be remote (`https://...`) or inline (`data:...`).
  fn generate_portrait<'a>(
    &'a self,
    person: &'a Person,
  ) -> impl Future<Output = Result<String>> + Send + 'a;
}
