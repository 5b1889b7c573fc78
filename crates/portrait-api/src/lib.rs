//! HTTP surface for portrait generation.
//!
//! Exposes an axum [`Router`] backed by any
//! [`PortraitGenerator`](portrait_core::PortraitGenerator).
//! TLS and transport concerns are the caller's responsibility.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/api/generate-portrait` | Body: [`PortraitRequest`](portrait_core::PortraitRequest); always 200 |
//! | `GET`  | `/blank-profilepic.svg` | Placeholder image used as the fallback |

pub mod asset;
pub mod portrait;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use portrait_core::{FALLBACK_IMAGE_URL, PORTRAIT_PATH, PortraitGenerator};

/// Build the router for `generator`.
///
/// The returned `Router<()>` can be merged into any parent router regardless
/// of its own state type.
pub fn router<G>(generator: Arc<G>) -> Router<()>
where
  G: PortraitGenerator + 'static,
{
  Router::new()
    .route(PORTRAIT_PATH, post(portrait::generate::<G>))
    .route(FALLBACK_IMAGE_URL, get(asset::blank_profile_pic))
    .with_state(generator)
}

// ─── Integration tests ────────────────────────────────────────────────────────
