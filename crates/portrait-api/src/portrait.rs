//! Handler for `POST /api/generate-portrait`.
//!
//! Every failure, whatever its kind, is logged and answered with the
//! fallback image and a 200 status. Callers never see an error response.

use std::sync::Arc;

use axum::{
  Json,
  extract::{State, rejection::JsonRejection},
};
use portrait_core::{Error, Person, PortraitGenerator, PortraitRequest, PortraitResult, Result};

/// `POST /api/generate-portrait` — body: [`PortraitRequest`].
pub async fn generate<G>(
  State(generator): State<Arc<G>>,
  payload: Result<Json<PortraitRequest>, JsonRejection>,
) -> Json<PortraitResult>
where
  G: PortraitGenerator + 'static,
{
  match render(generator.as_ref(), payload).await {
    Ok(image_url) => Json(PortraitResult::new(image_url)),
    Err(e) => {
      tracing::warn!(kind = %e.kind(), error = %e, "portrait generation failed, serving fallback image");
      Json(PortraitResult::fallback())
    }
  }
}

async fn render<G>(
  generator: &G,
  payload:   Result<Json<PortraitRequest>, JsonRejection>,
) -> Result<String>
where
  G: PortraitGenerator,
{
  let Json(request) = payload.map_err(|e| Error::MalformedPayload(e.body_text()))?;
  let person = Person::from(request);

  let image_url = generator.generate_portrait(&person).await?;
  if image_url.trim().is_empty() {
    return Err(Error::Provider("provider returned an empty image url".to_string()));
  }

  tracing::debug!(person = %person.full_name(), "portrait generated");
  Ok(image_url)
}
