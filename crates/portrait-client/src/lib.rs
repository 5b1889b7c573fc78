//! Client-side facade for person profiles and their portraits.
//!
//! [`PersonService`] hides both the person synthesizer and the network: a
//! portrait request always resolves to a usable image URL, falling back to
//! the configured default when anything goes wrong.

use anyhow::{Context, Result, anyhow};
use portrait_core::{
  FALLBACK_IMAGE_URL, PORTRAIT_PATH, Person, PersonData, PortraitRequest, PortraitResult,
  generate::PersonGenerator,
};
use reqwest::Client;

/// Connection settings for the portrait server.
#[derive(Debug, Clone)]
pub struct ClientConfig {
  /// Root of the server hosting `/api/generate-portrait`.
  pub base_url:          String,
  /// Returned whenever a portrait cannot be obtained.
  pub default_image_url: String,
}

impl Default for ClientConfig {
  fn default() -> Self {
    ClientConfig {
      base_url:          "http://localhost:3000".to_string(),
      default_image_url: FALLBACK_IMAGE_URL.to_string(),
    }
  }
}

/// Generates people and fetches their portraits.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Debug, Clone)]
pub struct PersonService {
  client:            Client,
  endpoint:          String,
  default_image_url: String,
  people:            PersonGenerator,
}

impl PersonService {
  pub fn new(config: ClientConfig) -> Result<Self> {
    Self::with_generator(config, PersonGenerator::default())
  }

  /// Like [`PersonService::new`], with a caller-supplied person synthesizer.
  pub fn with_generator(config: ClientConfig, people: PersonGenerator) -> Result<Self> {
    // No timeout: requests inherit whatever the transport enforces.
    let client = Client::builder()
      .build()
      .context("failed to build HTTP client")?;
    let endpoint = format!("{}{}", config.base_url.trim_end_matches('/'), PORTRAIT_PATH);
    Ok(PersonService {
      client,
      endpoint,
      default_image_url: config.default_image_url,
      people,
    })
  }

  /// A fresh synthetic person.
  pub fn generate_person(&self) -> Person {
    self.people.generate()
  }

  /// Fetch a portrait URL for `person`.
  ///
  /// Never fails: any error is logged and the default image URL returned.
  pub async fn generate_portrait<P: PersonData + ?Sized>(&self, person: &P) -> String {
    match self.request_portrait(person).await {
      Ok(url) => url,
      Err(e) => {
        tracing::error!(error = %format!("{e:#}"), "failed to generate portrait");
        self.default_image_url.clone()
      }
    }
  }

  pub fn default_image_url(&self) -> &str {
    &self.default_image_url
  }

  /// `POST /api/generate-portrait`
  async fn request_portrait<P: PersonData + ?Sized>(&self, person: &P) -> Result<String> {
    let resp = self
      .client
      .post(&self.endpoint)
      .json(&PortraitRequest::from_person(person))
      .send()
      .await
      .with_context(|| format!("POST {PORTRAIT_PATH} failed"))?;

    if !resp.status().is_success() {
      return Err(anyhow!("POST {PORTRAIT_PATH} → {}", resp.status()));
    }
    let result: PortraitResult = resp.json().await.context("deserialising portrait result")?;

    if result.image_url.trim().is_empty() {
      return Err(anyhow!("server returned an empty image url"));
    }
    Ok(result.image_url)
  }
}

#[cfg(test)]
mod tests {
  use std::{net::SocketAddr, sync::Arc};

  use axum::{Json, Router, http::StatusCode, routing::post};
  use portrait_providers::{FactoryError, PortraitBackend, fixed::FixedGenerator};
  use serde_json::json;
  use tokio::net::TcpListener;

  use super::*;

  async fn serve(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
    addr
  }

  fn service(addr: SocketAddr) -> PersonService {
    PersonService::new(ClientConfig {
      base_url:          format!("http://{addr}/"),
      default_image_url: "/default.png".to_string(),
    })
    .unwrap()
  }

  fn ada() -> Person {
    Person {
      first_name:  "Ada".to_string(),
      last_name:   "Lovelace".to_string(),
      age:         30,
      gender:      "female".to_string(),
      profession:  "engineer".to_string(),
      country:     "UK".to_string(),
      city:        "London".to_string(),
      postal_code: "E1".to_string(),
      address:     "1 Main St".to_string(),
      email:       "ada@example.com".to_string(),
    }
  }

  // ── Against the real endpoint ───────────────────────────────────────────────

  #[tokio::test]
  async fn returns_server_url() {
    let backend = PortraitBackend::Fixed(FixedGenerator::new("https://cdn.example/ada.png"));
    let addr = serve(portrait_api::router(Arc::new(backend))).await;

    let url = service(addr).generate_portrait(&ada()).await;
    assert_eq!(url, "https://cdn.example/ada.png");
  }

  #[tokio::test]
  async fn server_side_fallback_is_passed_through() {
    let backend = PortraitBackend::unavailable(FactoryError::MissingProvider);
    let addr = serve(portrait_api::router(Arc::new(backend))).await;

    let url = service(addr).generate_portrait(&ada()).await;
    assert_eq!(url, FALLBACK_IMAGE_URL);
  }

  #[tokio::test]
  async fn generated_people_round_trip() {
    let backend = PortraitBackend::Fixed(FixedGenerator::new("https://cdn.example/x.png"));
    let addr = serve(portrait_api::router(Arc::new(backend))).await;
    let svc = service(addr);

    for _ in 0..5 {
      let person = svc.generate_person();
      let url = svc.generate_portrait(&person).await;
      assert_eq!(url, "https://cdn.example/x.png");
    }
  }

  #[tokio::test]
  async fn sends_every_field() {
    let app = Router::new().route(
      PORTRAIT_PATH,
      post(|Json(body): Json<PortraitRequest>| async move {
        let person = Person::from(body);
        Json(json!({ "imageUrl": format!("https://cdn.example/{}.png", person.email) }))
      }),
    );
    let addr = serve(app).await;

    let url = service(addr).generate_portrait(&ada()).await;
    assert_eq!(url, "https://cdn.example/ada@example.com.png");
  }

  // ── Failure paths ───────────────────────────────────────────────────────────

  #[tokio::test]
  async fn unreachable_server_yields_default() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let url = service(addr).generate_portrait(&ada()).await;
    assert_eq!(url, "/default.png");
  }

  #[tokio::test]
  async fn error_status_yields_default() {
    let app = Router::new().route(
      PORTRAIT_PATH,
      post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let addr = serve(app).await;

    let url = service(addr).generate_portrait(&ada()).await;
    assert_eq!(url, "/default.png");
  }

  #[tokio::test]
  async fn malformed_response_yields_default() {
    let app = Router::new().route(
      PORTRAIT_PATH,
      post(|| async { Json(json!({ "url": "https://cdn.example/wrong-key.png" })) }),
    );
    let addr = serve(app).await;

    let url = service(addr).generate_portrait(&ada()).await;
    assert_eq!(url, "/default.png");
  }

  #[tokio::test]
  async fn empty_url_yields_default() {
    let app = Router::new().route(
      PORTRAIT_PATH,
      post(|| async { Json(json!({ "imageUrl": "" })) }),
    );
    let addr = serve(app).await;

    let url = service(addr).generate_portrait(&ada()).await;
    assert_eq!(url, "/default.png");
  }

  // ── Accessors ───────────────────────────────────────────────────────────────

  #[test]
  fn default_image_url_defaults_to_placeholder() {
    let svc = PersonService::new(ClientConfig::default()).unwrap();
    assert_eq!(svc.default_image_url(), "/blank-profilepic.svg");
  }

  #[test]
  fn custom_generator_is_used() {
    let svc = PersonService::with_generator(
      ClientConfig::default(),
      PersonGenerator::with_ages(42..=42),
    )
    .unwrap();
    assert_eq!(svc.generate_person().age, 42);
  }

  #[test]
  fn endpoint_joins_base_url() {
    let svc = PersonService::new(ClientConfig {
      base_url: "https://people.example/".to_string(),
      ..Default::default()
    })
    .unwrap();
    assert_eq!(svc.endpoint, "https://people.example/api/generate-portrait");
  }
}
