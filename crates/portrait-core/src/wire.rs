//! JSON bodies exchanged between the client facade and the portrait endpoint.
//!
//! | Direction | Body |
//! |-----------|------|
//! | request   | `{ firstName, lastName, age, gender, profession, country, city, postalCode, address, email }` |
//! | response  | `{ imageUrl }` |

use serde::{Deserialize, Serialize};

use crate::{
  FALLBACK_IMAGE_URL,
  person::{Person, PersonData},
};

/// Route of the portrait endpoint, relative to the server root.
pub const PORTRAIT_PATH: &str = "/api/generate-portrait";

// ─── Request ──────────────────────────────────────────────────────────────────

/// Wire form of a [`Person`]. Every field is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortraitRequest {
  pub first_name:  String,
  pub last_name:   String,
  pub age:         u32,
  pub gender:      String,
  pub profession:  String,
  pub country:     String,
  pub city:        String,
  pub postal_code: String,
  pub address:     String,
  pub email:       String,
}

impl PortraitRequest {
  pub fn from_person<P: PersonData + ?Sized>(person: &P) -> Self {
    PortraitRequest {
      first_name:  person.name().to_owned(),
      last_name:   person.surname().to_owned(),
      age:         person.age(),
      gender:      person.gender().to_owned(),
      profession:  person.profession().to_owned(),
      country:     person.country().to_owned(),
      city:        person.city().to_owned(),
      postal_code: person.postal_code().to_owned(),
      address:     person.address().to_owned(),
      email:       person.email().to_owned(),
    }
  }
}

impl From<PortraitRequest> for Person {
  fn from(r: PortraitRequest) -> Self {
    Person {
      first_name:  r.first_name,
      last_name:   r.last_name,
      age:         r.age,
      gender:      r.gender,
      profession:  r.profession,
      country:     r.country,
      city:        r.city,
      postal_code: r.postal_code,
      address:     r.address,
      email:       r.email,
    }
  }
}

// ─── Response ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortraitResult {
  pub image_url: String,
}

impl PortraitResult {
  pub fn new(image_url: impl Into<String>) -> Self {
    PortraitResult { image_url: image_url.into() }
  }

  /// The placeholder result sent whenever generation fails.
  pub fn fallback() -> Self {
    PortraitResult::new(FALLBACK_IMAGE_URL)
  }
}
