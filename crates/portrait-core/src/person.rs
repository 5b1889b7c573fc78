//! Person — the synthetic profile a portrait is rendered for.

use serde::{Deserialize, Serialize};

/// Read access to a person profile.
///
/// The client facade accepts anything implementing this trait, so callers
/// holding their own profile type do not have to convert it first.
pub trait PersonData {
  fn name(&self) -> &str;
  fn surname(&self) -> &str;
  fn age(&self) -> u32;
  fn gender(&self) -> &str;
  fn profession(&self) -> &str;
  fn country(&self) -> &str;
  fn city(&self) -> &str;
  fn postal_code(&self) -> &str;
  fn address(&self) -> &str;
  fn email(&self) -> &str;
}

/// An immutable synthetic person record. It has no identity beyond its
/// field values and lives only for the duration of one portrait request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
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

impl Person {
  /// `"<first> <last>"`.
  pub fn full_name(&self) -> String {
    format!("{} {}", self.first_name, self.last_name)
  }
}

impl PersonData for Person {
  fn name(&self) -> &str { &self.first_name }
  fn surname(&self) -> &str { &self.last_name }
  fn age(&self) -> u32 { self.age }
  fn gender(&self) -> &str { &self.gender }
  fn profession(&self) -> &str { &self.profession }
  fn country(&self) -> &str { &self.country }
  fn city(&self) -> &str { &self.city }
  fn postal_code(&self) -> &str { &self.postal_code }
  fn address(&self) -> &str { &self.address }
  fn email(&self) -> &str { &self.email }
}

#[cfg(test)]
pub(crate) fn ada() -> Person {
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
