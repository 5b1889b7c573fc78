//! Synthetic person profiles.
//!
//! Every field is drawn uniformly from small built-in tables. The output is
//! plausible, not statistically representative.

use std::ops::RangeInclusive;

use rand::Rng;

use crate::person::Person;

// ─── Tables ───────────────────────────────────────────────────────────────────

const GENDERS: [&str; 3] = ["female", "male", "non-binary"];

const FEMALE_NAMES: [&str; 12] = [
  "Ada", "Grace", "Amanda", "Sally", "Judy", "Zoë", "Ingrid", "Aiko", "Lucía",
  "Priya", "Fatima", "Olivia",
];

const MALE_NAMES: [&str; 12] = [
  "Tom", "Johnny", "Eric", "Frank", "Will", "José", "Lars", "Kenji", "Mateo",
  "Arjun", "Omar", "Noah",
];

const FAMILY_NAMES: [&str; 14] = [
  "Connor", "Henderson", "Farley", "Henson", "Jeffries", "Carlin", "Anderson",
  "O'Sullivan", "Müller", "García", "Tanaka", "Sharma", "Haddad", "Novak",
];

const PROFESSIONS: [&str; 14] = [
  "software engineer", "nurse", "architect", "teacher", "electrician",
  "accountant", "chef", "photographer", "pharmacist", "journalist",
  "carpenter", "data analyst", "veterinarian", "pilot",
];

const STREETS: [&str; 10] = [
  "Main Street", "High Street", "Oak Avenue", "Station Road", "Church Lane",
  "Maple Drive", "Harbour Way", "Mill Road", "Park Crescent", "River Walk",
];

const DOMAINS: [&str; 3] = ["example.com", "example.org", "example.net"];

/// A city and the shape of its postal codes: `#` is a digit, `@` an
/// uppercase letter, anything else is copied through.
struct Place {
  city:   &'static str,
  postal: &'static str,
}

const COUNTRIES: [(&str, &[Place]); 6] = [
  ("United Kingdom", &[
    Place { city: "London",     postal: "E# #@@" },
    Place { city: "Manchester", postal: "M## #@@" },
    Place { city: "Edinburgh",  postal: "EH# #@@" },
  ]),
  ("United States", &[
    Place { city: "Portland", postal: "972##" },
    Place { city: "Austin",   postal: "787##" },
    Place { city: "Chicago",  postal: "606##" },
  ]),
  ("Germany", &[
    Place { city: "Berlin",  postal: "10###" },
    Place { city: "Hamburg", postal: "20###" },
  ]),
  ("Japan", &[
    Place { city: "Tokyo", postal: "1##-####" },
    Place { city: "Osaka", postal: "5##-####" },
  ]),
  ("Canada", &[
    Place { city: "Toronto",   postal: "M#@ #@#" },
    Place { city: "Vancouver", postal: "V#@ #@#" },
  ]),
  ("Spain", &[
    Place { city: "Madrid",    postal: "28###" },
    Place { city: "Barcelona", postal: "08###" },
  ]),
];

// ─── Generator ────────────────────────────────────────────────────────────────

/// Produces synthetic [`Person`] records.
#[derive(Debug, Clone)]
pub struct PersonGenerator {
  ages: RangeInclusive<u32>,
}

impl Default for PersonGenerator {
  fn default() -> Self {
    PersonGenerator { ages: 18..=80 }
  }
}

impl PersonGenerator {
  /// A generator drawing ages from `ages`. An empty range falls back to the
  /// default range.
  pub fn with_ages(ages: RangeInclusive<u32>) -> Self {
    if ages.is_empty() {
      PersonGenerator::default()
    } else {
      PersonGenerator { ages }
    }
  }

  /// Generate a person using the thread-local RNG.
  pub fn generate(&self) -> Person {
    self.generate_with(&mut rand::rng())
  }

  /// Generate a person from an explicit RNG, for reproducible output.
  pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Person {
    let gender = pick(rng, &GENDERS);
    let first_name = match gender {
      "female" => pick(rng, &FEMALE_NAMES),
      "male" => pick(rng, &MALE_NAMES),
      _ => {
        if rng.random_bool(0.5) {
          pick(rng, &FEMALE_NAMES)
        } else {
          pick(rng, &MALE_NAMES)
        }
      }
    };
    let last_name = pick(rng, &FAMILY_NAMES);

    let (country, places) = COUNTRIES[rng.random_range(0..COUNTRIES.len())];
    let place = &places[rng.random_range(0..places.len())];

    let address = format!("{} {}", rng.random_range(1..=250), pick(rng, &STREETS));
    let email = format!(
      "{}.{}{:02}@{}",
      email_part(first_name),
      email_part(last_name),
      rng.random_range(0..100),
      pick(rng, &DOMAINS),
    );

    Person {
      first_name: first_name.to_string(),
      last_name: last_name.to_string(),
      age: rng.random_range(self.ages.clone()),
      gender: gender.to_string(),
      profession: pick(rng, &PROFESSIONS).to_string(),
      country: country.to_string(),
      city: place.city.to_string(),
      postal_code: fill_postal(rng, place.postal),
      address,
      email,
    }
  }
}

fn pick<R: Rng + ?Sized>(rng: &mut R, items: &[&'static str]) -> &'static str {
  items[rng.random_range(0..items.len())]
}

fn fill_postal<R: Rng + ?Sized>(rng: &mut R, pattern: &str) -> String {
  pattern
    .chars()
    .map(|c| match c {
      '#' => char::from(b'0' + rng.random_range(0..10u8)),
      '@' => char::from(b'A' + rng.random_range(0..26u8)),
      other => other,
    })
    .collect()
}

/// Lowercase ASCII form of a name, suitable for an email local part.
fn email_part(name: &str) -> String {
  name
    .chars()
    .filter_map(|c| {
      let c = match c {
        'á' | 'à' | 'ä' | 'â' | 'Á' => 'a',
        'é' | 'è' | 'ë' | 'ê' | 'É' => 'e',
        'í' | 'ì' | 'ï' | 'î' => 'i',
        'ó' | 'ò' | 'ö' | 'ô' => 'o',
        'ú' | 'ù' | 'ü' | 'û' | 'Ü' => 'u',
        'ñ' => 'n',
        other => other,
      };
      c.is_ascii_alphanumeric().then(|| c.to_ascii_lowercase())
    })
    .collect()
}
