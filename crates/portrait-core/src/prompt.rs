//! Text prompt sent to image providers.
//!
//! Only appearance-related attributes reach the provider. Names, street
//! addresses and email addresses stay local.

use crate::person::PersonData;

/// Build the image prompt for `person`.
pub fn portrait_prompt<P: PersonData + ?Sized>(person: &P) -> String {
  let gender = person.gender().trim();
  let subject = if gender.is_empty() {
    "person".to_string()
  } else {
    format!("{} person", gender.to_lowercase())
  };

  let mut prompt = format!(
    "Professional head-and-shoulders portrait photograph of a {}-year-old {}",
    person.age(),
    subject,
  );

  let profession = person.profession().trim();
  if !profession.is_empty() {
    prompt.push_str(&format!(" who works as {} {}", article(profession), profession));
  }

  let place = [person.city().trim(), person.country().trim()]
    .into_iter()
    .filter(|s| !s.is_empty())
    .collect::<Vec<_>>()
    .join(", ");
  if !place.is_empty() {
    prompt.push_str(&format!(", living in {place}"));
  }

  prompt.push_str(
    ". Natural expression, soft studio lighting, neutral background, \
     realistic, high detail.",
  );
  prompt
}

fn article(word: &str) -> &'static str {
  match word.chars().next().map(|c| c.to_ascii_lowercase()) {
    Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
    _ => "a",
  }
}
