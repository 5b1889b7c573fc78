//! The placeholder portrait, bundled into the binary.

use axum::{http::header, response::IntoResponse};

const BLANK_PROFILE_PIC: &str = include_str!("../assets/blank-profilepic.svg");

/// `GET /blank-profilepic.svg`
pub async fn blank_profile_pic() -> impl IntoResponse {
  (
    [
      (header::CONTENT_TYPE, "image/svg+xml"),
      (header::CACHE_CONTROL, "public, max-age=86400"),
    ],
    BLANK_PROFILE_PIC,
  )
}
