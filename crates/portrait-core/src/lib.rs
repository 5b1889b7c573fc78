//! Core types and trait definitions for portrait generation.
//!
//! This crate is deliberately free of HTTP dependencies. The client facade,
//! the server endpoint and the provider backends all depend on it.

pub mod error;
pub mod generate;
pub mod generator;
pub mod person;
pub mod prompt;
pub mod wire;

pub use error::{Error, ErrorKind, Result};
pub use generator::PortraitGenerator;
pub use person::{Person, PersonData};
pub use wire::{PORTRAIT_PATH, PortraitRequest, PortraitResult};

/// Placeholder image served whenever a portrait cannot be produced.
pub const FALLBACK_IMAGE_URL: &str = "/blank-profilepic.svg";
