//! Portrait generation backends and the factory that selects one.
//!
//! Provider selection is read from the process environment once, at
//! startup, and turned into a [`PortraitBackend`]. Request handlers only ever
//! see the resulting value; they never touch the environment.
//!
//! ```rust,ignore
//! let backend = GeneratorFactory::create_from_env()?;
//! let url = backend.generate_portrait(&person).await?;
//! ```

pub mod error;
pub mod factory;
pub mod fixed;
pub mod openai;
pub mod settings;

pub use error::FactoryError;
pub use factory::{GeneratorFactory, PortraitBackend};
pub use settings::{ProviderKind, ProviderSettings};
