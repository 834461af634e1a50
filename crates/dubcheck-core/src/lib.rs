//! Include-path and flag derivation for dubcheck
//!
//! Ties manifest location, parsing and package-directory resolution into a
//! single call producing a [`CheckConfig`] for an external syntax checker.

pub mod config;
pub mod deriver;
pub mod error;
pub mod settings;

pub use config::CheckConfig;
pub use deriver::{Deriver, derive_once};
pub use error::{Error, Result};
pub use settings::Settings;
