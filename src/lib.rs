pub mod config;
pub mod core;
pub mod descriptor;
pub mod error;
pub mod normalization;
pub mod supervised;
pub mod utils;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use error::{ModelError, Result};
pub use supervised::{LinearModel, Model, Persistable, Preprocessor};
