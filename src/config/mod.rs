// src/config/mod.rs

//! Staging layout configuration.
//!
//! Responsibilities:
//! - Define the TOML-backed data model and built-in defaults (`model.rs`).
//! - Load a layout file from disk (`loader.rs`).
//! - Validate that the layout cannot delete anything outside its own
//!   destinations (`validate.rs`).

pub mod loader;
pub mod model;
mod validate;

pub use loader::{load_and_validate, load_for_root, load_from_path};
pub use model::{CodeSection, DataSection, RawStageConfig, StageConfig};
