//! Configuration module
//!
//! This module contains the YAML search profile and the functions that load it.

mod loader;
mod model;

pub use loader::{default_config_path, load_config};
pub use model::SearchConfig;
