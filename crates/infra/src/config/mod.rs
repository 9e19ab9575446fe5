//! Configuration loading
//!
//! Reads credentials and endpoint overrides from environment variables or a
//! `brighthub.{json,toml}` file.

pub mod loader;

pub use loader::{load, load_from_env, load_from_file, probe_config_paths};
