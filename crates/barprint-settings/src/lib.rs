//! # barprint Settings
//!
//! Configuration file handling for the barprint binary.

pub mod config;

pub use config::{default_config_path, Config, OutlineSettings, OutputFormat, OutputSettings};
