//! Layered configuration for the command-line front end.

mod builder;
pub mod defaults;
mod file;
mod models;

pub use builder::build_config;
pub use models::{AppConfig, SourcesConfig};
