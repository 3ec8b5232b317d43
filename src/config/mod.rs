#[cfg(feature = "cli")]
pub mod cli;
pub mod options_store;
pub mod service_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, OutputFormat};
