use crate::config::service_config::ServiceConfig;
use crate::core::GeoLocation;
use crate::utils::error::Result;
use crate::utils::validation::{validate_finite, Validate};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Html,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "bikermeets")]
#[command(about = "List nearby motorcycle meet venues from bikermeets.cc")]
pub struct CliConfig {
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,

    #[arg(long, allow_hyphen_values = true)]
    pub lon: f64,

    #[arg(
        long,
        allow_hyphen_values = true,
        help = "Search radius in miles (overrides stored option)"
    )]
    pub radius: Option<f64>,

    #[arg(
        long,
        allow_hyphen_values = true,
        help = "Maximum number of venues (overrides stored option)"
    )]
    pub limit: Option<i64>,

    #[arg(long, default_value = "./bikermeets_options.toml")]
    pub options_file: PathBuf,

    #[arg(long, help = "Service configuration TOML file")]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum, default_value = "html")]
    pub format: OutputFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl CliConfig {
    pub fn location(&self) -> GeoLocation {
        GeoLocation {
            latitude: self.lat,
            longitude: self.lon,
        }
    }

    pub fn service_config(&self) -> Result<ServiceConfig> {
        let config = match &self.config {
            Some(path) => ServiceConfig::from_file(path)?,
            None => ServiceConfig::default(),
        };
        config.validate()?;
        Ok(config)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_finite("lat", self.lat)?;
        validate_finite("lon", self.lon)?;
        if let Some(radius) = self.radius {
            validate_finite("radius", radius)?;
        }
        Ok(())
    }
}
