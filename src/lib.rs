pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, OutputFormat};

pub use config::options_store::{FileOptionsStore, MemoryOptionsStore};
pub use config::service_config::ServiceConfig;
pub use core::{
    finder::MeetFinder, plugin::MeetsPlugin, shortcode::ShortcodeAttributes, GeoLocation,
    MeetOptions, MeetQuery, OptionsInput, Venue, VenueLink, VenueSource,
};
pub use utils::error::{MeetsError, Result};
