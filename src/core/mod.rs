pub mod finder;
pub mod options;
pub mod plugin;
pub mod render;
pub mod shortcode;

pub use crate::domain::model::{
    GeoLocation, MeetOptions, MeetQuery, OptionsInput, Venue, VenueLink,
};
pub use crate::domain::ports::{OptionsStore, VenueSource};
pub use crate::utils::error::Result;
