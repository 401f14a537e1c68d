//! Client for the sunrise-sunset.org API: fetches a day's sun event times for a location,
//! converts them into a timezone and renders the day length as text.

pub mod config;
pub mod error;
pub mod sunrise_sunset;
pub mod time_format;
