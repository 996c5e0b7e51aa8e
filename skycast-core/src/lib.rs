//! Core library for the `skycast` CLI.
//!
//! This crate defines:
//! - Weather-code classification and display-field derivation
//! - Abstraction over the geocoding and forecast collaborators
//! - Shared domain models and the lookup error taxonomy
//!
//! It is used by `skycast-cli`, but can also be reused by other binaries or services.

pub mod classify;
pub mod config;
pub mod display;
pub mod error;
pub mod model;
pub mod provider;
pub mod service;

pub use classify::{Classified, IconId, classify};
pub use config::Config;
pub use display::compute;
pub use error::LookupError;
pub use model::{CurrentWeather, DisplayFields, HourlySeries, Location, WeatherReport};
pub use provider::open_meteo::OpenMeteoProvider;
pub use provider::{ForecastProvider, GeocodingProvider};
pub use service::WeatherService;
