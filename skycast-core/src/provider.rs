use async_trait::async_trait;
use std::fmt::Debug;

use crate::error::LookupError;
use crate::model::{Location, WeatherReport};

pub mod open_meteo;

/// Resolves a city name to its best-match coordinates.
///
/// Implementations perform exactly one network query per call and take the
/// first result if any. An empty result set and a failed call both surface as
/// [`LookupError::NotFound`]. No retries, no caching.
#[async_trait]
pub trait GeocodingProvider: Send + Sync + Debug {
    async fn resolve(&self, city: &str) -> Result<Location, LookupError>;
}

/// Fetches current plus hourly weather for a coordinate pair.
///
/// Implementations perform exactly one network query per call. Non-success
/// responses and transport errors surface as [`LookupError::Unavailable`].
#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    async fn fetch(&self, latitude: f64, longitude: f64) -> Result<WeatherReport, LookupError>;
}
