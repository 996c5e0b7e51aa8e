use chrono::NaiveDateTime;

use crate::config::Config;
use crate::display;
use crate::error::LookupError;
use crate::model::DisplayFields;
use crate::provider::open_meteo::OpenMeteoProvider;
use crate::provider::{ForecastProvider, GeocodingProvider};

/// Runs the lookup chain: resolve the city, fetch its weather, derive the
/// display panel.
///
/// Each call to [`WeatherService::lookup`] is one sequential chain with no
/// parallelism between the two network calls. Concurrent lookups are
/// independent chains; whichever completes last owns the final render.
#[derive(Debug)]
pub struct WeatherService {
    geocoder: Box<dyn GeocodingProvider>,
    forecaster: Box<dyn ForecastProvider>,
}

impl WeatherService {
    pub fn new(
        geocoder: Box<dyn GeocodingProvider>,
        forecaster: Box<dyn ForecastProvider>,
    ) -> Self {
        Self { geocoder, forecaster }
    }

    /// Build a service backed by Open-Meteo, honoring any endpoint overrides
    /// from config.
    pub fn from_config(config: &Config) -> Self {
        let provider =
            OpenMeteoProvider::with_endpoints(config.geocoding_url(), config.forecast_url());
        Self::new(Box::new(provider.clone()), Box::new(provider))
    }

    /// One lookup. A `NotFound` from geocoding halts the chain before any
    /// forecast request is made; every failure leaves the previous panel
    /// untouched because no partial `DisplayFields` is ever produced.
    pub async fn lookup(
        &self,
        city: &str,
        now: NaiveDateTime,
    ) -> Result<DisplayFields, LookupError> {
        let location = self.geocoder.resolve(city).await?;
        tracing::debug!(
            "resolved '{city}' to {}, {} ({}, {})",
            location.name,
            location.country,
            location.latitude,
            location.longitude
        );

        let report = self
            .forecaster
            .fetch(location.latitude, location.longitude)
            .await?;

        display::compute(&location, &report, now)
    }
}
