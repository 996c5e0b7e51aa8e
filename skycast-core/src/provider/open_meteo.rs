use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::error::LookupError;
use crate::model::{CurrentWeather, HourlySeries, Location, WeatherReport};

use super::{ForecastProvider, GeocodingProvider};

/// Public Open-Meteo geocoding endpoint. No API key required.
pub const GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";

/// Public Open-Meteo forecast endpoint.
pub const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Client for the Open-Meteo geocoding and forecast services.
///
/// Both endpoints are injectable so the integration tests can point the
/// provider at a local mock server instead of the live API.
#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    http: Client,
    geocoding_url: String,
    forecast_url: String,
}

impl OpenMeteoProvider {
    pub fn new() -> Self {
        Self::with_endpoints(GEOCODING_URL, FORECAST_URL)
    }

    pub fn with_endpoints(
        geocoding_url: impl Into<String>,
        forecast_url: impl Into<String>,
    ) -> Self {
        Self {
            http: Client::new(),
            geocoding_url: geocoding_url.into(),
            forecast_url: forecast_url.into(),
        }
    }
}

impl Default for OpenMeteoProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GeocodingProvider for OpenMeteoProvider {
    async fn resolve(&self, city: &str) -> Result<Location, LookupError> {
        let res = self
            .http
            .get(&self.geocoding_url)
            .query(&[("name", city), ("count", "1")])
            .send()
            .await
            .map_err(|err| {
                tracing::debug!("geocoding request for '{city}' failed: {err}");
                LookupError::not_found(city)
            })?;

        let status = res.status();
        let body = res.text().await.map_err(|err| {
            tracing::debug!("failed to read geocoding response body: {err}");
            LookupError::not_found(city)
        })?;

        if !status.is_success() {
            tracing::warn!(
                "geocoding request for '{city}' returned status {status}: {}",
                truncate_body(&body)
            );
            return Err(LookupError::not_found(city));
        }

        let parsed: OmGeocodingResponse = serde_json::from_str(&body).map_err(|err| {
            tracing::debug!("failed to parse geocoding JSON: {err}");
            LookupError::not_found(city)
        })?;

        let hit = parsed
            .results
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or_else(|| LookupError::not_found(city))?;

        Ok(Location {
            name: hit.name,
            country: hit.country,
            latitude: hit.latitude,
            longitude: hit.longitude,
        })
    }
}

#[async_trait]
impl ForecastProvider for OpenMeteoProvider {
    async fn fetch(&self, latitude: f64, longitude: f64) -> Result<WeatherReport, LookupError> {
        let res = self
            .http
            .get(&self.forecast_url)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("current_weather", "true".to_string()),
                (
                    "hourly",
                    "temperature_2m,relativehumidity_2m,apparent_temperature".to_string(),
                ),
            ])
            .send()
            .await
            .map_err(|err| LookupError::unavailable(format!("transport error: {err}")))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|err| LookupError::unavailable(format!("failed to read body: {err}")))?;

        if !status.is_success() {
            tracing::warn!("forecast request returned status {status}: {}", truncate_body(&body));
            return Err(LookupError::unavailable(format!("status {status}")));
        }

        let parsed: OmForecastResponse = serde_json::from_str(&body)
            .map_err(|err| LookupError::unavailable(format!("unexpected response: {err}")))?;

        Ok(WeatherReport {
            current: CurrentWeather {
                temperature_c: parsed.current_weather.temperature,
                wind_speed_kmh: parsed.current_weather.windspeed,
                weather_code: parsed.current_weather.weathercode,
            },
            hourly: HourlySeries {
                temperatures_c: parsed.hourly.temperature_2m,
                apparent_temperatures_c: parsed.hourly.apparent_temperature,
                humidities_pct: parsed.hourly.relativehumidity_2m,
            },
        })
    }
}

#[derive(Debug, Deserialize)]
struct OmGeocodingResponse {
    results: Option<Vec<OmGeocodingHit>>,
}

#[derive(Debug, Deserialize)]
struct OmGeocodingHit {
    latitude: f64,
    longitude: f64,
    name: String,
    #[serde(default)]
    country: String,
}

#[derive(Debug, Deserialize)]
struct OmCurrentWeather {
    temperature: f64,
    windspeed: f64,
    weathercode: i32,
}

#[derive(Debug, Deserialize)]
struct OmHourly {
    temperature_2m: Vec<f64>,
    relativehumidity_2m: Vec<f64>,
    apparent_temperature: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct OmForecastResponse {
    current_weather: OmCurrentWeather,
    hourly: OmHourly,
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX { format!("{}...", &body[..MAX]) } else { body.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geocoding_response_tolerates_missing_results() {
        let parsed: OmGeocodingResponse =
            serde_json::from_str("{\"generationtime_ms\": 0.5}").expect("parse");
        assert!(parsed.results.is_none());
    }

    #[test]
    fn geocoding_hit_defaults_missing_country() {
        let parsed: OmGeocodingResponse = serde_json::from_str(
            "{\"results\": [{\"latitude\": 1.0, \"longitude\": 2.0, \"name\": \"Atlantis\"}]}",
        )
        .expect("parse");

        let hit = parsed.results.unwrap().into_iter().next().unwrap();
        assert_eq!(hit.name, "Atlantis");
        assert_eq!(hit.country, "");
    }

    #[test]
    fn truncate_body_caps_long_bodies() {
        let long = "x".repeat(500);
        let out = truncate_body(&long);
        assert_eq!(out.len(), 203);
        assert!(out.ends_with("..."));

        assert_eq!(truncate_body("short"), "short");
    }
}
