use serde::{Deserialize, Serialize};

use crate::classify::IconId;

/// Best geocoding match for a searched city name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Current conditions as reported by the forecast service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub temperature_c: f64,
    pub wind_speed_kmh: f64,
    pub weather_code: i32,
}

/// Per-hour series for the forecast day, indexed by hour-of-day offset from
/// the series start. All three sequences must have equal length; a lookup at
/// `hour_index` requires at least `hour_index + 1` elements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlySeries {
    pub temperatures_c: Vec<f64>,
    pub apparent_temperatures_c: Vec<f64>,
    pub humidities_pct: Vec<f64>,
}

/// Everything a single forecast fetch returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    pub current: CurrentWeather,
    pub hourly: HourlySeries,
}

/// Fully derived, display-ready panel values. The sole output of the core;
/// values live for one lookup cycle and are never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayFields {
    pub city_label: String,
    pub date_label: String,
    pub temp_label: String,
    pub description_label: String,
    pub icon_id: IconId,
    pub feels_like_label: String,
    pub humidity_label: String,
    pub wind_label: String,
}
