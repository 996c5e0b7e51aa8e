use chrono::{NaiveDateTime, Timelike};

use crate::classify::classify;
use crate::error::LookupError;
use crate::model::{DisplayFields, HourlySeries, Location, WeatherReport};

/// Long en-US style date, e.g. "Friday, August 7, 2026". The locale is fixed.
const DATE_FORMAT: &str = "%A, %B %-d, %Y";

/// Derive the display panel for one lookup cycle.
///
/// `now` supplies the hour-of-day (0-23) used as a direct index into each
/// hourly sequence; the series is assumed to start at hour 0 of the same
/// local day as `now`. The index is bounds-checked against all three
/// sequences before any field is produced, so the result is either a complete
/// panel or an error, never a partial update.
pub fn compute(
    location: &Location,
    report: &WeatherReport,
    now: NaiveDateTime,
) -> Result<DisplayFields, LookupError> {
    let hour_index = now.hour() as usize;
    check_bounds(&report.hourly, hour_index)?;

    let classified = classify(report.current.weather_code);

    Ok(DisplayFields {
        city_label: format!("{}, {}", location.name, location.country),
        date_label: now.format(DATE_FORMAT).to_string(),
        temp_label: format!("{}°C", round(report.current.temperature_c)),
        description_label: classified.description.to_string(),
        icon_id: classified.icon,
        feels_like_label: format!(
            "{}°C",
            round(report.hourly.apparent_temperatures_c[hour_index])
        ),
        humidity_label: format!("{}%", round(report.hourly.humidities_pct[hour_index])),
        wind_label: format!("{} km/h", round(report.current.wind_speed_kmh)),
    })
}

/// Rounding policy for every numeric panel field: half away from zero.
fn round(value: f64) -> i64 {
    value.round() as i64
}

fn check_bounds(hourly: &HourlySeries, index: usize) -> Result<(), LookupError> {
    let shortest = hourly
        .temperatures_c
        .len()
        .min(hourly.apparent_temperatures_c.len())
        .min(hourly.humidities_pct.len());

    if index >= shortest {
        return Err(LookupError::IndexOutOfRange { index, len: shortest });
    }

    Ok(())
}
