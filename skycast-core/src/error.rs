use thiserror::Error;

/// Failures that terminate a single lookup chain.
///
/// Each variant is reported to the user exactly once; there are no retries
/// and no partial rendering of the panel.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Geocoding produced no match: the result set was empty or the call
    /// itself failed.
    #[error("city not found: '{city}'")]
    NotFound { city: String },

    /// The forecast service returned a non-success status or the transport
    /// failed.
    #[error("weather data not available: {reason}")]
    Unavailable { reason: String },

    /// The current-hour index does not fit the hourly series.
    #[error("hour index {index} out of range for hourly series of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

impl LookupError {
    pub fn not_found(city: impl Into<String>) -> Self {
        Self::NotFound { city: city.into() }
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable { reason: reason.into() }
    }
}
