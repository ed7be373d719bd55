//! Small value objects used as template parameters and message payloads

use serde::{Deserialize, Serialize};

/// Localized currency amount
///
/// `amount_1000` is the amount multiplied by 1000 (e.g. `$12.34` is `12340`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Currency {
    /// Text shown when localization fails
    pub fallback_value: String,
    /// ISO 4217 currency code
    pub code: String,
    /// Amount times 1000
    pub amount_1000: i64,
}

impl Currency {
    /// Creates a currency value
    #[must_use]
    pub fn new(code: impl Into<String>, amount_1000: i64, fallback_value: impl Into<String>) -> Self {
        Self {
            fallback_value: fallback_value.into(),
            code: code.into(),
            amount_1000,
        }
    }
}

/// Localized date/time
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateTime {
    /// Text shown when localization fails
    pub fallback_value: String,
}

impl DateTime {
    /// Creates a date/time value
    #[must_use]
    pub fn new(fallback_value: impl Into<String>) -> Self {
        Self {
            fallback_value: fallback_value.into(),
        }
    }
}

/// Geographic location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
    /// Name of the place
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Street address of the place
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Location {
    /// Creates a location with only coordinates
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            name: None,
            address: None,
        }
    }

    /// Sets the place name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the street address
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }
}
