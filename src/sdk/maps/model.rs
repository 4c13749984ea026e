use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use strum::{AsRefStr, Display, EnumString};

/// The map services an adapter exists for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Provider {
    Google,
    Tencent,
    Baidu,
}

/// A WGS84/GCJ-02 point. Callers are trusted to keep latitude within
/// [-90, 90] and longitude within [-180, 180]; nothing downstream checks it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// The `lat,lng` form every provider expects in its query string.
    pub fn to_query_value(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

impl FromStr for Coordinate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lng) = s
            .split_once(',')
            .ok_or_else(|| format!("Expected \"lat,lng\", got \"{}\"", s))?;
        let latitude = lat
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("Invalid latitude \"{}\": {}", lat.trim(), e))?;
        let longitude = lng
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("Invalid longitude \"{}\": {}", lng.trim(), e))?;
        Ok(Coordinate::new(latitude, longitude))
    }
}

/// One normalized geocoding match. Text fields are empty when the provider
/// did not supply them; `confidence` is always within [0, 1].
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressResult {
    pub coordinate: Coordinate,
    pub province: String,
    pub city: String,
    pub district: String,
    pub street: String,
    pub street_number: String,
    pub formatted_address: String,
    pub postal_code: String,
    pub confidence: f64,
}

impl Default for Coordinate {
    fn default() -> Self {
        Coordinate::new(0.0, 0.0)
    }
}

/// Clamps a provider confidence that has already been scaled to [0, 1].
pub(crate) fn clamp_confidence(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}
