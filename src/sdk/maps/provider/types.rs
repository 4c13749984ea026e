use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

// --- Wire formats of the three provider APIs ---
//
// Only the fields the adapters read are modelled. Optional text fields
// deserialize to "" whether they are absent or null.

pub(crate) fn string_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// Status codes and numbers sometimes arrive quoted ("0", "1234.5")
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText<T> {
    Number(T),
    Text(String),
}

pub(crate) fn lenient_i64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    match NumberOrText::<i64>::deserialize(deserializer)? {
        NumberOrText::Number(n) => Ok(n),
        NumberOrText::Text(s) => s.trim().parse().map_err(D::Error::custom),
    }
}

pub(crate) fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(lenient_f64_opt(deserializer)?.unwrap_or_default())
}

pub(crate) fn lenient_f64_opt<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    match Option::<NumberOrText<f64>>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrText::Number(n)) => Ok(Some(n)),
        Some(NumberOrText::Text(s)) => s.trim().parse().map(Some).map_err(D::Error::custom),
    }
}

/// Drops a `result` payload that is missing, null, `{}` or `[]`.
pub(crate) fn non_empty(value: Option<Value>) -> Option<Value> {
    value.filter(|v| match v {
        Value::Null => false,
        Value::Object(map) => !map.is_empty(),
        Value::Array(items) => !items.is_empty(),
        _ => true,
    })
}

#[derive(Deserialize, Debug, Default, Clone, Copy)]
pub struct LatLng {
    #[serde(default)]
    pub lat: f64,
    #[serde(default)]
    pub lng: f64,
}

// --- Google ---

#[derive(Deserialize, Debug)]
pub struct GoogleDirectionsResponse {
    pub status: String,
    #[serde(default, deserialize_with = "string_or_default")]
    pub error_message: String,
    #[serde(default)]
    pub routes: Vec<GoogleRoute>,
}

#[derive(Deserialize, Debug)]
pub struct GoogleRoute {
    #[serde(default)]
    pub legs: Vec<GoogleLeg>,
}

#[derive(Deserialize, Debug)]
pub struct GoogleLeg {
    pub distance: Option<GoogleDistance>,
}

#[derive(Deserialize, Debug)]
pub struct GoogleDistance {
    #[serde(deserialize_with = "lenient_f64")]
    pub value: f64,
}

#[derive(Deserialize, Debug)]
pub struct GoogleGeocodeResponse {
    pub status: String,
    #[serde(default, deserialize_with = "string_or_default")]
    pub error_message: String,
    #[serde(default)]
    pub results: Vec<GoogleGeocodeResult>,
}

#[derive(Deserialize, Debug)]
pub struct GoogleGeocodeResult {
    #[serde(default, deserialize_with = "string_or_default")]
    pub formatted_address: String,
    #[serde(default)]
    pub geometry: GoogleGeometry,
    #[serde(default)]
    pub address_components: Vec<GoogleAddressComponent>,
}

#[derive(Deserialize, Debug, Default)]
pub struct GoogleGeometry {
    #[serde(default)]
    pub location: LatLng,
}

#[derive(Deserialize, Debug)]
pub struct GoogleAddressComponent {
    #[serde(default, deserialize_with = "string_or_default")]
    pub long_name: String,
    #[serde(default)]
    pub types: Vec<String>,
}

// --- Tencent and Baidu share an envelope: integer status, message, result ---

#[derive(Deserialize, Debug)]
pub struct StatusEnvelope {
    #[serde(deserialize_with = "lenient_i64")]
    pub status: i64,
    #[serde(default, deserialize_with = "string_or_default")]
    pub message: String,
    #[serde(default)]
    pub result: Option<Value>,
}

#[derive(Deserialize, Debug, Default)]
pub struct DirectionsResult {
    #[serde(default)]
    pub routes: Vec<RouteDistance>,
}

#[derive(Deserialize, Debug)]
pub struct RouteDistance {
    #[serde(default, deserialize_with = "lenient_f64_opt")]
    pub distance: Option<f64>,
}

#[derive(Deserialize, Debug)]
pub struct TencentGeocodeResult {
    #[serde(default)]
    pub location: LatLng,
    #[serde(default)]
    pub address_components: AddressParts,
    #[serde(default, deserialize_with = "string_or_default")]
    pub address: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub reliability: f64,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct BaiduGeocodeResult {
    #[serde(default)]
    pub location: LatLng,
    #[serde(default)]
    pub address_component: AddressParts,
    #[serde(default, rename = "formatted_address", deserialize_with = "string_or_default")]
    pub formatted_address: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub confidence: f64,
}

/// Structured address block used by both Tencent and Baidu.
#[derive(Deserialize, Debug, Default)]
pub struct AddressParts {
    #[serde(default, deserialize_with = "string_or_default")]
    pub province: String,
    #[serde(default, deserialize_with = "string_or_default")]
    pub city: String,
    #[serde(default, deserialize_with = "string_or_default")]
    pub district: String,
    #[serde(default, deserialize_with = "string_or_default")]
    pub street: String,
    #[serde(default, deserialize_with = "string_or_default")]
    pub street_number: String,
}
