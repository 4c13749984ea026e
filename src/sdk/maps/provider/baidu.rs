use super::types::{non_empty, BaiduGeocodeResult, DirectionsResult, StatusEnvelope};
use super::{endpoint, parse_body};
use crate::sdk::config::ProviderConfig;
use crate::sdk::maps::error::MapError;
use crate::sdk::maps::http::HttpExecutor;
use crate::sdk::maps::model::{clamp_confidence, AddressResult, Coordinate, Provider};
use crate::sdk::maps::service::MapProvider;
use crate::sdk::maps::validate::validate_response;
use std::sync::Arc;
use url::Url;

const STATUS_OK: i64 = 0;
const STATUS_NO_MATCH: i64 = 1;
/// Geocoding results are requested in GCJ-02 rather than Baidu's BD-09.
const RESULT_COORD_TYPE: &str = "gcj02ll";

pub struct BaiduMapProvider {
    config: ProviderConfig,
    http: Arc<dyn HttpExecutor>,
}

impl BaiduMapProvider {
    pub fn new(config: ProviderConfig, http: Arc<dyn HttpExecutor>) -> Self {
        Self { config, http }
    }

    fn send(&self, url: &Url) -> Result<StatusEnvelope, MapError> {
        let text = self.http.get(url)?;
        parse_body(Provider::Baidu, url, &text)
    }
}

impl MapProvider for BaiduMapProvider {
    fn provider(&self) -> Provider {
        Provider::Baidu
    }

    fn driving_distance(&self, origin: Coordinate, destination: Coordinate) -> Result<f64, MapError> {
        let from = origin.to_query_value();
        let to = destination.to_query_value();
        let url = endpoint(
            &self.config.base_url,
            "/direction/v2/driving",
            &[
                ("origin", from.as_str()),
                ("destination", to.as_str()),
                ("ak", self.config.api_key.as_str()),
                ("output", "json"),
                ("language", self.config.language.as_str()),
            ],
        )?;
        log::debug!("[baidu] GET {} for {} -> {}", url.path(), origin, destination);

        let resp = self.send(&url)?;
        validate_response(Provider::Baidu, resp.status == STATUS_OK, resp.status, &resp.message)?;

        let result: DirectionsResult = match non_empty(resp.result) {
            Some(value) => serde_json::from_value(value)?,
            None => DirectionsResult::default(),
        };
        result
            .routes
            .first()
            .and_then(|route| route.distance)
            .ok_or(MapError::NoRouteFound(Provider::Baidu))
    }

    fn geocode(&self, address: &str) -> Result<Vec<AddressResult>, MapError> {
        let url = endpoint(
            &self.config.base_url,
            "/geocoding/v3",
            &[
                ("address", address),
                ("ak", self.config.api_key.as_str()),
                ("output", "json"),
                ("language", self.config.language.as_str()),
                ("ret_coordtype", RESULT_COORD_TYPE),
            ],
        )?;
        log::debug!("[baidu] GET {} for \"{}\"", url.path(), address);

        let resp = self.send(&url)?;
        if resp.status == STATUS_NO_MATCH {
            log::debug!("[baidu] No geocode results for \"{}\"", address);
            return Ok(Vec::new());
        }
        validate_response(Provider::Baidu, resp.status == STATUS_OK, resp.status, &resp.message)?;

        let Some(value) = non_empty(resp.result) else {
            return Ok(Vec::new());
        };
        let result: BaiduGeocodeResult = serde_json::from_value(value)?;
        let parts = result.address_component;

        // Baidu's confidence is already on the unit scale
        Ok(vec![AddressResult {
            coordinate: Coordinate::new(result.location.lat, result.location.lng),
            province: parts.province,
            city: parts.city,
            district: parts.district,
            street: parts.street,
            street_number: parts.street_number,
            formatted_address: result.formatted_address,
            postal_code: String::new(),
            confidence: clamp_confidence(result.confidence),
        }])
    }
}
