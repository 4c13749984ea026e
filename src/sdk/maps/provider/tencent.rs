use super::types::{non_empty, DirectionsResult, StatusEnvelope, TencentGeocodeResult};
use super::{append_encoded, endpoint, parse_body};
use crate::sdk::config::ProviderConfig;
use crate::sdk::maps::error::MapError;
use crate::sdk::maps::http::HttpExecutor;
use crate::sdk::maps::model::{clamp_confidence, AddressResult, Coordinate, Provider};
use crate::sdk::maps::service::MapProvider;
use crate::sdk::maps::validate::validate_response;
use crate::sdk::util::sign::UrlSigner;
use std::sync::Arc;
use url::Url;

const STATUS_OK: i64 = 0;
const STATUS_NO_MATCH: i64 = 121;
/// Tencent reports reliability on a 0-10 scale.
const RELIABILITY_SCALE: f64 = 10.0;

/// Tencent Location Service web API. Every request is signed with the
/// configured secret key.
pub struct TencentMapProvider {
    config: ProviderConfig,
    signer: Option<UrlSigner>,
    http: Arc<dyn HttpExecutor>,
}

impl TencentMapProvider {
    pub fn new(config: ProviderConfig, http: Arc<dyn HttpExecutor>) -> Self {
        let signer = config.secret_key.as_deref().map(UrlSigner::new);
        Self {
            config,
            signer,
            http,
        }
    }

    /// Builds the request URL and appends `sig` as the last parameter.
    fn signed_url(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, MapError> {
        let signer = self
            .signer
            .as_ref()
            .ok_or_else(|| MapError::Config("tencent secret key is not configured".to_string()))?;

        let mut url = endpoint(&self.config.base_url, path, params)?;
        let sig = signer.sign(url.as_str());
        append_encoded(&mut url, "sig", &sig);
        Ok(url)
    }

    fn send(&self, url: &Url) -> Result<StatusEnvelope, MapError> {
        let text = self.http.get(url)?;
        parse_body(Provider::Tencent, url, &text)
    }
}

impl MapProvider for TencentMapProvider {
    fn provider(&self) -> Provider {
        Provider::Tencent
    }

    fn driving_distance(&self, origin: Coordinate, destination: Coordinate) -> Result<f64, MapError> {
        let from = origin.to_query_value();
        let to = destination.to_query_value();
        let url = self.signed_url(
            "/direction/v1/driving",
            &[
                ("from", from.as_str()),
                ("to", to.as_str()),
                ("key", self.config.api_key.as_str()),
                ("output", "json"),
                ("language", self.config.language.as_str()),
            ],
        )?;
        log::debug!("[tencent] GET {} for {} -> {}", url.path(), origin, destination);

        let resp = self.send(&url)?;
        validate_response(Provider::Tencent, resp.status == STATUS_OK, resp.status, &resp.message)?;

        let result: DirectionsResult = match non_empty(resp.result) {
            Some(value) => serde_json::from_value(value)?,
            None => DirectionsResult::default(),
        };
        result
            .routes
            .first()
            .and_then(|route| route.distance)
            .ok_or(MapError::NoRouteFound(Provider::Tencent))
    }

    fn geocode(&self, address: &str) -> Result<Vec<AddressResult>, MapError> {
        let url = self.signed_url(
            "/geocoder/v1",
            &[
                ("address", address),
                ("key", self.config.api_key.as_str()),
                ("output", "json"),
                ("language", self.config.language.as_str()),
            ],
        )?;
        log::debug!("[tencent] GET {} for \"{}\"", url.path(), address);

        let resp = self.send(&url)?;
        if resp.status == STATUS_NO_MATCH {
            log::debug!("[tencent] No geocode results for \"{}\"", address);
            return Ok(Vec::new());
        }
        validate_response(Provider::Tencent, resp.status == STATUS_OK, resp.status, &resp.message)?;

        let Some(value) = non_empty(resp.result) else {
            return Ok(Vec::new());
        };
        let result: TencentGeocodeResult = serde_json::from_value(value)?;
        let parts = result.address_components;

        Ok(vec![AddressResult {
            coordinate: Coordinate::new(result.location.lat, result.location.lng),
            province: parts.province,
            city: parts.city,
            district: parts.district,
            street: parts.street,
            street_number: parts.street_number,
            formatted_address: result.address,
            postal_code: String::new(),
            confidence: clamp_confidence(result.reliability / RELIABILITY_SCALE),
        }])
    }
}
