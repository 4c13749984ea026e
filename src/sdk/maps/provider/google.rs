use super::types::{GoogleAddressComponent, GoogleDirectionsResponse, GoogleGeocodeResponse};
use super::{endpoint, parse_body};
use crate::sdk::config::ProviderConfig;
use crate::sdk::maps::error::MapError;
use crate::sdk::maps::http::HttpExecutor;
use crate::sdk::maps::model::{AddressResult, Coordinate, Provider};
use crate::sdk::maps::service::MapProvider;
use crate::sdk::maps::validate::validate_response;
use std::sync::Arc;

const STATUS_OK: &str = "OK";
const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";

/// Google Maps Directions and Geocoding APIs.
///
/// Google exposes no match confidence, so every result carries 1.0. Only the
/// first geocoding match is returned.
pub struct GoogleMapProvider {
    config: ProviderConfig,
    http: Arc<dyn HttpExecutor>,
}

impl GoogleMapProvider {
    pub fn new(config: ProviderConfig, http: Arc<dyn HttpExecutor>) -> Self {
        Self { config, http }
    }
}

impl MapProvider for GoogleMapProvider {
    fn provider(&self) -> Provider {
        Provider::Google
    }

    fn driving_distance(&self, origin: Coordinate, destination: Coordinate) -> Result<f64, MapError> {
        let from = origin.to_query_value();
        let to = destination.to_query_value();
        let url = endpoint(
            &self.config.base_url,
            "/directions/json",
            &[
                ("origin", from.as_str()),
                ("destination", to.as_str()),
                ("key", self.config.api_key.as_str()),
                ("mode", "driving"),
            ],
        )?;
        log::debug!("[google] GET {} for {} -> {}", url.path(), origin, destination);

        let text = self.http.get(&url)?;
        let resp: GoogleDirectionsResponse = parse_body(Provider::Google, &url, &text)?;
        validate_response(
            Provider::Google,
            resp.status == STATUS_OK,
            &resp.status,
            &resp.error_message,
        )?;

        // An OK answer without a first route leg is treated as "no route"
        resp.routes
            .first()
            .and_then(|route| route.legs.first())
            .and_then(|leg| leg.distance.as_ref())
            .map(|distance| distance.value)
            .ok_or(MapError::NoRouteFound(Provider::Google))
    }

    fn geocode(&self, address: &str) -> Result<Vec<AddressResult>, MapError> {
        let url = endpoint(
            &self.config.base_url,
            "/geocode/json",
            &[("address", address), ("key", self.config.api_key.as_str())],
        )?;
        log::debug!("[google] GET {} for \"{}\"", url.path(), address);

        let text = self.http.get(&url)?;
        let resp: GoogleGeocodeResponse = parse_body(Provider::Google, &url, &text)?;
        if resp.status == STATUS_ZERO_RESULTS {
            log::debug!("[google] No geocode results for \"{}\"", address);
            return Ok(Vec::new());
        }
        validate_response(
            Provider::Google,
            resp.status == STATUS_OK,
            &resp.status,
            &resp.error_message,
        )?;

        let Some(first) = resp.results.into_iter().next() else {
            return Ok(Vec::new());
        };

        let mut result = AddressResult {
            coordinate: Coordinate::new(first.geometry.location.lat, first.geometry.location.lng),
            formatted_address: first.formatted_address,
            confidence: 1.0,
            ..AddressResult::default()
        };
        for component in first.address_components {
            apply_component(&mut result, component);
        }
        Ok(vec![result])
    }
}

/// Copies a component into the field named by the first of its type tags
/// that we recognise.
fn apply_component(result: &mut AddressResult, component: GoogleAddressComponent) {
    let slot = component.types.iter().find_map(|tag| match tag.as_str() {
        "administrative_area_level_1" => Some(Field::Province),
        "locality" => Some(Field::City),
        "sublocality_level_1" => Some(Field::District),
        "route" => Some(Field::Street),
        "street_number" => Some(Field::StreetNumber),
        "postal_code" => Some(Field::PostalCode),
        _ => None,
    });
    let target = match slot {
        Some(Field::Province) => &mut result.province,
        Some(Field::City) => &mut result.city,
        Some(Field::District) => &mut result.district,
        Some(Field::Street) => &mut result.street,
        Some(Field::StreetNumber) => &mut result.street_number,
        Some(Field::PostalCode) => &mut result.postal_code,
        None => return,
    };
    *target = component.long_name;
}

enum Field {
    Province,
    City,
    District,
    Street,
    StreetNumber,
    PostalCode,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sdk::maps::provider::testing::CannedExecutor;
    use assert_matches::assert_matches;

    const GEOCODE_OK: &str = r#"{
        "status": "OK",
        "results": [{
            "formatted_address": "1600 Amphitheatre Pkwy, Mountain View, CA 94043, USA",
            "geometry": { "location": { "lat": 37.4224764, "lng": -122.0842499 } },
            "address_components": [
                { "long_name": "1600", "types": ["street_number"] },
                { "long_name": "Amphitheatre Parkway", "types": ["route"] },
                { "long_name": "Mountain View", "types": ["locality", "political"] },
                { "long_name": "Santa Clara County", "types": ["administrative_area_level_2", "political"] },
                { "long_name": "California", "types": ["administrative_area_level_1", "political"] },
                { "long_name": "Shoreline", "types": ["political", "sublocality", "sublocality_level_1"] },
                { "long_name": "94043", "types": ["postal_code"] }
            ]
        }, {
            "formatted_address": "second match",
            "geometry": { "location": { "lat": 1.0, "lng": 2.0 } },
            "address_components": []
        }]
    }"#;

    fn provider(body: &str) -> (GoogleMapProvider, Arc<CannedExecutor>) {
        let http = Arc::new(CannedExecutor::new(body));
        let config = ProviderConfig::new("google-key", "https://maps.googleapis.com/maps/api");
        (GoogleMapProvider::new(config, http.clone()), http)
    }

    #[test]
    fn distance_comes_from_first_leg_of_first_route() {
        let (google, http) = provider(
            r#"{"status":"OK","routes":[
                {"legs":[{"distance":{"text":"1.2 km","value":1234.56}}]},
                {"legs":[{"distance":{"text":"9 km","value":9000}}]}
            ]}"#,
        );
        let distance = google
            .driving_distance(Coordinate::new(39.915, 116.404), Coordinate::new(31.23, 121.473))
            .unwrap();
        assert_eq!(distance, 1234.56);

        let url = http.last_url();
        assert_eq!(url.path(), "/maps/api/directions/json");
        assert_eq!(
            http.last_query(),
            vec![
                ("origin".to_string(), "39.915,116.404".to_string()),
                ("destination".to_string(), "31.23,121.473".to_string()),
                ("key".to_string(), "google-key".to_string()),
                ("mode".to_string(), "driving".to_string()),
            ]
        );
    }

    #[test]
    fn failure_status_surfaces_error_message() {
        let (google, _) = provider(
            r#"{"status":"REQUEST_DENIED","error_message":"The provided API key is invalid.","routes":[]}"#,
        );
        let err = google
            .driving_distance(Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 1.0))
            .unwrap_err();
        assert_matches!(
            err,
            MapError::ProviderApi { provider: Provider::Google, ref status, ref message }
                if status == "REQUEST_DENIED" && message == "The provided API key is invalid."
        );
    }

    #[test]
    fn failure_without_message_has_empty_message() {
        let (google, _) = provider(r#"{"status":"OVER_QUERY_LIMIT"}"#);
        let err = google.geocode("anywhere").unwrap_err();
        assert_matches!(err, MapError::ProviderApi { ref message, .. } if message.is_empty());
    }

    #[test]
    fn zero_routes_is_no_route_found() {
        let (google, _) = provider(r#"{"status":"OK","routes":[]}"#);
        let err = google
            .driving_distance(Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 1.0))
            .unwrap_err();
        assert_matches!(err, MapError::NoRouteFound(Provider::Google));
    }

    #[test]
    fn geocode_scans_component_tags_and_keeps_first_match() {
        let (google, http) = provider(GEOCODE_OK);
        let results = google.geocode("1600 Amphitheatre Parkway").unwrap();
        assert_eq!(results.len(), 1);

        let r = &results[0];
        assert_eq!(r.coordinate, Coordinate::new(37.4224764, -122.0842499));
        assert_eq!(r.province, "California");
        assert_eq!(r.city, "Mountain View");
        assert_eq!(r.district, "Shoreline");
        assert_eq!(r.street, "Amphitheatre Parkway");
        assert_eq!(r.street_number, "1600");
        assert_eq!(r.postal_code, "94043");
        assert_eq!(r.formatted_address, "1600 Amphitheatre Pkwy, Mountain View, CA 94043, USA");
        assert_eq!(r.confidence, 1.0);

        assert_eq!(http.last_url().path(), "/maps/api/geocode/json");
        assert_eq!(
            http.last_query(),
            vec![
                ("address".to_string(), "1600 Amphitheatre Parkway".to_string()),
                ("key".to_string(), "google-key".to_string()),
            ]
        );
    }

    #[test]
    fn missing_postal_code_is_empty_string() {
        let (google, _) = provider(
            r#"{"status":"OK","results":[{
                "formatted_address":"Beijing, China",
                "geometry":{"location":{"lat":39.9,"lng":116.4}},
                "address_components":[{"long_name":"Beijing","types":["locality","political"]}]
            }]}"#,
        );
        let results = google.geocode("Beijing").unwrap();
        assert_eq!(results[0].postal_code, "");
        assert_eq!(results[0].street, "");
        assert_eq!(results[0].city, "Beijing");
    }

    #[test]
    fn zero_results_is_an_empty_list() {
        let (google, _) = provider(r#"{"status":"ZERO_RESULTS","results":[]}"#);
        assert!(google.geocode("nowhere at all").unwrap().is_empty());
    }

    #[test]
    fn repeated_geocode_yields_identical_results() {
        let (google, _) = provider(GEOCODE_OK);
        let first = google.geocode("1600 Amphitheatre Parkway").unwrap();
        let second = google.geocode("1600 Amphitheatre Parkway").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn malformed_body_is_a_parse_error() {
        let (google, _) = provider("<html>502 Bad Gateway</html>");
        assert_matches!(google.geocode("x"), Err(MapError::Parse(_)));
    }
}
