use super::error::MapError;
use super::model::{AddressResult, Coordinate, Provider};

pub trait MapProvider: Send + Sync {
    /// Which map service this adapter talks to.
    fn provider(&self) -> Provider;

    /// Driving distance between two points, in meters, taken from the first
    /// route the provider returns.
    fn driving_distance(&self, origin: Coordinate, destination: Coordinate)
        -> Result<f64, MapError>;

    /// Resolves a free-form address. An empty list means the provider found
    /// nothing; adapters that cannot geocode return `MapError::NotImplemented`.
    fn geocode(&self, address: &str) -> Result<Vec<AddressResult>, MapError>;
}
