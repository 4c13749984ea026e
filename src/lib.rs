pub mod sdk;

pub use sdk::config::{MapConfig, ProviderConfig};
pub use sdk::maps::{
    AddressResult, Coordinate, HttpExecutor, MapError, MapProvider, Provider, ProviderSelector,
    ReqwestExecutor,
};
