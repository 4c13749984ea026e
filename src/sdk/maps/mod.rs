pub mod error;
pub mod http;
pub mod model;
pub mod provider;
pub mod selector;
pub mod service;
pub mod validate;

pub use error::MapError;
pub use http::{HttpExecutor, ReqwestExecutor};
pub use model::{AddressResult, Coordinate, Provider};
pub use provider::{BaiduMapProvider, GoogleMapProvider, TencentMapProvider};
pub use selector::ProviderSelector;
pub use service::MapProvider;
pub use validate::validate_response;
