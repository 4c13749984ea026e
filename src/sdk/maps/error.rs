use super::model::Provider;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MapError {
    #[error("Unsupported map provider: {0}")]
    UnsupportedProvider(String),

    // Network-level failures are surfaced unchanged, never folded into ProviderApi
    #[error("Underlying request failed: {0}")]
    Transport(#[from] reqwest::Error),

    // The remote API answered with a non-success status
    #[error("{provider} API call failed (status {status}): {message}")]
    ProviderApi {
        provider: Provider,
        status: String,
        message: String,
    },

    #[error("{0} returned no route for the requested points")]
    NoRouteFound(Provider),

    #[error("{provider} does not implement {operation}")]
    NotImplemented {
        provider: Provider,
        operation: &'static str,
    },

    #[error("Failed to parse JSON response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    Config(String),
}
