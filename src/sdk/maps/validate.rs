use super::error::MapError;
use super::model::Provider;
use std::fmt::Display;

/// Turns a provider's status verdict into a result. The provider's message is
/// carried verbatim, including when it is empty.
pub fn validate_response(
    provider: Provider,
    is_success: bool,
    status: impl Display,
    message: &str,
) -> Result<(), MapError> {
    if is_success {
        return Ok(());
    }
    log::warn!(
        "[{}] API reported status {}: {}",
        provider,
        status,
        message
    );
    Err(MapError::ProviderApi {
        provider,
        status: status.to_string(),
        message: message.to_string(),
    })
}
