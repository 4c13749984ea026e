use super::error::MapError;
use reqwest::blocking::Client;
use std::time::Duration;
use url::Url;

/// Performs one outbound GET and hands back the raw body text.
///
/// Implementations must be shareable across threads: one executor backs every
/// adapter and may serve many requests at once.
pub trait HttpExecutor: Send + Sync {
    fn get(&self, url: &Url) -> Result<String, MapError>;
}

/// `HttpExecutor` over a pooled blocking `reqwest` client. Single attempt,
/// no retries.
#[derive(Clone)]
pub struct ReqwestExecutor {
    client: Client,
}

impl ReqwestExecutor {
    /// Builds the executor. `None` keeps the transport's default timeout.
    pub fn new(timeout: Option<Duration>) -> Result<Self, MapError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

impl HttpExecutor for ReqwestExecutor {
    fn get(&self, url: &Url) -> Result<String, MapError> {
        let response = match self.client.get(url.clone()).send() {
            Ok(resp) => resp,
            Err(e) => {
                log::error!(
                    "Failed to send GET request. Host: {}\nError: {}",
                    url.host_str().unwrap_or_default(),
                    e
                );
                return Err(MapError::Transport(e));
            }
        };

        // Providers report failures in the body, so a non-2xx status is only logged
        let status = response.status();
        if !status.is_success() {
            log::warn!("HTTP status {} from {}", status, url.path());
        }

        Ok(response.text()?)
    }
}
