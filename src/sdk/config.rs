use crate::sdk::maps::{MapError, Provider};
use std::env;
use std::time::Duration;

pub const DEFAULT_PROVIDER: &str = "google";
pub const DEFAULT_LANGUAGE: &str = "zh";
pub const PROVIDER_VAR: &str = "MAP_PROVIDER";
pub const TIMEOUT_VAR: &str = "MAP_HTTP_TIMEOUT_SECS";

/// Credentials and endpoint for one map service. Read-only once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub api_key: String,
    /// Only Tencent signs requests.
    pub secret_key: Option<String>,
    pub base_url: String,
    pub language: String,
}

impl ProviderConfig {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            secret_key: None,
            base_url: base_url.into(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    pub fn with_secret_key(mut self, secret_key: impl Into<String>) -> Self {
        self.secret_key = Some(secret_key.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn default_for(provider: Provider) -> Self {
        Self::new("", default_base_url(provider))
    }
}

pub fn default_base_url(provider: Provider) -> &'static str {
    match provider {
        Provider::Google => "https://maps.googleapis.com/maps/api",
        Provider::Tencent => "https://apis.map.qq.com/ws",
        Provider::Baidu => "https://api.map.baidu.com",
    }
}

#[derive(Debug, Clone)]
pub struct MapConfig {
    /// Provider named at load time. `ProviderSelector::active` re-reads the
    /// environment instead of trusting this value.
    pub provider: String,
    pub google: ProviderConfig,
    pub tencent: ProviderConfig,
    pub baidu: ProviderConfig,
    pub timeout: Option<Duration>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_PROVIDER.to_string(),
            google: ProviderConfig::default_for(Provider::Google),
            tencent: ProviderConfig::default_for(Provider::Tencent),
            baidu: ProviderConfig::default_for(Provider::Baidu),
            timeout: None,
        }
    }
}

impl MapConfig {
    /// Loads the configuration from `MAP_*` environment variables.
    pub fn from_env() -> Result<Self, MapError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads the configuration through an arbitrary key lookup. Blank values
    /// count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, MapError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let provider_config = |provider: Provider| {
            let prefix = format!("MAP_{}", provider.as_ref().to_uppercase());
            ProviderConfig {
                api_key: get(&format!("{prefix}_API_KEY")).unwrap_or_default(),
                secret_key: get(&format!("{prefix}_SECRET_KEY")),
                base_url: get(&format!("{prefix}_BASE_URL"))
                    .unwrap_or_else(|| default_base_url(provider).to_string()),
                language: get(&format!("{prefix}_LANGUAGE"))
                    .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            }
        };

        let timeout = match get(TIMEOUT_VAR) {
            Some(raw) => {
                let secs = raw.trim().parse::<u64>().map_err(|e| {
                    MapError::Config(format!("{TIMEOUT_VAR} must be whole seconds, got \"{raw}\": {e}"))
                })?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Self {
            provider: get(PROVIDER_VAR).unwrap_or_else(|| DEFAULT_PROVIDER.to_string()),
            google: provider_config(Provider::Google),
            tencent: provider_config(Provider::Tencent),
            baidu: provider_config(Provider::Baidu),
            timeout,
        })
    }
}

/// Name of the currently active provider, read fresh through `lookup`.
/// Unset or blank falls back to `google`.
pub fn active_provider_name_from<F>(lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(PROVIDER_VAR)
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_PROVIDER.to_string())
}
