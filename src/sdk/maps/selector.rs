use super::error::MapError;
use super::http::{HttpExecutor, ReqwestExecutor};
use super::model::Provider;
use super::provider::{BaiduMapProvider, GoogleMapProvider, TencentMapProvider};
use super::service::MapProvider;
use crate::sdk::config::{self, MapConfig};
use std::env;
use std::sync::Arc;

/// Maps a provider name to its adapter.
///
/// All three adapters are built up front around one shared HTTP executor;
/// lookup is a plain match on the parsed name and is cheap enough to run for
/// every request.
#[derive(Clone)]
pub struct ProviderSelector {
    google: Arc<dyn MapProvider>,
    tencent: Arc<dyn MapProvider>,
    baidu: Arc<dyn MapProvider>,
}

impl ProviderSelector {
    pub fn new(
        google: Arc<dyn MapProvider>,
        tencent: Arc<dyn MapProvider>,
        baidu: Arc<dyn MapProvider>,
    ) -> Self {
        Self {
            google,
            tencent,
            baidu,
        }
    }

    /// Builds every adapter from `config` over a pooled `reqwest` client.
    pub fn from_config(config: &MapConfig) -> Result<Self, MapError> {
        let http: Arc<dyn HttpExecutor> = Arc::new(ReqwestExecutor::new(config.timeout)?);
        Ok(Self::with_executor(config, http))
    }

    pub fn with_executor(config: &MapConfig, http: Arc<dyn HttpExecutor>) -> Self {
        Self::new(
            Arc::new(GoogleMapProvider::new(config.google.clone(), http.clone())),
            Arc::new(TencentMapProvider::new(config.tencent.clone(), http.clone())),
            Arc::new(BaiduMapProvider::new(config.baidu.clone(), http)),
        )
    }

    /// Case-insensitive lookup. Unknown names, including "", fail with the
    /// name exactly as given.
    pub fn select(&self, name: &str) -> Result<Arc<dyn MapProvider>, MapError> {
        let provider = name
            .parse::<Provider>()
            .map_err(|_| MapError::UnsupportedProvider(name.to_string()))?;
        Ok(self.get(provider))
    }

    pub fn get(&self, provider: Provider) -> Arc<dyn MapProvider> {
        match provider {
            Provider::Google => self.google.clone(),
            Provider::Tencent => self.tencent.clone(),
            Provider::Baidu => self.baidu.clone(),
        }
    }

    /// The adapter named by `MAP_PROVIDER` right now. The variable is read on
    /// every call so the active provider can change without a restart.
    pub fn active(&self) -> Result<Arc<dyn MapProvider>, MapError> {
        self.active_with(|key| env::var(key).ok())
    }

    /// Same as `active`, resolving `MAP_PROVIDER` through `lookup`.
    pub fn active_with<F>(&self, lookup: F) -> Result<Arc<dyn MapProvider>, MapError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let name = config::active_provider_name_from(lookup);
        log::debug!("Active map provider: {}", name);
        self.select(&name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sdk::maps::provider::testing::CannedExecutor;
    use assert_matches::assert_matches;
    use std::cell::RefCell;

    fn selector() -> ProviderSelector {
        ProviderSelector::with_executor(&MapConfig::default(), Arc::new(CannedExecutor::new("{}")))
    }

    #[test]
    fn selection_ignores_case() {
        let selector = selector();
        let upper = selector.select("GOOGLE").unwrap();
        let lower = selector.select("google").unwrap();
        let title = selector.select("Google").unwrap();
        assert!(Arc::ptr_eq(&upper, &lower));
        assert!(Arc::ptr_eq(&lower, &title));
        assert_eq!(upper.provider(), Provider::Google);
    }

    #[test]
    fn each_name_maps_to_its_adapter() {
        let selector = selector();
        assert_eq!(selector.select("tencent").unwrap().provider(), Provider::Tencent);
        assert_eq!(selector.select("Baidu").unwrap().provider(), Provider::Baidu);
        assert!(Arc::ptr_eq(
            &selector.select("baidu").unwrap(),
            &selector.get(Provider::Baidu)
        ));
    }

    #[test]
    fn unknown_provider_keeps_original_name() {
        let selector = selector();
        assert_matches!(
            selector.select("unknown").err(),
            Some(MapError::UnsupportedProvider(ref name)) if name == "unknown"
        );
        assert_matches!(
            selector.select("AMap").err(),
            Some(MapError::UnsupportedProvider(ref name)) if name == "AMap"
        );
        assert_matches!(
            selector.select("").err(),
            Some(MapError::UnsupportedProvider(ref name)) if name.is_empty()
        );
    }

    #[test]
    fn active_provider_is_resolved_on_every_call() {
        let selector = selector();
        let current = RefCell::new("tencent");
        let lookup = |key: &str| (key == config::PROVIDER_VAR).then(|| current.borrow().to_string());

        let first = selector.active_with(&lookup).unwrap();
        *current.borrow_mut() = "BAIDU";
        let second = selector.active_with(&lookup).unwrap();
        assert_eq!(first.provider(), Provider::Tencent);
        assert_eq!(second.provider(), Provider::Baidu);
        assert!(!Arc::ptr_eq(&first, &second));

        *current.borrow_mut() = "  ";
        assert_eq!(selector.active_with(&lookup).unwrap().provider(), Provider::Google);
        assert_eq!(selector.active_with(|_| None).unwrap().provider(), Provider::Google);

        *current.borrow_mut() = "osm";
        assert_matches!(
            selector.active_with(&lookup).err(),
            Some(MapError::UnsupportedProvider(ref name)) if name == "osm"
        );
    }

    #[test]
    fn selected_adapters_can_be_shared_across_threads() {
        let selector = selector();
        let handles: Vec<_> = ["google", "tencent", "baidu"]
            .into_iter()
            .map(|name| {
                let selector = selector.clone();
                std::thread::spawn(move || selector.select(name).map(|p| p.provider()))
            })
            .collect();
        let providers: Vec<Provider> = handles
            .into_iter()
            .map(|h| h.join().unwrap().unwrap())
            .collect();
        assert_eq!(providers, vec![Provider::Google, Provider::Tencent, Provider::Baidu]);
    }
}
