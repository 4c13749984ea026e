pub mod baidu;
pub mod google;
pub mod tencent;
pub mod types;

pub use baidu::BaiduMapProvider;
pub use google::GoogleMapProvider;
pub use tencent::TencentMapProvider;

use super::error::MapError;
use super::model::Provider;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;
use url::Url;

/// Escape set for query names and values: space becomes `%20`, `+` becomes
/// `%2B`. The Tencent signature is computed over exactly this form.
const QUERY_COMPONENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'!')
    .add(b'"')
    .add(b'#')
    .add(b'$')
    .add(b'%')
    .add(b'&')
    .add(b'\'')
    .add(b'(')
    .add(b')')
    .add(b'+')
    .add(b',')
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}')
    .add(b'~');

/// Joins `base_url` and `path` and appends the query pairs in order.
pub(crate) fn endpoint(base_url: &str, path: &str, params: &[(&str, &str)]) -> Result<Url, MapError> {
    let mut url = Url::parse(&format!("{}{}", base_url.trim_end_matches('/'), path))?;
    if !params.is_empty() {
        let query = params
            .iter()
            .map(|(name, value)| {
                format!(
                    "{}={}",
                    utf8_percent_encode(name, QUERY_COMPONENT),
                    utf8_percent_encode(value, QUERY_COMPONENT)
                )
            })
            .collect::<Vec<_>>()
            .join("&");
        url.set_query(Some(&query));
    }
    Ok(url)
}

/// Appends one pair, escaped like `endpoint` does, after the existing query.
pub(crate) fn append_encoded(url: &mut Url, name: &str, value: &str) {
    let pair = format!(
        "{}={}",
        utf8_percent_encode(name, QUERY_COMPONENT),
        utf8_percent_encode(value, QUERY_COMPONENT)
    );
    let query = match url.query() {
        Some(existing) if !existing.is_empty() => format!("{existing}&{pair}"),
        _ => pair,
    };
    url.set_query(Some(&query));
}

pub(crate) fn parse_body<T: DeserializeOwned>(provider: Provider, url: &Url, text: &str) -> Result<T, MapError> {
    serde_json::from_str(text).map_err(|e| {
        log::error!(
            "[{}] Failed to parse response. Path: {}\nError: {}. Body: {}",
            provider,
            url.path(),
            e,
            text
        );
        MapError::Parse(e)
    })
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::sdk::maps::error::MapError;
    use crate::sdk::maps::http::HttpExecutor;
    use std::sync::Mutex;
    use url::Url;

    /// Answers every GET with the same body and records the requested URLs.
    pub struct CannedExecutor {
        body: String,
        pub requests: Mutex<Vec<Url>>,
    }

    impl CannedExecutor {
        pub fn new(body: &str) -> Self {
            Self {
                body: body.to_string(),
                requests: Mutex::new(Vec::new()),
            }
        }

        pub fn last_url(&self) -> Url {
            self.requests.lock().unwrap().last().cloned().unwrap()
        }

        pub fn last_query(&self) -> Vec<(String, String)> {
            self.last_url().query_pairs().into_owned().collect()
        }
    }

    impl HttpExecutor for CannedExecutor {
        fn get(&self, url: &Url) -> Result<String, MapError> {
            self.requests.lock().unwrap().push(url.clone());
            Ok(self.body.clone())
        }
    }
}
