use md5::{Digest, Md5};

/// Legacy URL signer used by the Tencent web service API.
///
/// The signature is the lowercase hex MD5 of the full request URL (query
/// included, `sig` excluded) followed by the shared secret. There is no
/// timestamp or nonce; the live API verifies exactly this form.
#[derive(Clone)]
pub struct UrlSigner {
    secret: String,
}

impl UrlSigner {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    pub fn sign(&self, url: &str) -> String {
        let mut hasher = Md5::new();
        hasher.update(url.as_bytes());
        hasher.update(self.secret.as_bytes());
        hex::encode(hasher.finalize())
    }
}
