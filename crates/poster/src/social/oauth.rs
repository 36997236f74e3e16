//! OAuth 1.0a request signing (RFC 5849, HMAC-SHA1).
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use hmac::{Hmac, Mac};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use rand::distributions::Alphanumeric;
use rand::Rng;
use sha1::Sha1;

/// Everything except RFC 3986 unreserved characters is escaped.
const RFC3986: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

pub fn encode(s: &str) -> String {
    utf8_percent_encode(s, RFC3986).to_string()
}

#[derive(Clone)]
pub struct OAuthCredentials {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub token: String,
    pub token_secret: String,
}

/// Per-request values that must differ between requests.
#[derive(Debug, Clone)]
pub struct Nonce {
    pub nonce: String,
    pub timestamp: i64,
}

impl Nonce {
    pub fn fresh() -> Self {
        let nonce: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(32)
            .map(char::from)
            .collect();
        Self {
            nonce,
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}

impl OAuthCredentials {
    /// Builds the `Authorization` header value. `params` are the query or
    /// form parameters that take part in the signature; a JSON body does not.
    pub fn authorization(
        &self,
        method: &str,
        url: &str,
        params: &[(&str, &str)],
        nonce: &Nonce,
    ) -> String {
        let timestamp = nonce.timestamp.to_string();
        let oauth: [(&str, &str); 6] = [
            ("oauth_consumer_key", self.consumer_key.as_str()),
            ("oauth_nonce", nonce.nonce.as_str()),
            ("oauth_signature_method", "HMAC-SHA1"),
            ("oauth_timestamp", timestamp.as_str()),
            ("oauth_token", self.token.as_str()),
            ("oauth_version", "1.0"),
        ];

        let base = signature_base_string(method, url, oauth.iter().chain(params.iter()));

        let mut fields: Vec<(String, String)> = oauth
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        fields.push(("oauth_signature".to_string(), self.sign(&base)));
        fields.sort();

        let rendered: Vec<String> = fields
            .iter()
            .map(|(k, v)| format!("{}=\"{}\"", encode(k), encode(v)))
            .collect();
        format!("OAuth {}", rendered.join(", "))
    }

    fn sign(&self, base: &str) -> String {
        let key = format!("{}&{}", encode(&self.consumer_secret), encode(&self.token_secret));
        // HMAC accepts keys of any length.
        let mut mac = match Hmac::<Sha1>::new_from_slice(key.as_bytes()) {
            Ok(mac) => mac,
            Err(_) => unreachable!("hmac key length is unrestricted"),
        };
        mac.update(base.as_bytes());
        STANDARD.encode(mac.finalize().into_bytes())
    }
}

pub fn signature_base_string<'a, I>(method: &str, url: &str, params: I) -> String
where
    I: IntoIterator<Item = &'a (&'a str, &'a str)>,
{
    let mut encoded: Vec<(String, String)> = params
        .into_iter()
        .map(|(k, v)| (encode(k), encode(v)))
        .collect();
    encoded.sort();

    let joined = encoded
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    format!(
        "{}&{}&{}",
        method.to_ascii_uppercase(),
        encode(url),
        encode(&joined)
    )
}
