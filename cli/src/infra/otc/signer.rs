//! `SDK-HMAC-SHA256` AK/SK request signing used by Open Telekom Cloud APIs.
//!
//! ```text
//! CanonicalRequest = Method \n CanonicalURI \n CanonicalQuery \n
//!                    CanonicalHeaders \n SignedHeaders \n hex(sha256(body))
//! StringToSign     = "SDK-HMAC-SHA256" \n X-Sdk-Date \n hex(sha256(CanonicalRequest))
//! Signature        = hex(hmac_sha256(SK, StringToSign))
//! ```

use hmac::{Hmac, Mac};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use sha2::{Digest, Sha256};

pub const ALGORITHM: &str = "SDK-HMAC-SHA256";
pub const DATE_HEADER: &str = "X-Sdk-Date";
/// `X-Sdk-Date` format, e.g. `20240131T094512Z`.
pub const DATE_FORMAT: &str = "%Y%m%dT%H%M%SZ";

type HmacSha256 = Hmac<Sha256>;

/// RFC 3986 unreserved characters stay literal; everything else is `%XX`.
const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// The parts of an HTTP request covered by the signature.
pub struct SigningRequest<'a> {
    pub method: &'a str,
    /// URL path, e.g. `/v1/{project}/cloudservers/action`.
    pub path: &'a str,
    pub query: &'a [(&'a str, &'a str)],
    /// Every header sent with the request, including `Host` and `X-Sdk-Date`.
    pub headers: &'a [(&'a str, &'a str)],
    pub body: &'a [u8],
}

/// Signs requests with an access key / secret key pair.
pub struct Signer<'a> {
    access_key: &'a str,
    secret_key: &'a str,
}

impl<'a> Signer<'a> {
    #[must_use]
    pub fn new(access_key: &'a str, secret_key: &'a str) -> Self {
        Self {
            access_key,
            secret_key,
        }
    }

    /// Value of the `Authorization` header for `req`.
    #[must_use]
    pub fn authorization(&self, req: &SigningRequest<'_>) -> String {
        let (canonical, signed_headers) = canonical_request(req);
        let sdk_date = req
            .headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(DATE_HEADER))
            .map_or("", |(_, v)| v.trim());
        let string_to_sign = format!(
            "{ALGORITHM}\n{sdk_date}\n{}",
            hex::encode(Sha256::digest(canonical.as_bytes()))
        );
        let signature = self.signature(&string_to_sign);
        format!(
            "{ALGORITHM} Access={}, SignedHeaders={signed_headers}, Signature={signature}",
            self.access_key
        )
    }

    fn signature(&self, string_to_sign: &str) -> String {
        // HMAC accepts keys of any length.
        let mut mac = HmacSha256::new_from_slice(self.secret_key.as_bytes())
            .unwrap_or_else(|_| unreachable!("HMAC accepts any key length"));
        mac.update(string_to_sign.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }
}

/// Build the canonical request and the `;`-joined signed header list.
pub(crate) fn canonical_request(req: &SigningRequest<'_>) -> (String, String) {
    let mut headers: Vec<(String, String)> = req
        .headers
        .iter()
        .map(|(k, v)| (k.to_ascii_lowercase(), v.trim().to_string()))
        .collect();
    headers.sort();

    let canonical_headers: String = headers.iter().map(|(k, v)| format!("{k}:{v}\n")).collect();
    let signed_headers = headers
        .iter()
        .map(|(k, _)| k.as_str())
        .collect::<Vec<_>>()
        .join(";");

    let mut query: Vec<(String, String)> = req
        .query
        .iter()
        .map(|(k, v)| (escape(k), escape(v)))
        .collect();
    query.sort();
    let canonical_query = query
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    let canonical = format!(
        "{}\n{}\n{canonical_query}\n{canonical_headers}\n{signed_headers}\n{}",
        req.method.to_ascii_uppercase(),
        canonical_uri(req.path),
        hex::encode(Sha256::digest(req.body)),
    );
    (canonical, signed_headers)
}

/// Percent-encode each path segment and force a trailing `/`.
fn canonical_uri(path: &str) -> String {
    let mut uri = path
        .split('/')
        .map(escape)
        .collect::<Vec<_>>()
        .join("/");
    if !uri.ends_with('/') {
        uri.push('/');
    }
    uri
}

fn escape(s: &str) -> String {
    utf8_percent_encode(s, UNRESERVED).to_string()
}
