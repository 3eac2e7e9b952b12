// ABOUTME: Resource handling module for fetching the target page over HTTP.
// ABOUTME: Handles URL validation, status checks, content-length limits, and charset decoding.

use std::collections::HashMap;

use bytes::Bytes;
use tracing::debug;

use crate::error::ScrapeError;

/// Maximum allowed content length (10 MB).
pub const MAX_CONTENT_LENGTH: usize = 10 * 1024 * 1024;

/// Options for fetching a resource.
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    /// Extra request headers sent alongside the client's user agent.
    pub headers: HashMap<String, String>,
}

/// Result of a successful fetch operation.
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub status: u16,
    pub url: String,
    pub final_url: String,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl FetchResult {
    /// Decode the body as text, using the charset from the content-type header when present.
    pub fn text(&self) -> String {
        decode_body(&self.body, self.content_type.as_deref())
    }
}

/// Decode body bytes to a String using charset from content-type header or detection.
fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    if let Some(ct) = content_type {
        if let Some(charset) = extract_charset(ct) {
            if let Some(encoding) = encoding_rs::Encoding::for_label(charset.as_bytes()) {
                let (decoded, _, _) = encoding.decode(body);
                return decoded.into_owned();
            }
        }
    }

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(body, true);
    let encoding = detector.guess(None, true);
    let (decoded, _, _) = encoding.decode(body);
    decoded.into_owned()
}

/// Extract charset value from Content-Type header.
fn extract_charset(content_type: &str) -> Option<String> {
    let lower = content_type.to_lowercase();
    for part in lower.split(';') {
        let trimmed = part.trim();
        if let Some(charset) = trimmed.strip_prefix("charset=") {
            let charset = charset.trim_matches('"').trim_matches('\'');
            return Some(charset.to_string());
        }
    }
    None
}

/// Check that the target is a non-empty http(s) URL.
fn validate_url(url: &str) -> Result<url::Url, ScrapeError> {
    if url.is_empty() {
        return Err(ScrapeError::invalid_url(url, "empty URL"));
    }

    let parsed = url::Url::parse(url).map_err(|e| ScrapeError::invalid_url(url, e.to_string()))?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        _ => Err(ScrapeError::invalid_url(
            url,
            "scheme must be http or https",
        )),
    }
}

/// Reject a body (declared or read) larger than `MAX_CONTENT_LENGTH`.
fn ensure_within_limit(url: &str, len: u64) -> Result<(), ScrapeError> {
    if len > MAX_CONTENT_LENGTH as u64 {
        return Err(ScrapeError::TooLarge {
            url: url.to_string(),
            limit: MAX_CONTENT_LENGTH,
        });
    }
    Ok(())
}

/// Fetch a resource from the given URL with a single GET request.
///
/// The user agent and timeout are carried by `client`. Any non-2xx status is
/// an error, checked before the size limit; nothing is retried.
pub fn fetch(
    client: &reqwest::blocking::Client,
    url: &str,
    opts: &FetchOptions,
) -> Result<FetchResult, ScrapeError> {
    let parsed = validate_url(url)?;

    let mut request = client.get(parsed);
    for (key, value) in &opts.headers {
        request = request.header(key, value);
    }

    debug!(url, "sending request");
    let response = request
        .send()
        .map_err(|e| ScrapeError::network(url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScrapeError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let content_length = response.content_length().or_else(|| {
        response
            .headers()
            .get("content-length")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<u64>().ok())
    });
    if let Some(len) = content_length {
        ensure_within_limit(url, len)?;
    }

    let final_url = response.url().to_string();
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_lowercase());

    let body = response
        .bytes()
        .map_err(|e| ScrapeError::network(url, e))?;
    ensure_within_limit(url, body.len() as u64)?;

    debug!(url, status = status.as_u16(), bytes = body.len(), "fetched page");

    Ok(FetchResult {
        status: status.as_u16(),
        url: url.to_string(),
        final_url,
        content_type,
        body,
    })
}
