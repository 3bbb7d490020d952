//! # Custom Extractors & Validation
//!
//! - [`RequestBaseUrl`]: the scheme and host the client used to reach us,
//!   honouring reverse-proxy headers, so generated links are absolute and
//!   correct behind any externally visible name.
//! - [`Validate`] and [`decode_validated_json`]: decode a raw request body and
//!   check the rules serde cannot express. Bodies are decoded regardless of
//!   `content-type`.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use flyte_pack::BaseUrl;
use serde::de::DeserializeOwned;

/// Trait for request types that can validate their business rules
/// beyond what serde deserialization checks.
pub trait Validate {
    /// Validate business rules. Returns an error message on failure.
    fn validate(&self) -> Result<(), String>;
}

/// Decode a JSON body, returning the decoder's message on failure.
pub fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, String> {
    serde_json::from_slice(body).map_err(|err| err.to_string())
}

/// Decode a JSON body and validate it using the [`Validate`] trait.
pub fn decode_validated_json<T: DeserializeOwned + Validate>(body: &[u8]) -> Result<T, String> {
    let value: T = decode_json(body)?;
    value.validate()?;
    Ok(value)
}

/// Base URL of the current request, computed once per request.
///
/// Scheme: `X-Forwarded-Proto`, else the request URI scheme, else `http`.
/// Host: `X-Forwarded-Host`, else `Host`, else the URI authority, else
/// `localhost`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestBaseUrl(pub BaseUrl);

#[axum::async_trait]
impl<S: Send + Sync> FromRequestParts<S> for RequestBaseUrl {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(base_url_from_parts(parts)))
    }
}

/// First value of a possibly comma-separated proxy header.
fn first_header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

fn base_url_from_parts(parts: &Parts) -> BaseUrl {
    let scheme = first_header(&parts.headers, "x-forwarded-proto")
        .or_else(|| parts.uri.scheme_str())
        .unwrap_or("http");
    let host = first_header(&parts.headers, "x-forwarded-host")
        .or_else(|| first_header(&parts.headers, "host"))
        .or_else(|| parts.uri.authority().map(|a| a.as_str()))
        .unwrap_or("localhost");
    BaseUrl::new(scheme, host)
}
