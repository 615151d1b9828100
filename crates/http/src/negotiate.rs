//! JSON / XML / YAML content negotiation for resource bodies.
//!
//! [`Payload`] decodes a request body according to `Content-Type`, treating an
//! empty or null body as `None`. [`Accept`] picks the response representation
//! and [`Negotiated`] renders it.

use std::convert::Infallible;

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Request},
    http::{header, request::Parts, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{de::DeserializeOwned, Serialize};

use crate::error::AppError;

pub const APPLICATION_JSON: &str = "application/json";
pub const APPLICATION_XML: &str = "application/xml";
pub const APPLICATION_YAML: &str = "application/x-yaml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MediaType {
    #[default]
    Json,
    Xml,
    Yaml,
}

impl MediaType {
    pub fn content_type(self) -> &'static str {
        match self {
            MediaType::Json => APPLICATION_JSON,
            MediaType::Xml => APPLICATION_XML,
            MediaType::Yaml => APPLICATION_YAML,
        }
    }

    /// Concrete media type from a `Content-Type` value; parameters such as
    /// `charset` are ignored.
    pub fn from_content_type(value: &str) -> Option<Self> {
        let essence = value
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match essence.as_str() {
            "application/json" => Some(MediaType::Json),
            "application/xml" | "text/xml" => Some(MediaType::Xml),
            "application/x-yaml" | "application/yaml" | "text/yaml" => Some(MediaType::Yaml),
            _ => None,
        }
    }

    /// Pick the best supported type from `Accept` headers, honoring q-values.
    /// Missing or unsatisfiable headers fall back to JSON.
    pub fn negotiate(headers: &HeaderMap) -> Self {
        let mut candidates: Vec<(f32, MediaType)> = headers
            .get_all(header::ACCEPT)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(','))
            .filter_map(|entry| {
                let mut parts = entry.split(';');
                let essence = parts.next()?.trim().to_ascii_lowercase();
                let quality = parts
                    .filter_map(|param| param.trim().strip_prefix("q="))
                    .find_map(|q| q.parse::<f32>().ok())
                    .unwrap_or(1.0);

                let media = match essence.as_str() {
                    "*/*" | "application/*" => Some(MediaType::Json),
                    other => MediaType::from_content_type(other),
                }?;
                (quality > 0.0).then_some((quality, media))
            })
            .collect();

        // Stable sort keeps header order among equal weights.
        candidates.sort_by(|a, b| b.0.total_cmp(&a.0));
        candidates
            .first()
            .map(|(_, media)| *media)
            .unwrap_or_default()
    }

    pub fn serialize<T: Serialize>(self, value: &T) -> anyhow::Result<Vec<u8>> {
        let body = match self {
            MediaType::Json => serde_json::to_vec(value)?,
            MediaType::Xml => quick_xml::se::to_string(value)?.into_bytes(),
            MediaType::Yaml => serde_yaml::to_string(value)?.into_bytes(),
        };
        Ok(body)
    }

    /// Decode a body; blank input and explicit nulls yield `None`.
    pub fn deserialize<T: DeserializeOwned>(self, bytes: &[u8]) -> anyhow::Result<Option<T>> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        let value = match self {
            MediaType::Json => serde_json::from_slice::<Option<T>>(bytes)?,
            MediaType::Xml => Some(quick_xml::de::from_str::<T>(std::str::from_utf8(bytes)?)?),
            MediaType::Yaml => serde_yaml::from_slice::<Option<T>>(bytes)?,
        };
        Ok(value)
    }
}

/// Response representation requested by the client.
#[derive(Debug, Clone, Copy)]
pub struct Accept(pub MediaType);

impl<S> FromRequestParts<S> for Accept
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Accept(MediaType::negotiate(&parts.headers)))
    }
}

/// Request body decoded by `Content-Type` (JSON when absent).
#[derive(Debug)]
pub struct Payload<T>(pub Option<T>);

impl<S, T> FromRequest<S> for Payload<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let media = match req.headers().get(header::CONTENT_TYPE) {
            None => MediaType::Json,
            Some(value) => {
                let value = value
                    .to_str()
                    .map_err(|_| AppError::unsupported_media_type("unreadable Content-Type"))?;
                MediaType::from_content_type(value)
                    .ok_or_else(|| AppError::unsupported_media_type(value.to_string()))?
            }
        };

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::bad_request(rejection.body_text()))?;

        let value = media.deserialize(&bytes).map_err(|e| {
            AppError::bad_request(format!("malformed {} body: {}", media.content_type(), e))
        })?;

        Ok(Payload(value))
    }
}

/// A body rendered in the negotiated representation.
#[derive(Debug)]
pub struct Negotiated<T> {
    media: MediaType,
    value: T,
}

impl<T> Negotiated<T> {
    pub fn new(Accept(media): Accept, value: T) -> Self {
        Self { media, value }
    }
}

impl<T: Serialize> IntoResponse for Negotiated<T> {
    fn into_response(self) -> Response {
        match self.media.serialize(&self.value) {
            Ok(body) => (
                StatusCode::OK,
                [(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static(self.media.content_type()),
                )],
                body,
            )
                .into_response(),
            Err(e) => AppError::Internal(e.context("failed to render response body")).into_response(),
        }
    }
}
