//! Thin HTTP client shared by the car-data API and document-store adapters.
//!
//! Responses are parsed leniently: a body that is not valid JSON becomes
//! [`Payload::Text`] instead of an error, deferring the failure to whichever
//! consumer expected structured data. Non-2xx statuses, on the other hand,
//! are hard failures.

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::{Method, Request};
use hyper_rustls::HttpsConnector;
use hyper_util::client::legacy::{connect::HttpConnector, Client};
use hyper_util::rt::TokioExecutor;
use serde_json::Value;

use crate::SourceError;

/// A fetched response body: structured when it parsed as JSON, otherwise the
/// raw text.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(Value),
    Text(String),
}

impl Payload {
    /// Lenient parse: JSON if possible, raw text otherwise.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let text = String::from_utf8_lossy(bytes).into_owned();
        match serde_json::from_str::<Value>(&text) {
            Ok(value) => Payload::Json(value),
            Err(_) => Payload::Text(text),
        }
    }

    /// Convert into a [`Value`] for extraction. Text payloads become JSON
    /// strings, which the extractor treats as "no data".
    pub fn into_value(self) -> Value {
        match self {
            Payload::Json(value) => value,
            Payload::Text(text) => Value::String(text),
        }
    }
}

/// HTTPS-capable client wrapper around the hyper legacy client.
#[derive(Clone)]
pub struct HttpClient {
    inner: Client<HttpsConnector<HttpConnector>, Full<Bytes>>,
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient {
    pub fn new() -> Self {
        let https = hyper_rustls::HttpsConnectorBuilder::new()
            .with_webpki_roots()
            .https_or_http()
            .enable_http1()
            .build();
        Self {
            inner: Client::builder(TokioExecutor::new()).build(https),
        }
    }

    /// GET `url` with the given headers.
    pub async fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<Payload, SourceError> {
        self.send(Method::GET, url, headers, None).await
    }

    /// Issue a request with an optional JSON body.
    pub async fn send(
        &self,
        method: Method,
        url: &str,
        headers: &[(&str, &str)],
        body: Option<&Value>,
    ) -> Result<Payload, SourceError> {
        tracing::debug!(%method, url, "issuing request");
        let mut builder = Request::builder().method(method.clone()).uri(url);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        let bytes = match body {
            Some(value) => {
                builder = builder.header("content-type", "application/json");
                Bytes::from(value.to_string())
            }
            None => Bytes::new(),
        };
        let request = builder.body(Full::new(bytes))?;

        let response = self.inner.request(request).await?;
        let status = response.status();
        let body = response.into_body().collect().await?.to_bytes();
        if !status.is_success() {
            tracing::warn!(url, %status, "request rejected");
            return Err(SourceError::Status {
                url: url.to_string(),
                status,
            });
        }
        Ok(Payload::from_bytes(&body))
    }
}
