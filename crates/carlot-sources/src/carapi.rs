//! Car-data API adapter — the three read-only endpoints the pipeline
//! assembles inventory from.
//!
//! The trait exists so the pipeline can run against canned fakes in tests;
//! [`CarApi`] is the production implementation speaking to the hosted API
//! with bearer-style header credentials.

use carlot_core::config::ApiConfig;

use crate::client::{HttpClient, Payload};
use crate::SourceError;

/// A provider of the three raw record sets. Fetches are independent; the
/// pipeline issues all three concurrently.
#[allow(async_fn_in_trait)]
pub trait CarDataSource {
    async fn models(&self) -> Result<Payload, SourceError>;
    async fn bodies(&self) -> Result<Payload, SourceError>;
    async fn engines(&self) -> Result<Payload, SourceError>;
}

/// Client for the hosted car-data API.
#[derive(Clone)]
pub struct CarApi {
    http: HttpClient,
    base_url: String,
    host: String,
    key: String,
    model_year: i32,
}

impl CarApi {
    pub fn new(cfg: &ApiConfig) -> Self {
        Self {
            http: HttpClient::new(),
            base_url: cfg.base_url.clone(),
            host: cfg.host.clone(),
            key: cfg.key.clone(),
            model_year: cfg.model_year,
        }
    }

    async fn get(&self, path_and_query: &str) -> Result<Payload, SourceError> {
        let url = format!("{}{}", self.base_url, path_and_query);
        self.http
            .get(
                &url,
                &[
                    ("x-rapidapi-key", self.key.as_str()),
                    ("x-rapidapi-host", self.host.as_str()),
                ],
            )
            .await
    }
}

impl CarDataSource for CarApi {
    /// The models endpoint is year-scoped; bodies and engines are not.
    async fn models(&self) -> Result<Payload, SourceError> {
        self.get(&format!(
            "/api/models?sort=id&direction=asc&year={}&verbose=yes",
            self.model_year
        ))
        .await
    }

    async fn bodies(&self) -> Result<Payload, SourceError> {
        self.get("/api/bodies?verbose=yes&sort=id&direction=asc").await
    }

    async fn engines(&self) -> Result<Payload, SourceError> {
        self.get("/api/engines?verbose=yes&direction=asc&sort=id").await
    }
}
