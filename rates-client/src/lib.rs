//! # Rates Client
//!
//! A `reqwest`-based adapter implementing the [`ForeignExchangeRatesApi`]
//! port against an exchangeratesapi.io-style REST service:
//!
//! - `GET /latest[?base=XXX][&symbols=A,B]`
//! - `GET /{YYYY-MM-DD}` for a single historical day
//! - `GET /history?start_at=YYYY-MM-DD&end_at=YYYY-MM-DD[&base=XXX][&symbols=A,B]`
//!
//! HTTP 400 maps to [`ApiError::InvalidArgument`] - that is the service's
//! contract for an unsupported currency or date range. No retry, no caching.

use std::env;

use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use rates_types::{ApiError, CurrencyCode, ExchangeRates, ForeignExchangeRatesApi};

use crate::wire::{HistoryBody, SnapshotBody};

mod wire;

/// HTTP client for the foreign-exchange rates API.
pub struct ExchangeRatesApiClient {
    base_url: String,
    access_key: Option<String>,
    http: Client,
}

impl ExchangeRatesApiClient {
    /// Creates a new client for the given service URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            access_key: None,
            http: Client::new(),
        }
    }

    /// Sets the access key sent with every request.
    pub fn with_access_key(mut self, access_key: impl Into<String>) -> Self {
        self.access_key = Some(access_key.into());
        self
    }

    /// Builds a client from `RATES_API_URL` and optional
    /// `RATES_API_ACCESS_KEY` environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let base_url = env::var("RATES_API_URL")
            .map_err(|_| anyhow::anyhow!("RATES_API_URL environment variable is required"))?;

        let mut client = Self::new(base_url);
        if let Ok(key) = env::var("RATES_API_ACCESS_KEY") {
            client = client.with_access_key(key);
        }
        Ok(client)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        tracing::debug!(path, "rates API request");

        let mut req = self.http.get(format!("{}{}", self.base_url, path));
        for (name, value) in query {
            req = req.query(&[(name, value)]);
        }
        if let Some(key) = &self.access_key {
            req = req.query(&[("access_key", key)]);
        }

        let resp = req
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(status_error(status, &body));
        }
        serde_json::from_str(&body).map_err(|e| ApiError::MalformedResponse(e.to_string()))
    }

    async fn latest(&self, query: &[(&str, String)]) -> Result<ExchangeRates, ApiError> {
        let body: SnapshotBody = self.get("/latest", query).await?;
        body.into_domain()
    }

    async fn history(&self, query: &[(&str, String)]) -> Result<Vec<ExchangeRates>, ApiError> {
        let body: HistoryBody = self.get("/history", query).await?;
        body.into_domain()
    }
}

#[async_trait::async_trait]
impl ForeignExchangeRatesApi for ExchangeRatesApiClient {
    async fn latest_rates(&self) -> Result<ExchangeRates, ApiError> {
        self.latest(&[]).await
    }

    async fn latest_rates_with_base(
        &self,
        base: CurrencyCode,
    ) -> Result<ExchangeRates, ApiError> {
        self.latest(&[("base", base.to_string())]).await
    }

    /// One snapshot per symbol, each based on that symbol.
    async fn latest_rates_for_symbols(
        &self,
        symbols: &[CurrencyCode],
    ) -> Result<Vec<ExchangeRates>, ApiError> {
        let mut snapshots = Vec::with_capacity(symbols.len());
        for symbol in symbols {
            snapshots.push(self.latest_rates_with_base(*symbol).await?);
        }
        Ok(snapshots)
    }

    async fn historical_rates_on(
        &self,
        date: DateTime<Utc>,
    ) -> Result<ExchangeRates, ApiError> {
        let body: SnapshotBody = self.get(&format!("/{}", date_param(date)), &[]).await?;
        body.into_domain()
    }

    async fn historical_rates(
        &self,
        start_at: DateTime<Utc>,
        end_at: DateTime<Utc>,
    ) -> Result<Vec<ExchangeRates>, ApiError> {
        self.history(&window_query(start_at, end_at)).await
    }

    async fn historical_rates_for_symbols(
        &self,
        start_at: DateTime<Utc>,
        end_at: DateTime<Utc>,
        symbols: &[CurrencyCode],
    ) -> Result<Vec<ExchangeRates>, ApiError> {
        let mut query = window_query(start_at, end_at);
        query.push(("symbols", symbols_param(symbols)));
        self.history(&query).await
    }

    async fn historical_rates_with_base(
        &self,
        start_at: DateTime<Utc>,
        end_at: DateTime<Utc>,
        base: CurrencyCode,
    ) -> Result<Vec<ExchangeRates>, ApiError> {
        let mut query = window_query(start_at, end_at);
        query.push(("base", base.to_string()));
        self.history(&query).await
    }
}

fn window_query(start_at: DateTime<Utc>, end_at: DateTime<Utc>) -> Vec<(&'static str, String)> {
    vec![
        ("start_at", date_param(start_at)),
        ("end_at", date_param(end_at)),
    ]
}

fn date_param(date: DateTime<Utc>) -> String {
    date.date_naive().format("%Y-%m-%d").to_string()
}

fn symbols_param(symbols: &[CurrencyCode]) -> String {
    symbols
        .iter()
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

fn status_error(status: StatusCode, body: &str) -> ApiError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
        .unwrap_or_else(|| body.to_string());

    if status == StatusCode::BAD_REQUEST {
        ApiError::InvalidArgument(message)
    } else {
        ApiError::UnexpectedStatus {
            status: status.as_u16(),
            message,
        }
    }
}
