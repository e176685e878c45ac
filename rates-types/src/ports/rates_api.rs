//! Foreign-exchange rates API port.
//!
//! This trait defines the interface to the external rates service.
//! Implementations can be HTTP clients, stubs, mock providers, etc.

use chrono::{DateTime, Utc};

use crate::domain::{CurrencyCode, ExchangeRates};

/// Error type for rates API operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The service rejected a currency code or date range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Unexpected response ({status}): {message}")]
    UnexpectedStatus { status: u16, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// Port trait for the external rates API.
///
/// Latest quotes default to an EUR base when none is given. Historical
/// queries cover the inclusive window `[start_at, end_at]`, one snapshot
/// per day the service has data for.
#[async_trait::async_trait]
pub trait ForeignExchangeRatesApi: Send + Sync {
    /// Gets the latest EUR-based rates.
    async fn latest_rates(&self) -> Result<ExchangeRates, ApiError>;

    /// Gets the latest rates relative to the given base currency.
    async fn latest_rates_with_base(
        &self,
        base: CurrencyCode,
    ) -> Result<ExchangeRates, ApiError>;

    /// Gets the latest rates restricted to the given symbols.
    async fn latest_rates_for_symbols(
        &self,
        symbols: &[CurrencyCode],
    ) -> Result<Vec<ExchangeRates>, ApiError>;

    /// Gets the EUR-based rates for a single historical day.
    async fn historical_rates_on(
        &self,
        date: DateTime<Utc>,
    ) -> Result<ExchangeRates, ApiError>;

    /// Gets the EUR-based daily rates in the window.
    async fn historical_rates(
        &self,
        start_at: DateTime<Utc>,
        end_at: DateTime<Utc>,
    ) -> Result<Vec<ExchangeRates>, ApiError>;

    /// Gets the daily rates in the window, restricted to the given symbols.
    async fn historical_rates_for_symbols(
        &self,
        start_at: DateTime<Utc>,
        end_at: DateTime<Utc>,
        symbols: &[CurrencyCode],
    ) -> Result<Vec<ExchangeRates>, ApiError>;

    /// Gets the daily rates in the window, relative to the given base.
    async fn historical_rates_with_base(
        &self,
        start_at: DateTime<Utc>,
        end_at: DateTime<Utc>,
        base: CurrencyCode,
    ) -> Result<Vec<ExchangeRates>, ApiError>;
}
