//! Rate query service.
//!
//! Reshapes collaborator responses into scalars and maps for callers.
//! Contains NO transport logic - each query issues exactly one
//! collaborator request, with no retries and no caching.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use rates_types::{ApiError, CurrencyCode, ForeignExchangeRatesApi, RatesError};

/// Query layer over the foreign-exchange rates API.
///
/// Holds only the injected collaborator; stateless otherwise, so an
/// instance is as safe to share across tasks as its collaborator is.
pub struct RatesProvider<C: ForeignExchangeRatesApi> {
    api: C,
}

impl<C: ForeignExchangeRatesApi> RatesProvider<C> {
    /// Creates a new provider with the given rates API collaborator.
    pub fn new(api: C) -> Self {
        Self { api }
    }

    /// Returns a reference to the underlying collaborator.
    pub fn api(&self) -> &C {
        &self.api
    }

    /// Gets the latest EUR-based rate for a currency.
    ///
    /// The collaborator's invalid-argument signal is translated into
    /// [`RatesError::CurrencyNotSupported`] on this path.
    #[tracing::instrument(skip(self))]
    pub async fn exchange_rate_in_eur(
        &self,
        requested: CurrencyCode,
    ) -> Result<f64, RatesError> {
        let latest = match self.api.latest_rates().await {
            Ok(snapshot) => snapshot,
            Err(ApiError::InvalidArgument(_)) => {
                return Err(RatesError::CurrencyNotSupported(requested));
            }
            Err(e) => return Err(e.into()),
        };

        latest
            .rate(requested)
            .ok_or(RatesError::RateNotAvailable(requested))
    }

    /// Gets the latest rate for `requested`, relative to `exchanged`.
    ///
    /// Collaborator failures propagate untranslated on this path.
    #[tracing::instrument(skip(self))]
    pub async fn exchange_rate(
        &self,
        requested: CurrencyCode,
        exchanged: CurrencyCode,
    ) -> Result<f64, RatesError> {
        let latest = self.api.latest_rates_with_base(exchanged).await?;

        latest
            .rate(requested)
            .ok_or(RatesError::RateNotAvailable(requested))
    }

    /// Gets the EUR-based daily rates for `requested` in `[start_at, end_at]`,
    /// keyed by quote timestamp in ascending order.
    ///
    /// When two snapshots carry the same timestamp the later entry wins.
    #[tracing::instrument(skip(self))]
    pub async fn exchange_rate_list_in_eur(
        &self,
        requested: CurrencyCode,
        start_at: DateTime<Utc>,
        end_at: DateTime<Utc>,
    ) -> Result<BTreeMap<DateTime<Utc>, f64>, RatesError> {
        let series = match self.api.historical_rates(start_at, end_at).await {
            Ok(series) => series,
            Err(ApiError::InvalidArgument(_)) => {
                return Err(RatesError::CurrencyOrRangeNotSupported(requested));
            }
            Err(e) => return Err(e.into()),
        };

        let mut by_date = BTreeMap::new();
        for snapshot in series {
            let rate = snapshot
                .rate(requested)
                .ok_or(RatesError::RateNotAvailable(requested))?;
            by_date.insert(snapshot.date(), rate);
        }
        Ok(by_date)
    }

    /// Gets how much the price of 100 USD, quoted in `currency`, moved
    /// across the window: `(last USD rate - first USD rate) * 100`.
    ///
    /// First and last are taken in the order the collaborator returned
    /// them; the series is not re-sorted here. A collaborator that does
    /// not order by date yields the delta between arbitrary entries.
    #[tracing::instrument(skip(self))]
    pub async fn price_difference_for_100_usd(
        &self,
        start_at: DateTime<Utc>,
        stop_at: DateTime<Utc>,
        currency: CurrencyCode,
    ) -> Result<f64, RatesError> {
        let series = self
            .api
            .historical_rates_with_base(start_at, stop_at, currency)
            .await?;

        let first = series.first().ok_or(RatesError::EmptySeries)?;
        let last = series.last().ok_or(RatesError::EmptySeries)?;

        let opening = first
            .rate(CurrencyCode::USD)
            .ok_or(RatesError::RateNotAvailable(CurrencyCode::USD))?;
        let closing = last
            .rate(CurrencyCode::USD)
            .ok_or(RatesError::RateNotAvailable(CurrencyCode::USD))?;

        Ok((closing - opening) * 100.0)
    }
}
