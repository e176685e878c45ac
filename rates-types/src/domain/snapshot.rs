//! Immutable exchange-rate snapshot.

use chrono::{DateTime, Utc};
use std::collections::HashMap;

use super::CurrencyCode;

/// One quote from the rates API: a base currency, a timestamp, and the
/// rates of other currencies relative to the base.
///
/// Invariant: `rates` never contains the base currency itself. The builder
/// enforces this by dropping self-referential pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct ExchangeRates {
    base: CurrencyCode,
    date: DateTime<Utc>,
    rates: HashMap<CurrencyCode, f64>,
}

impl ExchangeRates {
    /// Starts building a snapshot based on the given currency.
    pub fn builder(base: CurrencyCode) -> ExchangeRatesBuilder {
        ExchangeRatesBuilder {
            base,
            date: None,
            rates: HashMap::new(),
        }
    }

    /// Looks up the rate for a currency. Absent codes are not an error.
    pub fn rate(&self, currency: CurrencyCode) -> Option<f64> {
        self.rates.get(&currency).copied()
    }

    /// Returns the currency all rates are expressed relative to.
    pub fn base(&self) -> CurrencyCode {
        self.base
    }

    /// Returns the timestamp of the quote.
    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    /// Returns the number of quoted currencies.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

/// Builder for [`ExchangeRates`].
///
/// Accumulates `(currency, rate)` pairs, skipping any pair whose currency
/// equals the base. The date defaults to now when left unset.
#[derive(Debug)]
pub struct ExchangeRatesBuilder {
    base: CurrencyCode,
    date: Option<DateTime<Utc>>,
    rates: HashMap<CurrencyCode, f64>,
}

impl ExchangeRatesBuilder {
    /// Adds a quoted rate. A rate for the base currency itself is dropped.
    pub fn rate(mut self, currency: CurrencyCode, rate: f64) -> Self {
        if currency != self.base {
            self.rates.insert(currency, rate);
        }
        self
    }

    /// Sets the quote timestamp.
    pub fn on(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    pub fn build(self) -> ExchangeRates {
        ExchangeRates {
            base: self.base,
            date: self.date.unwrap_or_else(Utc::now),
            rates: self.rates,
        }
    }
}
