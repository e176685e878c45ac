//! Wire DTOs for the rates API JSON surface.
//!
//! Single snapshots come back as `{base, date, rates: {code: rate}}`;
//! history queries as `{base, rates: {date: {code: rate}}}`. History
//! entries convert to snapshots in ascending date order.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Deserialize;

use rates_types::{ApiError, CurrencyCode, ExchangeRates};

#[derive(Debug, Deserialize)]
pub(crate) struct SnapshotBody {
    pub base: String,
    pub date: NaiveDate,
    pub rates: HashMap<String, f64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct HistoryBody {
    pub base: String,
    pub rates: BTreeMap<NaiveDate, HashMap<String, f64>>,
}

impl SnapshotBody {
    pub(crate) fn into_domain(self) -> Result<ExchangeRates, ApiError> {
        build_snapshot(&self.base, self.date, &self.rates)
    }
}

impl HistoryBody {
    pub(crate) fn into_domain(self) -> Result<Vec<ExchangeRates>, ApiError> {
        self.rates
            .iter()
            .map(|(date, rates)| build_snapshot(&self.base, *date, rates))
            .collect()
    }
}

fn build_snapshot(
    base: &str,
    date: NaiveDate,
    rates: &HashMap<String, f64>,
) -> Result<ExchangeRates, ApiError> {
    let mut builder = ExchangeRates::builder(parse_code(base)?).on(start_of_day(date));
    for (code, rate) in rates {
        // The builder drops a quote for the base currency itself, which
        // keeps the snapshot invariant even when the service echoes it.
        builder = builder.rate(parse_code(code)?, *rate);
    }
    Ok(builder.build())
}

fn parse_code(code: &str) -> Result<CurrencyCode, ApiError> {
    CurrencyCode::new(code).map_err(|e| ApiError::MalformedResponse(e.to_string()))
}

/// Day quotes carry start-of-day UTC timestamps.
pub(crate) fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}
