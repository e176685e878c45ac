//! Domain models for the FX rates library.

pub mod currency;
pub mod snapshot;

pub use currency::CurrencyCode;
pub use snapshot::{ExchangeRates, ExchangeRatesBuilder};
