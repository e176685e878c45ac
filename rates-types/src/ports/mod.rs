//! Port traits (interfaces for adapters).
//!
//! These are the contracts that adapters must implement.
//! The provider depends on these traits, not concrete implementations.

mod rates_api;

pub use rates_api::{ApiError, ForeignExchangeRatesApi};
