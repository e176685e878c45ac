//! # Rates Types
//!
//! Domain types and port traits for the FX rates query library.
//! This crate has ZERO external IO dependencies - only data structures,
//! business rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (CurrencyCode, ExchangeRates)
//! - `ports/` - Trait definitions that adapters must implement
//! - `error.rs` - Domain and caller-facing error types

pub mod domain;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{CurrencyCode, ExchangeRates, ExchangeRatesBuilder};
pub use error::{DomainError, RatesError};
pub use ports::{ApiError, ForeignExchangeRatesApi};
