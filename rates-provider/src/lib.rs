//! # Rates Provider
//!
//! Currency-conversion query layer for the FX rates library.
//!
//! The provider is generic over `C: ForeignExchangeRatesApi`, so the
//! collaborator is injected at compile time. This enables:
//! - Swapping API adapters without code changes
//! - Testing with a mock collaborator
//! - Compile-time checks for port implementation

pub mod provider;


pub use provider::RatesProvider;
