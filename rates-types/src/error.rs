//! Error types for the FX rates library.

use crate::domain::CurrencyCode;
use crate::ports::ApiError;

/// Domain-level errors (invalid values).
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Invalid currency code: {0:?}")]
    InvalidCurrencyCode(String),
}

/// Caller-facing errors for rate queries.
///
/// The provider translates the collaborator's invalid-argument signal into
/// the `CurrencyNotSupported` variants on the documented call paths; every
/// other collaborator failure passes through as `Api`.
#[derive(Debug, thiserror::Error)]
pub enum RatesError {
    #[error("Currency is not supported: {0}")]
    CurrencyNotSupported(CurrencyCode),

    #[error("Currency {0} is not supported, or incorrect date range")]
    CurrencyOrRangeNotSupported(CurrencyCode),

    #[error("No rate quoted for {0}")]
    RateNotAvailable(CurrencyCode),

    #[error("Historical series came back empty")]
    EmptySeries,

    #[error(transparent)]
    Api(#[from] ApiError),
}
