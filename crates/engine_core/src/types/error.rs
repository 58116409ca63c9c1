//! Error types for structured error handling.
//!
//! This module provides:
//! - `DateError`: Errors from date decoding and arithmetic
//! - `ValidationError`: Malformed or out-of-range input rows
//! - `DomainError`: Rows on which the pricing formula is mathematically undefined
//! - `PricingError`: Union of the per-row failure modes
//!
//! The engine never recovers silently: it never substitutes a default price,
//! clamps an undefined input, or returns a non-finite value as if it were a
//! valid price. Every failure is typed so the caller can report precisely
//! which record could not be priced.

use thiserror::Error;

/// Date-related errors.
///
/// Provides structured error handling for date decoding and arithmetic
/// with descriptive context for each failure mode.
///
/// # Variants
/// - `InvalidEncoding`: Integer does not decode as 8-digit YYYYMMDD
/// - `InvalidDate`: Components do not form a real calendar date (e.g., February 30th)
/// - `ParseError`: Failed to parse a date string
/// - `OutOfRange`: Date outside the year range the YYYYMMDD encoding supports
///
/// # Examples
/// ```
/// use engine_core::types::error::DateError;
///
/// let err = DateError::InvalidDate { year: 2023, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "invalid date: 2023-02-30");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    /// Integer value is not a valid 8-digit YYYYMMDD encoding.
    #[error("invalid YYYYMMDD encoding: {value}")]
    InvalidEncoding {
        /// The undecodable integer value
        value: u32,
    },

    /// Date components do not form a real calendar date.
    #[error("invalid date: {year}-{month:02}-{day:02}")]
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Failed to parse a date string.
    #[error("date parse error: {0}")]
    ParseError(String),

    /// Date outside the year range the YYYYMMDD encoding supports.
    #[error("date outside supported year range")]
    OutOfRange,
}

/// Malformed or out-of-range input row.
///
/// A `ValidationError` is always attributable to a specific row; the batch
/// layer attaches the row index when reporting it. The pricing model raises
/// these itself rather than assuming upstream validation ran.
///
/// # Variants
/// - `NonPositiveStrike`: Strike price is zero, negative, or non-finite
/// - `NonPositiveFuturesPrice`: Futures price is zero, negative, or non-finite
/// - `InvalidVolatility`: Implied volatility is negative or non-finite
/// - `Date`: A date field could not be decoded
///
/// # Examples
/// ```
/// use engine_core::types::error::ValidationError;
///
/// let err = ValidationError::NonPositiveStrike { strike: -50.0 };
/// assert_eq!(format!("{}", err), "non-positive strike price: K = -50");
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Strike price must be strictly positive and finite.
    #[error("non-positive strike price: K = {strike}")]
    NonPositiveStrike {
        /// The invalid strike price
        strike: f64,
    },

    /// Futures price must be strictly positive and finite.
    #[error("non-positive futures price: F = {price}")]
    NonPositiveFuturesPrice {
        /// The invalid futures price
        price: f64,
    },

    /// Implied volatility must be non-negative and finite.
    #[error("invalid implied volatility: sigma = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility
        volatility: f64,
    },

    /// A date field of the row could not be decoded.
    #[error("undecodable date: {0}")]
    Date(#[from] DateError),
}

/// Input is individually well-formed but the closed-form pricing formula is
/// mathematically undefined for it.
///
/// Unlike a naive formula evaluation, which would silently divide by zero or
/// produce NaN, these conditions are rejected explicitly.
///
/// # Variants
/// - `NonPositiveMaturity`: Settlement date is not after the quote date
/// - `NonPositiveVolatility`: d1/d2 are undefined when volatility is zero
///
/// # Examples
/// ```
/// use engine_core::types::error::DomainError;
///
/// let err = DomainError::NonPositiveVolatility { volatility: 0.0 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Time to maturity is not strictly positive.
    #[error("non-positive time to maturity: T = {year_fraction}")]
    NonPositiveMaturity {
        /// The offending year fraction
        year_fraction: f64,
    },

    /// Volatility is not strictly positive.
    #[error("non-positive volatility: sigma = {volatility}")]
    NonPositiveVolatility {
        /// The offending volatility
        volatility: f64,
    },
}

/// Per-row pricing failure: either the row was malformed or the formula is
/// undefined for it.
///
/// # Examples
/// ```
/// use engine_core::types::error::{DomainError, PricingError};
///
/// let err: PricingError = DomainError::NonPositiveVolatility { volatility: 0.0 }.into();
/// assert!(err.is_domain());
/// assert!(!err.is_validation());
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    /// The row violated an input invariant.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The formula is mathematically undefined for the row.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl PricingError {
    /// Returns true if this is a validation failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, PricingError::Validation(_))
    }

    /// Returns true if this is a domain failure.
    pub fn is_domain(&self) -> bool {
        matches!(self, PricingError::Domain(_))
    }
}

impl From<DateError> for PricingError {
    fn from(err: DateError) -> Self {
        PricingError::Validation(ValidationError::Date(err))
    }
}
