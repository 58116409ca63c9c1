//! Core types for the pricing engine.
//!
//! This module provides:
//! - Time types: `Date`, `DayCountConvention` (`time`)
//! - Error types: `DateError`, `ValidationError`, `DomainError`, `PricingError` (`error`)

pub mod error;
pub mod time;

pub use error::{DateError, DomainError, PricingError, ValidationError};
pub use time::{Date, DayCountConvention};
