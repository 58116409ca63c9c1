//! # engine_core: Foundation for the Option Pricing Engine
//!
//! ## Foundation Layer Role
//!
//! engine_core is the bottom layer of the workspace, providing:
//! - Market-data model: `MarketDataRow`, `MarketDataSnapshot`, `PricedRow` (`market_data`)
//! - The `PricingModel` capability contract (`traits`)
//! - Time types: `Date`, `DayCountConvention` (`types::time`)
//! - Error types: `ValidationError`, `DomainError`, `PricingError`, `DateError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! The foundation layer has no dependencies on other engine_* crates, with
//! minimal external dependencies:
//! - chrono: Date arithmetic
//! - thiserror: Error derive
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use engine_core::market_data::{MarketDataRow, OptionType};
//! use engine_core::types::{Date, DayCountConvention};
//!
//! // Date operations
//! let as_of = Date::from_yyyymmdd(20220101).unwrap();
//! let expiry = Date::from_yyyymmdd(20230130).unwrap();
//! let year_fraction = DayCountConvention::Act365Fixed.year_fraction(as_of, expiry);
//! assert!(year_fraction > 1.0);
//!
//! // A quoted option on a futures contract
//! let row = MarketDataRow {
//!     date_as_of: 20220101,
//!     future_expiry_date: 20230130,
//!     option_type: OptionType::Call,
//!     strike_price: 50.0,
//!     current_price: 40.0,
//!     implied_vol: 0.15,
//! };
//! assert!(row.validate().is_ok());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for the market-data model

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod market_data;
pub mod traits;
pub mod types;

pub use market_data::{MarketDataRow, MarketDataSnapshot, OptionType, PricedRow};
pub use traits::PricingModel;
pub use types::{Date, DayCountConvention, DomainError, PricingError, ValidationError};
