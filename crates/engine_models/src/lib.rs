//! # engine_models: Pricing Models
//!
//! ## Model Layer Role
//!
//! engine_models sits on top of `engine_core` and provides:
//! - Standard normal distribution helpers (`distributions`)
//! - The Black-76 model for European options on futures (`black76`)
//! - Static-dispatch model selection (`model`)
//!
//! ## Design Principles
//!
//! - **Explicit configuration**: model constants (risk-free rate, settlement
//!   offset, day count) are constructor parameters, never process globals
//! - **Static dispatch**: model variants are selected through the [`Model`]
//!   enum, so the batch engine never needs trait objects
//! - **Loud failure**: mathematically undefined inputs are rejected with
//!   typed errors instead of silently producing NaN
//!
//! ## Example
//!
//! ```
//! use engine_core::market_data::{MarketDataRow, OptionType};
//! use engine_core::traits::PricingModel;
//! use engine_models::Black76;
//!
//! let model = Black76::default(); // r = 5%, 2-month settlement offset, ACT/365
//! let row = MarketDataRow {
//!     date_as_of: 20220101,
//!     future_expiry_date: 20230130,
//!     option_type: OptionType::Call,
//!     strike_price: 50.0,
//!     current_price: 40.0,
//!     implied_vol: 0.15,
//! };
//!
//! let price = model.price_one(&row).unwrap();
//! assert!((price - 0.1068075255).abs() < 1e-6);
//! ```

pub mod black76;
pub mod distributions;
pub mod model;

pub use black76::{Black76, DEFAULT_RISK_FREE_RATE, DEFAULT_SETTLEMENT_OFFSET_MONTHS};
pub use distributions::{norm_cdf, norm_pdf};
pub use model::{Model, ModelKind, UnknownModelError};
