//! # engine_batch: Batch Pricing Engine
//!
//! ## Batch Layer Role
//!
//! engine_batch drives a [`PricingModel`](engine_core::traits::PricingModel)
//! over whole [`MarketDataSnapshot`](engine_core::market_data::MarketDataSnapshot)s:
//! - Fail-fast evaluation with row-indexed errors (`BatchPricingEngine::price`)
//! - Partial-success evaluation (`BatchPricingEngine::price_partial`)
//! - Lazy streaming evaluation (`BatchPricingEngine::price_iter`)
//! - Parallel fail-fast evaluation over rayon (`BatchPricingEngine::price_parallel`)
//!
//! ## Ordering Guarantee
//!
//! Every mode preserves input order and cardinality: the i-th output row (or
//! recorded failure) always refers to the i-th snapshot row, parallel
//! evaluation included.
//!
//! ## Example
//!
//! ```
//! use engine_batch::BatchPricingEngine;
//! use engine_core::market_data::{MarketDataRow, MarketDataSnapshot, OptionType};
//! use engine_models::Black76;
//!
//! let row = MarketDataRow {
//!     date_as_of: 20220101,
//!     future_expiry_date: 20230130,
//!     option_type: OptionType::Call,
//!     strike_price: 50.0,
//!     current_price: 40.0,
//!     implied_vol: 0.15,
//! };
//! let snapshot = MarketDataSnapshot::from_rows(vec![row; 3]);
//!
//! let engine = BatchPricingEngine::new(Black76::default());
//! let priced = engine.price(&snapshot).unwrap();
//! assert_eq!(priced.len(), 3);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod engine;
pub mod error;

pub use engine::{BatchPricingEngine, PriceIter};
pub use error::{BatchError, PartialBatch, RowFailure};
