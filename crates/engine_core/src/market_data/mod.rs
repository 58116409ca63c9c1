//! Market-data model for the pricing engine.
//!
//! This module provides the input/output data types:
//! - `MarketDataRow`: one quoted option on a futures contract (`row`)
//! - `OptionType`: call/put enumeration (`row`)
//! - `MarketDataSnapshot`: ordered sequence of rows (`snapshot`)
//! - `PricedRow`: a row augmented with its theoretical price (`snapshot`)

pub mod row;
pub mod snapshot;

pub use row::{MarketDataRow, OptionType};
pub use snapshot::{MarketDataSnapshot, PricedRow};
