//! The `PricingModel` capability contract.
//!
//! A pricing model turns a single market-data row into a theoretical option
//! price. The batch engine is written against this trait only, so additional
//! models (Bachelier, binomial trees, ...) can be added without touching it.

use crate::market_data::{MarketDataRow, PricedRow};
use crate::types::error::PricingError;

/// Contract for computing a theoretical option price from one row.
///
/// # Contract
/// - `price_one` is a pure function of its single input row: no I/O, no
///   side effects, and bit-identical results for identical inputs.
/// - It fails deterministically with a typed [`PricingError`] when the
///   formula is mathematically undefined for the row; it never returns
///   NaN or infinity as if it were a valid price.
/// - Model constants (risk-free rate, settlement conventions, ...) are
///   explicit configuration supplied at construction, never hidden globals,
///   keeping implementations reentrant and testable with different
///   parameters.
///
/// # Examples
/// ```
/// use engine_core::market_data::{MarketDataRow, OptionType};
/// use engine_core::traits::PricingModel;
/// use engine_core::types::PricingError;
///
/// /// A toy model that prices every option at its intrinsic value.
/// struct Intrinsic;
///
/// impl PricingModel for Intrinsic {
///     fn model_name(&self) -> &'static str {
///         "Intrinsic"
///     }
///
///     fn price_one(&self, row: &MarketDataRow) -> Result<f64, PricingError> {
///         let sign = if row.option_type.is_call() { 1.0 } else { -1.0 };
///         Ok((sign * (row.current_price - row.strike_price)).max(0.0))
///     }
/// }
///
/// let row = MarketDataRow {
///     date_as_of: 20220101,
///     future_expiry_date: 20230130,
///     option_type: OptionType::Put,
///     strike_price: 50.0,
///     current_price: 40.0,
///     implied_vol: 0.15,
/// };
/// assert_eq!(Intrinsic.price_one(&row).unwrap(), 10.0);
/// assert_eq!(Intrinsic.price_row(&row).unwrap().option_price(), 10.0);
/// ```
pub trait PricingModel {
    /// Returns the model's display name (e.g. "Black76").
    fn model_name(&self) -> &'static str;

    /// Computes the theoretical price for a single row.
    ///
    /// # Errors
    /// - `PricingError::Validation` if the row is malformed or out of range
    /// - `PricingError::Domain` if the formula is undefined for the row
    fn price_one(&self, row: &MarketDataRow) -> Result<f64, PricingError>;

    /// Prices a row and pairs the result with the input.
    ///
    /// Provided in terms of [`price_one`](PricingModel::price_one); the
    /// returned [`PricedRow`] carries a copy of the input row so the batch
    /// output re-associates with the snapshot by position alone.
    fn price_row(&self, row: &MarketDataRow) -> Result<PricedRow, PricingError> {
        Ok(PricedRow::new(*row, self.price_one(row)?))
    }
}
