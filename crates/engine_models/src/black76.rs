//! Black-76 model for European options on futures.
//!
//! The Black-76 formula prices European calls and puts whose underlying is a
//! futures price rather than a spot price:
//!
//! ```text
//! d1 = (ln(F/K) + (r + sigma^2 / 2) * T) / (sigma * sqrt(T))
//! d2 = d1 - sigma * sqrt(T)
//!
//! call = e^(-rT) * (F * Phi(d1) - K * Phi(d2))
//! put  = e^(-rT) * (K * Phi(-d2) - F * Phi(-d1))
//! ```
//!
//! Time to maturity `T` is measured from the valuation date to the option
//! settlement date, which by market convention here falls a fixed number of
//! calendar months before the futures expiry (two by default, with the day of
//! month clamped when the target month is shorter).

use engine_core::market_data::{MarketDataRow, OptionType};
use engine_core::traits::PricingModel;
use engine_core::types::{
    Date, DateError, DayCountConvention, DomainError, PricingError, ValidationError,
};

use crate::distributions::norm_cdf;

/// Annualised continuously-compounded risk-free rate used when none is given.
pub const DEFAULT_RISK_FREE_RATE: f64 = 0.05;

/// Calendar months between option settlement and futures expiry.
pub const DEFAULT_SETTLEMENT_OFFSET_MONTHS: u32 = 2;

/// Black-76 pricing model for European options on futures.
///
/// Configuration is explicit and immutable after construction: the risk-free
/// rate, the settlement offset relative to the futures expiry, and the day
/// count convention used to turn the date span into a year fraction.
///
/// # Examples
/// ```
/// use engine_models::Black76;
///
/// let model = Black76::default();
/// assert_eq!(model.rate(), 0.05);
///
/// let price = model
///     .price(40.0, 50.0, 0.15, 333.0 / 365.0, engine_core::market_data::OptionType::Call)
///     .unwrap();
/// assert!((price - 0.1068075255).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Black76 {
    rate: f64,
    settlement_offset_months: u32,
    day_count: DayCountConvention,
}

impl Default for Black76 {
    fn default() -> Self {
        Self {
            rate: DEFAULT_RISK_FREE_RATE,
            settlement_offset_months: DEFAULT_SETTLEMENT_OFFSET_MONTHS,
            day_count: DayCountConvention::Act365Fixed,
        }
    }
}

impl Black76 {
    /// Creates a model with the given risk-free rate and default conventions.
    pub fn new(rate: f64) -> Self {
        Self {
            rate,
            ..Self::default()
        }
    }

    /// Overrides the settlement offset (calendar months before futures expiry).
    pub fn with_settlement_offset_months(mut self, months: u32) -> Self {
        self.settlement_offset_months = months;
        self
    }

    /// Overrides the day count convention.
    pub fn with_day_count(mut self, day_count: DayCountConvention) -> Self {
        self.day_count = day_count;
        self
    }

    /// The risk-free rate `r`.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Calendar months subtracted from the futures expiry to reach settlement.
    pub fn settlement_offset_months(&self) -> u32 {
        self.settlement_offset_months
    }

    /// The day count convention used for year fractions.
    pub fn day_count(&self) -> DayCountConvention {
        self.day_count
    }

    /// Settlement date implied by a futures expiry, or `None` on calendar
    /// underflow.
    ///
    /// The day of month is clamped when the target month is shorter, so an
    /// expiry of 2023-03-31 settles on 2023-01-31 and 2022-04-30 settles on
    /// 2022-02-28.
    pub fn settlement_date(&self, expiry: Date) -> Option<Date> {
        expiry.checked_sub_months(self.settlement_offset_months)
    }

    fn d1_d2(forward: f64, strike: f64, volatility: f64, maturity: f64, rate: f64) -> (f64, f64) {
        let vol_sqrt_t = volatility * maturity.sqrt();
        let d1 = ((forward / strike).ln() + (rate + 0.5 * volatility * volatility) * maturity)
            / vol_sqrt_t;
        (d1, d1 - vol_sqrt_t)
    }

    /// Undiscounted-input Black-76 call price. Inputs must already be valid.
    fn call_price(forward: f64, strike: f64, volatility: f64, maturity: f64, rate: f64) -> f64 {
        let (d1, d2) = Self::d1_d2(forward, strike, volatility, maturity, rate);
        (-rate * maturity).exp() * (forward * norm_cdf(d1) - strike * norm_cdf(d2))
    }

    /// Undiscounted-input Black-76 put price. Inputs must already be valid.
    fn put_price(forward: f64, strike: f64, volatility: f64, maturity: f64, rate: f64) -> f64 {
        let (d1, d2) = Self::d1_d2(forward, strike, volatility, maturity, rate);
        (-rate * maturity).exp() * (strike * norm_cdf(-d2) - forward * norm_cdf(-d1))
    }

    /// Prices a European option on a future from already-resolved inputs.
    ///
    /// `maturity` is the year fraction from valuation to settlement.
    ///
    /// # Errors
    /// - [`ValidationError::NonPositiveFuturesPrice`] if `forward` is not a
    ///   finite positive number
    /// - [`ValidationError::NonPositiveStrike`] if `strike` is not a finite
    ///   positive number
    /// - [`ValidationError::InvalidVolatility`] if `volatility` is not finite
    /// - [`DomainError::NonPositiveVolatility`] if `volatility <= 0`
    /// - [`DomainError::NonPositiveMaturity`] if `maturity <= 0` (the option
    ///   settles on or before the valuation date) or is not finite
    pub fn price(
        &self,
        forward: f64,
        strike: f64,
        volatility: f64,
        maturity: f64,
        option_type: OptionType,
    ) -> Result<f64, PricingError> {
        if !forward.is_finite() || forward <= 0.0 {
            return Err(ValidationError::NonPositiveFuturesPrice { price: forward }.into());
        }
        if !strike.is_finite() || strike <= 0.0 {
            return Err(ValidationError::NonPositiveStrike { strike }.into());
        }
        if !volatility.is_finite() {
            return Err(ValidationError::InvalidVolatility { volatility }.into());
        }
        if volatility <= 0.0 {
            return Err(DomainError::NonPositiveVolatility { volatility }.into());
        }
        // `!(maturity > 0.0)` also catches NaN.
        if !maturity.is_finite() || !(maturity > 0.0) {
            return Err(DomainError::NonPositiveMaturity {
                year_fraction: maturity,
            }
            .into());
        }

        let price = match option_type {
            OptionType::Call => Self::call_price(forward, strike, volatility, maturity, self.rate),
            OptionType::Put => Self::put_price(forward, strike, volatility, maturity, self.rate),
        };
        Ok(price)
    }

    /// Resolves the year fraction from a row's integer-encoded dates.
    fn maturity_for(&self, row: &MarketDataRow) -> Result<f64, PricingError> {
        let as_of = Date::from_yyyymmdd(row.date_as_of).map_err(ValidationError::from)?;
        let expiry = Date::from_yyyymmdd(row.future_expiry_date).map_err(ValidationError::from)?;
        let settlement = self
            .settlement_date(expiry)
            .ok_or(ValidationError::Date(DateError::OutOfRange))?;
        Ok(self.day_count.year_fraction(as_of, settlement))
    }
}

impl PricingModel for Black76 {
    fn model_name(&self) -> &'static str {
        "Black76"
    }

    fn price_one(&self, row: &MarketDataRow) -> Result<f64, PricingError> {
        let maturity = self.maturity_for(row)?;
        self.price(
            row.current_price,
            row.strike_price,
            row.implied_vol,
            maturity,
            row.option_type,
        )
    }
}
