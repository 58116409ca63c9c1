//! A single quoted option on a futures contract.

use std::fmt;
use std::str::FromStr;

use crate::types::error::ValidationError;
use crate::types::time::Date;

/// Option style: call or put.
///
/// The set is closed; the batch engine and models dispatch on it
/// exhaustively, so an unrecognised option type cannot reach the formula.
///
/// # Examples
/// ```
/// use engine_core::market_data::OptionType;
///
/// assert_eq!("Call".parse::<OptionType>().unwrap(), OptionType::Call);
/// assert_eq!("put".parse::<OptionType>().unwrap(), OptionType::Put);
/// assert_eq!(OptionType::Call.name(), "Call");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionType {
    /// Right to buy the underlying futures contract.
    Call,
    /// Right to sell the underlying futures contract.
    Put,
}

impl OptionType {
    /// Returns the canonical name ("Call" or "Put").
    pub fn name(&self) -> &'static str {
        match self {
            OptionType::Call => "Call",
            OptionType::Put => "Put",
        }
    }

    /// Returns true for calls.
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for OptionType {
    type Err = String;

    /// Parses an option type from string (case-insensitive).
    ///
    /// Accepts "Call"/"Put" and the single-letter shorthands "C"/"P".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "CALL" | "C" => Ok(OptionType::Call),
            "PUT" | "P" => Ok(OptionType::Put),
            _ => Err(format!("Unknown option type: {}", s)),
        }
    }
}

/// One quoted option on a futures contract at a point in time.
///
/// Dates are carried in the 8-digit integer encoding YYYYMMDD used by the
/// upstream storage layer; models decode them via [`Date::from_yyyymmdd`].
///
/// # Invariants
/// - `strike_price > 0`
/// - `current_price > 0` (the futures price)
/// - `implied_vol >= 0` (annualised)
/// - both date fields decode to valid calendar dates
///
/// [`validate`](MarketDataRow::validate) checks these; pricing models also
/// enforce them independently rather than assuming upstream validation ran.
///
/// # Examples
/// ```
/// use engine_core::market_data::{MarketDataRow, OptionType};
///
/// let row = MarketDataRow {
///     date_as_of: 20220101,
///     future_expiry_date: 20230130,
///     option_type: OptionType::Put,
///     strike_price: 50.0,
///     current_price: 40.0,
///     implied_vol: 0.15,
/// };
/// assert!(row.validate().is_ok());
///
/// let bad = MarketDataRow { strike_price: -1.0, ..row };
/// assert!(bad.validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "PascalCase"))]
pub struct MarketDataRow {
    /// Quote date, encoded as YYYYMMDD.
    pub date_as_of: u32,
    /// Physical expiry date of the underlying futures contract, encoded as YYYYMMDD.
    pub future_expiry_date: u32,
    /// Call or put.
    pub option_type: OptionType,
    /// Strike price (positive).
    pub strike_price: f64,
    /// Current futures price (positive).
    pub current_price: f64,
    /// Annualised implied volatility (non-negative).
    pub implied_vol: f64,
}

impl MarketDataRow {
    /// Checks the row invariants.
    ///
    /// # Errors
    /// - `ValidationError::NonPositiveStrike` if the strike is not positive and finite
    /// - `ValidationError::NonPositiveFuturesPrice` if the futures price is not positive and finite
    /// - `ValidationError::InvalidVolatility` if the volatility is negative or non-finite
    /// - `ValidationError::Date` if either date field does not decode
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.strike_price.is_finite() || self.strike_price <= 0.0 {
            return Err(ValidationError::NonPositiveStrike {
                strike: self.strike_price,
            });
        }
        if !self.current_price.is_finite() || self.current_price <= 0.0 {
            return Err(ValidationError::NonPositiveFuturesPrice {
                price: self.current_price,
            });
        }
        if !self.implied_vol.is_finite() || self.implied_vol < 0.0 {
            return Err(ValidationError::InvalidVolatility {
                volatility: self.implied_vol,
            });
        }
        Date::from_yyyymmdd(self.date_as_of)?;
        Date::from_yyyymmdd(self.future_expiry_date)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> MarketDataRow {
        MarketDataRow {
            date_as_of: 20220101,
            future_expiry_date: 20230130,
            option_type: OptionType::Call,
            strike_price: 50.0,
            current_price: 40.0,
            implied_vol: 0.15,
        }
    }

    #[test]
    fn test_option_type_name_and_display() {
        assert_eq!(OptionType::Call.name(), "Call");
        assert_eq!(format!("{}", OptionType::Put), "Put");
        assert!(OptionType::Call.is_call());
        assert!(!OptionType::Put.is_call());
    }

    #[test]
    fn test_option_type_from_str() {
        assert_eq!("Call".parse::<OptionType>().unwrap(), OptionType::Call);
        assert_eq!("PUT".parse::<OptionType>().unwrap(), OptionType::Put);
        assert_eq!("c".parse::<OptionType>().unwrap(), OptionType::Call);
        assert_eq!("p".parse::<OptionType>().unwrap(), OptionType::Put);
        assert!("straddle".parse::<OptionType>().is_err());
    }

    #[test]
    fn test_validate_accepts_well_formed_row() {
        assert!(sample_row().validate().is_ok());
    }

    #[test]
    fn test_validate_accepts_zero_volatility() {
        // The row invariant is implied_vol >= 0; the model layer is
        // responsible for rejecting sigma == 0 as a domain failure.
        let row = MarketDataRow {
            implied_vol: 0.0,
            ..sample_row()
        };
        assert!(row.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_positive_strike() {
        for strike in [0.0, -50.0, f64::NAN, f64::INFINITY] {
            let row = MarketDataRow {
                strike_price: strike,
                ..sample_row()
            };
            assert!(
                matches!(
                    row.validate(),
                    Err(ValidationError::NonPositiveStrike { .. })
                ),
                "strike {} should be rejected",
                strike
            );
        }
    }

    #[test]
    fn test_validate_rejects_non_positive_futures_price() {
        let row = MarketDataRow {
            current_price: 0.0,
            ..sample_row()
        };
        assert!(matches!(
            row.validate(),
            Err(ValidationError::NonPositiveFuturesPrice { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_negative_volatility() {
        let row = MarketDataRow {
            implied_vol: -0.1,
            ..sample_row()
        };
        assert!(matches!(
            row.validate(),
            Err(ValidationError::InvalidVolatility { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_undecodable_dates() {
        let row = MarketDataRow {
            date_as_of: 20230230,
            ..sample_row()
        };
        assert!(matches!(row.validate(), Err(ValidationError::Date(_))));

        let row = MarketDataRow {
            future_expiry_date: 123,
            ..sample_row()
        };
        assert!(matches!(row.validate(), Err(ValidationError::Date(_))));
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn test_row_serialises_with_original_column_names() {
            let json = serde_json::to_value(sample_row()).unwrap();
            assert_eq!(json["DateAsOf"], 20220101);
            assert_eq!(json["FutureExpiryDate"], 20230130);
            assert_eq!(json["OptionType"], "Call");
            assert_eq!(json["StrikePrice"], 50.0);
            assert_eq!(json["CurrentPrice"], 40.0);
            assert_eq!(json["ImpliedVol"], 0.15);
        }

        #[test]
        fn test_row_serde_roundtrip() {
            let row = sample_row();
            let json = serde_json::to_string(&row).unwrap();
            let parsed: MarketDataRow = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, row);
        }
    }
}
