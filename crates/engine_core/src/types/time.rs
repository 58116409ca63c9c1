//! Time types and day count conventions for pricing calculations.
//!
//! This module provides:
//! - `Date`: Type-safe date wrapper around chrono::NaiveDate, with decoding
//!   from the 8-digit YYYYMMDD integer encoding used by market-data rows
//! - `DayCountConvention`: Year fraction conventions (ACT/365, ACT/360)
//!
//! # Examples
//!
//! ```
//! use engine_core::types::time::{Date, DayCountConvention};
//!
//! let as_of = Date::from_yyyymmdd(20220101).unwrap();
//! let settlement = Date::from_yyyymmdd(20221130).unwrap();
//!
//! // Signed year fraction using ACT/365
//! let yf = DayCountConvention::Act365Fixed.year_fraction(as_of, settlement);
//! assert!((yf - 333.0 / 365.0).abs() < 1e-12);
//! ```

use chrono::{Datelike, Months, NaiveDate};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Smallest year representable in the 8-digit YYYYMMDD encoding.
const MIN_YEAR: i32 = 1000;
/// Largest year representable in the 8-digit YYYYMMDD encoding.
const MAX_YEAR: i32 = 9999;

/// Type-safe date wrapper around chrono::NaiveDate.
///
/// Market-data rows carry calendar dates as 8-digit integers (YYYYMMDD);
/// this wrapper owns the decoding and the calendar arithmetic the pricing
/// models need, so the rest of the engine never touches raw integers.
///
/// Every constructor bounds the year to 1000-9999, so any `Date` value
/// re-encodes losslessly through [`to_yyyymmdd`](Date::to_yyyymmdd).
///
/// # Examples
///
/// ```
/// use engine_core::types::time::Date;
///
/// // Decode from the row encoding
/// let date = Date::from_yyyymmdd(20230130).unwrap();
/// assert_eq!(date.year(), 2023);
/// assert_eq!(date.month(), 1);
/// assert_eq!(date.day(), 30);
/// assert_eq!(date.to_yyyymmdd(), 20230130);
///
/// // Clamped calendar-month subtraction
/// let settlement = date.checked_sub_months(2).unwrap();
/// assert_eq!(settlement.to_yyyymmdd(), 20221130);
///
/// // Days between dates
/// let start = Date::from_ymd(2022, 1, 1).unwrap();
/// assert_eq!(settlement - start, 333);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// Years are restricted to 1000-9999 so every constructible `Date`
    /// encodes losslessly via [`to_yyyymmdd`](Date::to_yyyymmdd).
    ///
    /// # Errors
    /// - `DateError::OutOfRange` if the year falls outside 1000-9999
    /// - `DateError::InvalidDate` if the components do not form a real
    ///   calendar date
    ///
    /// # Examples
    ///
    /// ```
    /// use engine_core::types::time::Date;
    ///
    /// let date = Date::from_ymd(2024, 2, 29).unwrap();
    ///
    /// // Non-leap year February 29th is rejected
    /// assert!(Date::from_ymd(2023, 2, 29).is_err());
    ///
    /// // As is a year the YYYYMMDD encoding cannot carry
    /// assert!(Date::from_ymd(999, 1, 1).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(DateError::OutOfRange);
        }
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Decodes a date from the 8-digit integer encoding YYYYMMDD.
    ///
    /// # Errors
    /// - `DateError::InvalidEncoding` if the value is outside the 8-digit range
    /// - `DateError::InvalidDate` if the decoded components are not a real date
    ///
    /// # Examples
    ///
    /// ```
    /// use engine_core::types::time::Date;
    ///
    /// let date = Date::from_yyyymmdd(20220101).unwrap();
    /// assert_eq!(date.year(), 2022);
    ///
    /// assert!(Date::from_yyyymmdd(20230230).is_err()); // February 30th
    /// assert!(Date::from_yyyymmdd(123).is_err()); // not 8 digits
    /// ```
    pub fn from_yyyymmdd(value: u32) -> Result<Self, DateError> {
        if !(10_00_01_01..=99_99_12_31).contains(&value) {
            return Err(DateError::InvalidEncoding { value });
        }
        let year = (value / 10_000) as i32;
        let month = value / 100 % 100;
        let day = value % 100;
        Self::from_ymd(year, month, day)
    }

    /// Encodes the date back to the 8-digit integer form YYYYMMDD.
    pub fn to_yyyymmdd(self) -> u32 {
        self.0.year() as u32 * 10_000 + self.0.month() * 100 + self.0.day()
    }

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    ///
    /// # Errors
    /// - `DateError::ParseError` if the string is not a valid ISO date
    /// - `DateError::OutOfRange` if the year falls outside 1000-9999
    pub fn parse(s: &str) -> Result<Self, DateError> {
        let parsed = NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|e| DateError::ParseError(e.to_string()))?;
        Self::from_ymd(parsed.year(), parsed.month(), parsed.day())
    }

    /// Subtracts a number of calendar months, clamping the day to the last
    /// valid day of the target month.
    ///
    /// The clamping matches standard calendar-offset semantics: moving two
    /// months back from January 30th lands on November 30th, and from
    /// April 30th lands on the last day of February.
    ///
    /// Returns `None` if the result would fall before the supported year
    /// range.
    ///
    /// # Examples
    ///
    /// ```
    /// use engine_core::types::time::Date;
    ///
    /// let expiry = Date::from_ymd(2023, 3, 31).unwrap();
    /// let settlement = expiry.checked_sub_months(2).unwrap();
    /// assert_eq!(settlement.to_yyyymmdd(), 20230131);
    /// ```
    pub fn checked_sub_months(self, months: u32) -> Option<Self> {
        self.0
            .checked_sub_months(Months::new(months))
            .filter(|d| d.year() >= MIN_YEAR)
            .map(Date)
    }

    /// Returns the underlying NaiveDate.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl Sub for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    ///
    /// The result is positive if `self` is after `other`, negative otherwise.
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    /// Formats the date as ISO 8601 (YYYY-MM-DD).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Day count convention (year fraction convention).
///
/// # Variants
/// - `Act365Fixed`: Actual days / 365 (standard for derivatives; the
///   engine default)
/// - `Act360`: Actual days / 360 (common in money market instruments)
///
/// # Examples
///
/// ```
/// use engine_core::types::time::{Date, DayCountConvention};
///
/// let start = Date::from_ymd(2022, 1, 1).unwrap();
/// let end = Date::from_ymd(2022, 11, 30).unwrap();
///
/// let yf = DayCountConvention::Act365Fixed.year_fraction(start, end);
/// assert!((yf - 333.0 / 365.0).abs() < 1e-12);
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DayCountConvention {
    /// Actual/365 Fixed: actual_days / 365.0
    #[default]
    Act365Fixed,

    /// Actual/360: actual_days / 360.0
    Act360,
}

impl DayCountConvention {
    /// Returns the standard convention name.
    ///
    /// # Examples
    ///
    /// ```
    /// use engine_core::types::time::DayCountConvention;
    ///
    /// assert_eq!(DayCountConvention::Act365Fixed.name(), "ACT/365");
    /// assert_eq!(DayCountConvention::Act360.name(), "ACT/360");
    /// ```
    pub fn name(&self) -> &'static str {
        match self {
            DayCountConvention::Act365Fixed => "ACT/365",
            DayCountConvention::Act360 => "ACT/360",
        }
    }

    /// Calculates the signed year fraction between two dates.
    ///
    /// Returns a negative value when `start > end` instead of panicking;
    /// pricing models rely on the sign to reject non-positive maturities
    /// explicitly.
    ///
    /// # Examples
    ///
    /// ```
    /// use engine_core::types::time::{Date, DayCountConvention};
    ///
    /// let start = Date::from_ymd(2022, 1, 1).unwrap();
    /// let end = Date::from_ymd(2022, 7, 1).unwrap();
    ///
    /// let yf = DayCountConvention::Act365Fixed.year_fraction(start, end);
    /// assert!((yf - 181.0 / 365.0).abs() < 1e-12);
    ///
    /// // Reversed dates yield a negative fraction
    /// let yf_neg = DayCountConvention::Act365Fixed.year_fraction(end, start);
    /// assert!(yf_neg < 0.0);
    /// ```
    pub fn year_fraction(&self, start: Date, end: Date) -> f64 {
        let days = end - start;
        match self {
            DayCountConvention::Act365Fixed => days as f64 / 365.0,
            DayCountConvention::Act360 => days as f64 / 360.0,
        }
    }
}

impl FromStr for DayCountConvention {
    type Err = String;

    /// Parses a day count convention from string (case-insensitive).
    ///
    /// Supports aliases: "ACT/365", "Actual/365", "A365" and
    /// "ACT/360", "Actual/360", "A360".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().replace(['/', ' '], "").as_str() {
            "ACT365" | "ACTUAL365" | "A365" => Ok(DayCountConvention::Act365Fixed),
            "ACT360" | "ACTUAL360" | "A360" => Ok(DayCountConvention::Act360),
            _ => Err(format!("Unknown day count convention: {}", s)),
        }
    }
}

impl fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_yyyymmdd_valid() {
        let date = Date::from_yyyymmdd(20220101).unwrap();
        assert_eq!(date.year(), 2022);
        assert_eq!(date.month(), 1);
        assert_eq!(date.day(), 1);
    }

    #[test]
    fn test_from_yyyymmdd_leap_year() {
        let date = Date::from_yyyymmdd(20240229).unwrap();
        assert_eq!(date.month(), 2);
        assert_eq!(date.day(), 29);
    }

    #[test]
    fn test_from_yyyymmdd_invalid_calendar_date() {
        // February 30th decodes into components but is not a real date
        let result = Date::from_yyyymmdd(20230230);
        assert_eq!(
            result,
            Err(DateError::InvalidDate {
                year: 2023,
                month: 2,
                day: 30
            })
        );

        // Month 13
        assert!(Date::from_yyyymmdd(20231301).is_err());

        // Non-leap year February 29th
        assert!(Date::from_yyyymmdd(20230229).is_err());
    }

    #[test]
    fn test_from_yyyymmdd_invalid_encoding() {
        for value in [0, 123, 20220, 999999999] {
            assert_eq!(
                Date::from_yyyymmdd(value),
                Err(DateError::InvalidEncoding { value }),
                "value {} should not decode",
                value
            );
        }
    }

    #[test]
    fn test_yyyymmdd_roundtrip() {
        for value in [20220101, 20230130, 20221130, 20240229, 19991231] {
            let date = Date::from_yyyymmdd(value).unwrap();
            assert_eq!(date.to_yyyymmdd(), value);
        }
    }

    #[test]
    fn test_checked_sub_months_plain() {
        let expiry = Date::from_yyyymmdd(20230130).unwrap();
        let settlement = expiry.checked_sub_months(2).unwrap();
        assert_eq!(settlement.to_yyyymmdd(), 20221130);
    }

    #[test]
    fn test_checked_sub_months_clamps_to_month_end() {
        // March 31st minus 2 months: January has 31 days, no clamping needed
        let expiry = Date::from_yyyymmdd(20230331).unwrap();
        assert_eq!(
            expiry.checked_sub_months(2).unwrap().to_yyyymmdd(),
            20230131
        );

        // April 30th minus 2 months: clamped to February 28th
        let expiry = Date::from_yyyymmdd(20220430).unwrap();
        assert_eq!(
            expiry.checked_sub_months(2).unwrap().to_yyyymmdd(),
            20220228
        );

        // Leap year: April 30th 2024 minus 2 months: February 29th
        let expiry = Date::from_yyyymmdd(20240430).unwrap();
        assert_eq!(
            expiry.checked_sub_months(2).unwrap().to_yyyymmdd(),
            20240229
        );
    }

    #[test]
    fn test_from_ymd_rejects_unencodable_years() {
        for year in [-1, 0, 999, 10_000] {
            assert_eq!(Date::from_ymd(year, 1, 1), Err(DateError::OutOfRange));
        }
        // Boundary years stay valid and roundtrip through the encoding.
        assert_eq!(Date::from_ymd(1000, 1, 1).unwrap().to_yyyymmdd(), 10000101);
        assert_eq!(
            Date::from_ymd(9999, 12, 31).unwrap().to_yyyymmdd(),
            99991231
        );
    }

    #[test]
    fn test_parse_rejects_unencodable_years() {
        assert_eq!(Date::parse("0999-12-31"), Err(DateError::OutOfRange));
    }

    #[test]
    fn test_checked_sub_months_stops_at_supported_range() {
        let date = Date::from_ymd(1000, 1, 15).unwrap();
        assert!(date.checked_sub_months(1).is_none());
        assert!(date.checked_sub_months(0).is_some());
    }

    #[test]
    fn test_checked_sub_months_across_year_boundary() {
        let expiry = Date::from_yyyymmdd(20230130).unwrap();
        let shifted = expiry.checked_sub_months(13).unwrap();
        assert_eq!(shifted.to_yyyymmdd(), 20211230);
    }

    #[test]
    fn test_date_subtraction() {
        let start = Date::from_yyyymmdd(20220101).unwrap();
        let end = Date::from_yyyymmdd(20221130).unwrap();
        assert_eq!(end - start, 333);
        assert_eq!(start - end, -333);
    }

    #[test]
    fn test_date_parse_and_display() {
        let date: Date = "2022-11-30".parse().unwrap();
        assert_eq!(date.to_yyyymmdd(), 20221130);
        assert_eq!(format!("{}", date), "2022-11-30");

        assert!(Date::parse("not-a-date").is_err());
        assert!(Date::parse("2022/11/30").is_err());
    }

    #[test]
    fn test_date_ordering() {
        let earlier = Date::from_yyyymmdd(20220101).unwrap();
        let later = Date::from_yyyymmdd(20230130).unwrap();
        assert!(earlier < later);
    }

    #[test]
    fn test_act_365_known_dates() {
        let start = Date::from_yyyymmdd(20220101).unwrap();
        let end = Date::from_yyyymmdd(20221130).unwrap();
        let yf = DayCountConvention::Act365Fixed.year_fraction(start, end);
        assert_relative_eq!(yf, 333.0 / 365.0, epsilon = 1e-12);
    }

    #[test]
    fn test_act_360_known_dates() {
        let start = Date::from_yyyymmdd(20220101).unwrap();
        let end = Date::from_yyyymmdd(20221130).unwrap();
        let yf = DayCountConvention::Act360.year_fraction(start, end);
        assert_relative_eq!(yf, 333.0 / 360.0, epsilon = 1e-12);
    }

    #[test]
    fn test_year_fraction_same_date_is_zero() {
        let date = Date::from_yyyymmdd(20220615).unwrap();
        assert_eq!(
            DayCountConvention::Act365Fixed.year_fraction(date, date),
            0.0
        );
    }

    #[test]
    fn test_year_fraction_negative_when_reversed() {
        let start = Date::from_yyyymmdd(20221130).unwrap();
        let end = Date::from_yyyymmdd(20220101).unwrap();
        let yf = DayCountConvention::Act365Fixed.year_fraction(start, end);
        assert_relative_eq!(yf, -333.0 / 365.0, epsilon = 1e-12);
    }

    #[test]
    fn test_day_count_default_is_act_365() {
        assert_eq!(DayCountConvention::default(), DayCountConvention::Act365Fixed);
    }

    #[test]
    fn test_day_count_name_and_display() {
        assert_eq!(DayCountConvention::Act365Fixed.name(), "ACT/365");
        assert_eq!(format!("{}", DayCountConvention::Act360), "ACT/360");
    }

    #[test]
    fn test_day_count_from_str() {
        assert_eq!(
            "ACT/365".parse::<DayCountConvention>().unwrap(),
            DayCountConvention::Act365Fixed
        );
        assert_eq!(
            "act/360".parse::<DayCountConvention>().unwrap(),
            DayCountConvention::Act360
        );
        assert!("INVALID".parse::<DayCountConvention>().is_err());
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn date_strategy() -> impl Strategy<Value = Date> {
            (2000i32..2100i32, 1u32..13u32, 1u32..29u32)
                .prop_map(|(y, m, d)| Date::from_ymd(y, m, d).unwrap())
        }

        proptest! {
            #[test]
            fn test_yyyymmdd_roundtrip_property(date in date_strategy()) {
                let decoded = Date::from_yyyymmdd(date.to_yyyymmdd()).unwrap();
                prop_assert_eq!(decoded, date);
            }

            #[test]
            fn test_year_fraction_antisymmetric(
                a in date_strategy(),
                b in date_strategy(),
            ) {
                let dcc = DayCountConvention::Act365Fixed;
                prop_assert!((dcc.year_fraction(a, b) + dcc.year_fraction(b, a)).abs() < 1e-12);
            }

            #[test]
            fn test_sub_months_never_later(date in date_strategy(), months in 0u32..48) {
                let shifted = date.checked_sub_months(months).unwrap();
                prop_assert!(shifted <= date);
            }
        }
    }
}
