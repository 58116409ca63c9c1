//! Ordered snapshots of market-data rows and their priced counterparts.

use super::row::MarketDataRow;

/// An ordered sequence of market-data rows for a single as-of date.
///
/// Row order is significant and preserved through pricing: downstream
/// consumers re-associate prices with rows purely by position. Rows carry no
/// uniqueness constraint at this layer; uniqueness, if any, is enforced by
/// the collaborator that populates the snapshot.
///
/// # Examples
/// ```
/// use engine_core::market_data::{MarketDataRow, MarketDataSnapshot, OptionType};
///
/// let row = MarketDataRow {
///     date_as_of: 20220101,
///     future_expiry_date: 20230130,
///     option_type: OptionType::Call,
///     strike_price: 50.0,
///     current_price: 40.0,
///     implied_vol: 0.15,
/// };
///
/// let mut snapshot = MarketDataSnapshot::new();
/// snapshot.push(row);
/// assert_eq!(snapshot.len(), 1);
/// assert_eq!(snapshot.rows()[0], row);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MarketDataSnapshot {
    rows: Vec<MarketDataRow>,
}

impl MarketDataSnapshot {
    /// Creates an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a snapshot from rows, preserving their order.
    pub fn from_rows(rows: Vec<MarketDataRow>) -> Self {
        Self { rows }
    }

    /// Appends a row at the end of the snapshot.
    pub fn push(&mut self, row: MarketDataRow) {
        self.rows.push(row);
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the snapshot holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the rows as an ordered slice.
    pub fn rows(&self) -> &[MarketDataRow] {
        &self.rows
    }

    /// Iterates the rows in order.
    pub fn iter(&self) -> std::slice::Iter<'_, MarketDataRow> {
        self.rows.iter()
    }
}

impl From<Vec<MarketDataRow>> for MarketDataSnapshot {
    fn from(rows: Vec<MarketDataRow>) -> Self {
        Self::from_rows(rows)
    }
}

impl IntoIterator for MarketDataSnapshot {
    type Item = MarketDataRow;
    type IntoIter = std::vec::IntoIter<MarketDataRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a MarketDataSnapshot {
    type Item = &'a MarketDataRow;
    type IntoIter = std::slice::Iter<'a, MarketDataRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// A market-data row augmented with its computed theoretical price.
///
/// A `PricedRow` is a derived, immutable value: it is created by a pricing
/// model and never mutated afterwards, so the fields are private and exposed
/// through read accessors only. It serialises as the row's fields plus an
/// `OptionPrice` field.
///
/// # Examples
/// ```
/// use engine_core::market_data::{MarketDataRow, OptionType, PricedRow};
///
/// let row = MarketDataRow {
///     date_as_of: 20220101,
///     future_expiry_date: 20230130,
///     option_type: OptionType::Call,
///     strike_price: 50.0,
///     current_price: 40.0,
///     implied_vol: 0.15,
/// };
///
/// let priced = PricedRow::new(row, 0.1068);
/// assert_eq!(priced.row(), &row);
/// assert_eq!(priced.option_price(), 0.1068);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PricedRow {
    #[cfg_attr(feature = "serde", serde(flatten))]
    row: MarketDataRow,
    #[cfg_attr(feature = "serde", serde(rename = "OptionPrice"))]
    option_price: f64,
}

impl PricedRow {
    /// Creates a priced row from an input row and its theoretical price.
    pub fn new(row: MarketDataRow, option_price: f64) -> Self {
        Self { row, option_price }
    }

    /// Returns the underlying market-data row.
    pub fn row(&self) -> &MarketDataRow {
        &self.row
    }

    /// Returns the computed theoretical option price.
    pub fn option_price(&self) -> f64 {
        self.option_price
    }

    /// Decomposes into the row and its price.
    pub fn into_parts(self) -> (MarketDataRow, f64) {
        (self.row, self.option_price)
    }
}
