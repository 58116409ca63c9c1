//! Batch evaluation over market-data snapshots.

use engine_core::market_data::{MarketDataRow, MarketDataSnapshot, PricedRow};
use engine_core::traits::PricingModel;
use rayon::prelude::*;
use tracing::debug;

use crate::error::{BatchError, PartialBatch, RowFailure};

/// Prices whole snapshots against one model.
///
/// The engine owns its model and applies it row by row. Output always lines
/// up positionally with the input: the i-th priced row corresponds to the
/// i-th snapshot row, and no mode reorders, drops, or duplicates rows.
///
/// Three evaluation modes are offered:
/// - [`price`](Self::price): fail-fast, the default. Stops at the first
///   failing row and reports its index.
/// - [`price_partial`](Self::price_partial): prices every row, collecting
///   failures alongside successes.
/// - [`price_iter`](Self::price_iter): lazy row-at-a-time evaluation for
///   callers that stream results without materialising the whole batch.
///
/// [`price_parallel`](Self::price_parallel) is the fail-fast mode fanned out
/// across a thread pool; it returns bit-identical results in the same order.
///
/// # Examples
/// ```
/// use engine_batch::BatchPricingEngine;
/// use engine_core::market_data::{MarketDataRow, MarketDataSnapshot, OptionType};
/// use engine_models::Black76;
///
/// let engine = BatchPricingEngine::new(Black76::default());
/// let snapshot = MarketDataSnapshot::from_rows(vec![MarketDataRow {
///     date_as_of: 20220101,
///     future_expiry_date: 20230130,
///     option_type: OptionType::Put,
///     strike_price: 50.0,
///     current_price: 40.0,
///     implied_vol: 0.15,
/// }]);
///
/// let priced = engine.price(&snapshot).unwrap();
/// assert_eq!(priced.len(), 1);
/// assert!((priced[0].option_price() - 9.6608910247).abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct BatchPricingEngine<M> {
    model: M,
}

impl<M: PricingModel> BatchPricingEngine<M> {
    /// Creates an engine around the given model.
    pub fn new(model: M) -> Self {
        Self { model }
    }

    /// The model this engine evaluates with.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Prices every row, stopping at the first failure.
    ///
    /// On success the output has exactly one priced row per input row, in
    /// input order.
    ///
    /// # Errors
    /// [`BatchError`] carrying the zero-based index of the first row that
    /// failed and the underlying [`PricingError`](engine_core::types::PricingError).
    pub fn price(&self, snapshot: &MarketDataSnapshot) -> Result<Vec<PricedRow>, BatchError> {
        debug!(
            model = self.model.model_name(),
            rows = snapshot.len(),
            "pricing batch"
        );
        let mut priced = Vec::with_capacity(snapshot.len());
        for (index, row) in snapshot.iter().enumerate() {
            let result = self
                .model
                .price_row(row)
                .map_err(|source| BatchError { index, source })?;
            priced.push(result);
        }
        Ok(priced)
    }

    /// Prices every row, recording failures instead of aborting.
    ///
    /// Both the priced rows and the failures come back in input order; a
    /// row appears in exactly one of the two lists.
    pub fn price_partial(&self, snapshot: &MarketDataSnapshot) -> PartialBatch {
        debug!(
            model = self.model.model_name(),
            rows = snapshot.len(),
            "pricing batch (partial mode)"
        );
        let mut priced = Vec::with_capacity(snapshot.len());
        let mut failures = Vec::new();
        for (index, row) in snapshot.iter().enumerate() {
            match self.model.price_row(row) {
                Ok(result) => priced.push(result),
                Err(error) => failures.push(RowFailure { index, error }),
            }
        }
        PartialBatch::new(priced, failures)
    }

    /// Lazily prices rows one at a time, in input order.
    ///
    /// The iterator is fused on failure: after yielding the first
    /// `Err(BatchError)` it yields nothing further, matching the fail-fast
    /// contract of [`price`](Self::price). Iterating again from a fresh call
    /// restarts from the first row.
    pub fn price_iter<'a>(
        &'a self,
        snapshot: &'a MarketDataSnapshot,
    ) -> PriceIter<'a, M> {
        PriceIter {
            model: &self.model,
            rows: snapshot.rows().iter().enumerate(),
            failed: false,
        }
    }
}

impl<M: PricingModel + Sync> BatchPricingEngine<M> {
    /// Fail-fast pricing fanned out across the rayon thread pool.
    ///
    /// Results are reassembled into input order, and the reported failure is
    /// the lowest-index failing row, so output and errors are
    /// indistinguishable from [`price`](Self::price).
    ///
    /// # Errors
    /// [`BatchError`] for the lowest-index row that failed.
    pub fn price_parallel(
        &self,
        snapshot: &MarketDataSnapshot,
    ) -> Result<Vec<PricedRow>, BatchError> {
        debug!(
            model = self.model.model_name(),
            rows = snapshot.len(),
            "pricing batch (parallel)"
        );
        let results: Vec<Result<PricedRow, BatchError>> = snapshot
            .rows()
            .par_iter()
            .enumerate()
            .map(|(index, row)| {
                self.model
                    .price_row(row)
                    .map_err(|source| BatchError { index, source })
            })
            .collect();
        results.into_iter().collect()
    }
}

/// Lazy pricing iterator returned by [`BatchPricingEngine::price_iter`].
pub struct PriceIter<'a, M> {
    model: &'a M,
    rows: std::iter::Enumerate<std::slice::Iter<'a, MarketDataRow>>,
    failed: bool,
}

impl<M: PricingModel> Iterator for PriceIter<'_, M> {
    type Item = Result<PricedRow, BatchError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let (index, row) = self.rows.next()?;
        match self.model.price_row(row) {
            Ok(priced) => Some(Ok(priced)),
            Err(source) => {
                self.failed = true;
                Some(Err(BatchError { index, source }))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            (0, Some(0))
        } else {
            (0, self.rows.size_hint().1)
        }
    }
}

impl<M: PricingModel> std::iter::FusedIterator for PriceIter<'_, M> {}
