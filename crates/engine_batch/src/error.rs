//! Batch-level error and partial-result types.

use engine_core::market_data::PricedRow;
use engine_core::types::PricingError;
use thiserror::Error;

/// A pricing failure located within a batch.
///
/// Carries the zero-based index of the offending row so callers can point
/// back at the exact snapshot entry that failed.
#[derive(Debug, Error)]
#[error("row {index} could not be priced: {source}")]
pub struct BatchError {
    /// Zero-based position of the failing row in the snapshot.
    pub index: usize,
    /// The underlying pricing failure.
    #[source]
    pub source: PricingError,
}

/// One failed row recorded by partial-success evaluation.
#[derive(Debug)]
pub struct RowFailure {
    /// Zero-based position of the failing row in the snapshot.
    pub index: usize,
    /// Why the row could not be priced.
    pub error: PricingError,
}

/// Outcome of a partial-success batch run.
///
/// Successfully priced rows appear in `priced` in snapshot order; failed
/// rows are recorded in `failures` (also in snapshot order) instead of
/// aborting the run.
#[derive(Debug, Default)]
pub struct PartialBatch {
    priced: Vec<PricedRow>,
    failures: Vec<RowFailure>,
}

impl PartialBatch {
    pub(crate) fn new(priced: Vec<PricedRow>, failures: Vec<RowFailure>) -> Self {
        Self { priced, failures }
    }

    /// Rows that priced successfully, in snapshot order.
    pub fn priced(&self) -> &[PricedRow] {
        &self.priced
    }

    /// Rows that failed, in snapshot order.
    pub fn failures(&self) -> &[RowFailure] {
        &self.failures
    }

    /// True when every row in the snapshot priced successfully.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Consumes the result into its priced and failed halves.
    pub fn into_parts(self) -> (Vec<PricedRow>, Vec<RowFailure>) {
        (self.priced, self.failures)
    }
}
