//! The `OutputWriter` trait implemented by all backend writers.

use em_sim::AggregateData;

use crate::{EmployerRow, OutputResult, StepSummaryRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// When driven by [`SimOutputObserver`][crate::SimOutputObserver], errors are
/// stored and retrieved with
/// [`take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one step summary row.
    fn write_step_summary(&mut self, row: &StepSummaryRow) -> OutputResult<()>;

    /// Write a batch of per-employer rows.
    fn write_employers(&mut self, rows: &[EmployerRow]) -> OutputResult<()>;

    /// Write the time series and grid of a finished run.
    fn write_aggregate(&mut self, data: &AggregateData) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
