//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use em_agent::AgentStore;
use em_sim::{SimObserver, StepReport};

use crate::row::{EmployerRow, StepSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes a summary row every step and, optionally,
/// per-employer rows every `employer_interval` steps.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After the run, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:            W,
    employer_interval: u64,
    last_error:        Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Summaries only; see [`employer_interval`][Self::employer_interval].
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            employer_interval: 0,
            last_error:        None,
        }
    }

    /// Also write employer rows on steps divisible by `interval` (0 = never).
    pub fn employer_interval(mut self, interval: u64) -> Self {
        self.employer_interval = interval;
        self
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Unwrap the inner writer (e.g. to write aggregates or inspect files).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_step_end(&mut self, report: &StepReport, agents: &AgentStore) {
        let result = self.writer.write_step_summary(&StepSummaryRow::from(report));
        self.store_err(result);

        let step = report.step.0;
        if self.employer_interval > 0 && step % self.employer_interval == 0 {
            let rows: Vec<EmployerRow> = agents
                .employers
                .iter()
                .map(|e| EmployerRow::capture(step, e, agents))
                .collect();
            let result = self.writer.write_employers(&rows);
            self.store_err(result);
        }
    }
}
