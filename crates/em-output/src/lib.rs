//! `em-output` — simulation output writers.
//!
//! Two backends are provided:
//!
//! | Feature   | Backend | Files created                                                   |
//! |-----------|---------|-----------------------------------------------------------------|
//! | *(none)*  | CSV     | `step_summaries.csv`, `employers.csv`, `series.csv`, `grid.csv` |
//! | `sqlite`  | SQLite  | `output.db`                                                     |
//!
//! Both implement [`OutputWriter`].  Per-step rows are produced by
//! [`SimOutputObserver`], which implements `em_sim::SimObserver`; the final
//! [`AggregateData`][em_sim::AggregateData] of a run is written with
//! [`OutputWriter::write_aggregate`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use em_output::{CsvWriter, OutputWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer).employer_interval(10);
//! sim.run_steps(200, &mut obs)?;
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}") }
//! let mut writer = obs.into_writer();
//! writer.write_aggregate(&sim.data())?;
//! writer.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{EmployerRow, StepSummaryRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
