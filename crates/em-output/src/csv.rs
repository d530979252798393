//! CSV output backend.
//!
//! Per-step files are created up front in the output directory:
//! - `step_summaries.csv`
//! - `employers.csv`
//!
//! [`write_aggregate`][OutputWriter::write_aggregate] adds `series.csv` (one
//! column per series, one row per sample) and `grid.csv`.

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::Writer;
use em_sim::{AggregateData, EntityKind};

use crate::writer::OutputWriter;
use crate::{EmployerRow, OutputResult, StepSummaryRow};

/// Writes simulation output to CSV files in one directory.
pub struct CsvWriter {
    dir:       PathBuf,
    summaries: Writer<File>,
    employers: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the per-step CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut summaries = Writer::from_path(dir.join("step_summaries.csv"))?;
        summaries.write_record([
            "step", "population", "employed", "spawned", "applications", "hires", "retired",
            "fired", "hiring_cost", "salary", "productivity", "net",
        ])?;

        let mut employers = Writer::from_path(dir.join("employers.csv"))?;
        employers.write_record(["step", "employer", "slots", "filled", "net", "total_net"])?;

        Ok(Self {
            dir: dir.to_path_buf(),
            summaries,
            employers,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_step_summary(&mut self, row: &StepSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.step.to_string(),
            row.population.to_string(),
            row.employed.to_string(),
            row.spawned.to_string(),
            row.applications.to_string(),
            row.hires.to_string(),
            row.retired.to_string(),
            row.fired.to_string(),
            row.hiring_cost.to_string(),
            row.salary.to_string(),
            row.productivity.to_string(),
            row.net.to_string(),
        ])?;
        Ok(())
    }

    fn write_employers(&mut self, rows: &[EmployerRow]) -> OutputResult<()> {
        for row in rows {
            self.employers.write_record(&[
                row.step.to_string(),
                row.employer.to_string(),
                row.slots.to_string(),
                row.filled.to_string(),
                row.net.to_string(),
                row.total_net.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_aggregate(&mut self, data: &AggregateData) -> OutputResult<()> {
        let mut series = Writer::from_path(self.dir.join("series.csv"))?;
        let mut header = vec!["sample".to_string()];
        header.extend(data.series.keys().cloned());
        series.write_record(&header)?;

        let samples = data.series.values().map(Vec::len).max().unwrap_or(0);
        for i in 0..samples {
            let mut record = vec![i.to_string()];
            // Shorter series leave their cell empty.
            record.extend(
                data.series.values().map(|s| s.get(i).map(f64::to_string).unwrap_or_default()),
            );
            series.write_record(&record)?;
        }
        series.flush()?;

        let mut grid = Writer::from_path(self.dir.join("grid.csv"))?;
        grid.write_record(["type", "x", "y", "color", "info"])?;
        for item in &data.grid {
            let kind = match item.kind {
                EntityKind::Employer => "employer",
                EntityKind::Person => "person",
            };
            grid.write_record([
                kind,
                &item.x.to_string(),
                &item.y.to_string(),
                &item.color,
                &item.info,
            ])?;
        }
        grid.flush()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.summaries.flush()?;
        self.employers.flush()?;
        Ok(())
    }
}
