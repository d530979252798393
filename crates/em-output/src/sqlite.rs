//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! tables `step_summaries`, `employers`, `series` and `grid`.

use std::path::Path;

use em_sim::{AggregateData, EntityKind};
use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{EmployerRow, OutputResult, StepSummaryRow};

/// Writes simulation output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS step_summaries (
                 step         INTEGER PRIMARY KEY,
                 population   INTEGER NOT NULL,
                 employed     INTEGER NOT NULL,
                 spawned      INTEGER NOT NULL,
                 applications INTEGER NOT NULL,
                 hires        INTEGER NOT NULL,
                 retired      INTEGER NOT NULL,
                 fired        INTEGER NOT NULL,
                 hiring_cost  REAL NOT NULL,
                 salary       REAL NOT NULL,
                 productivity REAL NOT NULL,
                 net          REAL NOT NULL
             );
             CREATE TABLE IF NOT EXISTS employers (
                 step      INTEGER NOT NULL,
                 employer  INTEGER NOT NULL,
                 slots     INTEGER NOT NULL,
                 filled    INTEGER NOT NULL,
                 net       REAL NOT NULL,
                 total_net REAL NOT NULL
             );
             CREATE TABLE IF NOT EXISTS series (
                 name   TEXT NOT NULL,
                 sample INTEGER NOT NULL,
                 value  REAL NOT NULL
             );
             CREATE TABLE IF NOT EXISTS grid (
                 type  TEXT NOT NULL,
                 x     INTEGER NOT NULL,
                 y     INTEGER NOT NULL,
                 color TEXT NOT NULL,
                 info  TEXT NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_step_summary(&mut self, row: &StepSummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO step_summaries \
             (step, population, employed, spawned, applications, hires, retired, fired, \
              hiring_cost, salary, productivity, net) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
            rusqlite::params![
                row.step as i64,
                row.population as i64,
                row.employed as i64,
                row.spawned as i64,
                row.applications as i64,
                row.hires as i64,
                row.retired as i64,
                row.fired as i64,
                row.hiring_cost,
                row.salary,
                row.productivity,
                row.net,
            ],
        )?;
        Ok(())
    }

    fn write_employers(&mut self, rows: &[EmployerRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO employers (step, employer, slots, filled, net, total_net) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.step as i64,
                    row.employer,
                    row.slots,
                    row.filled,
                    row.net,
                    row.total_net,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_aggregate(&mut self, data: &AggregateData) -> OutputResult<()> {
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt =
                tx.prepare_cached("INSERT INTO series (name, sample, value) VALUES (?1, ?2, ?3)")?;
            for (name, values) in &data.series {
                for (i, v) in values.iter().enumerate() {
                    stmt.execute(rusqlite::params![name, i as i64, v])?;
                }
            }
        }
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO grid (type, x, y, color, info) VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for item in &data.grid {
                let kind = match item.kind {
                    EntityKind::Employer => "employer",
                    EntityKind::Person => "person",
                };
                stmt.execute(rusqlite::params![kind, item.x as i64, item.y as i64, item.color, item.info])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
