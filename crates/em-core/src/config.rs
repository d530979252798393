//! Top-level run configuration.

use crate::{EmError, EmResult, SimClock, Step};

/// Structural parameters of one simulation instance.
///
/// Everything policy-related lives in `em_society::Society` instead, because
/// interventions mutate it mid-run.  `SimConfig` is fixed for the lifetime of
/// a run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Employers created at start-up.  Default: 10.
    pub employer_count: usize,

    /// Job slots per employer.  Default: 10.
    pub jobs_per_employer: usize,

    /// New individuals entering the population each step.  Default: 1.
    pub people_per_step: usize,

    /// Simulated years per step.  Default: 0.1.
    pub years_per_step: f64,

    /// Age at which individuals enter the population.  Default: 16.
    pub entry_age: f64,

    /// Individuals older than this leave the population.  Default: 25.
    pub max_age: f64,

    /// First step whose statistics are recorded.  Default: 100.
    pub stats_start_step: Step,

    /// Offer/accept rounds per step.  Default: 10.
    pub matching_rounds: usize,
}

impl SimConfig {
    /// Default configuration with the given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Reject configurations that cannot produce a meaningful run.
    pub fn validate(&self) -> EmResult<()> {
        if self.years_per_step.is_nan() || self.years_per_step <= 0.0 {
            return Err(EmError::Config(format!(
                "years_per_step must be positive, got {}",
                self.years_per_step
            )));
        }
        if self.max_age <= self.entry_age {
            return Err(EmError::Config(format!(
                "max_age {} must exceed entry_age {}",
                self.max_age, self.entry_age
            )));
        }
        if self.employer_count == 0 || self.jobs_per_employer == 0 {
            return Err(EmError::Config("at least one job slot is required".into()));
        }
        Ok(())
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.years_per_step)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed:              0,
            employer_count:    10,
            jobs_per_employer: 10,
            people_per_step:   1,
            years_per_step:    0.1,
            entry_age:         16.0,
            max_age:           25.0,
            stats_start_step:  Step(100),
            matching_rounds:   10,
        }
    }
}
