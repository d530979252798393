//! Simulation time model.
//!
//! Time advances in whole `Step`s.  Each step represents a fixed fraction of
//! a simulated year (`years_per_step`, 0.1 by default); ages, tenure and
//! salaries are all expressed in years.

use std::fmt;

// ── Step ─────────────────────────────────────────────────────────────────────

/// An absolute step counter.  Step 0 is the state before the first
/// `Sim::step`; the first executed step is step 1.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step(pub u64);

impl Step {
    pub const ZERO: Step = Step(0);

    /// Return the step `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Step {
        Step(self.0 + n)
    }
}

impl std::ops::Add<u64> for Step {
    type Output = Step;
    #[inline]
    fn add(self, rhs: u64) -> Step {
        Step(self.0 + rhs)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks the current step and converts it to simulated years.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Simulated years covered by one step.
    pub years_per_step: f64,
    /// The most recently started step.
    pub current: Step,
}

impl SimClock {
    pub fn new(years_per_step: f64) -> Self {
        Self {
            years_per_step,
            current: Step::ZERO,
        }
    }

    /// Advance to the next step and return it.
    #[inline]
    pub fn advance(&mut self) -> Step {
        self.current = Step(self.current.0 + 1);
        self.current
    }

    /// Simulated years elapsed since step 0.
    #[inline]
    pub fn elapsed_years(&self) -> f64 {
        self.current.0 as f64 * self.years_per_step
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (year {:.1})", self.current, self.elapsed_years())
    }
}
