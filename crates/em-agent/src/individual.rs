//! One member of the population.

use em_core::{IndividualId, JobId};
use em_society::{Attributes, TraitSet};

use crate::Placement;

/// A person: demographic traits drawn once at creation, plus the state that
/// evolves every step.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Individual {
    pub id: IndividualId,

    /// Age in years.  Starts at the configured entry age.
    pub age: f64,

    /// The slot currently held, if any.  Must agree with `Job::employee`.
    pub job: Option<JobId>,

    /// Years in the current job.  Zero while unemployed.
    pub tenure: f64,

    /// Years since the individual last lost or never had a job.  Zero while
    /// employed.
    pub idle_years: f64,

    /// Cumulative salary received.
    pub income: f64,

    pub traits: TraitSet,

    pub attributes: Attributes,

    /// Home neighbourhood and the cell occupied within it.
    pub placement: Placement,
}

impl Individual {
    #[inline]
    pub fn is_employed(&self) -> bool {
        self.job.is_some()
    }

    #[inline]
    pub fn has(&self, token: &str) -> bool {
        self.traits.contains(token)
    }
}
