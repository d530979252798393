//! Employers and their economic bookkeeping.

use std::ops::AddAssign;

use em_core::{EmployerId, JobId};

use crate::Placement;

/// Hiring cost, salary and productivity over some period, plus the
/// resulting net (`productivity − hiring_cost − salary`).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ledger {
    pub hiring_cost:  f64,
    pub salary:       f64,
    pub productivity: f64,
    pub net:          f64,
}

impl Ledger {
    /// Recompute `net` from the other three fields.
    pub fn settle(&mut self) {
        self.net = self.productivity - self.hiring_cost - self.salary;
    }
}

impl AddAssign for Ledger {
    fn add_assign(&mut self, rhs: Ledger) {
        self.hiring_cost += rhs.hiring_cost;
        self.salary += rhs.salary;
        self.productivity += rhs.productivity;
        self.net += rhs.net;
    }
}

/// An employer with a fixed roster of job slots.  Created once, never
/// destroyed.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Employer {
    pub id: EmployerId,

    /// Ids of this employer's slots, contiguous in the store's job table.
    pub jobs: Vec<JobId>,

    pub placement: Placement,

    /// Figures for the most recent step.
    pub last_step: Ledger,

    /// Running totals since the start of the run.
    pub total: Ledger,
}
