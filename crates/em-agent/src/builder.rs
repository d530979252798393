//! Construction of the fixed part of the world: neighbourhoods, employers
//! and their job slots.

use em_core::{EmployerId, JobId, SimRng};
use em_society::Society;

use crate::{AgentStore, Employer, Job, Ledger, LocationPool};

/// Fluent builder for [`AgentStore`].
///
/// ```rust,ignore
/// let store = AgentStoreBuilder::new(&society)
///     .employers(10)
///     .jobs_per_employer(10)
///     .build(&mut rng);
/// ```
pub struct AgentStoreBuilder<'a> {
    society:           &'a Society,
    employers:         usize,
    jobs_per_employer: usize,
}

impl<'a> AgentStoreBuilder<'a> {
    pub fn new(society: &'a Society) -> Self {
        Self {
            society,
            employers:         10,
            jobs_per_employer: 10,
        }
    }

    pub fn employers(mut self, n: usize) -> Self {
        self.employers = n;
        self
    }

    pub fn jobs_per_employer(mut self, n: usize) -> Self {
        self.jobs_per_employer = n;
        self
    }

    /// Create every employer.  For each one the job kinds are drawn first,
    /// then its placement.  The population starts empty.
    pub fn build(self, rng: &mut SimRng) -> AgentStore {
        let mut locations = LocationPool::from_society(self.society);
        let mut employers = Vec::with_capacity(self.employers);
        let mut jobs = Vec::with_capacity(self.employers * self.jobs_per_employer);

        for e in 0..self.employers {
            let employer = EmployerId(e as u32);
            let first = jobs.len();
            for _ in 0..self.jobs_per_employer {
                jobs.push(Job {
                    id:       JobId(jobs.len() as u32),
                    employer,
                    kind:     self.society.sample_job_kind(rng),
                    employee: None,
                });
            }
            let placement = locations.place(rng);
            employers.push(Employer {
                id:        employer,
                jobs:      (first..jobs.len()).map(|j| JobId(j as u32)).collect(),
                placement,
                last_step: Ledger::default(),
                total:     Ledger::default(),
            });
        }

        AgentStore {
            people: Default::default(),
            next_id: 0,
            employers,
            jobs,
            locations,
        }
    }
}
