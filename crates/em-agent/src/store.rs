//! `AgentStore` — the arena that owns every entity of a run.
//!
//! # Why an arena?
//!
//! Employment is a two-sided link (`Job::employee` ↔ `Individual::job`).
//! Keeping both sides as ids inside one owner means a plain `clone()` is a
//! consistent deep copy, and every write to the link goes through the
//! checked methods below.
//!
//! Individuals live in a `BTreeMap` keyed by a monotonically increasing
//! `IndividualId`, so iteration order is creation order and removal never
//! shifts anyone else's handle.

use std::collections::BTreeMap;

use em_core::{EmError, IndividualId, JobId, SimRng};
use em_society::Society;

use crate::{AgentError, AgentResult, Employer, Individual, Job, LocationPool};

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentStore {
    /// Living individuals in creation order.
    pub(crate) people: BTreeMap<IndividualId, Individual>,

    /// Next id to hand out.  Never reused.
    pub(crate) next_id: u32,

    /// Employers, indexed by `EmployerId`.
    pub employers: Vec<Employer>,

    /// Flat job table, indexed by `JobId`, grouped by employer.
    pub(crate) jobs: Vec<Job>,

    pub locations: LocationPool,
}

impl AgentStore {
    // ── Population ────────────────────────────────────────────────────────

    /// Create a new individual aged `entry_age`.
    ///
    /// Draw order: traits, attributes, neighbourhood, cell.
    pub fn spawn(&mut self, society: &Society, entry_age: f64, rng: &mut SimRng) -> IndividualId {
        let traits = society.sample_traits(rng);
        let attributes = society.sample_attributes(rng);
        let placement = self.locations.place(rng);

        let id = IndividualId(self.next_id);
        self.next_id += 1;
        self.people.insert(
            id,
            Individual {
                id,
                age: entry_age,
                job: None,
                tenure: 0.0,
                idle_years: 0.0,
                income: 0.0,
                traits,
                attributes,
                placement,
            },
        );
        id
    }

    /// Remove an individual, vacating their job and freeing their cell.
    pub fn remove(&mut self, id: IndividualId) -> AgentResult<Individual> {
        if let Some(job) = self.individual(id)?.job {
            self.check_link(job, id)?;
            self.jobs[job.index()].employee = None;
        }
        let person = self.people.remove(&id).ok_or(EmError::IndividualNotFound(id))?;
        self.locations.release(person.placement);
        Ok(person)
    }

    pub fn individual(&self, id: IndividualId) -> AgentResult<&Individual> {
        self.people.get(&id).ok_or(AgentError::Core(EmError::IndividualNotFound(id)))
    }

    pub fn individual_mut(&mut self, id: IndividualId) -> AgentResult<&mut Individual> {
        self.people
            .get_mut(&id)
            .ok_or(AgentError::Core(EmError::IndividualNotFound(id)))
    }

    /// Living individuals in creation order.
    pub fn individuals(&self) -> impl Iterator<Item = &Individual> {
        self.people.values()
    }

    pub fn individuals_mut(&mut self) -> impl Iterator<Item = &mut Individual> {
        self.people.values_mut()
    }

    pub fn population(&self) -> usize {
        self.people.len()
    }

    /// Ids of everyone currently without a job, in creation order.
    pub fn unemployed(&self) -> Vec<IndividualId> {
        self.people.values().filter(|p| p.job.is_none()).map(|p| p.id).collect()
    }

    // ── Jobs ──────────────────────────────────────────────────────────────

    pub fn job(&self, id: JobId) -> AgentResult<&Job> {
        self.jobs.get(id.index()).ok_or(AgentError::Core(EmError::JobNotFound(id)))
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// Ids of every vacant slot, employer by employer.
    pub fn open_jobs(&self) -> Vec<JobId> {
        self.jobs.iter().filter(|j| j.is_vacant()).map(|j| j.id).collect()
    }

    pub fn employer_of(&self, job: JobId) -> AgentResult<&Employer> {
        let employer = self.job(job)?.employer;
        Ok(&self.employers[employer.index()])
    }

    // ── Employment link ───────────────────────────────────────────────────

    /// Bind `individual` to the vacant slot `job`, starting tenure at zero.
    pub fn hire(&mut self, individual: IndividualId, job: JobId) -> AgentResult<()> {
        if !self.job(job)?.is_vacant() {
            return Err(AgentError::AlreadyFilled(job));
        }
        let person = self.individual_mut(individual)?;
        if person.job.is_some() {
            return Err(AgentError::AlreadyEmployed(individual));
        }
        person.job = Some(job);
        person.tenure = 0.0;
        person.idle_years = 0.0;
        self.jobs[job.index()].employee = Some(individual);
        Ok(())
    }

    /// End `individual`'s employment, resetting tenure.
    pub fn fire(&mut self, individual: IndividualId) -> AgentResult<JobId> {
        let job = self.individual(individual)?.job.ok_or(AgentError::NotEmployed(individual))?;
        self.check_link(job, individual)?;
        self.jobs[job.index()].employee = None;
        let person = self.individual_mut(individual)?;
        person.job = None;
        person.tenure = 0.0;
        Ok(job)
    }

    /// Error unless `job` and `individual` point at each other.
    fn check_link(&self, job: JobId, individual: IndividualId) -> AgentResult<()> {
        if self.job(job)?.employee != Some(individual) {
            return Err(AgentError::Inconsistent {
                job,
                individual,
                detail: "individual holds a job whose employee is someone else",
            });
        }
        Ok(())
    }

    /// Verify every employment link from both sides.
    pub fn check_consistency(&self) -> AgentResult<()> {
        for person in self.people.values() {
            if let Some(job) = person.job {
                self.check_link(job, person.id)?;
            }
        }
        for job in &self.jobs {
            if let Some(holder) = job.employee {
                let person = self.individual(holder)?;
                if person.job != Some(job.id) {
                    return Err(AgentError::Inconsistent {
                        job: job.id,
                        individual: holder,
                        detail: "job names an employee who holds a different job",
                    });
                }
            }
        }
        Ok(())
    }
}
