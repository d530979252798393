//! Applications and the per-step interview score cache.

use em_agent::AgentStore;
use em_core::{IndividualId, JobId, SimRng};
use em_society::Society;
use rustc_hash::FxHashMap;

use crate::MarketResult;

/// Applicants per vacant slot, both in deterministic order: slots in job
/// table order, applicants in population order.
#[derive(Clone, Debug, Default)]
pub struct Applications {
    pub by_job: Vec<(JobId, Vec<IndividualId>)>,
}

impl Applications {
    /// Let every unemployed individual decide, slot by slot, whether to apply.
    ///
    /// One uniform draw per (individual, slot) pair, individuals outermost.
    /// The distance penalty is applied as configured even when it drives the
    /// probability below zero.
    pub fn collect(store: &AgentStore, society: &Society, rng: &mut SimRng) -> MarketResult<Self> {
        let open = store.open_jobs();
        let mut by_job: Vec<(JobId, Vec<IndividualId>)> =
            open.iter().map(|&j| (j, Vec::new())).collect();

        for person in store.individuals().filter(|p| !p.is_employed()) {
            for (job, applicants) in &mut by_job {
                let employer = store.employer_of(*job)?;
                let mut p = person.attributes.apply_propensity;
                if employer.placement.neighbourhood != person.placement.neighbourhood {
                    p -= person.attributes.distance_sensitivity * society.distance_penalty_scale;
                }
                if rng.uniform() < p {
                    applicants.push(person.id);
                }
            }
        }
        Ok(Self { by_job })
    }

    /// Total number of applications submitted.
    pub fn count(&self) -> usize {
        self.by_job.iter().map(|(_, a)| a.len()).sum()
    }
}

/// Interview score for every (slot, applicant) pair of one step.
///
/// Scores are computed once and reused by every offer round of the step.
#[derive(Clone, Debug, Default)]
pub struct InterviewScores {
    scores: FxHashMap<(JobId, IndividualId), f64>,
}

impl InterviewScores {
    /// Score every application.  One normal draw per pair, even when the
    /// applicant is disqualified, so the stream does not depend on scores.
    pub fn conduct(
        applications: &Applications,
        store:        &AgentStore,
        society:      &Society,
        rng:          &mut SimRng,
    ) -> MarketResult<Self> {
        let mut scores = FxHashMap::default();
        for (job, applicants) in &applications.by_job {
            let kind = society.job_kind(store.job(*job)?.kind);
            for &id in applicants {
                let person = store.individual(id)?;
                let noise = rng.normal(
                    person.attributes.interview_skill,
                    person.attributes.interview_spread,
                );
                let score = kind.suitability(&person.traits, &person.attributes) + noise;
                scores.insert((*job, id), score);
            }
        }
        Ok(Self { scores })
    }

    /// Score of `individual` for `job`, or `NEG_INFINITY` if they did not apply.
    #[inline]
    pub fn get(&self, job: JobId, individual: IndividualId) -> f64 {
        self.scores.get(&(job, individual)).copied().unwrap_or(f64::NEG_INFINITY)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}
