//! The iterative offer/acceptance engine.

use em_agent::AgentStore;
use em_core::{IndividualId, JobId, SimRng};
use em_society::Society;
use tracing::trace;

use crate::{Applications, InterviewScores, MarketResult};

/// Outcome of one step of matching.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MatchReport {
    pub vacancies:    usize,
    pub applications: usize,
    pub offers:       usize,
    /// Hires in the order they were made.
    pub hires: Vec<(IndividualId, JobId)>,
}

/// Runs applications, interviews and a fixed number of offer rounds.
#[derive(Copy, Clone, Debug)]
pub struct LaborMarket {
    rounds: usize,
}

impl LaborMarket {
    pub fn new(rounds: usize) -> Self {
        Self { rounds }
    }

    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Match vacant slots with unemployed individuals for one step.
    pub fn run(
        &self,
        store:   &mut AgentStore,
        society: &Society,
        rng:     &mut SimRng,
    ) -> MarketResult<MatchReport> {
        let applications = Applications::collect(store, society, rng)?;
        let scores = InterviewScores::conduct(&applications, store, society, rng)?;

        let mut report = MatchReport {
            vacancies:    applications.by_job.len(),
            applications: applications.count(),
            ..MatchReport::default()
        };

        for round in 0..self.rounds {
            let offers = extend_offers(&applications, &scores, store)?;
            if offers.is_empty() {
                // Nothing changed this round, so later rounds would see the
                // same state.
                break;
            }
            report.offers += offers.iter().map(|(_, jobs)| jobs.len()).sum::<usize>();
            for (person, jobs) in offers {
                if let Some(job) = choose_offer(person, &jobs, store, society)? {
                    store.hire(person, job)?;
                    report.hires.push((person, job));
                }
            }
            trace!(round, hires = report.hires.len(), "offer round complete");
        }
        Ok(report)
    }
}

/// Every vacant slot offers to its best remaining applicant.
///
/// Returns offers grouped per individual, individuals in the order they
/// first received an offer.  A best score of zero or less means no viable
/// candidate; ties go to the earlier applicant.
fn extend_offers(
    applications: &Applications,
    scores:       &InterviewScores,
    store:        &AgentStore,
) -> MarketResult<Vec<(IndividualId, Vec<JobId>)>> {
    let mut offers: Vec<(IndividualId, Vec<JobId>)> = Vec::new();
    for (job, applicants) in &applications.by_job {
        if !store.job(*job)?.is_vacant() {
            continue;
        }
        let mut best: Option<(IndividualId, f64)> = None;
        for &id in applicants {
            if store.individual(id)?.is_employed() {
                continue;
            }
            let score = scores.get(*job, id);
            if best.is_none_or(|(_, s)| score > s) {
                best = Some((id, score));
            }
        }
        if let Some((person, _)) = best.filter(|&(_, score)| score > 0.0) {
            match offers.iter_mut().find(|(p, _)| *p == person) {
                Some((_, jobs)) => jobs.push(*job),
                None => offers.push((person, vec![*job])),
            }
        }
    }
    Ok(offers)
}

/// The offer `person` accepts, if any: the most desirable one, provided its
/// desirability is positive.  Ties go to the earlier offer.
fn choose_offer(
    person:  IndividualId,
    jobs:    &[JobId],
    store:   &AgentStore,
    society: &Society,
) -> MarketResult<Option<JobId>> {
    let mut best: Option<(JobId, f64)> = None;
    for &job in jobs {
        let d = desirability(person, job, store, society)?;
        if best.is_none_or(|(_, s)| d > s) {
            best = Some((job, d));
        }
    }
    Ok(best.filter(|&(_, d)| d > 0.0).map(|(job, _)| job))
}

/// How much `person` wants `job`: a flat bonus for a local employer plus the
/// job kind's starting pay.
pub fn desirability(
    person:  IndividualId,
    job:     JobId,
    store:   &AgentStore,
    society: &Society,
) -> MarketResult<f64> {
    let home = store.individual(person)?.placement.neighbourhood;
    let employer = store.employer_of(job)?;
    let mut score = society.job_kind(store.job(job)?.kind).starting_pay;
    if employer.placement.neighbourhood == home {
        score += society.proximity_bonus;
    }
    Ok(score)
}
