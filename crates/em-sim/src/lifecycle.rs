//! Population lifecycle: ageing, departure and job retention.
//!
//! Each phase first decides who is affected and only then mutates, so no
//! one is skipped because of a removal earlier in the same pass.

use em_agent::{AgentResult, AgentStore};
use em_core::{IndividualId, SimRng};
use em_society::Society;

/// Age everyone by `years`.  Employed individuals also gain tenure and
/// experience; the unemployed accumulate idle time.
pub fn age_population(agents: &mut AgentStore, years: f64) {
    for person in agents.individuals_mut() {
        person.age += years;
        if person.is_employed() {
            person.tenure += years;
            person.attributes.experience += years;
        } else {
            person.idle_years += years;
        }
    }
}

/// Remove everyone older than `max_age`, vacating their jobs and freeing
/// their cells.  Returns the removed ids in population order.
pub fn retire_elderly(agents: &mut AgentStore, max_age: f64) -> AgentResult<Vec<IndividualId>> {
    let leaving: Vec<IndividualId> = agents
        .individuals()
        .filter(|p| p.age > max_age)
        .map(|p| p.id)
        .collect();
    for &id in &leaving {
        agents.remove(id)?;
    }
    Ok(leaving)
}

/// Fire employees according to their job kind's retention curve.
///
/// The retention probability for the current tenure year becomes a per-step
/// hazard `(1 − retention) × years`; one uniform draw per employed
/// individual, in population order.
pub fn evaluate_retention(
    agents:  &mut AgentStore,
    society: &Society,
    years:   f64,
    rng:     &mut SimRng,
) -> AgentResult<Vec<IndividualId>> {
    let mut fired = Vec::new();
    for person in agents.individuals() {
        let Some(job) = person.job else { continue };
        let kind = society.job_kind(agents.job(job)?.kind);
        let hazard = (1.0 - kind.retention_at(person.tenure)) * years;
        if rng.uniform() < hazard {
            fired.push(person.id);
        }
    }
    for &id in &fired {
        agents.fire(id)?;
    }
    Ok(fired)
}
