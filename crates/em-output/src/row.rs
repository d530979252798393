//! Plain data row types written by output backends.

use em_agent::{AgentStore, Employer};
use em_sim::StepReport;

/// Counts and money flows for one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepSummaryRow {
    pub step:         u64,
    pub population:   u64,
    pub employed:     u64,
    pub spawned:      u64,
    pub applications: u64,
    pub hires:        u64,
    pub retired:      u64,
    pub fired:        u64,
    pub hiring_cost:  f64,
    pub salary:       f64,
    pub productivity: f64,
    pub net:          f64,
}

impl From<&StepReport> for StepSummaryRow {
    fn from(r: &StepReport) -> Self {
        Self {
            step:         r.step.0,
            population:   r.population as u64,
            employed:     r.employed as u64,
            spawned:      r.spawned as u64,
            applications: r.applications as u64,
            hires:        r.hires as u64,
            retired:      r.retired as u64,
            fired:        r.fired as u64,
            hiring_cost:  r.ledger.hiring_cost,
            salary:       r.ledger.salary,
            productivity: r.ledger.productivity,
            net:          r.ledger.net,
        }
    }
}

/// One employer's state at a given step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmployerRow {
    pub step:      u64,
    pub employer:  u32,
    pub slots:     u32,
    pub filled:    u32,
    pub net:       f64,
    pub total_net: f64,
}

impl EmployerRow {
    pub fn capture(step: u64, employer: &Employer, agents: &AgentStore) -> Self {
        let filled = employer
            .jobs
            .iter()
            .filter(|&&j| agents.job(j).is_ok_and(|job| !job.is_vacant()))
            .count();
        Self {
            step,
            employer:  employer.id.0,
            slots:     employer.jobs.len() as u32,
            filled:    filled as u32,
            net:       employer.last_step.net,
            total_net: employer.total.net,
        }
    }
}
