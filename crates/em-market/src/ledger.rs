//! Per-employer economics, settled once per step.

use em_agent::{AgentStore, Ledger};
use em_core::IndividualId;
use em_society::Society;

use crate::MarketResult;

/// Charges salaries, credits productivity and books hiring costs.
pub struct EmployerLedger;

impl EmployerLedger {
    /// Settle one step of `years` for every employer.
    ///
    /// For each filled slot: salary `(start + tenure × raise) × years` is
    /// paid to the employee, productivity
    /// `max × (1 − e^(−tenure / tau)) × years` is credited, and a job
    /// started this step (tenure exactly zero) incurs the kind's hiring cost.
    /// Returns the sum over all employers for this step.
    pub fn settle(store: &mut AgentStore, society: &Society, years: f64) -> MarketResult<Ledger> {
        let mut step_ledgers = Vec::with_capacity(store.employers.len());
        let mut payroll: Vec<(IndividualId, f64)> = Vec::new();

        for employer in &store.employers {
            let mut ledger = Ledger::default();
            for &job_id in &employer.jobs {
                let job = store.job(job_id)?;
                let Some(holder) = job.employee else { continue };
                let tenure = store.individual(holder)?.tenure;
                let kind = society.job_kind(job.kind);

                let salary = kind.salary(tenure) * years;
                ledger.salary += salary;
                payroll.push((holder, salary));
                ledger.productivity += kind.productivity(tenure) * years;
                if tenure == 0.0 {
                    ledger.hiring_cost += kind.hiring_cost;
                }
            }
            ledger.settle();
            step_ledgers.push(ledger);
        }

        for (holder, salary) in payroll {
            store.individual_mut(holder)?.income += salary;
        }
        let mut overall = Ledger::default();
        for (employer, ledger) in store.employers.iter_mut().zip(step_ledgers) {
            employer.last_step = ledger;
            employer.total += ledger;
            overall += ledger;
        }
        Ok(overall)
    }
}
