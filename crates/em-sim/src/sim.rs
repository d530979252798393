//! The `Sim` struct and its step loop.

use em_agent::AgentStore;
use em_core::{SimClock, SimConfig, SimRng, Step};
use em_market::{EmployerLedger, LaborMarket};
use em_society::Society;
use tracing::trace;

use crate::lifecycle::{age_population, evaluate_retention, retire_elderly};
use crate::{grid, AggregateData, Intervention, SimObserver, SimResult, Snapshot, Statistics, StepReport};

/// The main simulation runner.
///
/// `Sim` holds all simulation state.  It is `Clone`; a clone is a fully
/// independent copy, random generator included.  Create via
/// [`SimBuilder`][crate::SimBuilder].
#[derive(Clone, Debug)]
pub struct Sim {
    /// Structural parameters, fixed for the run.
    pub config: SimConfig,

    /// Step counter.
    pub clock: SimClock,

    /// Shared, intervention-mutable configuration.
    pub society: Society,

    /// Individuals, employers, job slots and neighbourhood cells.
    pub agents: AgentStore,

    /// The single random stream of this run.
    pub(crate) rng: SimRng,

    /// Every policy scheduled so far, in scheduling order.
    pub interventions: Vec<Intervention>,

    /// Time series recorded from `config.stats_start_step` on.
    pub stats: Statistics,

    pub(crate) market: LaborMarket,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// The most recently executed step.
    #[inline]
    pub fn current_step(&self) -> Step {
        self.clock.current
    }

    /// Add a policy to the schedule.  It acts when its trigger step comes.
    pub fn schedule(&mut self, intervention: Intervention) {
        self.interventions.push(intervention);
    }

    /// Run `n` steps.
    pub fn run_steps<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    /// Execute one step.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<StepReport> {
        let now = self.clock.advance();
        let years = self.config.years_per_step;
        observer.on_step_start(now);

        // ── Phase 1: interventions ────────────────────────────────────────
        for interv in &self.interventions {
            if interv.apply(now, &mut self.society, &mut self.agents, &self.config, &mut self.rng) {
                observer.on_intervention(now, &interv.policy);
            }
        }

        // ── Phase 2: arrivals ─────────────────────────────────────────────
        for _ in 0..self.config.people_per_step {
            self.agents.spawn(&self.society, self.config.entry_age, &mut self.rng);
        }

        // ── Phase 3: labor market ─────────────────────────────────────────
        let matched = self.market.run(&mut self.agents, &self.society, &mut self.rng)?;

        // ── Phase 4: employer economics ───────────────────────────────────
        let ledger = EmployerLedger::settle(&mut self.agents, &self.society, years)?;

        // ── Phase 5: lifecycle ────────────────────────────────────────────
        age_population(&mut self.agents, years);
        let retired = retire_elderly(&mut self.agents, self.config.max_age)?;
        let fired = evaluate_retention(&mut self.agents, &self.society, years, &mut self.rng)?;

        // ── Phase 6: statistics ───────────────────────────────────────────
        self.stats.record(now, self.config.stats_start_step, &self.agents, &self.society);

        let report = StepReport {
            step:         now,
            spawned:      self.config.people_per_step,
            applications: matched.applications,
            hires:        matched.hires.len(),
            retired:      retired.len(),
            fired:        fired.len(),
            population:   self.agents.population(),
            employed:     self.agents.individuals().filter(|p| p.is_employed()).count(),
            ledger,
        };
        trace!(
            step = %now,
            population = report.population,
            hires = report.hires,
            fired = report.fired,
            "step complete"
        );
        observer.on_step_end(&report, &self.agents);
        Ok(report)
    }

    /// Time series collected so far plus a grid snapshot of the current state.
    pub fn data(&self) -> AggregateData {
        AggregateData {
            series: self.stats.series().clone(),
            grid:   grid::render(&self.agents),
        }
    }

    /// Deep copy of the whole simulation state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self)
    }
}
