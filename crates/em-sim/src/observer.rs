//! Simulation observer trait for progress reporting and data collection.

use em_agent::{AgentStore, Ledger};
use em_core::Step;

use crate::Policy;

/// What happened during one step.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepReport {
    pub step:         Step,
    pub spawned:      usize,
    pub applications: usize,
    pub hires:        usize,
    pub retired:      usize,
    pub fired:        usize,
    /// Population and employment after the step.
    pub population:   usize,
    pub employed:     usize,
    /// Sum of every employer's ledger for the step.
    pub ledger:       Ledger,
}

/// Callbacks invoked by [`Sim::step`][crate::Sim::step].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
pub trait SimObserver {
    /// Called at the start of each step, before interventions.
    fn on_step_start(&mut self, _step: Step) {}

    /// Called when a scheduled policy acts on `step`.
    fn on_intervention(&mut self, _step: Step, _policy: &Policy) {}

    /// Called at the end of each step with read-only access to the world.
    fn on_step_end(&mut self, _report: &StepReport, _agents: &AgentStore) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
