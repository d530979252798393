//! Checkpoints of a running simulation.

use em_core::Step;

use crate::Sim;

/// A fully independent copy of a [`Sim`]: entities, society, schedule,
/// statistics and random generator state.
///
/// Entities reference each other by id inside one arena, so copying the
/// arena copies every employee↔job and individual↔cell link consistently.
/// Restoring yields a new `Sim`; mutating it never affects the snapshot, and
/// a snapshot can be restored any number of times.
#[derive(Clone, Debug)]
pub struct Snapshot {
    state: Sim,
}

impl Snapshot {
    pub fn capture(sim: &Sim) -> Self {
        Self { state: sim.clone() }
    }

    /// A fresh simulation identical to the captured one.
    pub fn restore(&self) -> Sim {
        self.state.clone()
    }

    /// Consume the snapshot without copying.
    pub fn into_sim(self) -> Sim {
        self.state
    }

    /// The step at which the snapshot was taken.
    pub fn step(&self) -> Step {
        self.state.current_step()
    }

    pub fn population(&self) -> usize {
        self.state.agents.population()
    }
}
