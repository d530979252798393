//! `em-sim` — step loop orchestrator for the labor-market simulation.
//!
//! # One step
//!
//! ```text
//! step += 1
//!   ① Interventions — scheduled policies whose trigger matches mutate the
//!                     society or individual traits.
//!   ② Arrivals      — `people_per_step` new individuals enter at entry age.
//!   ③ Market        — applications, interviews, offer/accept rounds.
//!   ④ Ledger        — employers pay salaries and book productivity/hiring.
//!   ⑤ Lifecycle     — age everyone, remove those past max age, then fire
//!                     employees according to the retention curve.
//!   ⑥ Statistics    — append to the time series once past the start step.
//! ```
//!
//! Every random draw comes from the single `SimRng` owned by the [`Sim`], in
//! the order above.  A [`Snapshot`] is a deep copy of the whole `Sim`,
//! generator state included, so resuming from it continues the exact same
//! stream.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use em_core::SimConfig;
//! use em_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::with_seed(1)).build()?;
//! sim.run_steps(150, &mut NoopObserver)?;
//! let data = sim.data();
//! println!("{:?}", data.series["employment_black"]);
//! ```

pub mod builder;
pub mod error;
pub mod grid;
pub mod intervention;
pub mod lifecycle;
pub mod observer;
pub mod sim;
pub mod snapshot;
pub mod stats;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use grid::{EntityKind, GridItem};
pub use intervention::{Intervention, Policy, Trigger};
pub use observer::{NoopObserver, SimObserver, StepReport};
pub use sim::Sim;
pub use snapshot::Snapshot;
pub use stats::{AggregateData, Statistics};
