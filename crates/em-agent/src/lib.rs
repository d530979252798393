//! `em-agent` — entity storage for the labor-market simulation.
//!
//! # Crate layout
//!
//! | Module            | Contents                                                   |
//! |-------------------|------------------------------------------------------------|
//! | [`individual`]    | `Individual` — one person's static and evolving state      |
//! | [`employer`]      | `Employer`, `Ledger` — job roster and economic totals      |
//! | [`job`]           | `Job` — one slot, at most one employee                     |
//! | [`neighbourhood`] | `Neighbourhood`, `LocationPool`, `Cell`, `Placement`       |
//! | [`store`]         | `AgentStore` — arena owning everything above               |
//! | [`builder`]       | `AgentStoreBuilder` — creates the employers of a run       |
//!
//! # Cross-references
//!
//! Entities refer to each other by id, never by pointer: `Job::employee`
//! holds an `IndividualId`, `Individual::job` holds a `JobId`.  Cloning an
//! `AgentStore` therefore yields a fully independent copy with all links
//! intact.  `AgentStore` is the only place that writes either side of the
//! employment link, and it refuses to proceed when the two sides disagree.

pub mod builder;
pub mod employer;
pub mod error;
pub mod individual;
pub mod job;
pub mod neighbourhood;
pub mod store;

#[cfg(test)]
mod tests;

pub use builder::AgentStoreBuilder;
pub use employer::{Employer, Ledger};
pub use error::{AgentError, AgentResult};
pub use individual::Individual;
pub use job::Job;
pub use neighbourhood::{Cell, LocationPool, Neighbourhood, Placement};
pub use store::AgentStore;
