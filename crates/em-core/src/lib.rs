//! `em-core` — foundational types for the employ labor-market simulation.
//!
//! This crate is a dependency of every other `em-*` crate.  It has no `em-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`ids`]       | `IndividualId`, `EmployerId`, `JobId`, `JobKindId`, …      |
//! | [`time`]      | `Step`, `SimClock`                                         |
//! | [`config`]    | `SimConfig`                                                |
//! | [`rng`]       | `SimRng` (the single sequential random stream of a run)   |
//! | [`error`]     | `EmError`, `EmResult`                                      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to ids and configuration.   |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use error::{EmError, EmResult};
pub use ids::{EmployerId, IndividualId, JobId, JobKindId, NeighbourhoodId};
pub use rng::SimRng;
pub use time::{SimClock, Step};
