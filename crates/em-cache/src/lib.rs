//! `em-cache` — reproducible, resumable runs over sequences of policy
//! actions.
//!
//! # How a run is resolved
//!
//! ```text
//! run(seed, [a0, a1, …, an])
//!   ① result memo hit?           → return the shared result, no simulation
//!   ② longest cached prefix      → restore its snapshot
//!      (none → fresh sim, warm-up steps, cache as the empty prefix)
//!   ③ for each remaining action ai:
//!        schedule its policy at warmup + 1 + steps_per_action × i,
//!        advance steps_per_action steps,
//!        snapshot under [a0 … ai]
//!   ④ memoize and return the aggregate data
//! ```
//!
//! Snapshots carry the random generator state, so a run resumed from a
//! cached prefix is identical to one simulated from step 0.
//!
//! # Sharing
//!
//! `SimulationCache` methods take `&mut self`; lookup, resume and insertion
//! are not atomic as a unit.  Callers that share one cache between threads
//! wrap it in a `Mutex` (one global lock, or one cache per seed).

pub mod action;
pub mod cache;
pub mod error;
pub mod lru;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use cache::{CacheConfig, CacheStats, SimulationCache};
pub use error::{CacheError, CacheResult};
pub use lru::Lru;
