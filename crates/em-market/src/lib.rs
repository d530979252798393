//! `em-market` — the per-step labor market.
//!
//! # Matching, one step
//!
//! ```text
//! ① Applications — every unemployed individual considers every vacant slot
//!                  and applies with probability
//!                  propensity − sensitivity × distance_penalty_scale
//!                  (the penalty only for employers in another neighbourhood).
//! ② Interviews   — each (slot, applicant) pair is scored once:
//!                  job-kind suitability + Normal(skill, spread) noise.
//! ③ Rounds       — a fixed number of offer/accept passes:
//!                  every vacant slot offers to its best still-unemployed
//!                  applicant (if that score is > 0); every individual with
//!                  offers accepts the most desirable one (if > 0).
//! ```
//!
//! The fixed round count keeps the cost of a step bounded and lets some
//! vacancies and applicants carry over to later steps.
//!
//! [`EmployerLedger`] then charges salaries, credits productivity and books
//! one-off hiring costs for every filled slot.

pub mod error;
pub mod interview;
pub mod ledger;
pub mod matching;

#[cfg(test)]
mod tests;

pub use error::{MarketError, MarketResult};
pub use interview::{Applications, InterviewScores};
pub use ledger::EmployerLedger;
pub use matching::{LaborMarket, MatchReport};
