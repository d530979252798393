//! `em-society` — the shared, intervention-mutable configuration of a run.
//!
//! # Crate layout
//!
//! | Module           | Contents                                                      |
//! |------------------|---------------------------------------------------------------|
//! | [`categorical`]  | `Categorical` — labelled discrete distribution                |
//! | [`traits`]       | `ConditionalTable`, `TraitDef`, `TraitSet` (trait sampling)  |
//! | [`attributes`]   | `Attributes`, `AttributeKind` — continuous per-person values  |
//! | [`jobs`]         | `JobKind`, `JobWeight`, `Factor`, `Weight`                    |
//! | [`parameter`]    | `SocietyParameter` — the closed set of settable fields        |
//! | [`society`]      | `Society` — everything above, plus the spatial layout         |
//! | [`error`]        | `SocietyError`, `SocietyResult<T>`                            |
//!
//! A `Society` is validated once at construction; malformed distributions
//! are configuration errors and never reach the simulation loop.

pub mod attributes;
pub mod categorical;
pub mod error;
pub mod jobs;
pub mod parameter;
pub mod society;
pub mod traits;


pub use attributes::{AttributeKind, Attributes};
pub use categorical::Categorical;
pub use error::{SocietyError, SocietyResult};
pub use jobs::{Factor, JobKind, JobWeight, Weight};
pub use parameter::SocietyParameter;
pub use society::{DIPLOMA_TRAIT, MAX_JOB_KINDS, Society};
pub use traits::{Condition, ConditionalTable, NEGATION_PREFIX, TraitDef, TraitSet, negation};
