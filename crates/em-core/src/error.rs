//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `EmError` as one variant
//! where they need it.

use thiserror::Error;

use crate::{IndividualId, JobId};

/// The base error type shared by the `em-*` crates.
#[derive(Debug, Error)]
pub enum EmError {
    #[error("individual {0} not found")]
    IndividualNotFound(IndividualId),

    #[error("job {0} not found")]
    JobNotFound(JobId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for the `em-*` crates.
pub type EmResult<T> = Result<T, EmError>;
