//! Society configuration errors.

use thiserror::Error;

use em_core::JobKindId;

/// Errors produced while building or mutating a `Society`.
#[derive(Debug, Error)]
pub enum SocietyError {
    #[error("distribution `{name}` sums to {sum}, expected 1")]
    NotNormalised { name: String, sum: f64 },

    #[error("distribution `{0}` is empty")]
    EmptyDistribution(String),

    #[error("probability {value} for `{name}` is outside [0, 1]")]
    ProbabilityOutOfRange { name: String, value: f64 },

    #[error("trait `{trait_name}` is conditioned on `{factor}`, which is not sampled before it")]
    ForwardReference { trait_name: String, factor: String },

    #[error("job kind `{0}` has an empty retention curve")]
    EmptyRetention(String),

    #[error("job kind `{name}`: {reason}")]
    InvalidJobKind { name: String, reason: String },

    #[error("{0} job kinds exceed the id range")]
    TooManyJobKinds(usize),

    #[error("invalid spatial layout: {0}")]
    InvalidLayout(String),

    #[error("unknown job kind {0}")]
    UnknownJobKind(JobKindId),

    #[error("unknown society parameter `{0}`")]
    UnknownParameter(String),

    #[error("invalid value {value} for society parameter `{name}`")]
    InvalidParameter { name: &'static str, value: f64 },
}

pub type SocietyResult<T> = Result<T, SocietyError>;
