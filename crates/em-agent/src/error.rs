use thiserror::Error;

use em_core::{EmError, IndividualId, JobId};

#[derive(Debug, Error)]
pub enum AgentError {
    #[error(transparent)]
    Core(#[from] EmError),

    #[error("employment link broken: {job} and {individual} disagree ({detail})")]
    Inconsistent {
        job:        JobId,
        individual: IndividualId,
        detail:     &'static str,
    },

    #[error("{0} is already employed")]
    AlreadyEmployed(IndividualId),

    #[error("{0} is already filled")]
    AlreadyFilled(JobId),

    #[error("{0} is not employed")]
    NotEmployed(IndividualId),
}

pub type AgentResult<T> = Result<T, AgentError>;
