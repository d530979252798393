use em_sim::SimError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("simulation failed: {0}")]
    Sim(#[from] SimError),

    #[error("unknown action `{0}`")]
    UnknownAction(String),
}

pub type CacheResult<T> = Result<T, CacheError>;
