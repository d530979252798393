use em_agent::AgentError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MarketError {
    #[error("agent store error during matching: {0}")]
    Agent(#[from] AgentError),
}

pub type MarketResult<T> = Result<T, MarketError>;
