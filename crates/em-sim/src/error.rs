use em_agent::AgentError;
use em_core::EmError;
use em_market::MarketError;
use em_society::SocietyError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] EmError),

    #[error("society configuration error: {0}")]
    Society(#[from] SocietyError),

    #[error("agent store error: {0}")]
    Agent(#[from] AgentError),

    #[error("labor market error: {0}")]
    Market(#[from] MarketError),
}

pub type SimResult<T> = Result<T, SimError>;
