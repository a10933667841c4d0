use roam_core::{AgentId, Cell, RoamError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] RoamError),

    #[error("region has no accessible cell; students would never be placed")]
    EmptyRegion,

    #[error("{what} length {got} does not match population {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("speed {speed} for {agent} must be finite and positive")]
    InvalidSpeed { agent: AgentId, speed: f32 },

    #[error("starting cell {cell} for {agent} is not accessible")]
    InaccessibleStart { agent: AgentId, cell: Cell },

    #[error("sprites are not loaded yet")]
    SpritesNotReady,
}

pub type SimResult<T> = Result<T, SimError>;
