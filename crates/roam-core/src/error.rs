//! Workspace error type.
//!
//! Sub-crates define their own error enums and either convert `RoamError`
//! into one of their variants via `From` or keep the two separate.

use thiserror::Error;

use crate::AgentId;

/// The top-level error type for `roam-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum RoamError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `roam-*` crates.
pub type RoamResult<T> = Result<T, RoamError>;
