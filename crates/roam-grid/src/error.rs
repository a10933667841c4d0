//! Grid-subsystem error type.

use thiserror::Error;

use roam_core::Cell;

/// Errors produced by `roam-grid`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("no path from {from} to {to}")]
    NoPath { from: Cell, to: Cell },

    #[error("region has no accessible cell")]
    EmptyRegion,

    #[error("no accessible cell found after {attempts} attempts")]
    SamplingExhausted { attempts: u32 },
}

pub type GridResult<T> = Result<T, GridError>;
