use std::collections::TryReserveError;

use bf_core::{BinId, CoreError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Invalid(#[from] CoreError),

    #[error("bin {0} already exists")]
    DuplicateBin(BinId),

    #[error("bin {0} not found")]
    BinNotFound(BinId),

    /// Benign: there was nothing to operate on.
    #[error("no bins in the registry")]
    RegistryEmpty,

    #[error("area pool is empty")]
    EmptyAreaPool,

    #[error("bin id space exhausted")]
    IdsExhausted,

    #[error("registry storage could not grow: {0}")]
    Capacity(#[from] TryReserveError),
}

impl DispatchError {
    /// `true` for "nothing to do" conditions that callers usually report as
    /// information rather than failure.
    pub fn is_empty_state(&self) -> bool {
        matches!(self, DispatchError::RegistryEmpty)
    }
}

pub type DispatchResult<T> = Result<T, DispatchError>;
