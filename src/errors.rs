//! Shared error types used across submodules.

use thiserror::Error;

use crate::crystal::ModelError;

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum PhotonicTmmError {
    /// Wraps model configuration and query errors.
    #[error(transparent)]
    Model(#[from] ModelError),
}
