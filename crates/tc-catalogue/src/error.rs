//! Catalogue error type.

use thiserror::Error;

/// Errors produced while populating the catalogue.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogueError {
    #[error("duplicate name {0:?}")]
    DuplicateName(String),

    #[error("unknown stop {0:?}")]
    UnknownStop(String),

    #[error("unknown bus {0:?}")]
    UnknownBus(String),
}

/// Shorthand result type for catalogue operations.
pub type CatalogueResult<T> = Result<T, CatalogueError>;
