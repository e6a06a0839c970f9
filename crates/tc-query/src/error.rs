//! Query-layer error type.

use thiserror::Error;

use tc_catalogue::CatalogueError;
use tc_snapshot::SnapshotError;

/// Everything that can abort a `make_base` or `process_requests` run.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("input parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("input document is missing the {0:?} section")]
    MissingSection(&'static str),

    #[error("invalid input: {0}")]
    Input(String),

    #[error(transparent)]
    Catalogue(#[from] CatalogueError),

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for the query layer.
pub type QueryResult<T> = Result<T, QueryError>;
