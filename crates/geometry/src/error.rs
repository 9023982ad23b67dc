use thiserror::Error;

/// Errors returned by the geometry helpers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("vector has zero length")]
    ZeroVector,

    #[error("unsupported angular unit: {0:?}")]
    UnsupportedUnit(String),
}
