use thiserror::Error;

/// Errors returned by the sequence utilities.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("sequence is empty")]
    EmptySequence,

    #[error("target {target} lies outside the sequence range [{min}, {max}]")]
    OutOfRange { target: f64, min: f64, max: f64 },
}
