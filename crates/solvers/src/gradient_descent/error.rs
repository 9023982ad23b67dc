use thiserror::Error;

/// Errors that can occur while running gradient descent.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("non-finite evaluation at x = {x} (iteration {iter}); alpha may be too large")]
    NonFiniteEvaluation { x: f64, iter: usize },
}
