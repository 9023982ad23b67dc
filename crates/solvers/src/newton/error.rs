use thiserror::Error;

/// Errors that can occur while running Newton's method.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("zero derivative at x = {x} (iteration {iter})")]
    ZeroDerivative { x: f64, iter: usize },

    #[error("non-finite evaluation at x = {x} (iteration {iter})")]
    NonFiniteEvaluation { x: f64, iter: usize },
}
