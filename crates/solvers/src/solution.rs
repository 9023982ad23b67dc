/// Indicates why the solver stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Converged according to the configured tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of an iterative solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Last iterate.
    pub x: f64,

    /// Function value `f(x)` at the last iterate.
    pub value: f64,

    /// Derivative `f'(x)` at the last iterate.
    pub derivative: f64,

    /// Number of updates applied before the solver stopped.
    pub iters: usize,
}

impl Solution {
    /// Builds a solution from the final evaluation and logs the outcome.
    pub(crate) fn finish(
        solver: &'static str,
        status: Status,
        iters: usize,
        x: f64,
        value: f64,
        derivative: f64,
    ) -> Self {
        tracing::debug!(solver, ?status, iters, x, value, derivative, "solver finished");

        Self {
            status,
            x,
            value,
            derivative,
            iters,
        }
    }
}
