/// Evaluation emitted by Newton's method.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Number of updates applied so far (0-based).
    pub iter: usize,

    /// Current iterate.
    pub x: f64,

    /// `f(x)`, the residual driven toward zero.
    pub value: f64,

    /// `f'(x)`.
    pub derivative: f64,
}
