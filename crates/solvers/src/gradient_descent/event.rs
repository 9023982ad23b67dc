/// Evaluation emitted by gradient descent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Number of updates applied so far (0-based).
    pub iter: usize,

    /// Current iterate.
    pub x: f64,

    /// `f(x)`, the objective being minimized.
    pub value: f64,

    /// `f'(x)`, the gradient driven toward zero.
    pub derivative: f64,
}
