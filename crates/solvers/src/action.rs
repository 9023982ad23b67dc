/// Actions an observer can take while a solver iterates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver and return the current iterate.
    StopEarly,
}
