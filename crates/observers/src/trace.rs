use std::marker::PhantomData;

use numkit_core::Observer;
use tracing::Level;

use crate::traits::IterationEvent;

/// Logs every solver evaluation as a structured `tracing` event.
///
/// Each record carries the fields `solver`, `itr`, `x`, `f` and `df`. The
/// observer never returns an action, so it does not change the solve.
///
/// ```rust
/// use numkit_observers::TracingObserver;
/// use numkit_solvers::newton;
///
/// let parabola = (|x: f64| x * x - 4.0, |x: f64| 2.0 * x);
/// let observer: TracingObserver = TracingObserver::new("newton");
/// let solution = newton::solve(&parabola, 1.0, &newton::Config::default(), observer).unwrap();
/// assert!((solution.x - 2.0).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TracingObserver<A = numkit_solvers::Action> {
    solver: &'static str,
    level: Level,
    _action: PhantomData<fn() -> A>,
}

impl<A> TracingObserver<A> {
    /// Creates an observer that logs at `DEBUG` under the given solver label.
    #[must_use]
    pub fn new(solver: &'static str) -> Self {
        Self::with_level(solver, Level::DEBUG)
    }

    /// Creates an observer that logs at the given level.
    #[must_use]
    pub fn with_level(solver: &'static str, level: Level) -> Self {
        Self {
            solver,
            level,
            _action: PhantomData,
        }
    }

    /// Returns the level records are emitted at.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }
}

impl<E: IterationEvent, A> Observer<E, A> for TracingObserver<A> {
    fn observe(&mut self, event: &E) -> Option<A> {
        let solver = self.solver;
        let itr = event.iter();
        let x = event.x();
        let f = event.value();
        let df = event.derivative();

        // Callsite levels must be constant.
        match self.level {
            Level::ERROR => tracing::error!(solver, itr, x, f, df, "iteration"),
            Level::WARN => tracing::warn!(solver, itr, x, f, df, "iteration"),
            Level::INFO => tracing::info!(solver, itr, x, f, df, "iteration"),
            Level::DEBUG => tracing::debug!(solver, itr, x, f, df, "iteration"),
            _ => tracing::trace!(solver, itr, x, f, df, "iteration"),
        }

        None
    }
}
