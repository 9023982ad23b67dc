//! Newton's method for finding a root of a scalar function.
//!
//! # Algorithm
//!
//! Starting from an initial guess, the solver repeatedly applies
//!
//! ```text
//! x ← x − f(x) / f'(x)
//! ```
//!
//! until `|f(x)| < tolerance` or the iteration limit is reached, and returns
//! the last iterate.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per evaluation: one before each update and
//! one for the final iterate, so an unobserved trace of a solve that took `n`
//! updates has `n + 1` events. Observers can return [`Action::StopEarly`] to
//! halt at the current iterate.
//!
//! # Limitations
//!
//! A zero derivative at an iterate that still needs updating is fatal and is
//! reported as [`Error::ZeroDerivative`]. Convergence is not guaranteed for
//! poor initial guesses.
//!
//! [`Action::StopEarly`]: crate::Action::StopEarly

mod config;
mod error;
mod event;


pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;

use numkit_core::{Differentiable, Observer};

use crate::{Action, Solution, Status};

/// Finds a root of `function` using Newton's method.
///
/// The observer receives an [`Event`] for every evaluation, including the
/// final one. See the [module docs](self) for details.
///
/// # Errors
///
/// Returns [`Error::ZeroDerivative`] if `f'(x)` is zero at an iterate that
/// has not converged, or [`Error::NonFiniteEvaluation`] if the iterate or
/// either evaluation is non-finite.
pub fn solve<F, Obs>(
    function: &F,
    initial: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Differentiable + ?Sized,
    Obs: Observer<Event, Action>,
{
    let mut x = initial;
    let mut iter = 0;

    loop {
        let value = function.value(x);
        let derivative = function.derivative(x);

        if !(x.is_finite() && value.is_finite() && derivative.is_finite()) {
            return Err(Error::NonFiniteEvaluation { x, iter });
        }

        let event = Event {
            iter,
            x,
            value,
            derivative,
        };

        let status = if let Some(Action::StopEarly) = observer.observe(&event) {
            Some(Status::StoppedByObserver)
        } else if value.abs() < config.tolerance() {
            Some(Status::Converged)
        } else if iter >= config.max_iters() {
            Some(Status::MaxIters)
        } else {
            None
        };

        if let Some(status) = status {
            return Ok(Solution::finish(
                "newton", status, iter, x, value, derivative,
            ));
        }

        #[allow(clippy::float_cmp)]
        if derivative == 0.0 {
            return Err(Error::ZeroDerivative { x, iter });
        }

        x -= value / derivative;
        iter += 1;
    }
}

/// Runs Newton's method without observation.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve`].
pub fn solve_unobserved<F>(function: &F, initial: f64, config: &Config) -> Result<Solution, Error>
where
    F: Differentiable + ?Sized,
{
    solve(function, initial, config, ())
}
