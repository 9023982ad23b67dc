//! Fixed-step gradient descent for minimizing a scalar function.
//!
//! # Algorithm
//!
//! Starting from an initial guess, the solver repeatedly applies
//!
//! ```text
//! x ← x − α · f'(x)
//! ```
//!
//! until `|f'(x)| < tolerance` or the iteration limit is reached, and returns
//! the last iterate.
//!
//! # When to Use
//!
//! Gradient descent is appropriate when the derivative is cheap and the step
//! size `α` is known to suit the function's curvature. It makes no attempt to
//! adapt `α`: a step that is too large oscillates or diverges, and choosing a
//! stable value is the caller's responsibility. A divergent run that overflows
//! is reported as [`Error::NonFiniteEvaluation`].
//!
//! # Observer Events
//!
//! Events follow the same timing as [`newton`](crate::newton): one before
//! each update and one for the final iterate.

mod config;
mod error;
mod event;


pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;

use numkit_core::{Differentiable, Observer};

use crate::{Action, Solution, Status};

/// Finds a stationary point of `function` using gradient descent.
///
/// # Errors
///
/// Returns [`Error::NonFiniteEvaluation`] if the iterate or either evaluation
/// becomes non-finite.
pub fn minimize<F, Obs>(
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
        } else if derivative.abs() < config.tolerance() {
            Some(Status::Converged)
        } else if iter >= config.max_iters() {
            Some(Status::MaxIters)
        } else {
            None
        };

        if let Some(status) = status {
            return Ok(Solution::finish(
                "gradient_descent",
                status,
                iter,
                x,
                value,
                derivative,
            ));
        }

        x -= config.alpha() * derivative;
        iter += 1;
    }
}

/// Runs gradient descent without observation.
///
/// # Errors
///
/// Returns an error under the same conditions as [`minimize`].
pub fn minimize_unobserved<F>(function: &F, initial: f64, config: &Config) -> Result<Solution, Error>
where
    F: Differentiable + ?Sized,
{
    minimize(function, initial, config, ())
}
