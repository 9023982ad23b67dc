//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across Newton's method and gradient descent.
//!
//! # Event traits
//!
//! - [`IterationEvent`] — events that carry an iterate and its evaluation
//! - [`HasResidual`] — events that carry the quantity the solver drives to zero
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use numkit_core::Observer;
//! use numkit_observers::traits::{CanStopEarly, HasResidual};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//! }
//!
//! impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.residual().abs() < self.tolerance).then(A::stop_early)
//!     }
//! }
//! ```

use numkit_solvers::{Action, gradient_descent, newton};

/// An event that reports one solver evaluation.
pub trait IterationEvent {
    /// Returns the number of updates applied before this evaluation.
    fn iter(&self) -> usize;

    /// Returns the evaluated iterate.
    fn x(&self) -> f64;

    /// Returns `f(x)`.
    fn value(&self) -> f64;

    /// Returns `f'(x)`.
    fn derivative(&self) -> f64;
}

/// An event that carries a residual value.
pub trait HasResidual {
    /// Returns the quantity the solver is driving toward zero.
    fn residual(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- newton::Event ---

impl IterationEvent for newton::Event {
    fn iter(&self) -> usize {
        self.iter
    }

    fn x(&self) -> f64 {
        self.x
    }

    fn value(&self) -> f64 {
        self.value
    }

    fn derivative(&self) -> f64 {
        self.derivative
    }
}

impl HasResidual for newton::Event {
    fn residual(&self) -> f64 {
        self.value
    }
}

// --- gradient_descent::Event ---

impl IterationEvent for gradient_descent::Event {
    fn iter(&self) -> usize {
        self.iter
    }

    fn x(&self) -> f64 {
        self.x
    }

    fn value(&self) -> f64 {
        self.value
    }

    fn derivative(&self) -> f64 {
        self.derivative
    }
}

impl HasResidual for gradient_descent::Event {
    fn residual(&self) -> f64 {
        self.derivative
    }
}

// --- CanStopEarly ---

impl CanStopEarly for Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use numkit_core::Observer;
    use numkit_solvers::Status;

    /// Stops once the residual magnitude drops below a threshold.
    struct GoodEnough {
        tolerance: f64,
    }

    impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for GoodEnough {
        fn observe(&mut self, event: &E) -> Option<A> {
            (event.residual().abs() < self.tolerance).then(A::stop_early)
        }
    }

    #[test]
    fn newton_residual_is_function_value() {
        let event = newton::Event {
            iter: 1,
            x: 2.5,
            value: 2.25,
            derivative: 5.0,
        };
        assert!((event.residual() - 2.25).abs() < f64::EPSILON);
    }

    #[test]
    fn gradient_descent_residual_is_derivative() {
        let event = gradient_descent::Event {
            iter: 1,
            x: -0.8,
            value: 0.64,
            derivative: -1.6,
        };
        assert!((event.residual() + 1.6).abs() < f64::EPSILON);
    }

    #[test]
    fn generic_observer_stops_both_solvers() {
        let parabola = (|x: f64| x * x - 4.0, |x: f64| 2.0 * x);

        let config = newton::Config::new(50, 1e-12).expect("valid config");
        let solution = newton::solve(&parabola, 1.0, &config, GoodEnough { tolerance: 0.5 })
            .expect("should stop");
        assert_eq!(solution.status, Status::StoppedByObserver);
        assert!(solution.value.abs() < 0.5);

        let config = gradient_descent::Config::new(100, 0.1, 1e-12).expect("valid config");
        let solution =
            gradient_descent::minimize(&parabola, -1.0, &config, GoodEnough { tolerance: 0.5 })
                .expect("should stop");
        assert_eq!(solution.status, Status::StoppedByObserver);
        assert!(solution.derivative.abs() < 0.5);
    }
}
