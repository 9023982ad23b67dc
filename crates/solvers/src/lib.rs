//! Iterative solvers for scalar functions of one variable.
//!
//! Both solvers take a [`Differentiable`] function, an initial guess, a
//! validated config, and an [`Observer`] that sees one event per evaluation.
//!
//! # Solvers
//!
//! - [`newton`] — root finding with Newton's method, `x ← x − f(x)/f'(x)`
//! - [`gradient_descent`] — minimization with fixed-step gradient descent,
//!   `x ← x − α·f'(x)`
//!
//! [`Differentiable`]: numkit_core::Differentiable
//! [`Observer`]: numkit_core::Observer

mod action;
mod solution;

pub mod gradient_descent;
pub mod newton;

pub use action::Action;
pub use solution::{Solution, Status};
