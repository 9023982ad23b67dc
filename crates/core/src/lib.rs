//! Core traits shared by the numkit solvers and observers.
//!
//! - [`Differentiable`] — a scalar function paired with its derivative
//! - [`Observer`] — receives solver events and optionally returns control actions

mod differentiable;
mod observer;

pub use differentiable::Differentiable;
pub use observer::Observer;
