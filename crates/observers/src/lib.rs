//! Reusable observers for the numkit solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across both solvers in [`numkit_solvers`].
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`IterationEvent`], [`HasResidual`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`TracingObserver`] — emits one `tracing` event per iteration
//! - [`Recorder`] — keeps every event for later inspection
//!
//! [`Observer`]: numkit_core::Observer
//! [`IterationEvent`]: traits::IterationEvent
//! [`HasResidual`]: traits::HasResidual
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod recorder;
mod trace;

pub use recorder::Recorder;
pub use trace::TracingObserver;
