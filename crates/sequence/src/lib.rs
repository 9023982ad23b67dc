//! Utilities over numeric sequences.
//!
//! Every function borrows its input and returns freshly allocated results;
//! nothing is mutated in place.
//!
//! - [`cumulative_sum`] — running totals
//! - [`average`] — arithmetic mean
//! - [`intersection`] — order-preserving membership filter
//! - [`bracket`] — tightest enclosing pair of values around a target
//! - [`Progress`] — periodic `current/total` reporting for long loops

mod accumulate;
mod bracket;
mod error;
mod intersection;

pub mod progress;

pub use accumulate::{average, cumulative_sum};
pub use bracket::{Bracket, bracket};
pub use error::Error;
pub use intersection::intersection;
pub use progress::Progress;
