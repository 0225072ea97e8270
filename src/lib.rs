//! Race an asynchronous operation against a deadline.
//!
//! The winner's outcome is returned and the loser is torn down before the
//! race resolves: a timed-out operation is dropped (or, in the spawned form,
//! cancelled and awaited), and a finished operation disarms the timer.

mod error;
mod race;
mod task;

pub use crate::error::*;
pub use crate::race::{race, race_at};
pub use crate::task::race_spawned;
