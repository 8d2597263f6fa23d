//! `lift-dispatch` — assigning waiting hall calls to cars.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`strategy`]   | `DispatchStrategy` trait, `Strategy` enum, `MinWait`       |
//! | [`min_idle`]   | `MinIdle`                                                  |
//! | [`controller`] | `Dispatcher` — claims unclaimed floors via the strategy    |
//! | [`assignment`] | `Assignment` — one floor handed to one car                 |
//! | [`error`]      | `DispatchError`, `DispatchResult<T>`                       |
//!
//! # Claiming
//!
//! A floor with a non-empty queue is *claimed* as soon as any car has it in
//! its target list.  Only unclaimed floors are offered to the strategy, so
//! calling [`Dispatcher::assign`] repeatedly with unchanged state adds
//! nothing after the first call.

pub mod assignment;
pub mod controller;
pub mod error;
pub mod min_idle;
pub mod strategy;

#[cfg(test)]
mod tests;

pub use assignment::Assignment;
pub use controller::Dispatcher;
pub use error::{DispatchError, DispatchResult};
pub use min_idle::MinIdle;
pub use strategy::{DispatchStrategy, MinWait, Strategy};
