#![no_std]

//! Debouncing and event classification for a polled, active-low push-button.
//!
//! Nothing here reads a clock or touches hardware on its own.  The caller
//! samples its monotonic millisecond counter once per loop iteration and hands
//! the timestamp to [`DebouncedInput::poll`] (or [`ToggleInput::poll`]); the
//! pin itself is reached through the [`InputLine`] trait.

mod debounced;
mod line;
mod timing;
mod toggle;

pub use debounced::{DebouncedInput, Edge, EdgeSource};
pub use line::InputLine;
pub use timing::{elapsed_ms, Timing};
pub use toggle::ToggleInput;
