//! Application model types: `App` and `Screen`.
//!
//! The `App` struct holds navigation state, preferences, favorites and the
//! shared playback handles used by the UI and the event loop. Playback
//! commands themselves are issued by the event loop through the `Player`
//! facade; the model stays pure and unit-testable.

mod model;

pub use model::{App, Screen};

#[cfg(test)]
mod tests;
