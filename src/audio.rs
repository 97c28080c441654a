//! The playback component.
//!
//! Two dedicated threads own the media engine: one for the foreground
//! narration, one for the looping ambient bed. Each is driven by a command
//! channel and publishes observable state through a shared handle; the
//! [`Player`] facade owns both and is the only surface the rest of the app
//! talks to. Failures never cross the component boundary: they are recorded
//! as messages in the shared state for the interface to display.

mod background;
mod player;
mod sink;
mod thread;
mod types;

pub use player::Player;
pub use types::{
    clamp_rate, AmbientHandle, AmbientInfo, BackgroundCmd, ForegroundCmd, PlaybackHandle,
    PlaybackInfo, PlayerError, PlayerState, TrackSource,
};

#[cfg(test)]
mod tests;
