//! The static meditation catalog.
//!
//! Tracks and categories are defined at compile time; nothing here mutates at
//! runtime. `locate` maps a catalog entry to an audio file on disk using an
//! ordered fallback search over the assets directory.

mod data;
mod locate;
mod model;

pub use data::{all_tracks, ambient_tracks, categories, track_by_id, tracks_for};
pub use locate::{locate_ambient, locate_track, LocateError};
pub use model::{AmbientTrack, CategoryKind, Track};

#[cfg(test)]
mod tests;
