//! Audio-related small types and handles.
//!
//! This module defines the command enums, the shared observable state for
//! both players, and the error taxonomy of the playback component.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use thiserror::Error;

use crate::catalog::Track;
use crate::i18n::Language;

/// Playback rate bounds. `set_rate` clamps into this range.
pub const MIN_RATE: f32 = 0.5;
pub const MAX_RATE: f32 = 2.0;

pub fn clamp_rate(rate: f32) -> f32 {
    rate.clamp(MIN_RATE, MAX_RATE)
}

/// Everything that can go wrong inside the playback component. None of these
/// propagate: they end up as a message in [`PlaybackInfo::error`].
#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("no audio loaded")]
    NoResourceLoaded,
    #[error("failed to set up audio output: {0}")]
    SessionSetup(String),
    #[error("audio file not found: {0}")]
    ResourceNotFound(String),
    #[error("failed to decode {name}: {reason}")]
    Decode { name: String, reason: String },
}

/// Foreground player state machine.
///
/// `Finished` is entered only through the engine draining the track; it
/// behaves like `Stopped` except it is not caller-initiated.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum PlayerState {
    #[default]
    Empty,
    Loaded,
    Playing,
    Paused,
    Finished,
    Stopped,
}

impl PlayerState {
    pub fn is_playing(self) -> bool {
        matches!(self, PlayerState::Playing)
    }
}

/// A request to load one track. Resource resolution happens inside the
/// player thread so lookup failures land in the shared error slot.
#[derive(Debug, Clone)]
pub struct TrackSource {
    pub id: String,
    pub category_folder: String,
    pub file_name: String,
    /// Start playback shortly after a successful load.
    pub autoplay: bool,
}

impl TrackSource {
    pub fn from_track(track: &Track, lang: Language, autoplay: bool) -> Self {
        Self {
            id: track.id.to_string(),
            category_folder: track.category.folder().to_string(),
            file_name: track.audio_file(lang).to_string(),
            autoplay,
        }
    }
}

#[derive(Debug)]
pub enum ForegroundCmd {
    /// Load a track, replacing whatever is loaded.
    Load(TrackSource),
    Play,
    Pause,
    /// Toggle pause/resume.
    Toggle,
    /// Jump to an absolute position. No clamping; callers clamp.
    Seek(Duration),
    /// Skip ahead, clamped to the track duration.
    SkipForward(Duration),
    /// Skip back, clamped to zero.
    SkipBackward(Duration),
    /// Change the playback rate (clamped to [0.5, 2.0]), audible immediately.
    SetRate(f32),
    /// Halt playback and zero the position.
    Stop,
    /// Quit the player thread.
    Quit,
}

#[derive(Debug)]
pub enum BackgroundCmd {
    /// Flip play/pause, loading the current ambient track first if needed.
    Toggle,
    /// Cycle to the next ambient track.
    Next,
    /// Cycle to the previous ambient track.
    Prev,
    /// Set the ambient volume, clamped to [0.0, 1.0].
    SetVolume(f32),
    Stop,
    Quit,
}

/// Runtime playback information shared with the UI.
#[derive(Debug, Clone)]
pub struct PlaybackInfo {
    /// Identifier of the current track, kept across Stop/Finished so the
    /// navigator retains its position.
    pub track_id: Option<String>,
    pub state: PlayerState,
    /// Elapsed playback time, mirrored by the progress clock at 10 Hz.
    pub elapsed: Duration,
    /// Track duration, fixed once loaded.
    pub duration: Duration,
    pub rate: f32,
    /// Last failure, cleared on a successful load.
    pub error: Option<String>,
}

impl Default for PlaybackInfo {
    fn default() -> Self {
        Self {
            track_id: None,
            state: PlayerState::Empty,
            elapsed: Duration::ZERO,
            duration: Duration::ZERO,
            rate: 1.0,
            error: None,
        }
    }
}

/// Runtime state of the ambient bed shared with the UI.
#[derive(Debug, Clone)]
pub struct AmbientInfo {
    pub track_index: usize,
    pub track_count: usize,
    /// Name of the loaded ambient track, if any.
    pub track_name: Option<String>,
    pub playing: bool,
    pub volume: f32,
}

impl AmbientInfo {
    pub fn new(track_count: usize, volume: f32) -> Self {
        Self {
            track_index: 0,
            track_count,
            track_name: None,
            playing: false,
            volume,
        }
    }

    pub fn has_next(&self) -> bool {
        self.track_index + 1 < self.track_count
    }

    pub fn has_previous(&self) -> bool {
        self.track_index > 0
    }

    pub fn has_multiple(&self) -> bool {
        self.track_count > 1
    }
}

pub type PlaybackHandle = Arc<Mutex<PlaybackInfo>>;
pub type AmbientHandle = Arc<Mutex<AmbientInfo>>;
