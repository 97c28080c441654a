//! The playback facade owned by the player screen.
//!
//! All operations are synchronous sends into the two player threads; the
//! screen polls the shared handles for state. Send failures after a thread
//! exits are ignored on purpose.

use std::path::PathBuf;
use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

use crate::config::{AssetSettings, AudioSettings};

use super::background::spawn_background;
use super::thread::spawn_foreground;
use super::types::{
    AmbientHandle, AmbientInfo, BackgroundCmd, ForegroundCmd, PlaybackHandle, PlaybackInfo,
    TrackSource,
};
use crate::catalog::ambient_tracks;

pub struct Player {
    fg_tx: Sender<ForegroundCmd>,
    bg_tx: Sender<BackgroundCmd>,
    playback: PlaybackHandle,
    ambient: AmbientHandle,
    joins: Mutex<Vec<JoinHandle<()>>>,
}

impl Player {
    pub fn new(assets: AssetSettings, audio: AudioSettings) -> Self {
        let (fg_tx, fg_rx) = mpsc::channel::<ForegroundCmd>();
        let (bg_tx, bg_rx) = mpsc::channel::<BackgroundCmd>();

        let playback: PlaybackHandle = Arc::new(Mutex::new(PlaybackInfo::default()));
        let ambient: AmbientHandle = Arc::new(Mutex::new(AmbientInfo::new(
            ambient_tracks().len(),
            audio.background_volume,
        )));

        let root = PathBuf::from(&assets.root);
        let fg_join = spawn_foreground(fg_rx, playback.clone(), assets, audio.clone());
        let bg_join = spawn_background(bg_rx, ambient.clone(), root, audio.background_volume);

        Self {
            fg_tx,
            bg_tx,
            playback,
            ambient,
            joins: Mutex::new(vec![fg_join, bg_join]),
        }
    }

    pub fn playback_handle(&self) -> PlaybackHandle {
        self.playback.clone()
    }

    pub fn ambient_handle(&self) -> AmbientHandle {
        self.ambient.clone()
    }

    pub fn load(&self, source: TrackSource) {
        let _ = self.fg_tx.send(ForegroundCmd::Load(source));
    }

    pub fn play(&self) {
        let _ = self.fg_tx.send(ForegroundCmd::Play);
    }

    pub fn pause(&self) {
        let _ = self.fg_tx.send(ForegroundCmd::Pause);
    }

    pub fn toggle(&self) {
        let _ = self.fg_tx.send(ForegroundCmd::Toggle);
    }

    pub fn seek(&self, position: Duration) {
        let _ = self.fg_tx.send(ForegroundCmd::Seek(position));
    }

    pub fn skip_forward(&self, delta: Duration) {
        let _ = self.fg_tx.send(ForegroundCmd::SkipForward(delta));
    }

    pub fn skip_backward(&self, delta: Duration) {
        let _ = self.fg_tx.send(ForegroundCmd::SkipBackward(delta));
    }

    pub fn set_rate(&self, rate: f32) {
        let _ = self.fg_tx.send(ForegroundCmd::SetRate(rate));
    }

    /// Session end: halting the narration also silences the ambient bed.
    pub fn stop(&self) {
        let _ = self.fg_tx.send(ForegroundCmd::Stop);
        let _ = self.bg_tx.send(BackgroundCmd::Stop);
    }

    pub fn toggle_background(&self) {
        let _ = self.bg_tx.send(BackgroundCmd::Toggle);
    }

    pub fn next_background(&self) {
        let _ = self.bg_tx.send(BackgroundCmd::Next);
    }

    pub fn previous_background(&self) {
        let _ = self.bg_tx.send(BackgroundCmd::Prev);
    }

    pub fn set_background_volume(&self, volume: f32) {
        let _ = self.bg_tx.send(BackgroundCmd::SetVolume(volume));
    }

    /// Release the engine: quit both threads and wait for them. Called when
    /// the owning screen goes away; the only cancellation semantic there is.
    pub fn shutdown(&self) {
        let _ = self.fg_tx.send(ForegroundCmd::Quit);
        let _ = self.bg_tx.send(BackgroundCmd::Quit);

        if let Ok(mut joins) = self.joins.lock() {
            for handle in joins.drain(..) {
                let _ = handle.join();
            }
        }
    }
}
