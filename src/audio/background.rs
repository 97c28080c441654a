//! The ambient bed thread.
//!
//! Independent of the foreground narration: its own output stream, its own
//! sink, its own command channel. Sources loop forever and play at a reduced
//! volume so they never mask the narration. The bed cycles through a small
//! static list of ambient tracks without wrapping.

use std::path::PathBuf;
use std::sync::mpsc::Receiver;
use std::thread::{self, JoinHandle};

use log::{debug, warn};
use rodio::{OutputStream, OutputStreamBuilder, Sink};

use crate::catalog::{ambient_tracks, locate_ambient, AmbientTrack};

use super::sink::create_looping_sink;
use super::types::{AmbientHandle, BackgroundCmd, PlayerError};

/// Toggle with nothing loaded loads first, then proceeds to flip play/pause
/// exactly once. `try_load` runs at most one load attempt; its result
/// decides whether the flip happens at all.
pub(super) fn toggle_after_load(loaded: bool, try_load: impl FnOnce() -> bool) -> bool {
    if loaded {
        return true;
    }
    try_load()
}

struct Background {
    stream: Option<OutputStream>,
    sink: Option<Sink>,
    tracks: &'static [AmbientTrack],
    index: usize,
    volume: f32,
    playing: bool,
    root: PathBuf,
    info: AmbientHandle,
}

impl Background {
    fn publish(&self) {
        if let Ok(mut info) = self.info.lock() {
            info.track_index = self.index;
            info.track_name = self
                .sink
                .is_some()
                .then(|| self.tracks[self.index].name.to_string());
            info.playing = self.playing;
            info.volume = self.volume;
        }
    }

    /// One load attempt for the current ambient track. Failures are logged;
    /// the bed simply stays silent.
    fn load_current(&mut self) -> bool {
        let Some(stream) = self.stream.as_ref() else {
            warn!("ambient: no output stream");
            return false;
        };
        let track = &self.tracks[self.index];
        let path = match locate_ambient(&self.root, track.file_name) {
            Ok(p) => p,
            Err(e) => {
                warn!("ambient: {e}");
                return false;
            }
        };
        match create_looping_sink(stream, &path, self.volume) {
            Ok(sink) => {
                debug!("ambient: loaded {}", track.name);
                self.sink = Some(sink);
                true
            }
            Err(e) => {
                warn!("ambient: {e}");
                false
            }
        }
    }

    fn toggle(&mut self) {
        let proceed = toggle_after_load(self.sink.is_some(), || self.load_current());
        if !proceed {
            self.playing = false;
            self.publish();
            return;
        }
        let Some(sink) = self.sink.as_ref() else {
            return;
        };
        if self.playing {
            sink.pause();
            self.playing = false;
        } else {
            sink.play();
            self.playing = true;
        }
        self.publish();
    }

    /// Cycle the bed. No wrap: `step` is ignored at the list boundaries.
    fn cycle(&mut self, step: isize) {
        let next = self.index as isize + step;
        if next < 0 || next as usize >= self.tracks.len() {
            return;
        }

        let was_playing = self.playing;
        if let Some(s) = self.sink.take() {
            s.stop();
        }
        self.index = next as usize;
        self.playing = false;

        if self.load_current() && was_playing {
            if let Some(sink) = self.sink.as_ref() {
                sink.play();
                self.playing = true;
            }
        }
        self.publish();
    }

    fn set_volume(&mut self, volume: f32) {
        // The engine treats >1.0 as amplification.
        self.volume = volume.clamp(0.0, 1.0);
        if let Some(sink) = self.sink.as_ref() {
            sink.set_volume(self.volume);
        }
        self.publish();
    }

    fn stop(&mut self) {
        if let Some(sink) = self.sink.as_ref() {
            sink.pause();
        }
        self.playing = false;
        self.publish();
    }
}

pub(super) fn spawn_background(
    rx: Receiver<BackgroundCmd>,
    info: AmbientHandle,
    root: PathBuf,
    volume: f32,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let stream = match OutputStreamBuilder::open_default_stream() {
            Ok(mut s) => {
                s.log_on_drop(false);
                Some(s)
            }
            Err(e) => {
                warn!(
                    "ambient: {}",
                    PlayerError::SessionSetup(e.to_string())
                );
                None
            }
        };

        let mut bg = Background {
            stream,
            sink: None,
            tracks: ambient_tracks(),
            index: 0,
            volume: volume.clamp(0.0, 1.0),
            playing: false,
            root,
            info,
        };
        bg.publish();

        while let Ok(cmd) = rx.recv() {
            match cmd {
                BackgroundCmd::Toggle => bg.toggle(),
                BackgroundCmd::Next => bg.cycle(1),
                BackgroundCmd::Prev => bg.cycle(-1),
                BackgroundCmd::SetVolume(v) => bg.set_volume(v),
                BackgroundCmd::Stop => bg.stop(),
                BackgroundCmd::Quit => {
                    if let Some(s) = bg.sink.take() {
                        s.stop();
                    }
                    break;
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::super::types::AmbientInfo;
    use super::*;

    fn playing_bed() -> Background {
        let mut info = AmbientInfo::new(ambient_tracks().len(), 0.3);
        info.track_index = 1;
        info.playing = true;

        Background {
            stream: None,
            sink: None,
            tracks: ambient_tracks(),
            index: 1,
            volume: 0.3,
            playing: true,
            root: PathBuf::from("assets"),
            info: Arc::new(Mutex::new(info)),
        }
    }

    #[test]
    fn stop_marks_the_bed_not_playing() {
        let mut bg = playing_bed();
        bg.stop();

        assert!(!bg.playing);
        let shared = bg.info.lock().unwrap();
        assert!(!shared.playing);
        // Stop keeps the bed's position in the ambient list.
        assert_eq!(shared.track_index, 1);
    }

    #[test]
    fn set_volume_clamps_and_publishes() {
        let mut bg = playing_bed();
        bg.set_volume(1.5);
        assert_eq!(bg.info.lock().unwrap().volume, 1.0);
        bg.set_volume(-0.2);
        assert_eq!(bg.info.lock().unwrap().volume, 0.0);
    }
}
