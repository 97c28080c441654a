//! The foreground player thread.
//!
//! Owns the output stream, the active sink, and the progress clock. Commands
//! arrive over a channel; shared state goes out through the
//! [`PlaybackHandle`]. The channel receive timeout doubles as the 10 Hz
//! progress clock: while playing, each timeout mirrors the computed position
//! into the shared state and checks whether the engine drained the track.

use std::path::PathBuf;
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use log::{debug, warn};
use rodio::{OutputStream, OutputStreamBuilder, Sink};

use crate::catalog::{locate_track, LocateError};
use crate::config::{AssetSettings, AudioSettings};

use super::sink::{create_sink_at, probe_duration};
use super::types::{
    clamp_rate, ForegroundCmd, PlaybackHandle, PlayerError, PlayerState, TrackSource,
};

/// Progress clock period.
const TICK: Duration = Duration::from_millis(100);

/// Track position after `running_wall` of wall-clock playback at `rate`,
/// on top of `accumulated` position from earlier play stretches. Capped at
/// `duration` when the duration is known.
pub(super) fn playback_position(
    accumulated: Duration,
    running_wall: Option<Duration>,
    rate: f32,
    duration: Duration,
) -> Duration {
    let advanced = running_wall.map_or(Duration::ZERO, |w| w.mul_f32(rate));
    let position = accumulated + advanced;
    if duration > Duration::ZERO {
        position.min(duration)
    } else {
        position
    }
}

/// Clamped skip target. Forward skips cap at the duration, backward skips
/// saturate at zero.
pub(super) fn skip_target(
    elapsed: Duration,
    delta: Duration,
    duration: Duration,
    forward: bool,
) -> Duration {
    if forward {
        (elapsed + delta).min(duration)
    } else {
        elapsed.saturating_sub(delta)
    }
}

struct Foreground {
    stream: Option<OutputStream>,
    sink: Option<Sink>,
    /// Resolved path of the loaded track; `None` while Empty.
    path: Option<PathBuf>,
    duration: Duration,
    rate: f32,
    /// Track position accumulated across completed play stretches.
    accumulated: Duration,
    /// Wall-clock start of the current play stretch; `None` while paused.
    started_at: Option<Instant>,
    info: PlaybackHandle,
    assets: AssetSettings,
    autoplay_delay: Duration,
}

impl Foreground {
    fn record_error(&self, err: &PlayerError) {
        warn!("player: {err}");
        if let Ok(mut info) = self.info.lock() {
            info.error = Some(err.to_string());
        }
    }

    fn current_position(&self) -> Duration {
        playback_position(
            self.accumulated,
            self.started_at.map(|st| st.elapsed()),
            self.rate,
            self.duration,
        )
    }

    fn is_playing(&self) -> bool {
        self.started_at.is_some()
    }

    fn tick(&mut self) {
        if !self.is_playing() {
            return;
        }
        let drained = self.sink.as_ref().is_none_or(Sink::empty);
        if drained {
            self.finish();
            return;
        }
        let position = self.current_position();
        if let Ok(mut info) = self.info.lock() {
            info.elapsed = position;
        }
    }

    /// Engine-initiated completion: like `stop`, but the ambient bed keeps
    /// playing and the state reads Finished.
    fn finish(&mut self) {
        debug!("player: track finished");
        self.sink = None;
        self.path = None;
        self.accumulated = Duration::ZERO;
        self.started_at = None;
        if let Ok(mut info) = self.info.lock() {
            info.state = PlayerState::Finished;
            info.elapsed = Duration::ZERO;
        }
    }

    fn load(&mut self, source: TrackSource) {
        let Some(stream) = self.stream.as_ref() else {
            self.record_error(&PlayerError::SessionSetup(
                "no audio output stream".to_string(),
            ));
            return;
        };

        let was_playing = self.is_playing();

        let root = PathBuf::from(&self.assets.root);
        let located = locate_track(
            &root,
            &source.category_folder,
            &source.file_name,
            &self.assets.extensions,
        );
        let path = match located {
            Ok(p) => p,
            Err(LocateError::NotFound { file_name, .. }) => {
                self.clear_loaded();
                self.record_error(&PlayerError::ResourceNotFound(file_name));
                return;
            }
        };

        let sink = match create_sink_at(stream, &path, Duration::ZERO, self.rate) {
            Ok(s) => s,
            Err(e) => {
                self.clear_loaded();
                self.record_error(&e);
                return;
            }
        };

        self.duration = probe_duration(&path);
        self.path = Some(path);
        self.sink = Some(sink);
        self.accumulated = Duration::ZERO;
        self.started_at = None;

        if let Ok(mut info) = self.info.lock() {
            info.track_id = Some(source.id.clone());
            info.state = PlayerState::Loaded;
            info.elapsed = Duration::ZERO;
            info.duration = self.duration;
            info.error = None;
        }
        debug!(
            "player: loaded {} ({:?})",
            source.file_name, self.duration
        );

        if was_playing {
            self.play();
        } else if source.autoplay {
            // Give the engine a moment to finish preparing before autoplay.
            thread::sleep(self.autoplay_delay);
            self.play();
        }
    }

    /// Drop the loaded track after a failed load so no stale audio lingers.
    fn clear_loaded(&mut self) {
        self.sink = None;
        self.path = None;
        self.duration = Duration::ZERO;
        self.accumulated = Duration::ZERO;
        self.started_at = None;
        if let Ok(mut info) = self.info.lock() {
            info.track_id = None;
            info.state = PlayerState::Empty;
            info.elapsed = Duration::ZERO;
            info.duration = Duration::ZERO;
        }
    }

    fn play(&mut self) {
        let Some(sink) = self.sink.as_ref() else {
            self.record_error(&PlayerError::NoResourceLoaded);
            return;
        };
        if self.is_playing() {
            return;
        }
        sink.play();
        self.started_at = Some(Instant::now());
        if let Ok(mut info) = self.info.lock() {
            info.state = PlayerState::Playing;
        }
    }

    fn pause(&mut self) {
        let Some(sink) = self.sink.as_ref() else {
            self.record_error(&PlayerError::NoResourceLoaded);
            return;
        };
        if let Some(st) = self.started_at.take() {
            self.accumulated += st.elapsed().mul_f32(self.rate);
        }
        sink.pause();
        if let Ok(mut info) = self.info.lock() {
            info.state = PlayerState::Paused;
            info.elapsed = self.current_position();
        }
    }

    fn toggle(&mut self) {
        if self.sink.is_none() {
            self.record_error(&PlayerError::NoResourceLoaded);
            return;
        }
        if self.is_playing() {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Scrubbing: rebuild the sink and skip into the file. No clamping here;
    /// callers clamp.
    fn seek(&mut self, position: Duration) {
        let Some(path) = self.path.clone() else {
            debug!("player: seek ignored, nothing loaded");
            return;
        };
        let Some(stream) = self.stream.as_ref() else {
            return;
        };

        let was_playing = self.is_playing();
        if let Some(s) = self.sink.as_ref() {
            s.stop();
        }

        let sink = match create_sink_at(stream, &path, position, self.rate) {
            Ok(s) => s,
            Err(e) => {
                self.clear_loaded();
                self.record_error(&e);
                return;
            }
        };

        self.accumulated = position;
        if was_playing {
            sink.play();
            self.started_at = Some(Instant::now());
        } else {
            self.started_at = None;
        }
        self.sink = Some(sink);

        if let Ok(mut info) = self.info.lock() {
            info.elapsed = position;
        }
    }

    fn skip(&mut self, delta: Duration, forward: bool) {
        if self.sink.is_none() {
            return;
        }
        let target = skip_target(self.current_position(), delta, self.duration, forward);
        self.seek(target);
    }

    fn set_rate(&mut self, rate: f32) {
        let rate = clamp_rate(rate);

        // Fold the stretch played at the old rate before switching.
        let position = self.current_position();
        self.rate = rate;
        if let Ok(mut info) = self.info.lock() {
            info.rate = rate;
        }

        // Rebuild the sink so the change is audible without a gap.
        if self.sink.is_some() {
            self.seek(position);
        }
    }

    fn stop(&mut self) {
        if let Some(s) = self.sink.take() {
            s.stop();
        }
        self.path = None;
        self.accumulated = Duration::ZERO;
        self.started_at = None;
        if let Ok(mut info) = self.info.lock() {
            info.state = PlayerState::Stopped;
            info.elapsed = Duration::ZERO;
        }
    }
}

pub(super) fn spawn_foreground(
    rx: Receiver<ForegroundCmd>,
    info: PlaybackHandle,
    assets: AssetSettings,
    audio: AudioSettings,
) -> JoinHandle<()> {
    thread::spawn(move || {
        // A missing output device is recorded, not fatal: the thread stays
        // alive and every load reports the session error.
        let stream = match OutputStreamBuilder::open_default_stream() {
            Ok(mut s) => {
                // rodio logs to stderr when OutputStream is dropped; noisy
                // for a TUI app.
                s.log_on_drop(false);
                Some(s)
            }
            Err(e) => {
                warn!("player: failed to open output stream: {e}");
                if let Ok(mut info) = info.lock() {
                    info.error = Some(PlayerError::SessionSetup(e.to_string()).to_string());
                }
                None
            }
        };

        let mut fg = Foreground {
            stream,
            sink: None,
            path: None,
            duration: Duration::ZERO,
            rate: 1.0,
            accumulated: Duration::ZERO,
            started_at: None,
            info,
            assets,
            autoplay_delay: Duration::from_millis(audio.autoplay_delay_ms),
        };

        loop {
            match rx.recv_timeout(TICK) {
                Ok(cmd) => match cmd {
                    ForegroundCmd::Load(source) => fg.load(source),
                    ForegroundCmd::Play => fg.play(),
                    ForegroundCmd::Pause => fg.pause(),
                    ForegroundCmd::Toggle => fg.toggle(),
                    ForegroundCmd::Seek(t) => fg.seek(t),
                    ForegroundCmd::SkipForward(d) => fg.skip(d, true),
                    ForegroundCmd::SkipBackward(d) => fg.skip(d, false),
                    ForegroundCmd::SetRate(r) => fg.set_rate(r),
                    ForegroundCmd::Stop => fg.stop(),
                    ForegroundCmd::Quit => {
                        if let Some(s) = fg.sink.take() {
                            s.stop();
                        }
                        break;
                    }
                },
                Err(RecvTimeoutError::Timeout) => fg.tick(),
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
    })
}
