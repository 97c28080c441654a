//! Utilities for creating `rodio` sinks from resolved audio paths.
//!
//! The helpers here encapsulate opening/decoding a file and preparing a
//! paused `Sink` at the requested start position and rate. Decode and open
//! failures come back as [`PlayerError`] values for the player threads to
//! record; nothing panics.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use rodio::{Decoder, OutputStream, Sink, Source};

use super::types::PlayerError;

fn decode_error(path: &Path, reason: impl ToString) -> PlayerError {
    PlayerError::Decode {
        name: path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("<unknown>")
            .to_string(),
        reason: reason.to_string(),
    }
}

fn open_decoder(path: &Path) -> Result<Decoder<BufReader<File>>, PlayerError> {
    let file = File::open(path).map_err(|e| decode_error(path, e))?;
    Decoder::new(BufReader::new(file)).map_err(|e| decode_error(path, e))
}

/// Create a paused `Sink` that starts playback of `path` at `start_at`,
/// resampled to play at `rate`. `skip_duration` is the seeking primitive;
/// even `Duration::ZERO` is fine.
pub(super) fn create_sink_at(
    stream: &OutputStream,
    path: &Path,
    start_at: Duration,
    rate: f32,
) -> Result<Sink, PlayerError> {
    let source = open_decoder(path)?.skip_duration(start_at).speed(rate);

    let sink = Sink::connect_new(stream.mixer());
    sink.append(source);
    sink.pause();
    Ok(sink)
}

/// Create a paused `Sink` that loops `path` forever at the given volume.
/// Used for the ambient bed; the source is buffered by `repeat_infinite`.
pub(super) fn create_looping_sink(
    stream: &OutputStream,
    path: &Path,
    volume: f32,
) -> Result<Sink, PlayerError> {
    let source = open_decoder(path)?.repeat_infinite();

    let sink = Sink::connect_new(stream.mixer());
    sink.set_volume(volume);
    sink.append(source);
    sink.pause();
    Ok(sink)
}

/// Probe the track duration: tag metadata first, then the decoder's own
/// estimate. Zero when neither source knows.
pub(super) fn probe_duration(path: &Path) -> Duration {
    use lofty::prelude::*;

    if let Ok(tagged) = lofty::read_from_path(path) {
        let d = tagged.properties().duration();
        if d > Duration::ZERO {
            return d;
        }
    }
    open_decoder(path)
        .ok()
        .and_then(|d| d.total_duration())
        .unwrap_or(Duration::ZERO)
}
