use std::cell::Cell;
use std::time::Duration;

use super::background::toggle_after_load;
use super::thread::{playback_position, skip_target};
use super::types::{clamp_rate, AmbientInfo, PlaybackInfo, PlayerState};

#[test]
fn rate_is_clamped_into_bounds() {
    assert_eq!(clamp_rate(3.0), 2.0);
    assert_eq!(clamp_rate(0.1), 0.5);
    assert_eq!(clamp_rate(1.0), 1.0);
    assert_eq!(clamp_rate(0.5), 0.5);
    assert_eq!(clamp_rate(2.0), 2.0);
}

#[test]
fn skip_forward_never_exceeds_duration() {
    let duration = Duration::from_secs(60);
    let t = skip_target(Duration::from_secs(55), Duration::from_secs(15), duration, true);
    assert_eq!(t, duration);

    let t = skip_target(Duration::from_secs(10), Duration::from_secs(15), duration, true);
    assert_eq!(t, Duration::from_secs(25));
}

#[test]
fn skip_backward_never_goes_below_zero() {
    let duration = Duration::from_secs(60);
    let t = skip_target(Duration::from_secs(5), Duration::from_secs(15), duration, false);
    assert_eq!(t, Duration::ZERO);

    let t = skip_target(Duration::from_secs(30), Duration::from_secs(15), duration, false);
    assert_eq!(t, Duration::from_secs(15));
}

#[test]
fn playback_position_scales_wall_clock_by_rate() {
    let pos = playback_position(
        Duration::from_secs(10),
        Some(Duration::from_secs(4)),
        1.5,
        Duration::from_secs(600),
    );
    assert_eq!(pos, Duration::from_secs(16));

    // Paused: no running stretch, position is the accumulated value.
    let pos = playback_position(Duration::from_secs(10), None, 2.0, Duration::from_secs(600));
    assert_eq!(pos, Duration::from_secs(10));
}

#[test]
fn playback_position_caps_at_duration() {
    let pos = playback_position(
        Duration::from_secs(590),
        Some(Duration::from_secs(30)),
        1.0,
        Duration::from_secs(600),
    );
    assert_eq!(pos, Duration::from_secs(600));
}

#[test]
fn background_toggle_loads_at_most_once() {
    let attempts = Cell::new(0u32);

    // Nothing loaded and the load succeeds: one attempt, then the flip.
    let proceed = toggle_after_load(false, || {
        attempts.set(attempts.get() + 1);
        true
    });
    assert!(proceed);
    assert_eq!(attempts.get(), 1);

    // Nothing loaded and the load fails: one attempt, no flip, no retry loop.
    let attempts = Cell::new(0u32);
    let proceed = toggle_after_load(false, || {
        attempts.set(attempts.get() + 1);
        false
    });
    assert!(!proceed);
    assert_eq!(attempts.get(), 1);

    // Already loaded: no load attempt at all.
    let attempts = Cell::new(0u32);
    let proceed = toggle_after_load(true, || {
        attempts.set(attempts.get() + 1);
        true
    });
    assert!(proceed);
    assert_eq!(attempts.get(), 0);
}

#[test]
fn ambient_info_cycling_availability() {
    let mut info = AmbientInfo::new(3, 0.3);
    assert!(info.has_next());
    assert!(!info.has_previous());
    assert!(info.has_multiple());

    info.track_index = 1;
    assert!(info.has_next());
    assert!(info.has_previous());

    info.track_index = 2;
    assert!(!info.has_next());
    assert!(info.has_previous());

    let single = AmbientInfo::new(1, 0.3);
    assert!(!single.has_multiple());
}

#[test]
fn playback_info_starts_empty_at_unit_rate() {
    let info = PlaybackInfo::default();
    assert_eq!(info.state, PlayerState::Empty);
    assert!(!info.state.is_playing());
    assert_eq!(info.rate, 1.0);
    assert_eq!(info.elapsed, Duration::ZERO);
    assert!(info.track_id.is_none());
    assert!(info.error.is_none());
}
