//! Daily meditation reminders.
//!
//! A scheduler thread sleeps until the configured local hour, picks a random
//! track from the catalog, and publishes a [`ReminderEvent`] on an in-process
//! channel. The app layer consumes the event and deep-links into the
//! corresponding category and track. This channel is the whole delivery
//! mechanism; there is no platform notification integration.

use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use chrono::{Local, NaiveDateTime};
use log::{debug, warn};
use rand::seq::IndexedRandom;

use crate::catalog::{all_tracks, Track};
use crate::config::ReminderSettings;

/// Published when the daily reminder fires. Carries only the track identity;
/// consumers resolve it against the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderEvent {
    pub track_id: String,
}

/// Next occurrence of `hour:00` strictly after `now`: today if the hour is
/// still ahead, otherwise tomorrow. `hour` is validated upstream (0-23).
pub fn next_fire_at(now: NaiveDateTime, hour: u32) -> NaiveDateTime {
    let at = now.date().and_hms_opt(hour, 0, 0).unwrap_or(now);
    if at > now {
        at
    } else {
        at + chrono::Duration::days(1)
    }
}

/// Random catalog pick for the reminder body.
pub fn pick_track() -> Option<&'static Track> {
    all_tracks().choose(&mut rand::rng())
}

/// Spawn the scheduler. The thread lives for the rest of the process and
/// exits when the receiving side goes away.
pub fn spawn_scheduler(settings: ReminderSettings, tx: Sender<ReminderEvent>) -> JoinHandle<()> {
    thread::spawn(move || {
        loop {
            let now = Local::now().naive_local();
            let fire = next_fire_at(now, settings.hour);
            let wait = (fire - now).to_std().unwrap_or(Duration::ZERO);
            debug!("reminder: next fire at {fire}");
            thread::sleep(wait);

            let Some(track) = pick_track() else {
                warn!("reminder: empty catalog, nothing to suggest");
                continue;
            };
            let event = ReminderEvent {
                track_id: track.id.to_string(),
            };
            if tx.send(event).is_err() {
                break;
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 27)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn fires_today_when_the_hour_is_still_ahead() {
        let next = next_fire_at(at(6, 30), 8);
        assert_eq!(next, at(8, 0));
    }

    #[test]
    fn rolls_over_to_tomorrow_once_the_hour_passed() {
        let next = next_fire_at(at(9, 15), 8);
        assert_eq!(next, at(8, 0) + chrono::Duration::days(1));
    }

    #[test]
    fn exactly_on_the_hour_schedules_tomorrow() {
        let next = next_fire_at(at(8, 0), 8);
        assert_eq!(next, at(8, 0) + chrono::Duration::days(1));
    }

    #[test]
    fn pick_track_draws_from_the_catalog() {
        let track = pick_track().unwrap();
        assert!(crate::catalog::track_by_id(track.id).is_some());
    }
}
