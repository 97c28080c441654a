use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

mod app;
mod audio;
mod catalog;
mod config;
mod favorites;
mod i18n;
mod navigator;
mod prefs;
mod reminders;
mod theme;
mod ui;

use app::{App, Screen};
use audio::{Player, TrackSource};
use favorites::{default_favorites_path, Favorites, JsonFavoritesStore};
use prefs::{default_prefs_path, PrefsFile};
use reminders::ReminderEvent;

fn load_settings() -> config::Settings {
    match config::Settings::load() {
        Ok(s) => {
            if let Err(msg) = s.validate() {
                eprintln!("calmo: invalid config, using defaults: {msg}");
                config::Settings::default()
            } else {
                s
            }
        }
        Err(e) => {
            // Config is optional; failures should not prevent the app from starting.
            eprintln!("calmo: failed to load config, using defaults: {e}");
            config::Settings::default()
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("CALMO_LOG", "warn"))
        .init();

    let settings = load_settings();
    let skip = Duration::from_secs(settings.audio.skip_seconds);

    let prefs = PrefsFile::load(default_prefs_path());
    let favorites_path =
        default_favorites_path().unwrap_or_else(|| PathBuf::from("favorites.json"));
    let favorites = Favorites::load(Box::new(JsonFavoritesStore::new(favorites_path)));

    let player = Player::new(settings.assets.clone(), settings.audio.clone());
    let mut app = App::new(prefs, favorites);
    app.set_playback_handle(player.playback_handle());
    app.set_ambient_handle(player.ambient_handle());

    let (reminder_tx, reminder_rx) = mpsc::channel::<ReminderEvent>();
    if settings.reminders.enabled {
        reminders::spawn_scheduler(settings.reminders.clone(), reminder_tx);
    }

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result: Result<(), Box<dyn std::error::Error>> = (|| {
        loop {
            // Reminders deep-link straight into the player.
            while let Ok(ev) = reminder_rx.try_recv() {
                if let Some(track) = app.deep_link(&ev.track_id) {
                    app.notice = Some(format!(
                        "{}: {}",
                        i18n::label(i18n::Label::DailyReminder, app.language()),
                        track.title(app.language())
                    ));
                    player.load(TrackSource::from_track(track, app.language(), true));
                }
            }

            terminal.draw(|f| ui::draw(f, &app))?;

            if !event::poll(Duration::from_millis(50))? {
                continue;
            }
            let Event::Key(key) = event::read()? else {
                continue;
            };
            app.notice = None;

            // Keys shared by every screen.
            match key.code {
                KeyCode::Char('q') => break,
                KeyCode::Char('L') => {
                    app.toggle_language();
                    continue;
                }
                KeyCode::Char('T') => {
                    app.cycle_theme();
                    continue;
                }
                _ => {}
            }

            match app.screen {
                Screen::Home => match key.code {
                    KeyCode::Char('j') | KeyCode::Down => app.select_next_category(),
                    KeyCode::Char('k') | KeyCode::Up => app.select_previous_category(),
                    KeyCode::Enter | KeyCode::Char('l') => app.open_selected_category(),
                    _ => {}
                },
                Screen::Category => match key.code {
                    KeyCode::Char('j') | KeyCode::Down => app.select_next_track(),
                    KeyCode::Char('k') | KeyCode::Up => app.select_previous_track(),
                    KeyCode::Char('f') => app.toggle_favorite_selected(),
                    KeyCode::Enter | KeyCode::Char('l') => {
                        if let Some(track) = app.open_player() {
                            player.load(TrackSource::from_track(track, app.language(), true));
                        }
                    }
                    KeyCode::Char('h') | KeyCode::Esc => app.back(),
                    _ => {}
                },
                Screen::Player => match key.code {
                    KeyCode::Char(' ') => player.toggle(),
                    KeyCode::Char('n') => {
                        if let Some(track) = app.next_track() {
                            player.load(TrackSource::from_track(track, app.language(), true));
                        }
                    }
                    KeyCode::Char('p') => {
                        if let Some(track) = app.previous_track() {
                            player.load(TrackSource::from_track(track, app.language(), true));
                        }
                    }
                    KeyCode::Right => player.skip_forward(skip),
                    KeyCode::Left => player.skip_backward(skip),
                    KeyCode::Char('0') => player.seek(Duration::ZERO),
                    KeyCode::Char('+') | KeyCode::Char('=') => {
                        player.set_rate(current_rate(&app) + 0.25);
                    }
                    KeyCode::Char('-') => {
                        player.set_rate(current_rate(&app) - 0.25);
                    }
                    KeyCode::Char('b') => player.toggle_background(),
                    KeyCode::Char('.') => player.next_background(),
                    KeyCode::Char(',') => player.previous_background(),
                    KeyCode::Char(']') => {
                        player.set_background_volume(current_ambient_volume(&app) + 0.05);
                    }
                    KeyCode::Char('[') => {
                        player.set_background_volume(current_ambient_volume(&app) - 0.05);
                    }
                    KeyCode::Char('f') => app.toggle_favorite_current(),
                    KeyCode::Char('s') => player.stop(),
                    KeyCode::Char('h') | KeyCode::Esc => {
                        // Leaving the player ends the session, ambient included.
                        player.stop();
                        app.back();
                    }
                    _ => {}
                },
            }
        }
        Ok(())
    })();

    player.shutdown();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result
}

/// Snapshot the playback rate for relative speed changes.
fn current_rate(app: &App) -> f32 {
    app.playback_handle
        .as_ref()
        .and_then(|h| h.lock().ok().map(|i| i.rate))
        .unwrap_or(1.0)
}

/// Snapshot the ambient volume for relative volume changes.
fn current_ambient_volume(app: &App) -> f32 {
    app.ambient_handle
        .as_ref()
        .and_then(|h| h.lock().ok().map(|i| i.volume))
        .unwrap_or(0.3)
}
