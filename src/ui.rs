//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the three screens (home,
//! category, player) using `ratatui`.

use std::time::Duration;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Padding, Paragraph, Wrap},
};

use crate::app::{App, Screen};
use crate::audio::PlayerState;
use crate::catalog;
use crate::i18n::{label, Label};

/// Format a `Duration` as `MM:SS`.
fn format_mmss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Star string for an editorial rating out of 5.
fn stars(rating: f32) -> String {
    let full = rating.round().clamp(0.0, 5.0) as usize;
    let mut s = String::new();
    for i in 0..5 {
        s.push(if i < full { '★' } else { '☆' });
    }
    s
}

fn controls_text(app: &App) -> String {
    let parts: &[&str] = match app.screen {
        Screen::Home => &["[j/k] up/down", "[enter] open", "[L] language", "[T] theme", "[q] quit"],
        Screen::Category => &[
            "[j/k] up/down",
            "[enter] play",
            "[f] favorite",
            "[h/esc] back",
            "[q] quit",
        ],
        Screen::Player => &[
            "[space] play/pause",
            "[n/p] next/prev",
            "[←/→] skip",
            "[-/+] speed",
            "[b] background",
            "[,/.] background track",
            "[f] favorite",
            "[s] stop",
            "[h/esc] back",
            "[q] quit",
        ],
    };
    parts.join(" | ")
}

fn bordered(title: &str, app: &App) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme().border()))
        .title(format!(" {title} "))
        .padding(Padding {
            left: 1,
            right: 0,
            top: 0,
            bottom: 0,
        })
}

/// Render the entire UI into `frame` from the app model and the shared
/// playback handles.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let lang = app.language();

    // Header; a reminder notice takes over the subtitle until the next key.
    let subtitle = match &app.notice {
        Some(n) => n.clone(),
        None => format!(
            "{} · {}",
            lang.display_name(),
            app.theme().display_name(lang)
        ),
    };
    let header = Paragraph::new(subtitle)
        .alignment(Alignment::Center)
        .style(Style::default().fg(app.theme().accent()))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme().border()))
                .title(label(Label::AppTitle, lang))
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    match app.screen {
        Screen::Home => draw_home(frame, app, chunks[1]),
        Screen::Category => draw_category(frame, app, chunks[1]),
        Screen::Player => draw_player(frame, app, chunks[1]),
    }

    // Footer
    let footer = Paragraph::new(controls_text(app))
        .block(bordered("controls", app))
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[2]);
}

fn draw_home(frame: &mut Frame, app: &App, area: Rect) {
    let lang = app.language();
    let items: Vec<ListItem> = catalog::categories()
        .iter()
        .map(|c| {
            let count = app.list_for(*c).len();
            let line = Line::from(vec![
                Span::styled(format!("{} ", c.icon()), Style::default().fg(c.color())),
                Span::raw(format!("{}  ", c.name(lang))),
                Span::styled(
                    format!("({count}) {}", c.description(lang)),
                    Style::default().add_modifier(Modifier::DIM),
                ),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(bordered(label(Label::Categories, lang), app))
        .highlight_style(
            Style::default()
                .fg(app.theme().accent())
                .add_modifier(Modifier::REVERSED),
        )
        .highlight_symbol("> ");
    let mut state = ratatui::widgets::ListState::default();
    state.select(Some(app.selected_category));
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_category(frame: &mut Frame, app: &App, area: Rect) {
    let lang = app.language();
    let category = app.active_category;
    let tracks = app.visible_tracks();

    let items: Vec<ListItem> = tracks
        .iter()
        .map(|t| {
            let heart = if app.favorites.is_favorite(t.id) {
                Span::styled("♥ ", Style::default().fg(ratatui::style::Color::Red))
            } else {
                Span::raw("  ")
            };
            let line = Line::from(vec![
                heart,
                Span::raw(format!("{}  ", t.title(lang))),
                Span::styled(
                    format!("{}  {}", stars(t.rating), t.description(lang)),
                    Style::default().add_modifier(Modifier::DIM),
                ),
            ]);
            ListItem::new(line)
        })
        .collect();

    let title = format!("{} {}", category.icon(), category.name(lang));
    let list = List::new(items)
        .block(bordered(&title, app))
        .highlight_style(
            Style::default()
                .fg(app.theme().accent())
                .add_modifier(Modifier::REVERSED),
        )
        .highlight_symbol("> ");
    let mut state = ratatui::widgets::ListState::default();
    if !tracks.is_empty() {
        state.select(Some(app.selected_track.min(tracks.len() - 1)));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_player(frame: &mut Frame, app: &App, area: Rect) {
    let lang = app.language();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .split(area);

    let info = app
        .playback_handle
        .as_ref()
        .and_then(|h| h.lock().ok().map(|i| i.clone()));
    let ambient = app
        .ambient_handle
        .as_ref()
        .and_then(|h| h.lock().ok().map(|i| i.clone()));

    // Track panel
    let track_text = match app.current_track {
        Some(t) => {
            let mut lines = vec![
                Line::from(Span::styled(
                    t.title(lang).to_string(),
                    Style::default()
                        .fg(app.theme().accent())
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(t.description(lang).to_string()),
            ];
            let mut tail = format!("{}  {}", stars(t.rating), t.category.name(lang));
            if app.favorites.is_favorite(t.id) {
                tail.push_str("  ♥");
            }
            lines.push(Line::from(Span::styled(
                tail,
                Style::default().add_modifier(Modifier::DIM),
            )));
            lines
        }
        None => vec![Line::from(label(Label::NoTrackLoaded, lang))],
    };
    let track_par =
        Paragraph::new(track_text).block(bordered(label(Label::NowPlaying, lang), app));
    frame.render_widget(track_par, rows[0]);

    // Progress gauge, mirrored from the player thread.
    let (elapsed, duration, state, rate, error) = match &info {
        Some(i) => (i.elapsed, i.duration, i.state, i.rate, i.error.clone()),
        None => (Duration::ZERO, Duration::ZERO, PlayerState::Empty, 1.0, None),
    };
    let ratio = if duration > Duration::ZERO {
        (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let state_label = match state {
        PlayerState::Playing => label(Label::Pause, lang),
        _ => label(Label::Play, lang),
    };
    let gauge_label = format!(
        "{} / {}  [{}]  {} {:.2}x",
        format_mmss(elapsed),
        format_mmss(duration),
        state_label,
        label(Label::Rate, lang),
        rate,
    );
    let gauge = Gauge::default()
        .block(bordered(label(Label::Player, lang), app))
        .gauge_style(Style::default().fg(app.theme().accent()))
        .ratio(ratio)
        .label(gauge_label);
    frame.render_widget(gauge, rows[1]);

    // Ambient bed panel
    let ambient_text = match &ambient {
        Some(a) => {
            let name = a.track_name.as_deref().unwrap_or("-");
            let playing = if a.playing { "▶" } else { "◼" };
            format!(
                "{playing} {name}  ({}/{})  vol {:.0}%",
                a.track_index + 1,
                a.track_count,
                a.volume * 100.0
            )
        }
        None => "-".to_string(),
    };
    let ambient_par =
        Paragraph::new(ambient_text).block(bordered(label(Label::BackgroundMusic, lang), app));
    frame.render_widget(ambient_par, rows[2]);

    // Errors from the player thread land here instead of crashing the UI.
    if let Some(err) = error {
        let err_par = Paragraph::new(Span::styled(
            err,
            Style::default().fg(ratatui::style::Color::Red),
        ))
        .wrap(Wrap { trim: true });
        frame.render_widget(err_par, rows[3]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations_render_as_minutes_and_seconds() {
        assert_eq!(format_mmss(Duration::ZERO), "00:00");
        assert_eq!(format_mmss(Duration::from_secs(65)), "01:05");
        assert_eq!(format_mmss(Duration::from_secs(600)), "10:00");
    }

    #[test]
    fn ratings_round_to_whole_stars() {
        assert_eq!(stars(4.8), "★★★★★");
        assert_eq!(stars(4.2), "★★★★☆");
        assert_eq!(stars(0.0), "☆☆☆☆☆");
    }
}
