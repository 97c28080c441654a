use std::collections::HashSet;
use std::io;

use super::*;
use crate::catalog::CategoryKind;
use crate::favorites::{Favorites, FavoritesStore};
use crate::i18n::Language;
use crate::prefs::PrefsFile;
use crate::theme::Theme;

struct NullStore;

impl FavoritesStore for NullStore {
    fn load(&self) -> io::Result<HashSet<String>> {
        Ok(HashSet::new())
    }
    fn save(&self, _ids: &HashSet<String>) -> io::Result<()> {
        Ok(())
    }
}

fn app() -> App {
    App::new(PrefsFile::load(None), Favorites::load(Box::new(NullStore)))
}

fn open_category(app: &mut App, category: CategoryKind) {
    app.selected_category = crate::catalog::categories()
        .iter()
        .position(|c| *c == category)
        .unwrap();
    app.open_selected_category();
}

#[test]
fn starts_on_home_with_defaults() {
    let app = app();
    assert_eq!(app.screen, Screen::Home);
    assert_eq!(app.language(), Language::En);
    assert_eq!(app.theme(), Theme::Rose);
    assert!(app.current_track.is_none());
}

#[test]
fn opening_a_category_lists_its_tracks() {
    let mut app = app();
    open_category(&mut app, CategoryKind::Sleep);

    assert_eq!(app.screen, Screen::Category);
    let tracks = app.visible_tracks();
    assert_eq!(tracks.len(), 3);
    assert!(tracks.iter().all(|t| t.category == CategoryKind::Sleep));
}

#[test]
fn favorites_category_materializes_from_the_set() {
    let mut app = app();
    open_category(&mut app, CategoryKind::Favorites);
    assert!(app.visible_tracks().is_empty());

    app.favorites.add("peaceful-drift");
    app.favorites.add("laser-focus");

    // Catalog order, not insertion order.
    let ids: Vec<&str> = app.visible_tracks().iter().map(|t| t.id).collect();
    let all: Vec<&str> = crate::catalog::all_tracks()
        .iter()
        .filter(|t| ids.contains(&t.id))
        .map(|t| t.id)
        .collect();
    assert_eq!(ids, all);
    assert_eq!(ids.len(), 2);
}

#[test]
fn selection_wraps_both_ways() {
    let mut app = app();
    open_category(&mut app, CategoryKind::Sleep);

    app.select_previous_track();
    assert_eq!(app.selected_track, 2);
    app.select_next_track();
    assert_eq!(app.selected_track, 0);
}

#[test]
fn player_navigation_follows_the_category_list() {
    let mut app = app();
    open_category(&mut app, CategoryKind::Sleep);
    app.selected_track = 1;
    let opened = app.open_player().unwrap();
    assert_eq!(app.screen, Screen::Player);

    assert!(app.has_next_track());
    assert!(app.has_previous_track());

    let next = app.next_track().unwrap();
    assert_ne!(next.id, opened.id);
    assert!(!app.has_next_track());
    assert!(app.has_previous_track());

    // Walk back to the head of the list.
    app.previous_track().unwrap();
    let first = app.previous_track().unwrap();
    assert!(!app.has_previous_track());
    assert_eq!(first.id, app.visible_tracks()[0].id);
    assert!(app.previous_track().is_none());
}

#[test]
fn back_steps_through_the_screen_stack() {
    let mut app = app();
    open_category(&mut app, CategoryKind::Focus);
    app.open_player();

    app.back();
    assert_eq!(app.screen, Screen::Category);
    app.back();
    assert_eq!(app.screen, Screen::Home);
    app.back();
    assert_eq!(app.screen, Screen::Home);
}

#[test]
fn unfavoriting_the_last_entry_keeps_the_cursor_in_bounds() {
    let mut app = app();
    app.favorites.add("peaceful-drift");
    app.favorites.add("laser-focus");
    open_category(&mut app, CategoryKind::Favorites);

    app.selected_track = 1;
    app.toggle_favorite_selected();
    assert_eq!(app.visible_tracks().len(), 1);
    assert_eq!(app.selected_track, 0);
}

#[test]
fn toggling_the_current_track_flips_its_heart() {
    let mut app = app();
    open_category(&mut app, CategoryKind::Anxiety);
    let track = app.open_player().unwrap();

    assert!(!app.favorites.is_favorite(track.id));
    app.toggle_favorite_current();
    assert!(app.favorites.is_favorite(track.id));
    app.toggle_favorite_current();
    assert!(!app.favorites.is_favorite(track.id));
}

#[test]
fn deep_link_jumps_to_the_track_and_its_category() {
    let mut app = app();
    let track = app.deep_link("peaceful-drift").unwrap();

    assert_eq!(app.screen, Screen::Player);
    assert_eq!(app.active_category, track.category);
    assert_eq!(app.current_track.unwrap().id, "peaceful-drift");
    assert_eq!(app.selected_track_ref().unwrap().id, "peaceful-drift");
}

#[test]
fn deep_link_to_unknown_id_is_a_no_op() {
    let mut app = app();
    assert!(app.deep_link("no-such-track").is_none());
    assert_eq!(app.screen, Screen::Home);
    assert!(app.current_track.is_none());
}

#[test]
fn toggling_language_and_theme_round_robin() {
    let mut app = app();
    app.toggle_language();
    assert_eq!(app.language(), Language::Es);
    app.toggle_language();
    assert_eq!(app.language(), Language::En);

    app.cycle_theme();
    assert_eq!(app.theme(), Theme::Sky);
}
