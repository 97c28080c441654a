use log::warn;

use crate::audio::{AmbientHandle, PlaybackHandle};
use crate::catalog::{self, CategoryKind, Track};
use crate::favorites::Favorites;
use crate::i18n::Language;
use crate::navigator;
use crate::prefs::PrefsFile;
use crate::theme::Theme;

/// Which screen the interface is showing.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Category,
    Player,
}

/// The main application model.
pub struct App {
    pub screen: Screen,
    pub prefs: PrefsFile,
    pub favorites: Favorites,

    /// Index into [`catalog::categories`].
    pub selected_category: usize,
    /// Index into the visible track list of the active category.
    pub selected_track: usize,
    /// The category whose ordered list the player navigates. May be the
    /// virtual Favorites category.
    pub active_category: CategoryKind,
    /// Track currently owned by the player screen.
    pub current_track: Option<&'static Track>,
    /// Transient banner (reminder announcements), cleared on the next key.
    pub notice: Option<String>,

    pub playback_handle: Option<PlaybackHandle>,
    pub ambient_handle: Option<AmbientHandle>,
}

impl App {
    pub fn new(prefs: PrefsFile, favorites: Favorites) -> Self {
        Self {
            screen: Screen::Home,
            prefs,
            favorites,
            selected_category: 0,
            selected_track: 0,
            active_category: CategoryKind::Sleep,
            current_track: None,
            notice: None,
            playback_handle: None,
            ambient_handle: None,
        }
    }

    pub fn language(&self) -> Language {
        self.prefs.prefs.language
    }

    pub fn theme(&self) -> Theme {
        self.prefs.prefs.theme
    }

    pub fn toggle_language(&mut self) {
        let next = self.language().toggled();
        self.prefs.set_language(next);
    }

    pub fn cycle_theme(&mut self) {
        let next = self.theme().cycled();
        self.prefs.set_theme(next);
    }

    /// Attach the shared playback handle so the UI can show progress.
    pub fn set_playback_handle(&mut self, h: PlaybackHandle) {
        self.playback_handle = Some(h);
    }

    pub fn set_ambient_handle(&mut self, h: AmbientHandle) {
        self.ambient_handle = Some(h);
    }

    /// Ordered track list for a category. Favorites materializes from the
    /// favorites set in catalog order.
    pub fn list_for(&self, category: CategoryKind) -> Vec<&'static Track> {
        match category {
            CategoryKind::Favorites => catalog::all_tracks()
                .iter()
                .filter(|t| self.favorites.is_favorite(t.id))
                .collect(),
            other => catalog::tracks_for(other),
        }
    }

    pub fn category_under_cursor(&self) -> CategoryKind {
        catalog::categories()[self.selected_category]
    }

    /// Tracks shown on the category screen.
    pub fn visible_tracks(&self) -> Vec<&'static Track> {
        self.list_for(self.active_category)
    }

    pub fn selected_track_ref(&self) -> Option<&'static Track> {
        self.visible_tracks().get(self.selected_track).copied()
    }

    // -- Screen navigation --------------------------------------------------

    pub fn select_next_category(&mut self) {
        let len = catalog::categories().len();
        self.selected_category = (self.selected_category + 1) % len;
    }

    pub fn select_previous_category(&mut self) {
        let len = catalog::categories().len();
        self.selected_category = (self.selected_category + len - 1) % len;
    }

    pub fn select_next_track(&mut self) {
        let len = self.visible_tracks().len();
        if len > 0 {
            self.selected_track = (self.selected_track + 1) % len;
        }
    }

    pub fn select_previous_track(&mut self) {
        let len = self.visible_tracks().len();
        if len > 0 {
            self.selected_track = (self.selected_track + len - 1) % len;
        }
    }

    pub fn open_selected_category(&mut self) {
        self.active_category = self.category_under_cursor();
        self.selected_track = 0;
        self.screen = Screen::Category;
    }

    /// Enter the player for the track under the cursor, returning it so the
    /// caller can issue the load.
    pub fn open_player(&mut self) -> Option<&'static Track> {
        let track = self.selected_track_ref()?;
        self.current_track = Some(track);
        self.screen = Screen::Player;
        Some(track)
    }

    pub fn back(&mut self) {
        self.screen = match self.screen {
            Screen::Player => Screen::Category,
            Screen::Category => Screen::Home,
            Screen::Home => Screen::Home,
        };
    }

    // -- Player track navigation --------------------------------------------

    pub fn has_next_track(&self) -> bool {
        match self.current_track {
            Some(t) => navigator::has_next(&self.visible_tracks(), t.id),
            None => false,
        }
    }

    pub fn has_previous_track(&self) -> bool {
        match self.current_track {
            Some(t) => navigator::has_previous(&self.visible_tracks(), t.id),
            None => false,
        }
    }

    /// Advance to the next track in the active category's list, returning the
    /// track the caller should load.
    pub fn next_track(&mut self) -> Option<&'static Track> {
        let current = self.current_track?;
        let next = navigator::next(&self.visible_tracks(), current.id)?;
        self.current_track = Some(next);
        Some(next)
    }

    pub fn previous_track(&mut self) -> Option<&'static Track> {
        let current = self.current_track?;
        let prev = navigator::previous(&self.visible_tracks(), current.id)?;
        self.current_track = Some(prev);
        Some(prev)
    }

    // -- Favorites ----------------------------------------------------------

    pub fn toggle_favorite_selected(&mut self) {
        if let Some(track) = self.selected_track_ref() {
            self.favorites.toggle(track.id);
            // Removing the last favorite can shrink the visible list.
            let len = self.visible_tracks().len();
            if len > 0 && self.selected_track >= len {
                self.selected_track = len - 1;
            }
        }
    }

    pub fn toggle_favorite_current(&mut self) {
        if let Some(track) = self.current_track {
            self.favorites.toggle(track.id);
        }
    }

    // -- Reminders ----------------------------------------------------------

    /// Deep-link from a reminder: resolve the track id, jump to its category
    /// and open the player. Unknown ids are logged and dropped.
    pub fn deep_link(&mut self, track_id: &str) -> Option<&'static Track> {
        let Some(track) = catalog::track_by_id(track_id) else {
            warn!("reminder pointed at unknown track: {track_id}");
            return None;
        };

        self.active_category = track.category;
        self.selected_category = catalog::categories()
            .iter()
            .position(|c| *c == track.category)
            .unwrap_or(0);
        self.selected_track = self
            .visible_tracks()
            .iter()
            .position(|t| t.id == track.id)
            .unwrap_or(0);
        self.current_track = Some(track);
        self.screen = Screen::Player;
        Some(track)
    }
}
