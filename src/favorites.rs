//! The favorites set, persisted through an injected store.
//!
//! The set is loaded once at startup and written through on every mutation.
//! Persistence failures are logged and never fatal: losing a heart is better
//! than losing the session.

use std::collections::HashSet;
use std::io;
use std::path::PathBuf;
use std::{env, fs};

use log::warn;

/// Compute the default favorites path under `$XDG_CONFIG_HOME/calmo` or
/// `~/.config/calmo` when `XDG_CONFIG_HOME` is not set.
pub fn default_favorites_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else if let Some(home) = env::var_os("HOME") {
        Some(PathBuf::from(home).join(".config"))
    } else {
        None
    };

    config_home.map(|d| d.join("calmo").join("favorites.json"))
}

pub trait FavoritesStore {
    fn load(&self) -> io::Result<HashSet<String>>;
    fn save(&self, ids: &HashSet<String>) -> io::Result<()>;
}

/// Store backed by a JSON array of track ids on disk.
pub struct JsonFavoritesStore {
    path: PathBuf,
}

impl JsonFavoritesStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl FavoritesStore for JsonFavoritesStore {
    fn load(&self) -> io::Result<HashSet<String>> {
        let data = match fs::read(&self.path) {
            Ok(d) => d,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(HashSet::new()),
            Err(e) => return Err(e),
        };
        serde_json::from_slice(&data).map_err(io::Error::other)
    }

    fn save(&self, ids: &HashSet<String>) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        // Stable ordering keeps the file diffable.
        let mut sorted: Vec<&String> = ids.iter().collect();
        sorted.sort();
        let data = serde_json::to_vec_pretty(&sorted).map_err(io::Error::other)?;
        fs::write(&self.path, data)
    }
}

pub struct Favorites {
    ids: HashSet<String>,
    store: Box<dyn FavoritesStore>,
}

impl Favorites {
    /// Load the set from `store`; a failed read starts empty.
    pub fn load(store: Box<dyn FavoritesStore>) -> Self {
        let ids = match store.load() {
            Ok(ids) => ids,
            Err(e) => {
                warn!("failed to load favorites, starting empty: {e}");
                HashSet::new()
            }
        };
        Self { ids, store }
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Flip membership for `id`, returning the new state.
    pub fn toggle(&mut self, id: &str) -> bool {
        let now_favorite = if self.ids.contains(id) {
            self.ids.remove(id);
            false
        } else {
            self.ids.insert(id.to_string());
            true
        };
        self.persist();
        now_favorite
    }

    pub fn add(&mut self, id: &str) {
        if self.ids.insert(id.to_string()) {
            self.persist();
        }
    }

    pub fn remove(&mut self, id: &str) {
        if self.ids.remove(id) {
            self.persist();
        }
    }

    pub fn count(&self) -> usize {
        self.ids.len()
    }

    pub fn has_favorites(&self) -> bool {
        !self.ids.is_empty()
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(&self.ids) {
            warn!("failed to save favorites: {e}");
        }
    }
}
