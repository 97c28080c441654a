//! Persisted user preferences: language, theme, avatar.
//!
//! Stored as a small TOML file (`$XDG_CONFIG_HOME/calmo/prefs.toml`), read at
//! startup and written on every mutation. Unlike settings, preferences are
//! owned by the app and change at runtime.

use std::path::PathBuf;
use std::{env, fs};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::i18n::Language;
use crate::theme::Theme;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub language: Language,
    pub theme: Theme,
    pub avatar: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            language: Language::default(),
            theme: Theme::default(),
            avatar: "lotus".to_string(),
        }
    }
}

/// Compute the default preferences path under `$XDG_CONFIG_HOME/calmo` or
/// `~/.config/calmo` when `XDG_CONFIG_HOME` is not set.
pub fn default_prefs_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else if let Some(home) = env::var_os("HOME") {
        Some(PathBuf::from(home).join(".config"))
    } else {
        None
    };

    config_home.map(|d| d.join("calmo").join("prefs.toml"))
}

/// Preferences plus the path they write back to.
pub struct PrefsFile {
    pub prefs: Preferences,
    path: Option<PathBuf>,
}

impl PrefsFile {
    /// Read preferences from `path`; missing or malformed files fall back to
    /// defaults (a malformed file is logged, not fatal).
    pub fn load(path: Option<PathBuf>) -> Self {
        let prefs = match &path {
            Some(p) => match fs::read_to_string(p) {
                Ok(text) => toml::from_str(&text).unwrap_or_else(|e| {
                    warn!("malformed prefs file {}, using defaults: {e}", p.display());
                    Preferences::default()
                }),
                Err(_) => Preferences::default(),
            },
            None => Preferences::default(),
        };
        Self { prefs, path }
    }

    pub fn set_language(&mut self, language: Language) {
        self.prefs.language = language;
        self.persist();
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.prefs.theme = theme;
        self.persist();
    }

    pub fn set_avatar(&mut self, avatar: &str) {
        self.prefs.avatar = avatar.to_string();
        self.persist();
    }

    fn persist(&self) {
        let Some(path) = &self.path else { return };
        let write = || -> std::io::Result<()> {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let text = toml::to_string_pretty(&self.prefs).map_err(std::io::Error::other)?;
            fs::write(path, text)
        };
        if let Err(e) = write() {
            warn!("failed to save preferences: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn load_missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let p = PrefsFile::load(Some(dir.path().join("prefs.toml")));
        assert_eq!(p.prefs, Preferences::default());
    }

    #[test]
    fn mutations_round_trip_through_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("conf").join("prefs.toml");

        let mut p = PrefsFile::load(Some(path.clone()));
        p.set_language(Language::Es);
        p.set_theme(Theme::Lavender);
        p.set_avatar("wave");

        let reloaded = PrefsFile::load(Some(path));
        assert_eq!(reloaded.prefs.language, Language::Es);
        assert_eq!(reloaded.prefs.theme, Theme::Lavender);
        assert_eq!(reloaded.prefs.avatar, "wave");
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prefs.toml");
        fs::write(&path, "language = 7").unwrap();

        let p = PrefsFile::load(Some(path));
        assert_eq!(p.prefs, Preferences::default());
    }
}
