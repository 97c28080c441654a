use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/calmo/config.toml` or
/// `~/.config/calmo/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `CALMO__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub audio: AudioSettings,
    pub assets: AssetSettings,
    pub reminders: ReminderSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Ambient bed volume, kept below the narration so it never masks it.
    pub background_volume: f32,
    /// Seconds skipped by the forward/backward controls.
    pub skip_seconds: u64,
    /// Delay before autoplay after a track change (milliseconds), giving the
    /// engine time to finish preparing.
    pub autoplay_delay_ms: u64,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            background_volume: 0.3,
            skip_seconds: 15,
            autoplay_delay_ms: 100,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AssetSettings {
    /// Root directory of the audio assets.
    pub root: String,
    /// File extensions accepted by the exhaustive asset scan
    /// (case-insensitive, without dot).
    pub extensions: Vec<String>,
}

impl Default for AssetSettings {
    fn default() -> Self {
        Self {
            root: "assets".to_string(),
            extensions: vec!["mp3".into(), "ogg".into(), "flac".into(), "wav".into()],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReminderSettings {
    /// Whether the daily reminder fires at all.
    pub enabled: bool,
    /// Local hour of day (0-23) the reminder fires.
    pub hour: u32,
}

impl Default for ReminderSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            hour: 8,
        }
    }
}
