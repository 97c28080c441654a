//! Language selection and localized strings.
//!
//! The catalog ships English and Spanish text for every track; UI chrome is
//! localized through a small key table instead of external string files.

use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Language {
    #[default]
    En,
    Es,
}

impl Language {
    pub fn display_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Español",
        }
    }

    /// Cycle to the other supported language.
    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Es,
            Language::Es => Language::En,
        }
    }
}

/// A pair of translations selected by the active [`Language`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LocalizedText {
    pub en: &'static str,
    pub es: &'static str,
}

impl LocalizedText {
    pub const fn new(en: &'static str, es: &'static str) -> Self {
        Self { en, es }
    }

    pub fn get(&self, lang: Language) -> &'static str {
        match lang {
            Language::En => self.en,
            Language::Es => self.es,
        }
    }
}

/// UI chrome labels.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Label {
    AppTitle,
    Categories,
    Player,
    Play,
    Pause,
    BackgroundMusic,
    NowPlaying,
    Rate,
    NoTrackLoaded,
    DailyReminder,
}

pub fn label(key: Label, lang: Language) -> &'static str {
    let text = match key {
        Label::AppTitle => LocalizedText::new(" ~ calmo ~ ", " ~ calmo ~ "),
        Label::Categories => LocalizedText::new("Categories", "Categorías"),
        Label::Player => LocalizedText::new("Audio Player", "Reproductor de Audio"),
        Label::Play => LocalizedText::new("Play", "Reproducir"),
        Label::Pause => LocalizedText::new("Pause", "Pausa"),
        Label::BackgroundMusic => LocalizedText::new("Background Music", "Música de Fondo"),
        Label::NowPlaying => LocalizedText::new("Now Playing", "Reproduciendo"),
        Label::Rate => LocalizedText::new("Speed", "Velocidad"),
        Label::NoTrackLoaded => LocalizedText::new("No audio loaded", "No hay audio cargado"),
        Label::DailyReminder => LocalizedText::new("Today's Meditation", "Meditación del día"),
    };
    text.get(lang)
}
