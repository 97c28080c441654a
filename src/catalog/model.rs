use ratatui::style::Color;

use crate::i18n::{Language, LocalizedText};

/// Catalog categories. `Favorites` is virtual: its track list is the whole
/// catalog filtered by the favorites set, in catalog order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CategoryKind {
    Favorites,
    Sleep,
    StressRelief,
    Anxiety,
    Focus,
    Gratitude,
}

impl CategoryKind {
    /// Folder name used in the on-disk asset layout.
    pub fn folder(self) -> &'static str {
        match self {
            CategoryKind::Favorites => "favorites",
            CategoryKind::Sleep => "sleep",
            CategoryKind::StressRelief => "stress-relief",
            CategoryKind::Anxiety => "anxiety",
            CategoryKind::Focus => "focus",
            CategoryKind::Gratitude => "gratitude",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            CategoryKind::Favorites => "♥",
            CategoryKind::Sleep => "☾",
            CategoryKind::StressRelief => "❀",
            CategoryKind::Anxiety => "☘",
            CategoryKind::Focus => "◎",
            CategoryKind::Gratitude => "✦",
        }
    }

    pub fn color(self) -> Color {
        match self {
            CategoryKind::Favorites => Color::Red,
            CategoryKind::Sleep => Color::Indexed(61),
            CategoryKind::StressRelief => Color::Magenta,
            CategoryKind::Anxiety => Color::Green,
            CategoryKind::Focus => Color::Yellow,
            CategoryKind::Gratitude => Color::LightYellow,
        }
    }

    pub fn name(self, lang: Language) -> &'static str {
        let text = match self {
            CategoryKind::Favorites => LocalizedText::new("Favorites", "Favoritos"),
            CategoryKind::Sleep => LocalizedText::new("Sleep", "Dormir"),
            CategoryKind::StressRelief => LocalizedText::new("Stress Relief", "Alivio del Estrés"),
            CategoryKind::Anxiety => LocalizedText::new("Anxiety", "Ansiedad"),
            CategoryKind::Focus => LocalizedText::new("Focus", "Enfoque"),
            CategoryKind::Gratitude => LocalizedText::new("Gratitude", "Gratitud"),
        };
        text.get(lang)
    }

    pub fn description(self, lang: Language) -> &'static str {
        let text = match self {
            CategoryKind::Favorites => LocalizedText::new(
                "Your saved meditations",
                "Tus meditaciones guardadas",
            ),
            CategoryKind::Sleep => LocalizedText::new(
                "Drift into deep, restorative rest",
                "Sumérgete en un descanso profundo",
            ),
            CategoryKind::StressRelief => LocalizedText::new(
                "Let tension dissolve away",
                "Deja que la tensión se disuelva",
            ),
            CategoryKind::Anxiety => LocalizedText::new(
                "Find your anchor in the present",
                "Encuentra tu ancla en el presente",
            ),
            CategoryKind::Focus => LocalizedText::new(
                "Sharpen attention and clarity",
                "Afila la atención y la claridad",
            ),
            CategoryKind::Gratitude => LocalizedText::new(
                "Notice life's small blessings",
                "Nota las pequeñas bendiciones",
            ),
        };
        text.get(lang)
    }
}

/// A guided meditation. Immutable once defined; sourced from the static
/// catalog, never mutated at runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    /// Stable identifier, shared across locales.
    pub id: &'static str,
    pub title: LocalizedText,
    pub description: LocalizedText,
    /// Audio file name per language (extension included).
    pub audio_file: LocalizedText,
    pub category: CategoryKind,
    /// Static editorial rating, out of 5.
    pub rating: f32,
}

impl Track {
    pub fn title(&self, lang: Language) -> &'static str {
        self.title.get(lang)
    }

    pub fn description(&self, lang: Language) -> &'static str {
        self.description.get(lang)
    }

    pub fn audio_file(&self, lang: Language) -> &'static str {
        self.audio_file.get(lang)
    }
}

/// A looping ambient bed played underneath the narration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmbientTrack {
    pub name: &'static str,
    pub file_name: &'static str,
}
