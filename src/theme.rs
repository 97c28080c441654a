//! Color themes for the interface.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::i18n::{Language, LocalizedText};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    #[default]
    Rose,
    Sky,
    Lavender,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Rose, Theme::Sky, Theme::Lavender];

    pub fn display_name(self, lang: Language) -> &'static str {
        let text = match self {
            Theme::Rose => LocalizedText::new("Rose", "Rosa"),
            Theme::Sky => LocalizedText::new("Sky", "Cielo"),
            Theme::Lavender => LocalizedText::new("Lavender", "Lavanda"),
        };
        text.get(lang)
    }

    /// Accent used for highlights, gauges and the active selection.
    pub fn accent(self) -> Color {
        match self {
            Theme::Rose => Color::Rgb(242, 191, 217),
            Theme::Sky => Color::Rgb(173, 217, 230),
            Theme::Lavender => Color::Rgb(199, 177, 237),
        }
    }

    /// Dimmer companion color used for borders and inactive chrome.
    pub fn border(self) -> Color {
        match self {
            Theme::Rose => Color::Rgb(178, 120, 152),
            Theme::Sky => Color::Rgb(104, 152, 168),
            Theme::Lavender => Color::Rgb(136, 114, 178),
        }
    }

    pub fn cycled(self) -> Self {
        match self {
            Theme::Rose => Theme::Sky,
            Theme::Sky => Theme::Lavender,
            Theme::Lavender => Theme::Rose,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycling_visits_every_theme_and_wraps() {
        let mut t = Theme::Rose;
        let mut seen = vec![t];
        for _ in 0..2 {
            t = t.cycled();
            seen.push(t);
        }
        assert_eq!(seen, Theme::ALL.to_vec());
        assert_eq!(t.cycled(), Theme::Rose);
    }

    #[test]
    fn display_names_are_localized() {
        assert_eq!(Theme::Sky.display_name(Language::En), "Sky");
        assert_eq!(Theme::Sky.display_name(Language::Es), "Cielo");
    }
}
