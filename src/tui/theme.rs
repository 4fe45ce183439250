use ratatui::style::Color;

use crate::model::config::ThemePref;
use crate::model::reminder::Priority;
use crate::ops::stats::ProgressTier;

/// Color palette for the TUI, one per theme preference.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub panel: Color,
    pub text: Color,
    pub dim: Color,
    pub bright: Color,
    pub accent: Color,
    pub selection_bg: Color,
    pub green: Color,
    pub amber: Color,
    pub rose: Color,
    pub blue: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Theme {
            background: Color::Rgb(0x12, 0x10, 0x1C),
            panel: Color::Rgb(0x1C, 0x1A, 0x2B),
            text: Color::Rgb(0xC8, 0xC4, 0xE8),
            dim: Color::Rgb(0x77, 0x73, 0x9E),
            bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            accent: Color::Rgb(0xA7, 0x8B, 0xFA),
            selection_bg: Color::Rgb(0x33, 0x2D, 0x52),
            green: Color::Rgb(0x4A, 0xDE, 0x80),
            amber: Color::Rgb(0xF5, 0x9E, 0x0B),
            rose: Color::Rgb(0xF4, 0x3F, 0x5E),
            blue: Color::Rgb(0x60, 0xA5, 0xFA),
        }
    }

    pub fn light() -> Self {
        Theme {
            background: Color::Rgb(0xF8, 0xF7, 0xFC),
            panel: Color::Rgb(0xEC, 0xEA, 0xF6),
            text: Color::Rgb(0x2B, 0x28, 0x42),
            dim: Color::Rgb(0x8A, 0x86, 0xA8),
            bright: Color::Rgb(0x12, 0x10, 0x1C),
            accent: Color::Rgb(0x7C, 0x5C, 0xE0),
            selection_bg: Color::Rgb(0xDD, 0xD6, 0xF3),
            green: Color::Rgb(0x16, 0xA3, 0x4A),
            amber: Color::Rgb(0xD9, 0x77, 0x06),
            rose: Color::Rgb(0xE1, 0x1D, 0x48),
            blue: Color::Rgb(0x25, 0x63, 0xEB),
        }
    }

    pub fn from_pref(pref: ThemePref) -> Self {
        match pref {
            ThemePref::Dark => Theme::dark(),
            ThemePref::Light => Theme::light(),
        }
    }

    /// Progress-bar color for a tier.
    pub fn tier_color(&self, tier: ProgressTier) -> Color {
        match tier {
            ProgressTier::Green => self.green,
            ProgressTier::Amber => self.amber,
            ProgressTier::Rose => self.rose,
        }
    }

    /// Badge color for a reminder priority.
    pub fn priority_color(&self, priority: Priority) -> Color {
        match priority {
            Priority::High => self.rose,
            Priority::Medium => self.amber,
            Priority::Low => self.blue,
        }
    }
}
