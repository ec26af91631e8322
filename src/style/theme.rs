//! Light and dark colour palettes
//!
//! The theme is applied once at the application boundary by filling the
//! colour roles a style leaves unset. Resolution never looks at the theme.

use super::config::StyleConfig;
use super::resolve;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Default colour for each colour role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub header_bg: &'static str,
    pub header_text: &'static str,
    pub row_bg: &'static str,
    pub row_text: &'static str,
    pub zebra: &'static str,
    pub hover_bg: &'static str,
    pub hover_text: &'static str,
    pub border: &'static str,
}

impl Theme {
    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => Palette {
                header_bg: resolve::DEFAULT_HEADER_BACKGROUND,
                header_text: resolve::DEFAULT_HEADER_TEXT,
                row_bg: resolve::DEFAULT_ROW_BACKGROUND,
                row_text: resolve::DEFAULT_ROW_TEXT,
                zebra: resolve::DEFAULT_ZEBRA_COLOR,
                hover_bg: resolve::DEFAULT_HOVER_BACKGROUND,
                hover_text: resolve::DEFAULT_HOVER_TEXT,
                border: resolve::DEFAULT_BORDER_COLOR,
            },
            Theme::Dark => Palette {
                header_bg: "#303030",
                header_text: "#e0e0e0",
                row_bg: "#1e1e1e",
                row_text: "#e0e0e0",
                zebra: "#262626",
                hover_bg: "#3a3a3a",
                hover_text: "#ffffff",
                border: "#424242",
            },
        }
    }

    /// The other theme
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl StyleConfig {
    /// Fill unset colour roles from the theme palette
    pub fn with_theme(mut self, theme: Theme) -> StyleConfig {
        let palette = theme.palette();
        let fill = |slot: &mut Option<String>, value: &str| {
            if slot.is_none() {
                *slot = Some(value.to_string());
            }
        };

        fill(&mut self.header_bg_color, palette.header_bg);
        fill(&mut self.header_text_color, palette.header_text);
        fill(&mut self.row_bg_color, palette.row_bg);
        fill(&mut self.row_text_color, palette.row_text);
        fill(&mut self.zebra_color, palette.zebra);
        fill(&mut self.hover_bg_color, palette.hover_bg);
        fill(&mut self.hover_text_color, palette.hover_text);
        fill(&mut self.border_color, palette.border);
        self
    }
}
