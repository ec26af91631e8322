//! Built-in gallery presets

use super::config::{BorderStyle, StyleConfig, TextAlign};

/// A named, titled table style
#[derive(Debug, Clone, PartialEq)]
pub struct Preset {
    pub name: &'static str,
    pub title: &'static str,
    pub config: StyleConfig,
    /// Whether rows of this preset can be activated
    pub clickable: bool,
}

fn colors(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn some(value: &str) -> Option<String> {
    Some(value.to_string())
}

/// All presets in gallery order
pub fn all() -> Vec<Preset> {
    vec![
        Preset {
            name: "default",
            title: "Default Light Grey Table",
            config: StyleConfig {
                bordered: true,
                hover: true,
                striped: true,
                ..Default::default()
            },
            clickable: true,
        },
        Preset {
            name: "light-grey",
            title: "Custom Light Grey Contrast",
            config: StyleConfig {
                striped: true,
                bordered: true,
                hover: true,
                shadow: true,
                border_radius: Some(8),
                border_color: some("#bdbdbd"),
                header_bg_color: some("#616161"),
                header_text_color: some("#ffffff"),
                row_text_color: some("#424242"),
                hover_bg_color: some("#bdbdbd"),
                hover_text_color: some("#212121"),
                cycle_colors: colors(&["#ffffff", "#f5f5f5", "#eeeeee", "#e0e0e0"]),
                ..Default::default()
            },
            clickable: true,
        },
        Preset {
            name: "blue-grey",
            title: "Blue-Grey Theme",
            config: StyleConfig {
                striped: true,
                bordered: true,
                hover: true,
                border_style: Some(BorderStyle::Double),
                border_radius: Some(6),
                border_color: some("#78909c"),
                header_bg_color: some("#546e7a"),
                header_text_color: some("#ffffff"),
                row_text_color: some("#37474f"),
                hover_bg_color: some("#90a4ae"),
                hover_text_color: some("#000000"),
                cycle_colors: colors(&["#eceff1", "#cfd8dc", "#b0bec5", "#90a4ae"]),
                ..Default::default()
            },
            clickable: true,
        },
        Preset {
            name: "minimal",
            title: "Minimal Grey Theme",
            config: StyleConfig {
                striped: true,
                hover: true,
                compact: true,
                border_radius: Some(4),
                header_bg_color: some("#f5f5f5"),
                header_text_color: some("#424242"),
                row_text_color: some("#424242"),
                hover_bg_color: some("#e0e0e0"),
                hover_text_color: some("#212121"),
                cycle_colors: colors(&["#fafafa", "#f5f5f5", "#eeeeee"]),
                ..Default::default()
            },
            clickable: true,
        },
        Preset {
            name: "dark-header",
            title: "Dark Header with Light Rows",
            config: StyleConfig {
                striped: true,
                bordered: true,
                hover: true,
                border_style: Some(BorderStyle::Dashed),
                border_color: some("#e0e0e0"),
                header_bg_color: some("#424242"),
                header_text_color: some("#ffffff"),
                row_text_color: some("#424242"),
                hover_bg_color: some("#f5f5f5"),
                hover_text_color: some("#212121"),
                cycle_colors: colors(&["#ffffff", "#fafafa"]),
                ..Default::default()
            },
            clickable: true,
        },
        Preset {
            name: "cycle-demo",
            title: "Every Third Row From Row Two",
            config: StyleConfig {
                bordered: true,
                highlight_row_on_hover: true,
                border_style: Some(BorderStyle::Dotted),
                header_border: Some(true),
                row_border: Some(false),
                text_align: Some(TextAlign::Center),
                cycle_colors: colors(&["#fff3e0", "#e3f2fd"]),
                cycle_start: Some(2),
                cycle_step: Some(3),
                ..Default::default()
            },
            clickable: true,
        },
        Preset {
            name: "plain",
            title: "Read-Only Plain Table",
            config: StyleConfig {
                text_align: Some(TextAlign::Right),
                ..Default::default()
            },
            clickable: false,
        },
    ]
}

pub fn find(name: &str) -> Option<Preset> {
    all().into_iter().find(|preset| preset.name.eq_ignore_ascii_case(name))
}

pub fn names() -> Vec<&'static str> {
    all().iter().map(|preset| preset.name).collect()
}
