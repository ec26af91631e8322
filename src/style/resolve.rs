//! Style resolution
//!
//! Pure functions turning a [`StyleConfig`] into concrete row colours, the
//! frame treatment and separator decisions. Nothing here touches terminal
//! or global state, so the same inputs always give the same result.

use super::config::{BorderStyle, StyleConfig, TextAlign};
use ratatui::style::{Color, Style};
use std::str::FromStr;

pub const DEFAULT_ROW_BACKGROUND: &str = "#ffffff";
pub const DEFAULT_ZEBRA_COLOR: &str = "#f9f9f9";
pub const DEFAULT_ROW_TEXT: &str = "#424242";
pub const DEFAULT_HEADER_BACKGROUND: &str = "#f5f5f5";
pub const DEFAULT_HEADER_TEXT: &str = "#424242";
pub const DEFAULT_HOVER_BACKGROUND: &str = "#f0f0f0";
pub const DEFAULT_HOVER_TEXT: &str = "#424242";
pub const DEFAULT_BORDER_COLOR: &str = "#e0e0e0";

/// Resolved colours for one row (or the header)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowStyle {
    pub background: String,
    pub text: String,
}

impl RowStyle {
    /// Convert to a terminal style; unparseable colours are left unset
    pub fn to_style(&self) -> Style {
        let mut style = Style::default();
        if let Some(bg) = parse_color(&self.background) {
            style = style.bg(bg);
        }
        if let Some(fg) = parse_color(&self.text) {
            style = style.fg(fg);
        }
        style
    }
}

/// Resolved outer frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorderSpec {
    pub style: BorderStyle,
    /// Frame weight in units: 3 for double frames, 2 otherwise
    pub width: u16,
    pub color: String,
    pub radius: u16,
}

/// Horizontal padding (in columns) on each side of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellPadding {
    pub horizontal: u16,
}

/// Parse `#rrggbb`, a colour name or an ANSI index
pub fn parse_color(value: &str) -> Option<Color> {
    Color::from_str(value.trim()).ok()
}

/// Background and text colour for the body row at `row_index` (0-based)
///
/// Cycling colours take precedence over striping. Inside a cycle, rows that
/// fall between steps keep the default background.
pub fn resolve_row_style(row_index: usize, config: &StyleConfig) -> RowStyle {
    let default_background = config
        .row_bg_color
        .as_deref()
        .unwrap_or(DEFAULT_ROW_BACKGROUND);

    let background = if !config.cycle_colors.is_empty() {
        let start = config.cycle_start.filter(|s| *s > 0).unwrap_or(1);
        let step = config.cycle_step.filter(|s| *s > 0).unwrap_or(1);
        let row_number = row_index + 1;

        if row_number < start {
            default_background
        } else {
            let offset = row_number - start;
            if offset % step != 0 {
                default_background
            } else {
                let position = (offset / step) % config.cycle_colors.len();
                config.cycle_colors[position].as_str()
            }
        }
    } else if config.striped && row_index % 2 == 1 {
        config.zebra_color.as_deref().unwrap_or(DEFAULT_ZEBRA_COLOR)
    } else {
        default_background
    };

    RowStyle {
        background: background.to_string(),
        text: config
            .row_text_color
            .as_deref()
            .unwrap_or(DEFAULT_ROW_TEXT)
            .to_string(),
    }
}

pub fn resolve_header_style(config: &StyleConfig) -> RowStyle {
    RowStyle {
        background: config
            .header_bg_color
            .as_deref()
            .unwrap_or(DEFAULT_HEADER_BACKGROUND)
            .to_string(),
        text: config
            .header_text_color
            .as_deref()
            .unwrap_or(DEFAULT_HEADER_TEXT)
            .to_string(),
    }
}

/// Hover colours, or `None` when hovering is not enabled
pub fn resolve_hover_style(config: &StyleConfig) -> Option<RowStyle> {
    if !config.hover_enabled() {
        return None;
    }
    Some(RowStyle {
        background: config
            .hover_bg_color
            .as_deref()
            .unwrap_or(DEFAULT_HOVER_BACKGROUND)
            .to_string(),
        text: config
            .hover_text_color
            .as_deref()
            .unwrap_or(DEFAULT_HOVER_TEXT)
            .to_string(),
    })
}

/// Frame weight, or `None` when the table is not bordered
pub fn border_width(config: &StyleConfig) -> Option<u16> {
    if !config.bordered {
        return None;
    }
    match effective_border_style(config) {
        BorderStyle::Double => Some(3),
        _ => Some(2),
    }
}

pub fn resolve_border(config: &StyleConfig) -> Option<BorderSpec> {
    let width = border_width(config)?;
    Some(BorderSpec {
        style: effective_border_style(config),
        width,
        color: separator_color(config).to_string(),
        radius: config.border_radius.unwrap_or(0),
    })
}

/// Header rule: explicit `headerBorder: true`, or bordered and not opted out
pub fn draws_header_separator(config: &StyleConfig) -> bool {
    config.header_border == Some(true)
        || (config.bordered && config.header_border != Some(false))
}

/// Row rules follow the same tri-state rule using `rowBorder`
pub fn draws_row_separator(config: &StyleConfig) -> bool {
    config.row_border == Some(true) || (config.bordered && config.row_border != Some(false))
}

pub fn separator_color(config: &StyleConfig) -> &str {
    config
        .border_color
        .as_deref()
        .unwrap_or(DEFAULT_BORDER_COLOR)
}

pub fn resolve_padding(config: &StyleConfig) -> CellPadding {
    if config.compact {
        CellPadding { horizontal: 1 }
    } else {
        CellPadding { horizontal: 2 }
    }
}

pub fn resolve_alignment(config: &StyleConfig) -> TextAlign {
    match config.text_align {
        Some(TextAlign::Center) => TextAlign::Center,
        Some(TextAlign::Right) => TextAlign::Right,
        _ => TextAlign::Left,
    }
}

fn effective_border_style(config: &StyleConfig) -> BorderStyle {
    config
        .border_style
        .and_then(BorderStyle::recognized)
        .unwrap_or(BorderStyle::Solid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn background(row_index: usize, config: &StyleConfig) -> String {
        resolve_row_style(row_index, config).background
    }

    #[test]
    fn test_defaults_without_options() {
        let config = StyleConfig::default();
        let style = resolve_row_style(3, &config);

        assert_eq!(style.background, DEFAULT_ROW_BACKGROUND);
        assert_eq!(style.text, DEFAULT_ROW_TEXT);
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let config = StyleConfig {
            striped: true,
            cycle_colors: vec!["#aaaaaa".into(), "#bbbbbb".into()],
            cycle_start: Some(2),
            ..Default::default()
        };

        for index in 0..20 {
            assert_eq!(
                resolve_row_style(index, &config),
                resolve_row_style(index, &config)
            );
        }
    }

    #[test]
    fn test_cycle_boundaries() {
        let config = StyleConfig {
            cycle_colors: vec!["A".into(), "B".into()],
            cycle_start: Some(2),
            cycle_step: Some(3),
            ..Default::default()
        };

        assert_eq!(background(0, &config), DEFAULT_ROW_BACKGROUND);
        assert_eq!(background(1, &config), "A");
        assert_eq!(background(2, &config), DEFAULT_ROW_BACKGROUND);
        assert_eq!(background(3, &config), DEFAULT_ROW_BACKGROUND);
        assert_eq!(background(4, &config), "B");
        assert_eq!(background(7, &config), "A");
    }

    #[test]
    fn test_cycle_wraps_with_default_start_and_step() {
        let config = StyleConfig {
            cycle_colors: vec!["A".into(), "B".into(), "C".into()],
            ..Default::default()
        };

        let colors: Vec<String> = (0..5).map(|i| background(i, &config)).collect();
        assert_eq!(colors, vec!["A", "B", "C", "A", "B"]);
    }

    #[test]
    fn test_zero_start_and_step_count_as_unset() {
        let config = StyleConfig {
            cycle_colors: vec!["A".into(), "B".into()],
            cycle_start: Some(0),
            cycle_step: Some(0),
            ..Default::default()
        };

        assert_eq!(background(0, &config), "A");
        assert_eq!(background(1, &config), "B");
    }

    #[test]
    fn test_cycle_skipped_rows_use_configured_background() {
        let config = StyleConfig {
            row_bg_color: Some("#123456".into()),
            cycle_colors: vec!["A".into()],
            cycle_step: Some(2),
            ..Default::default()
        };

        assert_eq!(background(0, &config), "A");
        assert_eq!(background(1, &config), "#123456");
    }

    #[test]
    fn test_striping_fallback() {
        let config = StyleConfig {
            striped: true,
            zebra_color: Some("#eeeeee".into()),
            ..Default::default()
        };

        assert_eq!(background(0, &config), DEFAULT_ROW_BACKGROUND);
        assert_eq!(background(1, &config), "#eeeeee");
        assert_eq!(background(2, &config), DEFAULT_ROW_BACKGROUND);
        assert_eq!(background(3, &config), "#eeeeee");
    }

    #[test]
    fn test_striping_default_zebra() {
        let config = StyleConfig {
            striped: true,
            ..Default::default()
        };
        assert_eq!(background(1, &config), DEFAULT_ZEBRA_COLOR);
    }

    #[test]
    fn test_cycling_beats_striping() {
        let config = StyleConfig {
            striped: true,
            cycle_colors: vec!["A".into()],
            ..Default::default()
        };
        assert_eq!(background(1, &config), "A");
    }

    #[test]
    fn test_text_color_independent_of_background_branch() {
        let config = StyleConfig {
            striped: true,
            row_text_color: Some("#101010".into()),
            ..Default::default()
        };
        assert_eq!(resolve_row_style(0, &config).text, "#101010");
        assert_eq!(resolve_row_style(1, &config).text, "#101010");
    }

    #[test]
    fn test_border_width_rule() {
        let mut config = StyleConfig {
            bordered: true,
            border_style: Some(BorderStyle::Double),
            ..Default::default()
        };
        assert_eq!(border_width(&config), Some(3));

        for style in [BorderStyle::Solid, BorderStyle::Dashed, BorderStyle::Dotted] {
            config.border_style = Some(style);
            assert_eq!(border_width(&config), Some(2));
        }

        config.border_style = None;
        assert_eq!(border_width(&config), Some(2));

        config.bordered = false;
        config.border_style = Some(BorderStyle::Double);
        assert_eq!(border_width(&config), None);
        assert_eq!(resolve_border(&config), None);
    }

    #[test]
    fn test_unrecognized_border_style_falls_back_to_solid() {
        let config = StyleConfig {
            bordered: true,
            border_style: Some(BorderStyle::Unrecognized),
            ..Default::default()
        };

        let border = resolve_border(&config).unwrap();
        assert_eq!(border.style, BorderStyle::Solid);
        assert_eq!(border.width, 2);
        assert_eq!(border.color, DEFAULT_BORDER_COLOR);
    }

    #[test]
    fn test_separator_tri_state() {
        let bordered = StyleConfig {
            bordered: true,
            ..Default::default()
        };
        assert!(draws_header_separator(&bordered));
        assert!(draws_row_separator(&bordered));

        let header_off = StyleConfig {
            bordered: true,
            header_border: Some(false),
            ..Default::default()
        };
        assert!(!draws_header_separator(&header_off));
        assert!(draws_row_separator(&header_off));

        let header_only = StyleConfig {
            header_border: Some(true),
            ..Default::default()
        };
        assert!(draws_header_separator(&header_only));
        assert!(!draws_row_separator(&header_only));

        assert!(!draws_header_separator(&StyleConfig::default()));
    }

    #[test]
    fn test_hover_style_only_when_enabled() {
        assert_eq!(resolve_hover_style(&StyleConfig::default()), None);

        let config = StyleConfig {
            hover: true,
            hover_bg_color: Some("#bdbdbd".into()),
            ..Default::default()
        };
        let hover = resolve_hover_style(&config).unwrap();
        assert_eq!(hover.background, "#bdbdbd");
        assert_eq!(hover.text, DEFAULT_HOVER_TEXT);
    }

    #[test]
    fn test_padding_and_alignment() {
        let compact = StyleConfig {
            compact: true,
            text_align: Some(TextAlign::Unrecognized),
            ..Default::default()
        };
        assert_eq!(resolve_padding(&compact).horizontal, 1);
        assert_eq!(resolve_padding(&StyleConfig::default()).horizontal, 2);
        assert_eq!(resolve_alignment(&compact), TextAlign::Left);
    }

    #[test]
    fn test_row_style_to_terminal_style() {
        let style = RowStyle {
            background: "#ff0000".into(),
            text: "not a colour".into(),
        }
        .to_style();

        assert_eq!(style.bg, Some(Color::Rgb(255, 0, 0)));
        assert_eq!(style.fg, None);
    }
}
