//! Table style configuration
//!
//! Every option is optional. Unset options resolve to the documented
//! defaults in [`crate::style::resolve`]. Field names follow the camelCase
//! option names used by style files (`rowBgColor`, `nthChildColors`, ...).

use serde::{Deserialize, Serialize};

/// Border line style of the outer table frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    Solid,
    Double,
    Dashed,
    Dotted,
    /// Any value not listed above; resolves as if unset
    #[serde(other)]
    Unrecognized,
}

impl BorderStyle {
    /// The style itself, or `None` for an unrecognized value
    pub fn recognized(self) -> Option<BorderStyle> {
        match self {
            BorderStyle::Unrecognized => None,
            other => Some(other),
        }
    }
}

/// Horizontal alignment of cell content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
    #[serde(other)]
    Unrecognized,
}

/// Visual configuration for one table instance
///
/// Read-only input to the renderer. Tri-state fields (`header_border`,
/// `row_border`) distinguish "explicitly off" from "unset".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleConfig {
    // Layout flags
    pub hover: bool,
    pub striped: bool,
    pub bordered: bool,
    pub shadow: bool,
    pub compact: bool,
    pub highlight_row_on_hover: bool,

    // Border appearance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_style: Option<BorderStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_border: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_border: Option<bool>,

    // Typography
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,

    // Colour roles
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_bg_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_text_color: Option<String>,
    #[serde(alias = "rowBackground", skip_serializing_if = "Option::is_none")]
    pub row_bg_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zebra_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_bg_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_text_color: Option<String>,

    // Nth-row colour cycling
    #[serde(alias = "nthChildColors", skip_serializing_if = "Vec::is_empty")]
    pub cycle_colors: Vec<String>,
    /// 1-based row number where cycling starts; 0 counts as unset
    #[serde(alias = "nthChildStart", skip_serializing_if = "Option::is_none")]
    pub cycle_start: Option<usize>,
    /// Interval between cycled rows; 0 counts as unset
    #[serde(alias = "nthChildStep", skip_serializing_if = "Option::is_none")]
    pub cycle_step: Option<usize>,
}

impl StyleConfig {
    /// Whether the hover colours apply to the pointed-at row
    pub fn hover_enabled(&self) -> bool {
        self.hover || self.highlight_row_on_hover
    }

    /// Fill every unset field from `base`
    ///
    /// Flags are booleans without an "unset" state, so they are OR-ed.
    pub fn merged_over(mut self, base: &StyleConfig) -> StyleConfig {
        fn fill<T: Clone>(slot: &mut Option<T>, base: &Option<T>) {
            if slot.is_none() {
                slot.clone_from(base);
            }
        }

        self.hover |= base.hover;
        self.striped |= base.striped;
        self.bordered |= base.bordered;
        self.shadow |= base.shadow;
        self.compact |= base.compact;
        self.highlight_row_on_hover |= base.highlight_row_on_hover;

        fill(&mut self.border_style, &base.border_style);
        fill(&mut self.border_radius, &base.border_radius);
        fill(&mut self.border_color, &base.border_color);
        fill(&mut self.row_border, &base.row_border);
        fill(&mut self.header_border, &base.header_border);
        fill(&mut self.font_size, &base.font_size);
        fill(&mut self.text_align, &base.text_align);
        fill(&mut self.header_bg_color, &base.header_bg_color);
        fill(&mut self.header_text_color, &base.header_text_color);
        fill(&mut self.row_bg_color, &base.row_bg_color);
        fill(&mut self.row_text_color, &base.row_text_color);
        fill(&mut self.zebra_color, &base.zebra_color);
        fill(&mut self.hover_bg_color, &base.hover_bg_color);
        fill(&mut self.hover_text_color, &base.hover_text_color);
        fill(&mut self.cycle_start, &base.cycle_start);
        fill(&mut self.cycle_step, &base.cycle_step);

        if self.cycle_colors.is_empty() {
            self.cycle_colors.clone_from(&base.cycle_colors);
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_legacy_option_names() {
        let json = r##"{
            "bordered": true,
            "borderStyle": "double",
            "rowBgColor": "#fafafa",
            "nthChildColors": ["#111111", "#222222"],
            "nthChildStart": 2,
            "nthChildStep": 3,
            "headerBorder": false
        }"##;

        let config: StyleConfig = serde_json::from_str(json).unwrap();

        assert!(config.bordered);
        assert_eq!(config.border_style, Some(BorderStyle::Double));
        assert_eq!(config.row_bg_color.as_deref(), Some("#fafafa"));
        assert_eq!(config.cycle_colors, vec!["#111111", "#222222"]);
        assert_eq!(config.cycle_start, Some(2));
        assert_eq!(config.cycle_step, Some(3));
        assert_eq!(config.header_border, Some(false));
        assert_eq!(config.row_border, None);
    }

    #[test]
    fn test_unknown_enum_values_are_tolerated() {
        let json = r#"{ "borderStyle": "groove", "textAlign": "justify" }"#;

        let config: StyleConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.border_style, Some(BorderStyle::Unrecognized));
        assert_eq!(config.border_style.and_then(BorderStyle::recognized), None);
        assert_eq!(config.text_align, Some(TextAlign::Unrecognized));
    }

    #[test]
    fn test_empty_document_is_default() {
        let config: StyleConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, StyleConfig::default());
    }

    #[test]
    fn test_merged_over_keeps_own_values() {
        let own = StyleConfig {
            row_bg_color: Some("#000000".to_string()),
            ..Default::default()
        };
        let base = StyleConfig {
            row_bg_color: Some("#ffffff".to_string()),
            zebra_color: Some("#eeeeee".to_string()),
            striped: true,
            ..Default::default()
        };

        let merged = own.merged_over(&base);

        assert_eq!(merged.row_bg_color.as_deref(), Some("#000000"));
        assert_eq!(merged.zebra_color.as_deref(), Some("#eeeeee"));
        assert!(merged.striped);
    }

    #[test]
    fn test_hover_enabled_by_either_flag() {
        let mut config = StyleConfig::default();
        assert!(!config.hover_enabled());

        config.highlight_row_on_hover = true;
        assert!(config.hover_enabled());
    }
}
