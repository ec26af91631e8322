//! Gallery assembly
//!
//! Turns the CLI selection (all presets, one preset, or a style file) and
//! the config into the list of tables the app shows.

use crate::cli::Cli;
use crate::components::{TableComponent, TableOptions};
use crate::config::Config;
use crate::model::Record;
use crate::services;
use crate::style::{presets, Preset, StyleConfig, Theme};
use anyhow::{anyhow, Context, Result};
use serde_json::Value;

/// Everything needed to build the tables, resolved from CLI and config
#[derive(Debug, Clone)]
pub struct GallerySettings {
    pub theme: Theme,
    /// Fallback for options a preset or style file leaves unset
    pub base: StyleConfig,
    pub preset: Option<String>,
    pub custom: Option<StyleConfig>,
    pub custom_title: Option<String>,
    pub detail_title: String,
    pub show_detail: bool,
    pub read_only: bool,
}

impl GallerySettings {
    pub fn from_cli(cli: &Cli, config: &Config) -> Result<Self> {
        let custom = match cli.style {
            Some(ref path) => Some(
                services::load_style(path)
                    .with_context(|| format!("Failed to load style {}", path.display()))?,
            ),
            None => None,
        };

        Ok(Self {
            theme: cli.theme.unwrap_or(config.ui.theme),
            base: config.table.clone(),
            preset: cli.preset.clone(),
            custom,
            custom_title: cli.title.clone(),
            detail_title: cli
                .detail_title
                .clone()
                .unwrap_or_else(|| config.ui.detail_title.clone()),
            show_detail: !cli.no_detail,
            read_only: cli.read_only,
        })
    }

    /// Presets (or the single custom style) to display, in order
    pub fn selection(&self) -> Result<Vec<Preset>> {
        if let Some(ref style) = self.custom {
            return Ok(vec![Preset {
                name: "custom",
                title: "",
                config: style.clone(),
                clickable: true,
            }]);
        }

        match self.preset {
            Some(ref name) => presets::find(name).map(|p| vec![p]).ok_or_else(|| {
                anyhow!(
                    "Unknown preset '{}'. Available: {}",
                    name,
                    presets::names().join(", ")
                )
            }),
            None => Ok(presets::all()),
        }
    }
}

fn record_label(record: &Record) -> String {
    record
        .values()
        .next()
        .map(|value| match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .unwrap_or_default()
}

/// Build one table per selected style over the same records
pub fn build_gallery(records: &[Record], settings: &GallerySettings) -> Result<Vec<TableComponent>> {
    let selection = settings.selection()?;
    log::info!(
        "Building {} table(s) with the {} theme",
        selection.len(),
        settings.theme.name()
    );

    let tables = selection
        .into_iter()
        .map(|preset| {
            let title = if preset.name == "custom" {
                settings
                    .custom_title
                    .clone()
                    .unwrap_or_else(|| "Custom Table".to_string())
            } else {
                preset.title.to_string()
            };
            let style = preset.config.merged_over(&settings.base);
            let options = TableOptions {
                title: Some(title.clone()),
                clickable: preset.clickable && !settings.read_only,
                show_detail: settings.show_detail,
                detail_title: settings.detail_title.clone(),
            };

            TableComponent::new(records.to_vec(), style, options)
                .with_theme(settings.theme)
                .on_row_activate(move |record, index| {
                    log::info!(
                        "Row {} activated in '{}': {}",
                        index + 1,
                        title,
                        record_label(record)
                    );
                })
        })
        .collect();

    Ok(tables)
}
