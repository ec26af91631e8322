//! Command line interface

use crate::style::Theme;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "dashtable",
    version,
    about = "Browse JSON, YAML and CSV records in styled terminal tables"
)]
pub struct Cli {
    /// Records file (.json, .yaml, .yml or .csv); demo data when omitted
    #[arg(long, short)]
    pub data: Option<PathBuf>,

    /// Style file (JSON or YAML) shown as a single custom table
    #[arg(long, short, conflicts_with = "preset")]
    pub style: Option<PathBuf>,

    /// Show only the named preset
    #[arg(long, short)]
    pub preset: Option<String>,

    /// Colour theme for options the style leaves unset
    #[arg(long, value_enum)]
    pub theme: Option<Theme>,

    /// Config file to use instead of the default location
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Title of a custom (--style) table
    #[arg(long)]
    pub title: Option<String>,

    /// Title of the row detail popup
    #[arg(long)]
    pub detail_title: Option<String>,

    /// Do not open the detail popup when a row is activated
    #[arg(long)]
    pub no_detail: bool,

    /// Make every table non-clickable
    #[arg(long)]
    pub read_only: bool,

    /// Print the preset names and exit
    #[arg(long)]
    pub list_presets: bool,

    /// Write the effective config file and exit
    #[arg(long)]
    pub init_config: bool,
}
