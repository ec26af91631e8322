//! Table styling
//!
//! - `config` - the optional-field style configuration
//! - `resolve` - pure per-row and frame style resolution
//! - `theme` - light/dark palettes applied at the application boundary
//! - `presets` - named gallery styles

pub mod config;
pub mod presets;
pub mod resolve;
pub mod theme;

pub use config::{BorderStyle, StyleConfig, TextAlign};
pub use presets::Preset;
pub use resolve::{BorderSpec, CellPadding, RowStyle};
pub use theme::Theme;
