//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod detail;
pub mod help_dialog;
pub mod layout;
pub mod quit_dialog;
pub mod table;

pub use detail::DetailView;
pub use help_dialog::HelpDialog;
pub use layout::{calculate_main_layout, centered_popup};
pub use quit_dialog::QuitDialog;
pub use table::{TableComponent, TableOptions};
