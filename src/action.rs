//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick while idle
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Gallery
    // ─────────────────────────────────────────────────────────────────────────
    NextTable,
    PrevTable,
    /// Switch to the table at this gallery position
    SelectTable(usize),
    /// Switch every table between the light and dark theme
    ToggleTheme,
    /// Re-read the records file into every table
    ReloadData,

    // ─────────────────────────────────────────────────────────────────────────
    // Row cursor
    // ─────────────────────────────────────────────────────────────────────────
    NextRow,
    PrevRow,
    FirstRow,
    LastRow,
    /// Move the cursor down one page
    PageDown,
    /// Move the cursor up one page
    PageUp,

    // ─────────────────────────────────────────────────────────────────────────
    // Viewport
    // ─────────────────────────────────────────────────────────────────────────
    ScrollUp,
    ScrollDown,
    ScrollLeft,
    ScrollRight,
    /// Pointer moved over a body row (or off all rows)
    Hover(Option<usize>),

    // ─────────────────────────────────────────────────────────────────────────
    // Activation and detail
    // ─────────────────────────────────────────────────────────────────────────
    /// Request activation of a body row
    ActivateRow(usize),
    /// A row was activated on a clickable table
    RowActivated(usize),
    /// Close the detail view of the active table
    CloseDetail,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    OpenHelp,
    OpenQuitDialog,
    /// Close the top modal
    CloseModal,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::NextTable => write!(f, "NextTable"),
            Action::PrevTable => write!(f, "PrevTable"),
            Action::SelectTable(i) => write!(f, "SelectTable({})", i),
            Action::ToggleTheme => write!(f, "ToggleTheme"),
            Action::ReloadData => write!(f, "ReloadData"),
            Action::NextRow => write!(f, "NextRow"),
            Action::PrevRow => write!(f, "PrevRow"),
            Action::FirstRow => write!(f, "FirstRow"),
            Action::LastRow => write!(f, "LastRow"),
            Action::PageDown => write!(f, "PageDown"),
            Action::PageUp => write!(f, "PageUp"),
            Action::ScrollUp => write!(f, "ScrollUp"),
            Action::ScrollDown => write!(f, "ScrollDown"),
            Action::ScrollLeft => write!(f, "ScrollLeft"),
            Action::ScrollRight => write!(f, "ScrollRight"),
            Action::Hover(Some(i)) => write!(f, "Hover({})", i),
            Action::Hover(None) => write!(f, "Hover(-)"),
            Action::ActivateRow(i) => write!(f, "ActivateRow({})", i),
            Action::RowActivated(i) => write!(f, "RowActivated({})", i),
            Action::CloseDetail => write!(f, "CloseDetail"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::CloseModal => write!(f, "CloseModal"),
        }
    }
}
