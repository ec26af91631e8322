//! Row detail selection
//!
//! At most one detail view is open per table. Opening another row replaces
//! the current selection; there is no stack of details.

/// Detail state of one table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailState {
    #[default]
    Idle,
    Open(usize),
}

/// Tracks which row (if any) has its detail view open
#[derive(Debug, Default)]
pub struct DetailController {
    state: DetailState,
}

impl DetailController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the detail view for `index`, replacing any open one
    pub fn open(&mut self, index: usize) {
        if let DetailState::Open(previous) = self.state {
            log::debug!("Replacing detail of row {} with row {}", previous, index);
        }
        self.state = DetailState::Open(index);
    }

    pub fn close(&mut self) {
        self.state = DetailState::Idle;
    }

    pub fn current(&self) -> Option<usize> {
        match self.state {
            DetailState::Idle => None,
            DetailState::Open(index) => Some(index),
        }
    }

    pub fn is_open(&self) -> bool {
        self.state != DetailState::Idle
    }
}
