//! Model layer
//!
//! - `record` - records and value formatting
//! - `detail` - per-table detail selection state
//! - `modal` - application overlay stack
//! - `demo` - built-in demo data

pub mod demo;
pub mod detail;
pub mod modal;
pub mod record;

pub use detail::DetailController;
pub use modal::{Modal, ModalStack};
pub use record::Record;
