//! Application state and logic

mod event;
mod state;

pub use event::{Event, Handler};
pub use state::{App, MobileMenu, UiState, ViewState, Viewport};

/// Rows taken by the header bar above the page
pub const HEADER_HEIGHT: u16 = 3;

/// Rows taken by the status bar below the page
pub const STATUS_BAR_HEIGHT: u16 = 1;
