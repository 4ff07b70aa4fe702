//! folio - a single-page portfolio in the terminal
//!
//! The page scrolls through a snapshot banner, an about card, a work
//! experience timeline and contact links while the background blends from
//! cornflower blue to periwinkle.

pub mod app;
pub mod color;
pub mod config;
pub mod content;
pub mod page;
pub mod paths;
pub mod tui;

pub use app::App;
pub use color::Color;
pub use config::Config;
