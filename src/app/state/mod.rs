//! Application state
//!
//! This module contains the main `App` struct and its sub-states,
//! organized into focused modules by domain.

mod actions;
mod menu;
mod navigation;
mod scroll;
mod ui;
mod viewport;

#[cfg(test)]
mod tests;

pub use menu::MobileMenu;
pub use ui::UiState;
pub use viewport::Viewport;

use super::{HEADER_HEIGHT, STATUS_BAR_HEIGHT};
use crate::config::Config;
use crate::page::{
    AnchorSet, NavLayout, PageLayout, RevealEffect, ScrollRegion, SectionId, TrackerOutput,
    tracker,
};
use ratatui::layout::Rect;
use serde::Serialize;
use std::time::Instant;
use tracing::debug;

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Application configuration
    pub config: Config,

    /// Colors and menu state
    pub ui: UiState,

    /// Page area and scroll position
    pub viewport: Viewport,

    /// Whether the help overlay is showing
    pub show_help: bool,

    /// Whether the application should quit
    pub should_quit: bool,

    reveal: Box<dyn RevealEffect>,
    mounted: bool,
    region: ScrollRegion,
    terminal_size: (u16, u16),
}

/// Snapshot of everything the tracker derived for one viewport position
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewState {
    /// Terminal width in columns
    pub width: u16,
    /// Page area height in rows
    pub height: u16,
    /// Navigation chrome in use
    pub layout: NavLayout,
    /// Offset of the first visible row
    pub scroll_y: i32,
    /// Largest valid scroll position
    pub max_scroll: i32,
    /// Tracker result
    #[serde(flatten)]
    pub tracker: TrackerOutput,
    /// Measured section anchors
    pub anchors: AnchorSet,
}

impl App {
    /// Create a new application with the given config and reveal effect
    #[must_use]
    pub fn new(config: Config, reveal: Box<dyn RevealEffect>) -> Self {
        let viewport = Viewport::new(config.smooth_scroll);
        Self {
            config,
            ui: UiState::new(),
            viewport,
            show_help: false,
            should_quit: false,
            reveal,
            mounted: false,
            region: ScrollRegion::PreSnapshotEnd,
            terminal_size: (0, 0),
        }
    }

    /// Start listening for scroll events.
    ///
    /// Configures the reveal effect and evaluates the tracker once for the
    /// initial position. Calling it again while mounted does nothing.
    pub fn mount(&mut self, now: Instant) {
        if self.mounted {
            return;
        }
        self.reveal.init(self.config.reveal);
        self.mounted = true;
        debug!(
            width = self.viewport.width,
            height = self.viewport.height,
            "Mounted portfolio view"
        );
        self.on_scroll(now);
    }

    /// Stop listening for scroll events
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.viewport.cancel();
        debug!("Unmounted portfolio view");
    }

    /// Whether scroll events are being processed
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Region from the last tracker evaluation
    #[must_use]
    pub const fn region(&self) -> ScrollRegion {
        self.region
    }

    /// The full terminal area
    #[must_use]
    pub fn frame_area(&self) -> Rect {
        Rect::new(0, 0, self.terminal_size.0, self.terminal_size.1)
    }

    /// Navigation chrome for the current width
    #[must_use]
    pub const fn nav_layout(&self) -> NavLayout {
        NavLayout::for_width(self.viewport.width, self.config.desktop_min_width)
    }

    /// Lay the document out for the current page area.
    ///
    /// The snapshot is one page tall plus the header rows, so its bottom sits
    /// below the viewport until the page has scrolled past the header.
    #[must_use]
    pub fn layout(&self) -> PageLayout {
        PageLayout::compute(
            self.viewport.width,
            self.viewport.height.saturating_add(HEADER_HEIGHT),
            self.nav_layout(),
        )
    }

    /// Measure section anchors for the current page area
    #[must_use]
    pub fn anchors(&self) -> AnchorSet {
        self.layout().anchors()
    }

    /// React to a terminal size change
    pub fn resize(&mut self, width: u16, height: u16, now: Instant) {
        self.terminal_size = (width, height);
        let page_height = height.saturating_sub(HEADER_HEIGHT + STATUS_BAR_HEIGHT);
        self.viewport.set_size(width, page_height);
        if self.nav_layout() == NavLayout::Desktop {
            self.ui.menu.close();
        }
        if self.mounted {
            debug!(width, height, "Terminal resized");
            self.on_scroll(now);
        } else {
            self.viewport.set_doc_height(i32::from(self.layout().height));
        }
    }

    /// Scroll event: re-measure the page, re-run the tracker and update the
    /// reveal effect. Ignored while unmounted.
    pub fn on_scroll(&mut self, now: Instant) {
        if !self.mounted {
            return;
        }
        let layout = self.layout();
        self.viewport.set_doc_height(i32::from(layout.height));
        let anchors = layout.anchors();
        let metrics = self.viewport.metrics();
        let output = tracker::evaluate(metrics, &anchors);

        if output.region.name() != self.region.name() {
            debug!(
                from = self.region.name(),
                to = output.region.name(),
                scroll_y = metrics.scroll_y,
                "Scroll region changed"
            );
        }
        self.region = output.region;
        self.ui.apply(&output);
        self.reveal.observe(&anchors, metrics, now);
    }

    /// Advance animations by one frame.
    ///
    /// Returns whether anything moved, so the caller knows to redraw.
    pub fn tick(&mut self, now: Instant) -> bool {
        let scrolled = self.viewport.step();
        if scrolled {
            self.on_scroll(now);
        }
        scrolled || self.reveal.is_animating(now)
    }

    /// Current opacity of a section from the reveal effect
    #[must_use]
    pub fn reveal_opacity(&self, section: SectionId, now: Instant) -> f64 {
        self.reveal.opacity(section, now)
    }

    /// Evaluate the tracker for the current position without changing state
    #[must_use]
    pub fn view_state(&self) -> ViewState {
        let layout = self.layout();
        let anchors = layout.anchors();
        ViewState {
            width: self.viewport.width,
            height: self.viewport.height,
            layout: layout.nav,
            scroll_y: self.viewport.scroll_y,
            max_scroll: (i32::from(layout.height) - i32::from(self.viewport.height)).max(0),
            tracker: tracker::evaluate(self.viewport.metrics(), &anchors),
            anchors,
        }
    }
}
