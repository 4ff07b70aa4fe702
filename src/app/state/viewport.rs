//! The window onto the document and its scroll position.

use crate::page::{ScrollBehavior, Scroller, ViewportMetrics};

/// Fraction of the remaining distance covered per smooth-scroll step
const SMOOTH_DIVISOR: i32 = 4;

/// Page area size and scroll position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Offset of the first visible row
    pub scroll_y: i32,
    /// Page area width in columns
    pub width: u16,
    /// Page area height in rows
    pub height: u16,
    /// Honor smooth scroll requests; when false every scroll is instant
    pub smooth: bool,
    doc_height: i32,
    target: Option<i32>,
}

impl Viewport {
    /// Create an empty viewport at the top of the document
    #[must_use]
    pub const fn new(smooth: bool) -> Self {
        Self {
            scroll_y: 0,
            width: 0,
            height: 0,
            smooth,
            doc_height: 0,
            target: None,
        }
    }

    /// Position and size as seen by the tracker
    #[must_use]
    pub fn metrics(&self) -> ViewportMetrics {
        ViewportMetrics::new(self.scroll_y, i32::from(self.height))
    }

    /// Total document height the viewport scrolls over
    #[must_use]
    pub const fn doc_height(&self) -> i32 {
        self.doc_height
    }

    /// Largest valid scroll position
    #[must_use]
    pub fn max_scroll(&self) -> i32 {
        (self.doc_height - i32::from(self.height)).max(0)
    }

    /// Target of an in-flight smooth scroll
    #[must_use]
    pub const fn target(&self) -> Option<i32> {
        self.target
    }

    /// Change the page area size
    pub const fn set_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    /// Record a freshly measured document height and re-clamp the position
    pub fn set_doc_height(&mut self, doc_height: i32) {
        self.doc_height = doc_height.max(0);
        self.scroll_y = self.clamp(self.scroll_y);
        self.target = self.target.map(|t| self.clamp(t));
    }

    /// Move by `delta` rows, cancelling any smooth scroll.
    ///
    /// Returns whether the position changed.
    pub fn scroll_by(&mut self, delta: i32) -> bool {
        self.target = None;
        self.jump(self.scroll_y.saturating_add(delta))
    }

    /// Advance an in-flight smooth scroll by one step.
    ///
    /// Returns whether the position changed.
    pub fn step(&mut self) -> bool {
        let Some(target) = self.target else {
            return false;
        };
        let distance = target - self.scroll_y;
        let step = (distance.abs() + SMOOTH_DIVISOR - 1) / SMOOTH_DIVISOR;
        self.scroll_y += step.max(1) * distance.signum();
        if self.scroll_y == target {
            self.target = None;
        }
        distance != 0
    }

    /// Abandon an in-flight smooth scroll where it is
    pub const fn cancel(&mut self) {
        self.target = None;
    }

    fn jump(&mut self, top: i32) -> bool {
        let clamped = self.clamp(top);
        let changed = clamped != self.scroll_y;
        self.scroll_y = clamped;
        changed
    }

    fn clamp(&self, top: i32) -> i32 {
        top.clamp(0, self.max_scroll())
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Scroller for Viewport {
    fn scroll_to(&mut self, top: i32, behavior: ScrollBehavior) {
        let clamped = self.clamp(top);
        if behavior == ScrollBehavior::Smooth && self.smooth && clamped != self.scroll_y {
            self.target = Some(clamped);
        } else {
            self.target = None;
            self.scroll_y = clamped;
        }
    }
}
