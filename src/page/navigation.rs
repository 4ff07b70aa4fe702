//! Section navigation: label lookup and scroll targets.

use super::{AnchorSet, SectionId};
use tracing::debug;

/// Navigation labels in display order
pub const NAV_LABELS: [&str; 3] = ["About", "Work Experience", "Contact"];

/// How a scroll request should be carried out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// Jump straight to the target
    Instant,
    /// Ease toward the target over several frames
    Smooth,
}

/// Something that can move the viewport
pub trait Scroller {
    /// Request that the viewport's top row move to `top`
    ///
    /// Implementations clamp the target to their scrollable range.
    fn scroll_to(&mut self, top: i32, behavior: ScrollBehavior);
}

/// Resolve a navigation label (case-insensitive) to its section.
#[must_use]
pub fn resolve_label(label: &str) -> Option<SectionId> {
    match label.to_lowercase().as_str() {
        "about" => Some(SectionId::About),
        "work experience" => Some(SectionId::Experience),
        "contact" => Some(SectionId::Contact),
        _ => None,
    }
}

/// Maps navigation requests onto scroll targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigator {
    offset: i32,
}

impl Navigator {
    /// Create a navigator that stops `offset` rows above a section's top
    #[must_use]
    pub const fn new(offset: i32) -> Self {
        Self { offset }
    }

    /// Rows left above a section after navigating to it
    #[must_use]
    pub const fn offset(self) -> i32 {
        self.offset
    }

    /// Scroll so the bottom of the snapshot section lines up with the viewport top.
    ///
    /// Returns `false` when the snapshot has not been measured.
    pub fn scroll_to_snapshot_end(self, anchors: &AnchorSet, scroller: &mut impl Scroller) -> bool {
        let Some(snapshot) = anchors.get(SectionId::Snapshot) else {
            return false;
        };
        debug!(top = snapshot.bottom(), "Scrolling to end of snapshot");
        scroller.scroll_to(snapshot.bottom(), ScrollBehavior::Smooth);
        true
    }

    /// Scroll to the section named by `label`, leaving `offset` rows above it.
    ///
    /// Unknown labels and unmeasured sections are ignored; returns whether a
    /// scroll was requested.
    pub fn scroll_to_section(
        self,
        label: &str,
        anchors: &AnchorSet,
        scroller: &mut impl Scroller,
    ) -> bool {
        let Some(anchor) = resolve_label(label).and_then(|id| anchors.get(id)) else {
            debug!(label, "Ignoring navigation to unknown section");
            return false;
        };
        let top = anchor.top - self.offset;
        debug!(label, top, "Scrolling to section");
        scroller.scroll_to(top, ScrollBehavior::Smooth);
        true
    }

    /// Handle a click on a navigation item.
    ///
    /// "About" goes to the end of the snapshot rather than the about anchor;
    /// every other label goes through [`Navigator::scroll_to_section`].
    pub fn navigate(self, label: &str, anchors: &AnchorSet, scroller: &mut impl Scroller) -> bool {
        if resolve_label(label) == Some(SectionId::About) {
            self.scroll_to_snapshot_end(anchors, scroller)
        } else {
            self.scroll_to_section(label, anchors, scroller)
        }
    }
}
