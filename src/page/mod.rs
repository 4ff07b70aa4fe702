//! Page geometry and the logic driven by it
//!
//! - `layout`: document geometry measured from the terminal size
//! - `tracker`: scroll position to color state
//! - `navigation`: section labels to scroll targets
//! - `reveal`: scroll-triggered section reveal effect
//!
//! All quantities are in layout units (terminal rows in the TUI). Nothing here
//! draws to the terminal.

pub mod layout;
pub mod navigation;
pub mod reveal;
pub mod tracker;

pub use layout::{NavLayout, PageLayout};
pub use navigation::{NAV_LABELS, Navigator, ScrollBehavior, Scroller};
pub use reveal::{NoopReveal, RevealConfig, RevealEffect, ScrollReveal};
pub use tracker::{ScrollRegion, TrackerOutput};

use serde::Serialize;

/// Named regions of the page, in document order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    /// Landing region at the top of the page
    Snapshot,
    /// About section
    About,
    /// Work experience timeline
    Experience,
    /// Contact section
    Contact,
}

impl SectionId {
    /// All sections in document order
    pub const ALL: [Self; 4] = [Self::Snapshot, Self::About, Self::Experience, Self::Contact];

    const fn index(self) -> usize {
        match self {
            Self::Snapshot => 0,
            Self::About => 1,
            Self::Experience => 2,
            Self::Contact => 3,
        }
    }
}

/// Measured position of a section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SectionAnchor {
    /// Offset of the first row from the top of the document
    pub top: i32,
    /// Number of rows the section occupies
    pub height: i32,
}

impl SectionAnchor {
    /// Create an anchor
    #[must_use]
    pub const fn new(top: i32, height: i32) -> Self {
        Self { top, height }
    }

    /// Offset just past the last row
    #[must_use]
    pub const fn bottom(self) -> i32 {
        self.top + self.height
    }
}

/// Anchors measured during one layout pass
///
/// A section that has not been laid out yet has no anchor; boundary lookups
/// treat it as offset `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnchorSet {
    anchors: [Option<SectionAnchor>; 4],
}

impl AnchorSet {
    /// Create an empty set
    #[must_use]
    pub const fn new() -> Self {
        Self {
            anchors: [None; 4],
        }
    }

    /// Record the anchor for a section
    pub const fn set(&mut self, section: SectionId, anchor: SectionAnchor) {
        self.anchors[section.index()] = Some(anchor);
    }

    /// Builder-style variant of [`AnchorSet::set`]
    #[must_use]
    pub const fn with(mut self, section: SectionId, anchor: SectionAnchor) -> Self {
        self.set(section, anchor);
        self
    }

    /// Anchor for a section, if measured
    #[must_use]
    pub const fn get(&self, section: SectionId) -> Option<SectionAnchor> {
        self.anchors[section.index()]
    }

    /// Top offset of a section, `0` when missing
    #[must_use]
    pub fn top(&self, section: SectionId) -> i32 {
        self.get(section).map_or(0, |a| a.top)
    }

    /// Bottom offset of a section, `0` when missing
    #[must_use]
    pub fn bottom(&self, section: SectionId) -> i32 {
        self.get(section).map_or(0, SectionAnchor::bottom)
    }

    /// Iterate measured anchors in document order
    pub fn iter(&self) -> impl Iterator<Item = (SectionId, SectionAnchor)> + '_ {
        SectionId::ALL
            .into_iter()
            .filter_map(|id| self.get(id).map(|anchor| (id, anchor)))
    }
}

impl Serialize for AnchorSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(None)?;
        for (id, anchor) in self.iter() {
            map.serialize_entry(&id, &anchor)?;
        }
        map.end()
    }
}

/// The visible window onto the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ViewportMetrics {
    /// Offset of the first visible row
    pub scroll_y: i32,
    /// Number of visible rows
    pub height: i32,
}

impl ViewportMetrics {
    /// Create viewport metrics
    #[must_use]
    pub const fn new(scroll_y: i32, height: i32) -> Self {
        Self { scroll_y, height }
    }

    /// Offset just past the last visible row
    #[must_use]
    pub const fn bottom(self) -> i32 {
        self.scroll_y + self.height
    }
}
