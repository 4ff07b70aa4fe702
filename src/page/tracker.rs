//! Scroll tracker: maps the viewport position to the page color state.

use super::{AnchorSet, SectionId, ViewportMetrics};
use crate::color::{self, Color};
use serde::Serialize;

/// Where the bottom of the viewport sits relative to the section anchors
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "region", rename_all = "snake_case")]
pub enum ScrollRegion {
    /// The snapshot section still reaches below the viewport
    PreSnapshotEnd,
    /// Snapshot has passed but the about section has not entered yet
    PreAbout,
    /// Between the top of the about section and the top of the contact section
    Transitioning {
        /// Blend factor in `[0, 1]`
        factor: f64,
    },
    /// The contact section has entered the viewport
    PostContact,
}

impl ScrollRegion {
    /// Blend factor implied by this region
    #[must_use]
    pub const fn factor(self) -> f64 {
        match self {
            Self::PreSnapshotEnd | Self::PreAbout => 0.0,
            Self::Transitioning { factor } => factor,
            Self::PostContact => 1.0,
        }
    }

    /// Short name used in logs and the status bar
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::PreSnapshotEnd => "pre-snapshot-end",
            Self::PreAbout => "pre-about",
            Self::Transitioning { .. } => "transitioning",
            Self::PostContact => "post-contact",
        }
    }
}

/// Result of one tracker evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrackerOutput {
    /// Region the viewport is in
    #[serde(flatten)]
    pub region: ScrollRegion,
    /// Page background color
    pub background: Color,
    /// Navigation and timeline accent color
    pub nav: Color,
    /// Whether the viewport has reached the contact section
    pub past_experience: bool,
}

/// Progress through the transition range, capped at `1`.
///
/// A range that is empty or inverted (`contact_top <= about_top`) counts as
/// fully transitioned.
#[must_use]
pub fn transition_factor(viewport_bottom: i32, about_top: i32, contact_top: i32) -> f64 {
    if contact_top <= about_top {
        return 1.0;
    }
    let progress = f64::from(viewport_bottom - about_top) / f64::from(contact_top - about_top);
    progress.min(1.0)
}

/// Classify the viewport against freshly measured anchors.
#[must_use]
pub fn evaluate(viewport: ViewportMetrics, anchors: &AnchorSet) -> TrackerOutput {
    let bottom = viewport.bottom();
    let snapshot_bottom = anchors.bottom(SectionId::Snapshot);
    let about_top = anchors.top(SectionId::About);
    let contact_top = anchors.top(SectionId::Contact);

    if bottom < snapshot_bottom {
        return output(ScrollRegion::PreSnapshotEnd, color::START, false);
    }

    let past_experience = bottom >= contact_top;
    if bottom < about_top {
        output(ScrollRegion::PreAbout, color::START, past_experience)
    } else if bottom < contact_top {
        let factor = transition_factor(bottom, about_top, contact_top);
        let blended = color::START.interpolate(color::END, factor);
        output(
            ScrollRegion::Transitioning { factor },
            blended,
            past_experience,
        )
    } else {
        output(ScrollRegion::PostContact, color::END, past_experience)
    }
}

const fn output(region: ScrollRegion, color: Color, past_experience: bool) -> TrackerOutput {
    TrackerOutput {
        region,
        background: color,
        nav: color,
        past_experience,
    }
}
