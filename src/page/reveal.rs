//! Scroll-triggered reveal effect for page sections.

use super::{AnchorSet, SectionId, ViewportMetrics};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{Duration, Instant};
use tracing::debug;

/// Sections that fade in as they scroll into view
pub const REVEALED_SECTIONS: [SectionId; 3] =
    [SectionId::About, SectionId::Experience, SectionId::Contact];

/// Reveal effect configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealConfig {
    /// Fade duration in milliseconds
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,

    /// Fade sections back out when they leave the viewport, so the effect replays
    #[serde(default = "default_repeat")]
    pub repeat: bool,

    /// Rows a section must rise above the viewport bottom before it reveals
    #[serde(default = "default_offset")]
    pub offset: i32,
}

const fn default_duration_ms() -> u64 {
    800
}

const fn default_repeat() -> bool {
    true
}

const fn default_offset() -> i32 {
    4
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
            repeat: default_repeat(),
            offset: default_offset(),
        }
    }
}

impl RevealConfig {
    /// Fade duration
    #[must_use]
    pub const fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

/// An effect that reveals sections as the viewport reaches them
pub trait RevealEffect: fmt::Debug {
    /// Configure the effect; called once when the view mounts
    fn init(&mut self, config: RevealConfig);

    /// Update reveal state for the current viewport
    fn observe(&mut self, anchors: &AnchorSet, viewport: ViewportMetrics, now: Instant);

    /// Opacity of a section in `[0, 1]`
    fn opacity(&self, section: SectionId, now: Instant) -> f64;

    /// Whether any section is mid-fade (the caller should keep redrawing)
    fn is_animating(&self, now: Instant) -> bool;
}

/// Reveal effect that never hides anything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopReveal;

impl RevealEffect for NoopReveal {
    fn init(&mut self, _config: RevealConfig) {}

    fn observe(&mut self, _anchors: &AnchorSet, _viewport: ViewportMetrics, _now: Instant) {}

    fn opacity(&self, _section: SectionId, _now: Instant) -> f64 {
        1.0
    }

    fn is_animating(&self, _now: Instant) -> bool {
        false
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Fade {
    shown: bool,
    /// Opacity at the moment of the last change
    from: f64,
    since: Option<Instant>,
}

impl Fade {
    fn opacity(&self, duration: Duration, now: Instant) -> f64 {
        let target = if self.shown { 1.0 } else { 0.0 };
        let Some(since) = self.since else {
            return target;
        };
        if duration.is_zero() {
            return target;
        }
        let t = (now.saturating_duration_since(since).as_secs_f64() / duration.as_secs_f64())
            .min(1.0);
        let eased = ease_out_cubic(t);
        self.from + (target - self.from) * eased
    }

    fn set(&mut self, shown: bool, duration: Duration, now: Instant) {
        if self.shown == shown {
            return;
        }
        self.from = self.opacity(duration, now);
        self.shown = shown;
        self.since = Some(now);
    }
}

fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// Fades sections in once their top rises `offset` rows above the viewport bottom
#[derive(Debug, Clone, Copy)]
pub struct ScrollReveal {
    config: RevealConfig,
    fades: [(SectionId, Fade); 3],
    initialized: bool,
}

impl Default for ScrollReveal {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollReveal {
    /// Create an effect with the default configuration; [`RevealEffect::init`] overrides it
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: RevealConfig::default(),
            fades: REVEALED_SECTIONS.map(|id| (id, Fade::default())),
            initialized: false,
        }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> RevealConfig {
        self.config
    }

    fn fade(&self, section: SectionId) -> Option<&Fade> {
        self.fades
            .iter()
            .find(|(id, _)| *id == section)
            .map(|(_, fade)| fade)
    }
}

impl RevealEffect for ScrollReveal {
    fn init(&mut self, config: RevealConfig) {
        debug!(?config, "Initializing reveal effect");
        self.config = config;
        self.fades = REVEALED_SECTIONS.map(|id| (id, Fade::default()));
        self.initialized = true;
    }

    fn observe(&mut self, anchors: &AnchorSet, viewport: ViewportMetrics, now: Instant) {
        if !self.initialized {
            return;
        }
        let duration = self.config.duration();
        let trigger = viewport.bottom() - self.config.offset;

        for (id, fade) in &mut self.fades {
            let Some(anchor) = anchors.get(*id) else {
                continue;
            };
            let reached = anchor.top <= trigger;
            if reached {
                fade.set(true, duration, now);
            } else if self.config.repeat {
                fade.set(false, duration, now);
            }
        }
    }

    fn opacity(&self, section: SectionId, now: Instant) -> f64 {
        if !self.initialized {
            return 1.0;
        }
        self.fade(section)
            .map_or(1.0, |fade| fade.opacity(self.config.duration(), now))
    }

    fn is_animating(&self, now: Instant) -> bool {
        let duration = self.config.duration();
        self.initialized
            && self.fades.iter().any(|(_, fade)| {
                fade.since
                    .is_some_and(|since| now.saturating_duration_since(since) < duration)
            })
    }
}
