//! Animated scrolling towards page elements.
//!
//! Navigation requests go through [`SmoothScrollController::scroll_to`]. With
//! the inertial engine enabled the viewport glides to the element; without
//! it the controller computes the element's offset below the navigation bar
//! and jumps there. Scroll positions are document units and never leave
//! `[0, limit]`.

use super::motion::{expo_out, Tween};
use crate::model::SectionId;
use std::time::{Duration, Instant};
use tracing::debug;

/// Default duration of a `scroll_to` animation.
pub const DEFAULT_SCROLL_DURATION: Duration = Duration::from_millis(1500);

/// Duration the engine uses for wheel and key driven scrolling.
pub const ENGINE_DURATION: Duration = Duration::from_millis(1200);

/// What a scroll request points at.
#[derive(Debug, Clone, PartialEq)]
pub enum ScrollTarget {
    /// Element identifier, without the leading `#`.
    Element(String),
    /// Absolute document offset.
    Offset(f64),
}

impl From<&str> for ScrollTarget {
    fn from(id: &str) -> Self {
        ScrollTarget::Element(id.strip_prefix('#').unwrap_or(id).to_string())
    }
}

impl From<SectionId> for ScrollTarget {
    fn from(id: SectionId) -> Self {
        ScrollTarget::Element(id.as_str().to_string())
    }
}

impl From<f64> for ScrollTarget {
    fn from(offset: f64) -> Self {
        ScrollTarget::Offset(offset)
    }
}

/// Per-request scroll tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollOptions {
    /// Added to the resolved destination (negative values stop short).
    pub offset: f64,
    /// Length of the animation when it runs.
    pub duration: Duration,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            offset: 0.0,
            duration: DEFAULT_SCROLL_DURATION,
        }
    }
}

/// Resolves element identifiers against the current page layout.
pub trait ElementLocator {
    /// Document-relative top of the element, `None` if no such element.
    fn element_top(&self, id: &str) -> Option<f64>;

    /// Rendered height of the fixed navigation bar.
    fn nav_height(&self) -> f64;

    /// Largest reachable scroll offset.
    fn scroll_limit(&self) -> f64;
}

/// Scroll offset as a fraction of the scrollable range.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct ScrollProgress(f64);

impl ScrollProgress {
    /// Progress of `offset` through `[0, limit]`, clamped.
    pub fn new(offset: f64, limit: f64) -> Self {
        if limit <= 0.0 || !offset.is_finite() {
            return Self(0.0);
        }
        Self((offset / limit).clamp(0.0, 1.0))
    }

    /// Fraction in `[0, 1]`.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Fraction as a whole percentage.
    pub fn percent(self) -> u8 {
        (self.0 * 100.0).round() as u8
    }
}

/// How a scroll request was carried out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollOutcome {
    /// A tween is running towards the destination.
    Animated {
        /// Clamped destination offset.
        to: f64,
    },
    /// The offset was set immediately.
    Jumped {
        /// Clamped destination offset.
        to: f64,
    },
    /// The target did not resolve; nothing moved.
    Ignored,
}

/// Animated viewport offset with an optional inertial engine.
#[derive(Debug, Clone)]
pub struct SmoothScrollController {
    tween: Tween,
    engine_enabled: bool,
    engine_duration: Duration,
}

impl Default for SmoothScrollController {
    fn default() -> Self {
        Self::new(true)
    }
}

impl SmoothScrollController {
    /// Controller resting at the top of the page.
    pub fn new(engine_enabled: bool) -> Self {
        Self {
            tween: Tween::settled(0.0, ENGINE_DURATION, expo_out),
            engine_enabled,
            engine_duration: ENGINE_DURATION,
        }
    }

    /// Override the engine's wheel duration.
    pub fn with_engine_duration(mut self, duration: Duration) -> Self {
        self.engine_duration = duration;
        self
    }

    /// Whether the inertial engine is on.
    pub fn engine_enabled(&self) -> bool {
        self.engine_enabled
    }

    /// Turn the inertial engine on or off. Turning it off stops any running
    /// animation where it is.
    pub fn set_engine_enabled(&mut self, enabled: bool) {
        if self.engine_enabled == enabled {
            return;
        }
        debug!(enabled, "Smooth scroll engine toggled");
        if !enabled {
            self.stop();
        }
        self.engine_enabled = enabled;
    }

    /// Current (possibly mid-animation) scroll offset.
    pub fn position(&self) -> f64 {
        self.tween.value()
    }

    /// Where the viewport is heading.
    pub fn destination(&self) -> f64 {
        self.tween.target()
    }

    /// Whether an animation is in flight.
    pub fn is_animating(&self) -> bool {
        self.tween.is_animating()
    }

    /// Scroll progress of the current position against `limit`.
    pub fn progress(&self, limit: f64) -> ScrollProgress {
        ScrollProgress::new(self.position(), limit)
    }

    /// Scroll to an element or offset.
    ///
    /// Unknown elements are ignored without error.
    pub fn scroll_to(
        &mut self,
        target: impl Into<ScrollTarget>,
        options: ScrollOptions,
        locator: &impl ElementLocator,
        now: Instant,
    ) -> ScrollOutcome {
        let target = target.into();
        let limit = locator.scroll_limit().max(0.0);
        let base = match &target {
            ScrollTarget::Element(id) => match locator.element_top(id) {
                Some(top) if self.engine_enabled => top,
                Some(top) => top - locator.nav_height(),
                None => {
                    debug!(id = %id, "Scroll target not found");
                    return ScrollOutcome::Ignored;
                }
            },
            ScrollTarget::Offset(y) if y.is_finite() => *y,
            ScrollTarget::Offset(_) => return ScrollOutcome::Ignored,
        };
        let to = (base + options.offset).clamp(0.0, limit);

        if self.engine_enabled {
            self.tween.animate_to_over(to, options.duration, now);
            ScrollOutcome::Animated { to }
        } else {
            self.tween.jump(to);
            ScrollOutcome::Jumped { to }
        }
    }

    /// Relative scroll for wheel and key input. Successive deltas accumulate
    /// on the running animation's destination.
    pub fn scroll_by(&mut self, delta: f64, locator: &impl ElementLocator, now: Instant) -> f64 {
        let limit = locator.scroll_limit().max(0.0);
        let to = (self.destination() + delta).clamp(0.0, limit);
        if self.engine_enabled {
            self.tween.animate_to_over(to, self.engine_duration, now);
        } else {
            self.tween.jump(to);
        }
        to
    }

    /// Advance the animation. Returns `true` while the viewport is moving.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.tween.is_animating() {
            return false;
        }
        self.tween.tick(now);
        true
    }

    /// Re-clamp after the scrollable range shrank.
    ///
    /// A running animation whose destination fell out of range is retargeted
    /// to the new limit over its remaining time. Only a position already past
    /// the limit jumps.
    pub fn clamp(&mut self, limit: f64, now: Instant) {
        let limit = limit.max(0.0);
        self.tween.tick(now);
        if self.position() > limit {
            self.tween.jump(limit);
            return;
        }
        if self.destination() > limit {
            let remaining = self.tween.remaining(now);
            if remaining.is_zero() {
                self.tween.jump(limit);
            } else {
                self.tween.animate_to_over(limit, remaining, now);
            }
        }
    }

    /// Halt at the current position.
    pub fn stop(&mut self) {
        let here = self.position();
        self.tween.jump(here);
    }
}
