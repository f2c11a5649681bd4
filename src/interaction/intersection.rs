//! Viewport intersection observation.
//!
//! Tracks which threshold bucket each observed element's intersection ratio
//! falls into and reports when any bucket changes, the way a browser
//! intersection observer fires its callback.

use crate::model::SectionId;
use std::collections::HashMap;

/// Thresholds at which an intersection change is reported.
pub const DEFAULT_THRESHOLDS: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

/// Viewport-relative vertical extent of one section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionMeasurement {
    /// Section being measured.
    pub id: SectionId,
    /// Top edge relative to the viewport top (negative when scrolled past).
    pub top: f64,
    /// Bottom edge relative to the viewport top.
    pub bottom: f64,
}

impl SectionMeasurement {
    /// Measurement of `id` spanning `top..bottom`.
    pub fn new(id: SectionId, top: f64, bottom: f64) -> Self {
        Self { id, top, bottom }
    }

    /// Vertical extent, never negative.
    pub fn height(&self) -> f64 {
        (self.bottom - self.top).max(0.0)
    }

    /// Height of the part of the section inside `[0, viewport_height)`.
    pub fn overlap(&self, viewport_height: f64) -> f64 {
        (self.bottom.min(viewport_height) - self.top.max(0.0)).max(0.0)
    }

    /// Whether any part lies inside `[0, viewport_height)`.
    pub fn is_intersecting(&self, viewport_height: f64) -> bool {
        self.top < viewport_height && self.bottom > 0.0
    }

    /// Fraction of the section itself that is visible.
    pub fn intersection_ratio(&self, viewport_height: f64) -> f64 {
        let height = self.height();
        if height <= 0.0 {
            return 0.0;
        }
        (self.overlap(viewport_height) / height).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Observation {
    intersecting: bool,
    bucket: usize,
}

/// Threshold-crossing observer over a set of sections.
#[derive(Debug, Clone)]
pub struct IntersectionObserver {
    thresholds: Vec<f64>,
    last: HashMap<SectionId, Observation>,
    connected: bool,
}

impl Default for IntersectionObserver {
    fn default() -> Self {
        Self::new(&DEFAULT_THRESHOLDS)
    }
}

impl IntersectionObserver {
    /// Observer reporting crossings of `thresholds`, not yet connected.
    pub fn new(thresholds: &[f64]) -> Self {
        let mut thresholds = thresholds.to_vec();
        thresholds.sort_by(f64::total_cmp);
        Self {
            thresholds,
            last: HashMap::new(),
            connected: true,
        }
    }

    /// Feed fresh measurements. Returns `true` when the callback would fire:
    /// on the first observation of a section, or when any section crossed a
    /// threshold or changed its intersecting state. Sections absent from
    /// `measurements` are no longer observed.
    pub fn observe(&mut self, measurements: &[SectionMeasurement], viewport_height: f64) -> bool {
        if !self.connected {
            return false;
        }
        let mut changed = false;
        let mut next = HashMap::with_capacity(measurements.len());
        for m in measurements {
            let ratio = m.intersection_ratio(viewport_height);
            let observation = Observation {
                intersecting: m.is_intersecting(viewport_height),
                bucket: self.thresholds.iter().filter(|t| ratio >= **t).count(),
            };
            if self.last.get(&m.id) != Some(&observation) {
                changed = true;
            }
            next.insert(m.id, observation);
        }
        self.last = next;
        changed
    }

    /// Stop observing everything.
    pub fn disconnect(&mut self) {
        self.connected = false;
        self.last.clear();
    }

    /// Resume observing; the next `observe` reports every section afresh.
    pub fn reconnect(&mut self) {
        self.connected = true;
    }

    /// Whether the observer is observing.
    pub fn is_connected(&self) -> bool {
        self.connected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hero_at(top: f64) -> SectionMeasurement {
        SectionMeasurement::new(SectionId::Hero, top, top + 40.0)
    }

    #[test]
    fn first_observation_fires() {
        let mut observer = IntersectionObserver::default();
        assert!(observer.observe(&[hero_at(0.0)], 40.0));
    }

    #[test]
    fn small_moves_within_a_bucket_do_not_fire() {
        let mut observer = IntersectionObserver::default();
        observer.observe(&[hero_at(0.0)], 40.0);
        // ratio 39/40 is still below 1.0 but above 0.75: bucket changes once
        assert!(observer.observe(&[hero_at(-1.0)], 40.0));
        assert!(!observer.observe(&[hero_at(-2.0)], 40.0));
    }

    #[test]
    fn crossing_threshold_fires() {
        let mut observer = IntersectionObserver::default();
        observer.observe(&[hero_at(-5.0)], 40.0);
        assert!(observer.observe(&[hero_at(-25.0)], 40.0), "crossed 0.5");
    }

    #[test]
    fn disconnected_observer_is_silent() {
        let mut observer = IntersectionObserver::default();
        observer.disconnect();
        assert!(!observer.observe(&[hero_at(0.0)], 40.0));
    }

    #[test]
    fn ratio_is_relative_to_section_height() {
        let m = SectionMeasurement::new(SectionId::About, 30.0, 50.0);
        assert_eq!(m.overlap(40.0), 10.0);
        assert_eq!(m.intersection_ratio(40.0), 0.5);
    }
}
