//! Active-section tracking for navigation highlighting.
//!
//! Intersection changes arm a debounce timer; when it fires, every section
//! is measured against the viewport and a single "active" section is
//! chosen. The active value only changes on a recomputation that finds at
//! least one section in view, so it never flickers back to unset.

use super::debounce::Debouncer;
use super::intersection::{IntersectionObserver, SectionMeasurement};
use crate::model::SectionId;
use std::cmp::Ordering;
use std::time::{Duration, Instant};
use tracing::debug;

/// Default quiet window before recomputing.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(100);

/// Default width of the "top of viewport" priority band, in layout units.
pub const DEFAULT_PRIORITY_BAND: f64 = 200.0;

/// Tuning for [`SectionTracker`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackerConfig {
    /// Quiet window after the last scroll before the active section is recomputed.
    pub debounce: Duration,
    /// Sections whose top lies in `[0, priority_band)` win outright.
    pub priority_band: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            priority_band: DEFAULT_PRIORITY_BAND,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    order: usize,
    id: SectionId,
    top: f64,
    ratio: f64,
    in_band: bool,
}

/// Pick the active section from viewport-relative measurements.
///
/// In-view means `top < viewport_height / 2 && bottom > 0`. Among in-view
/// sections, any whose top lies in `[0, priority_band)` wins (the one
/// closest to the top first); otherwise the largest share of the viewport
/// wins. Ties keep document order. Returns `None` when nothing is in view.
pub fn select_active(
    measurements: &[SectionMeasurement],
    viewport_height: f64,
    priority_band: f64,
) -> Option<SectionId> {
    if viewport_height <= 0.0 {
        return None;
    }
    let mut candidates: Vec<Candidate> = measurements
        .iter()
        .enumerate()
        .filter(|(_, m)| m.top < viewport_height / 2.0 && m.bottom > 0.0)
        .map(|(order, m)| Candidate {
            order,
            id: m.id,
            top: m.top,
            ratio: m.overlap(viewport_height) / viewport_height,
            in_band: m.top >= 0.0 && m.top < priority_band,
        })
        .collect();

    candidates.sort_by(|a, b| match (a.in_band, b.in_band) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (true, true) => a.top.total_cmp(&b.top).then(a.order.cmp(&b.order)),
        (false, false) => b.ratio.total_cmp(&a.ratio).then(a.order.cmp(&b.order)),
    });

    candidates.first().map(|c| c.id)
}

/// Debounced single-writer tracker of the active section.
#[derive(Debug, Clone)]
pub struct SectionTracker {
    active: Option<SectionId>,
    observer: IntersectionObserver,
    debounce: Debouncer,
    priority_band: f64,
    recomputations: u64,
}

impl Default for SectionTracker {
    fn default() -> Self {
        Self::new(TrackerConfig::default())
    }
}

impl SectionTracker {
    /// Tracker with no active section, not yet observing.
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            active: None,
            observer: IntersectionObserver::default(),
            debounce: Debouncer::new(config.debounce),
            priority_band: config.priority_band,
            recomputations: 0,
        }
    }

    /// The currently active section (`None` until the first recomputation
    /// finds something in view).
    pub fn active(&self) -> Option<SectionId> {
        self.active
    }

    /// Feed the latest measurements to the intersection observer, arming the
    /// debounce timer if anything crossed a threshold.
    pub fn observe(
        &mut self,
        measurements: &[SectionMeasurement],
        viewport_height: f64,
        now: Instant,
    ) -> bool {
        let changed = self.observer.observe(measurements, viewport_height);
        if changed {
            self.notify(now);
        }
        changed
    }

    /// Signal an intersection change: (re)start the debounce window,
    /// replacing any pending recomputation.
    pub fn notify(&mut self, now: Instant) {
        if !self.observer.is_connected() {
            return;
        }
        self.debounce.schedule(now);
    }

    /// Run the recomputation if the debounce window elapsed.
    ///
    /// Returns the new active section when it changed.
    pub fn poll(
        &mut self,
        now: Instant,
        measurements: &[SectionMeasurement],
        viewport_height: f64,
    ) -> Option<SectionId> {
        self.debounce.poll(now)?;
        self.recomputations += 1;
        let selected = select_active(measurements, viewport_height, self.priority_band)?;
        if self.active == Some(selected) {
            return None;
        }
        debug!(from = ?self.active, to = %selected, "Active section changed");
        self.active = Some(selected);
        Some(selected)
    }

    /// Earliest instant at which [`poll`](Self::poll) could fire.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debounce.pending().map(|task| task.due)
    }

    /// Number of recomputations executed so far.
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }

    /// Height of the band below the viewport top that wins outright.
    pub fn priority_band(&self) -> f64 {
        self.priority_band
    }

    /// Cancel the pending recomputation and stop observing.
    pub fn teardown(&mut self) {
        self.debounce.cancel();
        self.observer.disconnect();
    }

    /// Observe again after a teardown.
    pub fn reconnect(&mut self) {
        self.observer.reconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VH: f64 = 800.0;

    fn m(id: SectionId, top: f64, bottom: f64) -> SectionMeasurement {
        SectionMeasurement::new(id, top, bottom)
    }

    mod select_active {
        use super::*;

        #[test]
        fn top_band_beats_larger_visibility() {
            // About is a sliver near the top, Skills fills the rest
            let ms = [
                m(SectionId::About, 50.0, 250.0),
                m(SectionId::Skills, 250.0, 1200.0),
            ];
            assert_eq!(
                select_active(&ms, VH, DEFAULT_PRIORITY_BAND),
                Some(SectionId::About)
            );
        }

        #[test]
        fn overlapping_sections_prefer_band_over_later_top() {
            let ms = [
                m(SectionId::Projects, 300.0, 1100.0),
                m(SectionId::Contact, 50.0, 850.0),
            ];
            assert_eq!(
                select_active(&ms, VH, DEFAULT_PRIORITY_BAND),
                Some(SectionId::Contact)
            );
        }

        #[test]
        fn without_band_candidate_highest_ratio_wins() {
            let ms = [
                m(SectionId::Hero, -700.0, 100.0),
                m(SectionId::About, 100.0, 1000.0),
            ];
            // Narrow band: neither top qualifies, About covers more
            assert_eq!(select_active(&ms, VH, 50.0), Some(SectionId::About));

            let ms = [
                m(SectionId::Hero, -500.0, 300.0),
                m(SectionId::About, 300.0, 1100.0),
            ];
            // About starts above the midline and covers 500 of 800
            assert_eq!(
                select_active(&ms, VH, DEFAULT_PRIORITY_BAND),
                Some(SectionId::About)
            );
        }

        #[test]
        fn negative_top_is_not_in_band() {
            let ms = [
                m(SectionId::Skills, -10.0, 700.0),
                m(SectionId::Projects, 700.0, 1500.0),
            ];
            assert_eq!(
                select_active(&ms, VH, DEFAULT_PRIORITY_BAND),
                Some(SectionId::Skills)
            );
        }

        #[test]
        fn section_starting_below_middle_is_not_in_view() {
            let ms = [m(SectionId::Contact, 450.0, 1200.0)];
            assert_eq!(select_active(&ms, VH, DEFAULT_PRIORITY_BAND), None);
        }

        #[test]
        fn nothing_in_view_yields_none() {
            let ms = [m(SectionId::Hero, -900.0, -100.0)];
            assert_eq!(select_active(&ms, VH, DEFAULT_PRIORITY_BAND), None);
        }

        #[test]
        fn ratio_ties_keep_document_order() {
            let ms = [
                m(SectionId::Skills, -400.0, 400.0),
                m(SectionId::Projects, 399.0, 1199.0),
            ];
            // Skills 400/800, Projects 401/800 → Projects wins on ratio
            assert_eq!(
                select_active(&ms, VH, DEFAULT_PRIORITY_BAND),
                Some(SectionId::Projects)
            );
            let ms = [
                m(SectionId::Skills, -400.0, 400.0),
                m(SectionId::Projects, -400.0, 400.0),
            ];
            assert_eq!(
                select_active(&ms, VH, DEFAULT_PRIORITY_BAND),
                Some(SectionId::Skills)
            );
        }

        #[test]
        fn two_sections_in_band_closest_top_wins() {
            let ms = [
                m(SectionId::About, 150.0, 160.0),
                m(SectionId::Skills, 160.0, 900.0),
                m(SectionId::Hero, 10.0, 150.0),
            ];
            assert_eq!(
                select_active(&ms, VH, DEFAULT_PRIORITY_BAND),
                Some(SectionId::Hero)
            );
        }
    }

    mod debounced_tracking {
        use super::*;

        fn hero_view() -> Vec<SectionMeasurement> {
            vec![
                m(SectionId::Hero, 0.0, 800.0),
                m(SectionId::About, 800.0, 1600.0),
            ]
        }

        #[test]
        fn active_unset_until_first_recompute() {
            let start = Instant::now();
            let mut tracker = SectionTracker::default();
            assert_eq!(tracker.active(), None);

            tracker.observe(&hero_view(), VH, start);
            assert_eq!(tracker.poll(start, &hero_view(), VH), None);
            assert_eq!(tracker.active(), None);

            let fired = tracker.poll(start + DEFAULT_DEBOUNCE, &hero_view(), VH);
            assert_eq!(fired, Some(SectionId::Hero));
            assert_eq!(tracker.active(), Some(SectionId::Hero));
        }

        #[test]
        fn burst_collapses_into_one_recomputation() {
            let start = Instant::now();
            let mut tracker = SectionTracker::default();
            for i in 0..10 {
                tracker.notify(start + Duration::from_millis(i * 9));
                tracker.poll(start + Duration::from_millis(i * 9), &hero_view(), VH);
            }
            let last = start + Duration::from_millis(81);
            tracker.poll(last + Duration::from_millis(99), &hero_view(), VH);
            assert_eq!(tracker.recomputations(), 0);
            tracker.poll(last + DEFAULT_DEBOUNCE, &hero_view(), VH);
            assert_eq!(tracker.recomputations(), 1);
            tracker.poll(last + DEFAULT_DEBOUNCE * 3, &hero_view(), VH);
            assert_eq!(tracker.recomputations(), 1);
        }

        #[test]
        fn sticky_when_nothing_in_view() {
            let start = Instant::now();
            let mut tracker = SectionTracker::default();
            tracker.notify(start);
            tracker.poll(start + DEFAULT_DEBOUNCE, &hero_view(), VH);
            assert_eq!(tracker.active(), Some(SectionId::Hero));

            let nothing = [m(SectionId::Hero, -2000.0, -1200.0)];
            let later = start + Duration::from_secs(1);
            tracker.notify(later);
            assert_eq!(tracker.poll(later + DEFAULT_DEBOUNCE, &nothing, VH), None);
            assert_eq!(tracker.active(), Some(SectionId::Hero));
        }

        #[test]
        fn teardown_cancels_pending_recompute() {
            let start = Instant::now();
            let mut tracker = SectionTracker::default();
            tracker.observe(&hero_view(), VH, start);
            assert!(tracker.next_deadline().is_some());
            tracker.teardown();
            assert!(tracker.next_deadline().is_none());
            assert_eq!(tracker.poll(start + DEFAULT_DEBOUNCE, &hero_view(), VH), None);
            assert_eq!(tracker.recomputations(), 0);
            // Silent after teardown
            assert!(!tracker.observe(&hero_view(), VH, start));
        }
    }
}
