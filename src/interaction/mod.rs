//! Viewport interaction layer.
//!
//! Three independent pieces observe pointer and viewport state:
//!
//! - [`cursor::MagneticCursor`] renders an indicator that is pulled towards
//!   registered targets under the pointer.
//! - [`section_tracker::SectionTracker`] decides which section navigation
//!   highlights, recomputing after a debounce window.
//! - [`smooth_scroll::SmoothScrollController`] animates navigation-driven
//!   scrolling, or jumps when the engine is unavailable.
//!
//! They share no state. Everything is driven by explicit `Instant`s so the
//! layer is deterministic under test.

pub mod crawl;
pub mod cursor;
pub mod debounce;
pub mod geometry;
pub mod intersection;
pub mod motion;
pub mod section_tracker;
pub mod smooth_scroll;
pub mod typewriter;

pub use cursor::{CursorFrame, CursorState, MagneticCursor, TargetHandle, TargetKind};
pub use geometry::{Bounds, Point};
pub use intersection::SectionMeasurement;
pub use section_tracker::{select_active, SectionTracker, TrackerConfig};
pub use smooth_scroll::{
    ElementLocator, ScrollOptions, ScrollOutcome, ScrollProgress, ScrollTarget,
    SmoothScrollController,
};
