//! Looping text crawl for the about section.
//!
//! Playback position is a fraction of one loop so that changing speed keeps
//! the crawl where it is. The on-screen controls hide after a quiet period
//! while the section is mostly in view.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use std::time::{Duration, Instant};
use tracing::trace;

/// Duration of one loop at normal speed.
pub const BASE_CRAWL_DURATION: Duration = Duration::from_secs(60);

/// Controls hide after this long without pointer activity.
pub const CONTROLS_IDLE_TIMEOUT: Duration = Duration::from_secs(3);

/// Share of the section that must be visible for it to count as "in view".
pub const IN_VIEW_RATIO: f64 = 0.5;

/// Playback speed of the crawl.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CrawlSpeed {
    /// One loop per [`BASE_CRAWL_DURATION`].
    #[default]
    Normal,
    /// Twice as fast.
    Double,
    /// Three times as fast.
    Triple,
}

impl CrawlSpeed {
    /// Every speed, slowest first.
    pub const ALL: [CrawlSpeed; 3] = [CrawlSpeed::Normal, CrawlSpeed::Double, CrawlSpeed::Triple];

    /// Multiplier over normal speed.
    pub fn factor(self) -> u32 {
        match self {
            CrawlSpeed::Normal => 1,
            CrawlSpeed::Double => 2,
            CrawlSpeed::Triple => 3,
        }
    }

    /// Badge text (`1x`, `2x`, `3x`).
    pub fn label(self) -> &'static str {
        match self {
            CrawlSpeed::Normal => "1x",
            CrawlSpeed::Double => "2x",
            CrawlSpeed::Triple => "3x",
        }
    }

    /// Time one loop takes at this speed.
    pub fn loop_duration(self) -> Duration {
        BASE_CRAWL_DURATION / self.factor()
    }

    /// Next speed up, saturating at [`CrawlSpeed::Triple`].
    pub fn faster(self) -> Self {
        match self {
            CrawlSpeed::Normal => CrawlSpeed::Double,
            _ => CrawlSpeed::Triple,
        }
    }

    /// Next speed down, saturating at [`CrawlSpeed::Normal`].
    pub fn slower(self) -> Self {
        match self {
            CrawlSpeed::Triple => CrawlSpeed::Double,
            _ => CrawlSpeed::Normal,
        }
    }
}

/// Playback state of the about crawl and its controls.
#[derive(Debug, Clone)]
pub struct Crawl {
    speed: CrawlSpeed,
    paused: bool,
    progress: f64,
    last_tick: Option<Instant>,
    in_view: bool,
    has_left: bool,
    hide_at: Option<Instant>,
    controls_shown: bool,
}

impl Default for Crawl {
    fn default() -> Self {
        Self {
            speed: CrawlSpeed::Normal,
            paused: false,
            progress: 0.0,
            last_tick: None,
            in_view: false,
            has_left: false,
            hide_at: None,
            controls_shown: true,
        }
    }
}

impl Crawl {
    /// Crawl at normal speed, playing, out of view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Position within the current loop, in `[0, 1)`.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Current playback speed.
    pub fn speed(&self) -> CrawlSpeed {
        self.speed
    }

    /// Whether playback is paused.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Whether the about section is at least half visible.
    pub fn in_view(&self) -> bool {
        self.in_view
    }

    /// Controls are drawn only while the section is in view and the idle
    /// timer has not expired.
    pub fn controls_visible(&self) -> bool {
        self.in_view && self.controls_shown
    }

    /// Change speed without moving the crawl. Returns `false` if unchanged.
    pub fn set_speed(&mut self, speed: CrawlSpeed, now: Instant) -> bool {
        if speed == self.speed {
            return false;
        }
        self.advance(now);
        self.speed = speed;
        true
    }

    /// Pause or resume. Returns the new paused state.
    pub fn toggle_pause(&mut self, now: Instant) -> bool {
        self.advance(now);
        self.paused = !self.paused;
        self.paused
    }

    /// Restart from the top of the loop.
    pub fn restart(&mut self, now: Instant) {
        self.progress = 0.0;
        self.last_tick = Some(now);
    }

    /// Update from the section's latest intersection state.
    ///
    /// `top` is the section's top edge relative to the viewport.
    pub fn observe(&mut self, intersecting: bool, ratio: f64, top: f64, now: Instant) {
        let in_view = intersecting && ratio >= IN_VIEW_RATIO;
        if in_view && !self.in_view {
            self.show_controls(now);
        } else if !in_view {
            self.hide_at = None;
        }
        self.in_view = in_view;

        if !intersecting && top < 0.0 {
            self.has_left = true;
        } else if intersecting && self.has_left {
            trace!("About crawl re-entered, restarting");
            self.has_left = false;
            self.restart(now);
        }
    }

    /// Pointer moved over the section.
    pub fn pointer_activity(&mut self, now: Instant) {
        if self.in_view {
            self.show_controls(now);
        }
    }

    fn show_controls(&mut self, now: Instant) {
        self.controls_shown = true;
        self.hide_at = Some(now + CONTROLS_IDLE_TIMEOUT);
    }

    /// Advance playback and the idle timer. Returns `true` if anything
    /// visible changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let before = (self.progress, self.controls_visible());
        self.advance(now);
        if let Some(at) = self.hide_at {
            if now >= at {
                self.controls_shown = false;
                self.hide_at = None;
            }
        }
        before != (self.progress, self.controls_visible())
    }

    fn advance(&mut self, now: Instant) {
        if let Some(last) = self.last_tick {
            if !self.paused {
                let elapsed = now.saturating_duration_since(last).as_secs_f64();
                let loop_secs = self.speed.loop_duration().as_secs_f64();
                self.progress = (self.progress + elapsed / loop_secs).fract();
            }
        }
        self.last_tick = Some(now);
    }

    /// Row (relative to the crawl viewport top) of the first content line.
    ///
    /// The text enters from below the viewport and has fully left above it
    /// at the end of the loop.
    pub fn first_line_row(&self, viewport_rows: u16, content_rows: u16) -> i32 {
        Self::first_line_row_for(self.progress, viewport_rows, content_rows)
    }

    /// [`Crawl::first_line_row`] for a progress snapshot.
    pub fn first_line_row_for(progress: f64, viewport_rows: u16, content_rows: u16) -> i32 {
        let travel = f64::from(viewport_rows) + f64::from(content_rows);
        i32::from(viewport_rows) - (progress.clamp(0.0, 1.0) * travel).floor() as i32
    }
}

/// One star of the backdrop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Star {
    /// Column.
    pub x: u16,
    /// Row.
    pub y: u16,
    /// Brightness bucket 0..=2.
    pub magnitude: u8,
}

/// Deterministic star field covering `width` x `height` cells.
pub fn star_field(width: u16, height: u16, count: usize, seed: u64) -> Vec<Star> {
    if width == 0 || height == 0 {
        return Vec::new();
    }
    let mut rng = Pcg64::seed_from_u64(seed);
    (0..count)
        .map(|_| Star {
            x: rng.gen_range(0..width),
            y: rng.gen_range(0..height),
            magnitude: rng.gen_range(0..3),
        })
        .collect()
}
