//! Time-based tweens and easing curves.
//!
//! Animations never block: a [`Tween`] records when it started and is
//! sampled with the current `Instant` on every frame tick.

use std::time::{Duration, Instant};

/// Easing curve mapping linear progress `t ∈ [0,1]` to eased progress.
pub type Easing = fn(f64) -> f64;

/// Exponential ease-out used by the inertial scroll engine.
pub fn expo_out(t: f64) -> f64 {
    (1.001 - 2f64.powf(-10.0 * t)).min(1.0)
}

/// Cubic ease-out, used for small UI transitions (cursor size, opacity).
pub fn cubic_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Linear progress.
pub fn linear(t: f64) -> f64 {
    t.clamp(0.0, 1.0)
}

/// A scalar animated between two values over a fixed duration.
#[derive(Debug, Clone, Copy)]
pub struct Tween {
    from: f64,
    to: f64,
    value: f64,
    started: Option<Instant>,
    duration: Duration,
    easing: Easing,
}

impl Tween {
    /// A tween resting at `value`.
    pub fn settled(value: f64, duration: Duration, easing: Easing) -> Self {
        Self {
            from: value,
            to: value,
            value,
            started: None,
            duration,
            easing,
        }
    }

    /// Start animating from the current value towards `target`.
    ///
    /// Retargeting to the value already being animated to is a no-op so that
    /// repeated calls do not restart the curve.
    pub fn animate_to(&mut self, target: f64, now: Instant) {
        if (self.to - target).abs() < f64::EPSILON {
            return;
        }
        self.restart(target, now);
    }

    /// Like [`animate_to`](Self::animate_to) with a one-off duration.
    pub fn animate_to_over(&mut self, target: f64, duration: Duration, now: Instant) {
        self.duration = duration;
        self.restart(target, now);
    }

    fn restart(&mut self, target: f64, now: Instant) {
        self.from = self.value;
        self.to = target;
        if self.duration.is_zero() {
            self.value = target;
            self.started = None;
        } else {
            self.started = Some(now);
        }
    }

    /// Set the value immediately, cancelling any running animation.
    pub fn jump(&mut self, value: f64) {
        self.from = value;
        self.to = value;
        self.value = value;
        self.started = None;
    }

    /// Sample the tween at `now`, storing and returning the new value.
    pub fn tick(&mut self, now: Instant) -> f64 {
        let Some(started) = self.started else {
            return self.value;
        };
        let elapsed = now.saturating_duration_since(started);
        if elapsed >= self.duration {
            self.value = self.to;
            self.started = None;
        } else {
            let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
            self.value = self.from + (self.to - self.from) * (self.easing)(t);
        }
        self.value
    }

    /// Value as of the last tick.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Value the tween is heading to.
    pub fn target(&self) -> f64 {
        self.to
    }

    /// Whether a transition is in flight.
    pub fn is_animating(&self) -> bool {
        self.started.is_some()
    }

    /// Time left in the running transition, zero when settled.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.started.map_or(Duration::ZERO, |started| {
            self.duration
                .saturating_sub(now.saturating_duration_since(started))
        })
    }
}
