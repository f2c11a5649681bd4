//! Magnetic cursor tracker.
//!
//! Tracks the pointer and pulls the rendered cursor indicator towards the
//! center of whichever registered target the pointer is over. Hover is a
//! containment test against each target's last-known bounds, evaluated in
//! registration order (first match wins).

use super::geometry::{Bounds, Point};
use super::motion::{cubic_out, Tween};
use std::time::{Duration, Instant};
use tracing::debug;

/// Indicator size while not hovering any target.
pub const DEFAULT_SIZE: f64 = 16.0;
/// Indicator size while hovering a registered target.
pub const ACTIVE_SIZE: f64 = 20.0;
/// Indicator opacity while not hovering.
pub const DEFAULT_OPACITY: f64 = 1.0;
/// Indicator opacity while hovering.
pub const ACTIVE_OPACITY: f64 = 1.0;
/// Duration of the size/opacity transitions.
pub const HOVER_TRANSITION: Duration = Duration::from_millis(150);

/// Kind of interactive element a magnetic target represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKind {
    /// Generic button.
    Button,
    /// Navigation item.
    Nav,
    /// Project card.
    Card,
    /// Call to action.
    Cta,
    /// Inline or contact link.
    Link,
}

/// Hover state of the cursor indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CursorState {
    /// Whether the pointer is over a registered target.
    pub is_hovering: bool,
    /// Kind of the hovered target.
    pub target_kind: Option<TargetKind>,
}

/// Removal token returned by [`MagneticCursor::register_target`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetHandle(u64);

#[derive(Debug, Clone)]
struct MagneticTarget {
    handle: TargetHandle,
    kind: TargetKind,
    strength: f64,
    bounds: Option<Bounds>,
}

/// Renderable snapshot of the cursor indicator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorFrame {
    /// Rendered center, after attraction.
    pub position: Point,
    /// Indicator size.
    pub size: f64,
    /// Indicator opacity in `[0, 1]`.
    pub opacity: f64,
    /// Hover state the frame was taken in.
    pub state: CursorState,
}

impl CursorFrame {
    /// Whether the size is closer to the hover size than the resting size.
    pub fn is_active_size(&self) -> bool {
        self.size >= (DEFAULT_SIZE + ACTIVE_SIZE) / 2.0
    }
}

/// Pointer tracker with magnetic attraction towards registered targets.
#[derive(Debug, Clone)]
pub struct MagneticCursor {
    targets: Vec<MagneticTarget>,
    next_handle: u64,
    hovered: Option<TargetHandle>,
    state: CursorState,
    pointer: Option<Point>,
    position: Point,
    size: Tween,
    opacity: Tween,
    mounted: bool,
}

impl Default for MagneticCursor {
    fn default() -> Self {
        Self::new()
    }
}

impl MagneticCursor {
    /// Unmounted cursor with no targets and a hidden indicator.
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
            next_handle: 0,
            hovered: None,
            state: CursorState::default(),
            pointer: None,
            position: Point::default(),
            size: Tween::settled(DEFAULT_SIZE, HOVER_TRANSITION, cubic_out),
            opacity: Tween::settled(0.0, HOVER_TRANSITION, cubic_out),
            mounted: false,
        }
    }

    /// Start tracking. While mounted the native pointer indicator is hidden.
    pub fn mount(&mut self) {
        self.mounted = true;
    }

    /// Stop tracking: drops every registration and restores the native
    /// pointer indicator.
    pub fn teardown(&mut self) {
        debug!(targets = self.targets.len(), "Tearing down magnetic cursor");
        self.targets.clear();
        self.hovered = None;
        self.state = CursorState::default();
        self.pointer = None;
        self.size.jump(DEFAULT_SIZE);
        self.opacity.jump(0.0);
        self.mounted = false;
    }

    /// Whether the cursor is tracking.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Whether the native pointer indicator should currently be hidden.
    pub fn hides_native_pointer(&self) -> bool {
        self.mounted
    }

    /// Register an interactive element. `strength` is clamped to `[0, 1]`.
    pub fn register_target(
        &mut self,
        kind: TargetKind,
        strength: f64,
        bounds: Option<Bounds>,
    ) -> TargetHandle {
        let handle = TargetHandle(self.next_handle);
        self.next_handle += 1;
        let strength = if strength.is_finite() {
            strength.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.targets.push(MagneticTarget {
            handle,
            kind,
            strength,
            bounds,
        });
        handle
    }

    /// Remove a registration. Returns `false` if the handle was unknown.
    ///
    /// Deregistering the hovered target does not fire a leave transition by
    /// itself; the next pointer move or [`refresh`](Self::refresh) does.
    pub fn deregister(&mut self, handle: TargetHandle) -> bool {
        let before = self.targets.len();
        self.targets.retain(|t| t.handle != handle);
        before != self.targets.len()
    }

    /// Update a target's last-known bounds (`None` when off screen).
    pub fn set_target_bounds(&mut self, handle: TargetHandle, bounds: Option<Bounds>) {
        if let Some(target) = self.targets.iter_mut().find(|t| t.handle == handle) {
            target.bounds = bounds;
        }
    }

    /// Number of registered targets.
    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    /// Handle a pointer-move event and return the rendered position.
    pub fn pointer_move(&mut self, pointer: Point, now: Instant) -> Point {
        if self.pointer.is_none() {
            self.opacity.animate_to(DEFAULT_OPACITY, now);
        }
        self.pointer = Some(pointer);
        self.update_hover(pointer, now);
        self.position = self.attracted_position(pointer);
        self.position
    }

    /// Re-evaluate hover and attraction with the last pointer position,
    /// after target bounds moved underneath it.
    pub fn refresh(&mut self, now: Instant) {
        if let Some(pointer) = self.pointer {
            self.update_hover(pointer, now);
            self.position = self.attracted_position(pointer);
        }
    }

    /// Advance size/opacity transitions.
    pub fn tick(&mut self, now: Instant) {
        self.size.tick(now);
        self.opacity.tick(now);
    }

    /// Whether a size or opacity transition is running.
    pub fn is_animating(&self) -> bool {
        self.size.is_animating() || self.opacity.is_animating()
    }

    /// Current hover state.
    pub fn state(&self) -> CursorState {
        self.state
    }

    /// Handle of the hovered target.
    pub fn hovered(&self) -> Option<TargetHandle> {
        self.hovered
    }

    /// Last pointer position.
    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    /// Snapshot for rendering.
    pub fn frame(&self) -> CursorFrame {
        CursorFrame {
            position: self.position,
            size: self.size.value(),
            opacity: self.opacity.value(),
            state: self.state,
        }
    }

    fn find_hovered(&self, pointer: Point) -> Option<&MagneticTarget> {
        self.targets
            .iter()
            .find(|t| t.bounds.is_some_and(|b| b.contains(pointer)))
    }

    fn update_hover(&mut self, pointer: Point, now: Instant) {
        let hovered = self.find_hovered(pointer).map(|t| (t.handle, t.kind));
        if hovered.map(|(h, _)| h) == self.hovered {
            return;
        }
        match hovered {
            Some((handle, kind)) => {
                self.hovered = Some(handle);
                self.state = CursorState {
                    is_hovering: true,
                    target_kind: Some(kind),
                };
                self.size.animate_to(ACTIVE_SIZE, now);
                self.opacity.animate_to(ACTIVE_OPACITY, now);
            }
            None => {
                self.hovered = None;
                self.state = CursorState::default();
                self.size.animate_to(DEFAULT_SIZE, now);
                self.opacity.animate_to(DEFAULT_OPACITY, now);
            }
        }
    }

    fn attracted_position(&self, pointer: Point) -> Point {
        if !self.state.is_hovering {
            return pointer;
        }
        let Some(target) = self.find_hovered(pointer) else {
            return pointer;
        };
        let Some(bounds) = target.bounds else {
            return pointer;
        };
        let blend = attraction(pointer, bounds, target.strength);
        if blend <= 0.0 {
            return pointer;
        }
        pointer.lerp(bounds.center(), blend)
    }
}

/// Effective blend weight towards the center of `bounds`:
/// `max(0, 1 - distance / max(width, height)) * strength`.
pub fn attraction(pointer: Point, bounds: Bounds, strength: f64) -> f64 {
    let max_dim = bounds.max_dim();
    if max_dim <= 0.0 {
        return 0.0;
    }
    let distance = pointer.distance_to(bounds.center());
    (1.0 - distance / max_dim).max(0.0) * strength
}
