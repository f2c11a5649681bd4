//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

use std::time::Duration;

/// Height of the navigation bar overlay in lines (items + rule).
pub const NAV_HEIGHT: u16 = 2;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Terminals this wide or narrower fall back to instant scrolling.
pub const ENGINE_MIN_WIDTH: u16 = 64;

/// Rows moved per mouse wheel notch.
pub const WHEEL_STEP: f64 = 3.0;

/// Rows moved per line-scroll key.
pub const KEY_SCROLL_STEP: f64 = 2.0;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 70;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;

/// Project modal width as a percentage of the screen.
pub const MODAL_WIDTH_PERCENT: u16 = 70;
/// Project modal height as a percentage of the screen.
pub const MODAL_HEIGHT_PERCENT: u16 = 70;

/// Compose form width in cells.
pub const FORM_WIDTH: u16 = 56;
/// Compose form height in cells.
pub const FORM_HEIGHT: u16 = 15;

/// Event poll timeout; roughly 30 frames per second while animating.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(33);

/// Marquee advances one char per interval.
pub const MARQUEE_STEP: Duration = Duration::from_millis(120);

/// How long transient status messages stay visible.
pub const STATUS_MESSAGE_DURATION: Duration = Duration::from_secs(4);

/// Scroll duration when keyboard focus moves to an off-screen element.
pub const FOCUS_SCROLL_DURATION: Duration = Duration::from_millis(300);
