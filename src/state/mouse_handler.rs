//! Mouse event handler.
//!
//! Translates crossterm mouse events into AppState transitions: pointer
//! movement feeds the magnetic cursor, left clicks activate elements and
//! wheel notches scroll the page (or the open modal body).

use crate::state::AppState;
use crate::view::constants::WHEEL_STEP;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use std::time::Instant;

/// Handle one mouse event.
pub fn handle_mouse_event(state: &mut AppState, event: MouseEvent, now: Instant) {
    match event.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            state.pointer_moved(event.column, event.row, now);
        }
        MouseEventKind::Down(MouseButton::Left) => {
            state.pointer_moved(event.column, event.row, now);
            state.click(event.column, event.row, now);
        }
        MouseEventKind::ScrollDown => state.wheel(WHEEL_STEP, now),
        MouseEventKind::ScrollUp => state.wheel(-WHEEL_STEP, now),
        _ => {}
    }
}

#[cfg(test)]
#[path = "mouse_handler_tests.rs"]
mod tests;
