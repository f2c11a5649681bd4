//! Vertical scrolling keyboard action handler.
//!
//! Routes scroll and section-navigation actions to the project modal while
//! it is open (the page stays locked) and to the page scroll controller
//! otherwise.

use crate::model::{KeyAction, SectionId};
use crate::state::AppState;
use crate::view::constants::{KEY_SCROLL_STEP, NAV_HEIGHT};
use std::time::Instant;

/// Handle a scroll or section-navigation action.
///
/// Actions that are not about scrolling are ignored.
pub fn handle_scroll_action(state: &mut AppState, action: KeyAction, now: Instant) {
    if state.help_visible || state.form.is_open() {
        return;
    }
    if state.modal.is_open() {
        scroll_modal(state, action);
        return;
    }

    let page = page_rows(state);
    match action {
        KeyAction::ScrollUp => state.scroll_page_by(-KEY_SCROLL_STEP, now),
        KeyAction::ScrollDown => state.scroll_page_by(KEY_SCROLL_STEP, now),
        KeyAction::PageUp => state.scroll_page_by(-page, now),
        KeyAction::PageDown => state.scroll_page_by(page, now),
        KeyAction::ScrollToTop => {
            let duration = state.config().scroll_duration();
            state.scroll_to_offset(0.0, duration, now);
        }
        KeyAction::ScrollToBottom => {
            let duration = state.config().scroll_duration();
            let bottom = state.layout().max_scroll();
            state.scroll_to_offset(bottom, duration, now);
        }
        KeyAction::JumpTo(id) => {
            state.navigate_to(id, now);
        }
        KeyAction::NextSection => {
            let target = match state.navigation_section() {
                Some(current) => current.next(),
                None => Some(SectionId::Hero),
            };
            if let Some(id) = target {
                state.navigate_to(id, now);
            }
        }
        KeyAction::PrevSection => {
            if let Some(id) = state.navigation_section().and_then(SectionId::prev) {
                state.navigate_to(id, now);
            }
        }
        _ => {}
    }
}

/// Rows moved by a page scroll: the viewport minus the navigation bar.
fn page_rows(state: &AppState) -> f64 {
    let rows = state.screen().viewport_rows().saturating_sub(NAV_HEIGHT);
    f64::from(rows.max(1))
}

fn scroll_modal(state: &mut AppState, action: KeyAction) {
    let body = i32::from(state.screen().modal().body.height.max(1));
    let delta = match action {
        KeyAction::ScrollUp => -1,
        KeyAction::ScrollDown => 1,
        KeyAction::PageUp => -body,
        KeyAction::PageDown => body,
        KeyAction::ScrollToTop => i32::MIN,
        KeyAction::ScrollToBottom => i32::MAX,
        _ => return,
    };
    state.modal.scroll_by(delta);
}

#[cfg(test)]
#[path = "scroll_handler_tests.rs"]
mod tests;
