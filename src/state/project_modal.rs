//! Project detail modal state.
//!
//! While open the page is locked: wheel input scrolls only the modal body
//! and stops at its edges instead of passing through to the page.

use tracing::debug;

/// The project shown and how far its body is scrolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenModal {
    /// Index into the content's project list.
    pub project: usize,
    /// First visible body row.
    pub scroll: u16,
    /// Largest useful `scroll`, known after the body is laid out.
    pub max_scroll: u16,
}

/// Project detail modal, closed by default.
#[derive(Debug, Clone, Default)]
pub struct ProjectModal {
    open: Option<OpenModal>,
}

impl ProjectModal {
    /// Show project `project` scrolled to the top.
    pub fn open(&mut self, project: usize) {
        debug!(project, "Opening project modal");
        self.open = Some(OpenModal {
            project,
            scroll: 0,
            max_scroll: 0,
        });
    }

    /// Returns `true` if a modal was open.
    pub fn close(&mut self) -> bool {
        self.open.take().is_some()
    }

    /// The open modal, if any.
    pub fn current(&self) -> Option<OpenModal> {
        self.open
    }

    /// Whether a modal is open.
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Record how far the body can scroll for the current modal size.
    pub fn set_max_scroll(&mut self, max_scroll: u16) {
        if let Some(modal) = self.open.as_mut() {
            modal.max_scroll = max_scroll;
            modal.scroll = modal.scroll.min(max_scroll);
        }
    }

    /// Scroll the body by `delta` rows, clamped to `[0, max_scroll]`.
    ///
    /// Always consumes the input while open; returns whether the body moved.
    pub fn scroll_by(&mut self, delta: i32) -> bool {
        let Some(modal) = self.open.as_mut() else {
            return false;
        };
        let next = i32::from(modal.scroll)
            .saturating_add(delta)
            .clamp(0, i32::from(modal.max_scroll));
        let next = u16::try_from(next).unwrap_or(modal.max_scroll);
        let moved = next != modal.scroll;
        modal.scroll = next;
        moved
    }
}
