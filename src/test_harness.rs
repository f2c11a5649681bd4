//! Acceptance Test Harness for TUI testing
//!
//! Wraps TuiApp<TestBackend> with a virtual clock and convenient methods for
//! simulating user interactions. Time only moves when a test calls
//! [`AcceptanceTestHarness::advance`], so animations are deterministic.

use crate::config::keybindings::KeyBindings;
use crate::config::ResolvedConfig;
use crate::model::PortfolioContent;
use crate::state::AppState;
use crate::view::constants::FRAME_INTERVAL;
use crate::view::{TuiApp, TuiError};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::backend::TestBackend;
use ratatui::layout::{Position, Rect};
use ratatui::Terminal;
use std::time::{Duration, Instant};

/// Convert a ratatui buffer to a string representation for snapshot testing.
///
/// Captures the visual output character by character, preserving layout.
/// Empty lines are removed to keep snapshots clean.
pub fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            line.push_str(cell.symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Test harness for acceptance testing
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    now: Instant,
    running: bool,
}

#[allow(dead_code)] // Not every helper is used by every test module
impl AcceptanceTestHarness {
    /// Built-in content at the default terminal size (100x30).
    pub fn new() -> Result<Self, TuiError> {
        Self::with_size(100, 30)
    }

    pub fn with_size(width: u16, height: u16) -> Result<Self, TuiError> {
        Self::with_config(ResolvedConfig::default(), width, height)
    }

    pub fn with_config(config: ResolvedConfig, width: u16, height: u16) -> Result<Self, TuiError> {
        let content = PortfolioContent::builtin().map_err(std::io::Error::other)?;
        Self::with_content(content, config, width, height)
    }

    pub fn with_content(
        content: PortfolioContent,
        config: ResolvedConfig,
        width: u16,
        height: u16,
    ) -> Result<Self, TuiError> {
        let terminal = Terminal::new(TestBackend::new(width, height))?;
        let now = Instant::now();
        let app_state = AppState::new(content, config, Rect::new(0, 0, width, height), now);
        let app = TuiApp::new_for_test(terminal, app_state, KeyBindings::default());
        Ok(Self {
            app,
            now,
            running: true,
        })
    }

    /// Current virtual time.
    pub fn now(&self) -> Instant {
        self.now
    }

    /// Send a single key event
    ///
    /// Returns `true` if the app quit as a result of this key.
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+C)
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true; // Already quit
        }
        let quit = self.app.handle_key_test(KeyEvent::new(key, mods), self.now);
        if quit {
            self.running = false;
        }
        quit
    }

    /// Send a sequence of keys, stopping early on quit.
    pub fn send_keys(&mut self, keys: &[KeyCode]) {
        for key in keys {
            if self.send_key(*key) {
                break;
            }
        }
    }

    /// Type text one character at a time.
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            if self.send_key(KeyCode::Char(ch)) {
                break;
            }
        }
    }

    /// Move the pointer to a cell.
    pub fn move_to(&mut self, column: u16, row: u16) {
        self.mouse(MouseEventKind::Moved, column, row);
    }

    /// Send a left click at the specified coordinates
    pub fn click_at(&mut self, column: u16, row: u16) {
        self.mouse(MouseEventKind::Down(MouseButton::Left), column, row);
    }

    /// One wheel notch; positive scrolls down.
    pub fn wheel(&mut self, down: bool, column: u16, row: u16) {
        let kind = if down {
            MouseEventKind::ScrollDown
        } else {
            MouseEventKind::ScrollUp
        };
        self.mouse(kind, column, row);
    }

    fn mouse(&mut self, kind: MouseEventKind, column: u16, row: u16) {
        if !self.running {
            return;
        }
        let event = MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        };
        self.app.handle_mouse_test(event, self.now);
    }

    /// Resize the test terminal and deliver the resize event.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.app.terminal_mut().backend_mut().resize(width, height);
        self.app.handle_resize_test(width, height, self.now);
    }

    /// Advance the virtual clock frame by frame, ticking the app each step.
    pub fn advance(&mut self, duration: Duration) {
        let end = self.now + duration;
        while self.now < end {
            self.now = (self.now + FRAME_INTERVAL).min(end);
            self.app.tick_test(self.now);
        }
    }

    /// Advance long enough for any scroll animation and debounce to finish.
    pub fn settle(&mut self) {
        self.advance(Duration::from_secs(3));
    }

    pub fn state(&self) -> &AppState {
        self.app.app_state()
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        self.app.app_state_mut()
    }

    pub fn chimes(&self) -> u64 {
        self.app.chimes()
    }

    /// Whether the terminal's own cursor is hidden.
    pub fn native_cursor_hidden(&self) -> bool {
        self.app.native_cursor_hidden()
    }

    /// Terminal cursor position after the last draw.
    pub fn native_cursor_position(&mut self) -> Position {
        self.app
            .terminal_mut()
            .get_cursor_position()
            .expect("test backend reports its cursor")
    }

    /// Tear the interaction layer down as on exit.
    pub fn teardown(&mut self) {
        self.app
            .teardown_test()
            .expect("Teardown should succeed in test harness");
    }

    /// Check if app is still running (didn't quit)
    pub fn is_running(&self) -> bool {
        self.running && !self.app.app_state().should_quit
    }

    /// Render the current frame to a string
    ///
    /// # Panics
    /// Panics if rendering fails (should never happen with TestBackend)
    pub fn render_to_string(&mut self) -> String {
        self.app
            .render_test()
            .expect("Rendering should succeed in test harness");
        buffer_to_string(self.app.terminal().backend().buffer())
    }

    /// Rendered text of one screen row, trailing spaces trimmed.
    pub fn row_text(&mut self, row: u16) -> String {
        self.app
            .render_test()
            .expect("Rendering should succeed in test harness");
        let buffer = self.app.terminal().backend().buffer();
        let area = buffer.area();
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, row)].symbol());
        }
        line.trim_end().to_string()
    }
}
