//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod contact_form;
mod cursor;
mod help;
mod layout;
mod nav;
mod project_modal;
pub mod styles;

pub use help::{build_help_content, render_help_overlay};
pub use styles::{ColorConfig, Palette};

use crate::config::{KeyBindings, ResolvedConfig};
use crate::model::{AppError, KeyAction, PortfolioContent, SectionId};
use crate::state::{handle_mouse_event, handle_scroll_action, AppState};
use constants::FRAME_INTERVAL;
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind, MouseEvent},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout, Write};
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

impl From<TuiError> for AppError {
    fn from(err: TuiError) -> Self {
        match err {
            TuiError::Io(source) => AppError::Terminal(source),
        }
    }
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    colors: ColorConfig,
    /// Write BEL to stdout when the menu opens. Off under test backends.
    bell_enabled: bool,
    /// Menu chimes requested so far.
    chimes: u64,
    /// Whether the terminal's own cursor is currently hidden.
    native_cursor_hidden: bool,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen and mouse capture
    pub fn new(
        content: PortfolioContent,
        config: ResolvedConfig,
        colors: ColorConfig,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(crossterm::event::EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        let size = terminal.size()?;
        // Guard against zero width reported by some terminals at startup
        let area = Rect::new(0, 0, size.width.max(1), size.height);
        let app_state = AppState::new(content, config, area, Instant::now());

        let mut app = Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            colors,
            bell_enabled: true,
            chimes: 0,
            native_cursor_hidden: false,
        };
        app.sync_native_cursor()?;
        Ok(app)
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits (q or Ctrl+C). Polls with a frame-sized
    /// timeout so animations keep advancing without input.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            if event::poll(FRAME_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) if key.kind != KeyEventKind::Release => {
                        if self.handle_key(key, Instant::now()) {
                            return Ok(());
                        }
                    }
                    Event::Mouse(mouse) => self.handle_mouse(mouse, Instant::now()),
                    Event::Resize(width, height) => {
                        self.handle_resize(width, height, Instant::now())
                    }
                    _ => {}
                }
            }
            if self.app_state.should_quit {
                return Ok(());
            }
            self.tick(Instant::now());
            self.draw()?;
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        let state = &mut self.app_state;

        // The open form takes raw text input.
        if state.form.is_open() {
            state.handle_form_key(key, now);
            return state.should_quit;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };
        debug!(?action, "Key action");

        if state.help_visible
            && !matches!(action, KeyAction::Help | KeyAction::Close | KeyAction::Quit)
        {
            return false;
        }

        match action {
            KeyAction::Quit => {
                state.should_quit = true;
            }
            KeyAction::Help => state.toggle_help(),
            KeyAction::ScrollUp
            | KeyAction::ScrollDown
            | KeyAction::PageUp
            | KeyAction::PageDown
            | KeyAction::ScrollToTop
            | KeyAction::ScrollToBottom
            | KeyAction::JumpTo(_)
            | KeyAction::NextSection
            | KeyAction::PrevSection => handle_scroll_action(state, action, now),
            KeyAction::FocusNext | KeyAction::FocusPrev => {
                if !state.modal.is_open() {
                    state.move_focus(action == KeyAction::FocusNext, now);
                }
            }
            KeyAction::Activate => state.activate_focused(now),
            KeyAction::ToggleMenu => state.toggle_menu(now),
            KeyAction::ToggleTheme => state.toggle_theme(),
            KeyAction::ToggleCrawlPause => {
                state.crawl.toggle_pause(now);
            }
            KeyAction::CrawlFaster => {
                let speed = state.crawl.speed().faster();
                state.crawl.set_speed(speed, now);
            }
            KeyAction::CrawlSlower => {
                let speed = state.crawl.speed().slower();
                state.crawl.set_speed(speed, now);
            }
            KeyAction::Compose => state.open_form(now),
            KeyAction::Close => {
                state.close_overlay(now);
            }
        }
        state.should_quit
    }

    fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        handle_mouse_event(&mut self.app_state, mouse, now);
    }

    fn handle_resize(&mut self, width: u16, height: u16, now: Instant) {
        debug!("Handling resize to {}x{}", width, height);
        self.app_state
            .resize(Rect::new(0, 0, width.max(1), height), now);
    }

    /// Advance animations and ring the menu chime if one is pending.
    fn tick(&mut self, now: Instant) {
        self.app_state.tick(now);
        if self.app_state.take_chime() {
            self.chimes += 1;
            if self.bell_enabled {
                let mut stdout = io::stdout();
                if let Err(err) = stdout.write_all(b"\x07").and_then(|()| stdout.flush()) {
                    debug!(error = %err, "Menu chime failed");
                }
            }
        }
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        let state = &self.app_state;
        let colors = self.colors;
        let bindings = &self.key_bindings;
        self.terminal.draw(|frame| {
            layout::render_layout(frame, state, colors, bindings);
        })?;
        Ok(())
    }

    /// Hide the terminal cursor while the magnetic indicator stands in for
    /// it, show it otherwise.
    fn sync_native_cursor(&mut self) -> Result<(), TuiError> {
        let hide = self.app_state.cursor.hides_native_pointer();
        if hide == self.native_cursor_hidden {
            return Ok(());
        }
        if hide {
            self.terminal.hide_cursor()?;
        } else {
            self.terminal.show_cursor()?;
        }
        self.native_cursor_hidden = hide;
        debug!(hidden = hide, "Native cursor visibility changed");
        Ok(())
    }

    /// Release interaction-layer registrations and hand the native cursor
    /// back. Draws without a cursor position hide it too, so it is shown
    /// whatever the magnetic cursor did.
    fn teardown(&mut self) -> Result<(), TuiError> {
        self.app_state.teardown();
        self.terminal.show_cursor()?;
        self.native_cursor_hidden = false;
        Ok(())
    }
}

// ===== Test Helpers =====
//
// The following methods are ONLY for testing within the crate.
//
// DO NOT use these in production code.

#[cfg(test)]
#[allow(dead_code)] // Not all helpers used in every test module
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing (test-only constructor)
    ///
    /// Skips terminal initialization; the chime is counted but never written.
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        app_state: AppState,
        key_bindings: KeyBindings,
    ) -> Self {
        let mut app = Self {
            terminal,
            app_state,
            key_bindings,
            colors: ColorConfig::disabled(),
            bell_enabled: false,
            chimes: 0,
            native_cursor_hidden: false,
        };
        app.sync_native_cursor()
            .expect("test backend cursor calls cannot fail");
        app
    }

    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    pub(crate) fn app_state_mut(&mut self) -> &mut AppState {
        &mut self.app_state
    }

    /// Handle a single keyboard event (test-only accessor)
    ///
    /// Returns true if app should quit.
    pub(crate) fn handle_key_test(&mut self, key: KeyEvent, now: Instant) -> bool {
        self.handle_key(key, now)
    }

    pub(crate) fn handle_mouse_test(&mut self, mouse: MouseEvent, now: Instant) {
        self.handle_mouse(mouse, now)
    }

    pub(crate) fn handle_resize_test(&mut self, width: u16, height: u16, now: Instant) {
        self.handle_resize(width, height, now)
    }

    pub(crate) fn tick_test(&mut self, now: Instant) {
        self.tick(now)
    }

    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub(crate) fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    pub(crate) fn chimes(&self) -> u64 {
        self.chimes
    }

    pub(crate) fn native_cursor_hidden(&self) -> bool {
        self.native_cursor_hidden
    }

    pub(crate) fn teardown_test(&mut self) -> Result<(), TuiError> {
        self.teardown()
    }
}

/// Initialize and run the TUI application
///
/// Handles terminal setup, runs the event loop, and always restores the
/// terminal on exit, error or not.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run(
    content: PortfolioContent,
    config: ResolvedConfig,
    colors: ColorConfig,
    initial_section: Option<SectionId>,
) -> Result<(), TuiError> {
    let mut app = match TuiApp::new(content, config, colors) {
        Ok(app) => app,
        Err(err) => {
            // Partial setup may have switched modes already
            let _ = restore_terminal();
            return Err(err);
        }
    };
    if let Some(section) = initial_section {
        app.app_state.start_at(section, Instant::now());
    }
    info!("TUI started");

    let result = app.run();

    // Restore the terminal even if handing the cursor back failed
    let cursor_restored = app.teardown();
    let terminal_restored = restore_terminal();
    info!("TUI exited");

    result.and(cursor_restored).and(terminal_restored)
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(crossterm::event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
