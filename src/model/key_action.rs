//! Domain-level keyboard actions independent of key bindings.

use super::SectionId;

/// User intents that keys are bound to.
///
/// The mapping from `crossterm::event::KeyEvent` to `KeyAction` lives in
/// [`KeyBindings`](crate::config::KeyBindings).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Scrolling
    /// Scroll the page up by one row. Default: k/↑
    ScrollUp,
    /// Scroll the page down by one row. Default: j/↓
    ScrollDown,
    /// Default: Ctrl+u/Page Up
    PageUp,
    /// Default: Ctrl+d/Page Down/Space
    PageDown,
    /// Default: g/Home
    ScrollToTop,
    /// Default: G/End
    ScrollToBottom,

    // Navigation
    /// Smooth-scroll to a section. Default: 1-5
    JumpTo(SectionId),
    /// Default: ]
    NextSection,
    /// Default: [
    PrevSection,
    /// Move keyboard focus to the next interactive element. Default: Tab
    FocusNext,
    /// Default: Shift+Tab
    FocusPrev,
    /// Activate the focused element. Default: Enter
    Activate,
    /// Open or close the compact navigation menu. Default: m
    ToggleMenu,

    // Page features
    /// Default: t
    ToggleTheme,
    /// Pause or resume the about crawl. Default: p
    ToggleCrawlPause,
    /// Default: +/=
    CrawlFaster,
    /// Default: -
    CrawlSlower,
    /// Open the contact compose form. Default: c
    Compose,
    /// Close the topmost overlay (help, menu, modal, form). Default: Esc
    Close,

    // Application
    /// Default: ?
    Help,
    /// Default: q/Ctrl+c
    Quit,
}

impl KeyAction {
    /// Short description for the help overlay.
    pub fn describe(self) -> &'static str {
        match self {
            KeyAction::ScrollUp => "Scroll up",
            KeyAction::ScrollDown => "Scroll down",
            KeyAction::PageUp => "Page up",
            KeyAction::PageDown => "Page down",
            KeyAction::ScrollToTop => "Top of page",
            KeyAction::ScrollToBottom => "Bottom of page",
            KeyAction::JumpTo(_) => "Jump to section",
            KeyAction::NextSection => "Next section",
            KeyAction::PrevSection => "Previous section",
            KeyAction::FocusNext => "Focus next link",
            KeyAction::FocusPrev => "Focus previous link",
            KeyAction::Activate => "Open focused item",
            KeyAction::ToggleMenu => "Toggle menu",
            KeyAction::ToggleTheme => "Toggle theme",
            KeyAction::ToggleCrawlPause => "Pause/resume crawl",
            KeyAction::CrawlFaster => "Crawl faster",
            KeyAction::CrawlSlower => "Crawl slower",
            KeyAction::Compose => "Write a message",
            KeyAction::Close => "Close overlay",
            KeyAction::Help => "Toggle help",
            KeyAction::Quit => "Quit",
        }
    }
}
