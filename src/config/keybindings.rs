//! Keyboard bindings configuration.

use crate::model::{KeyAction, SectionId};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Shifted characters arrive from some terminals with `SHIFT` set and from
    /// others without it, so a miss on a shifted char retries without the
    /// modifier.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        let key = KeyEvent::new(key.code, key.modifiers);
        self.bindings.get(&key).copied().or_else(|| match key.code {
            KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::SHIFT) => self
                .bindings
                .get(&KeyEvent::new(key.code, key.modifiers - KeyModifiers::SHIFT))
                .copied(),
            _ => None,
        })
    }

    /// Bind (or rebind) a key.
    pub fn bind(&mut self, key: KeyEvent, action: KeyAction) {
        self.bindings.insert(key, action);
    }

    /// Keys bound to `action`, sorted for stable display.
    pub fn keys_for(&self, action: KeyAction) -> Vec<KeyEvent> {
        let mut keys: Vec<KeyEvent> = self
            .bindings
            .iter()
            .filter(|(_, a)| **a == action)
            .map(|(k, _)| *k)
            .collect();
        keys.sort_by_key(|k| format_key(*k));
        keys
    }
}

/// Human-readable key label for help text.
pub fn format_key(key: KeyEvent) -> String {
    let base = match key.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        KeyCode::PageUp => "PgUp".to_string(),
        KeyCode::PageDown => "PgDn".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "Shift+Tab".to_string(),
        other => format!("{other:?}"),
    };
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        format!("Ctrl+{base}")
    } else {
        base
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let none = KeyModifiers::NONE;
        let ctrl = KeyModifiers::CONTROL;
        let mut bindings = HashMap::new();
        let mut bind = |code: KeyCode, modifiers: KeyModifiers, action: KeyAction| {
            bindings.insert(KeyEvent::new(code, modifiers), action);
        };

        // Vim-style and arrow scrolling
        bind(KeyCode::Char('j'), none, KeyAction::ScrollDown);
        bind(KeyCode::Char('k'), none, KeyAction::ScrollUp);
        bind(KeyCode::Down, none, KeyAction::ScrollDown);
        bind(KeyCode::Up, none, KeyAction::ScrollUp);
        bind(KeyCode::Char('d'), ctrl, KeyAction::PageDown);
        bind(KeyCode::Char('u'), ctrl, KeyAction::PageUp);
        bind(KeyCode::PageDown, none, KeyAction::PageDown);
        bind(KeyCode::PageUp, none, KeyAction::PageUp);
        bind(KeyCode::Char(' '), none, KeyAction::PageDown);
        bind(KeyCode::Char('g'), none, KeyAction::ScrollToTop);
        bind(KeyCode::Home, none, KeyAction::ScrollToTop);
        bind(KeyCode::Char('G'), KeyModifiers::SHIFT, KeyAction::ScrollToBottom);
        bind(KeyCode::End, none, KeyAction::ScrollToBottom);

        // Sections
        for (digit, section) in ('1'..='5').zip(SectionId::ALL) {
            bind(KeyCode::Char(digit), none, KeyAction::JumpTo(section));
        }
        bind(KeyCode::Char(']'), none, KeyAction::NextSection);
        bind(KeyCode::Char('['), none, KeyAction::PrevSection);

        // Focus
        bind(KeyCode::Tab, none, KeyAction::FocusNext);
        bind(KeyCode::BackTab, KeyModifiers::SHIFT, KeyAction::FocusPrev);
        bind(KeyCode::Enter, none, KeyAction::Activate);
        bind(KeyCode::Char('m'), none, KeyAction::ToggleMenu);

        // Page features
        bind(KeyCode::Char('t'), none, KeyAction::ToggleTheme);
        bind(KeyCode::Char('p'), none, KeyAction::ToggleCrawlPause);
        bind(KeyCode::Char('+'), none, KeyAction::CrawlFaster);
        bind(KeyCode::Char('='), none, KeyAction::CrawlFaster);
        bind(KeyCode::Char('-'), none, KeyAction::CrawlSlower);
        bind(KeyCode::Char('c'), none, KeyAction::Compose);
        bind(KeyCode::Esc, none, KeyAction::Close);

        // Application
        bind(KeyCode::Char('?'), none, KeyAction::Help);
        bind(KeyCode::Char('q'), none, KeyAction::Quit);
        bind(KeyCode::Char('c'), ctrl, KeyAction::Quit);

        Self { bindings }
    }
}
