//! Compact navigation menu state.
//!
//! On narrow terminals the navigation items collapse behind a menu trigger.
//! Opening the menu plays a chime (the terminal bell); closing is silent.

use tracing::debug;

/// Widest terminal (in columns) that still uses the compact navigation.
pub const COMPACT_NAV_MAX_WIDTH: u16 = 85;

/// Side effect of a menu toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEffect {
    /// Nothing to do.
    None,
    /// The menu just opened: ring the bell.
    Chime,
}

/// Open/closed state of the compact nav menu.
#[derive(Debug, Clone, Default)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    /// Whether the menu is open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open or close the menu.
    pub fn toggle(&mut self) -> MenuEffect {
        self.open = !self.open;
        debug!(open = self.open, "Navigation menu toggled");
        if self.open {
            MenuEffect::Chime
        } else {
            MenuEffect::None
        }
    }

    /// Close the menu.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Close automatically once the terminal is wide enough for the full bar.
    pub fn on_resize(&mut self, width: u16) {
        if width > COMPACT_NAV_MAX_WIDTH && self.open {
            debug!(width, "Closing navigation menu on wide terminal");
            self.open = false;
        }
    }
}

/// Whether `width` uses the compact (menu) navigation.
pub fn is_compact(width: u16) -> bool {
    width <= COMPACT_NAV_MAX_WIDTH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_chimes_closing_does_not() {
        let mut menu = NavMenu::default();
        assert_eq!(menu.toggle(), MenuEffect::Chime);
        assert!(menu.is_open());
        assert_eq!(menu.toggle(), MenuEffect::None);
        assert!(!menu.is_open());
    }

    #[test]
    fn wide_resize_closes_open_menu() {
        let mut menu = NavMenu::default();
        menu.toggle();
        menu.on_resize(COMPACT_NAV_MAX_WIDTH);
        assert!(menu.is_open(), "still compact at the threshold");
        menu.on_resize(COMPACT_NAV_MAX_WIDTH + 1);
        assert!(!menu.is_open());
    }

    #[test]
    fn compact_threshold_is_inclusive() {
        assert!(is_compact(85));
        assert!(!is_compact(86));
    }
}
