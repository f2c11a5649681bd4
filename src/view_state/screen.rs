//! Screen-fixed geometry: the regions that do not scroll with the page.
//!
//! The page viewport fills the screen above the status bar; the navigation
//! bar, menu, modal, compose form and help overlay are drawn over it at
//! positions computed here, so hit testing and rendering agree.

use super::page_layout::ElementKey;
use super::text::display_width;
use crate::model::SectionId;
use crate::state::contact_form::FormField;
use crate::state::nav_menu::is_compact;
use crate::view::constants::{
    FORM_HEIGHT, FORM_WIDTH, HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT,
    MODAL_HEIGHT_PERCENT, MODAL_WIDTH_PERCENT, NAV_HEIGHT, STATUS_BAR_HEIGHT,
};
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

/// Width of the theme toggle in the nav bar.
pub const THEME_BUTTON_WIDTH: u16 = 3;
/// Width of the menu trigger in the compact nav bar.
pub const MENU_BUTTON_WIDTH: u16 = 3;
/// Width of the dropdown menu.
pub const MENU_WIDTH: u16 = 20;
/// Width of the modal close button.
pub const CLOSE_BUTTON_WIDTH: u16 = 3;
/// Compose form submit button text.
pub const SEND_LABEL: &str = "[ Send ]";

/// Rows of the message input in the compose form.
pub const MESSAGE_ROWS: u16 = 3;

/// An interactive screen region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSpot {
    /// Element the region activates.
    pub key: ElementKey,
    /// Screen cells covered.
    pub rect: Rect,
}

/// Screen-fixed geometry for one terminal size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Whole terminal.
    pub area: Rect,
    /// The scrolling page viewport.
    pub page: Rect,
    /// Status bar at the bottom.
    pub status: Rect,
    /// Top rows of `page` covered by the navigation bar.
    pub nav: Rect,
    /// Whether the nav bar collapses into a menu.
    pub compact: bool,
    /// Logo, items (or menu trigger) and theme toggle.
    pub nav_spots: Vec<ScreenSpot>,
}

impl ScreenLayout {
    /// Geometry for a screen of `area`; `logo` is the navigation logo text.
    pub fn new(area: Rect, logo: &str) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),                    // Page viewport
                Constraint::Length(STATUS_BAR_HEIGHT), // Status bar
            ])
            .split(area);
        let page = chunks[0];
        let status = chunks[1];
        let nav = Rect {
            height: NAV_HEIGHT.min(page.height),
            ..page
        };
        let compact = is_compact(area.width);
        let nav_spots = nav_spots(nav, compact, logo);
        Self {
            area,
            page,
            status,
            nav,
            compact,
            nav_spots,
        }
    }

    /// Rows of the page viewport.
    pub fn viewport_rows(&self) -> u16 {
        self.page.height
    }

    /// Rect of a nav bar element.
    pub fn nav_spot(&self, key: ElementKey) -> Option<Rect> {
        self.nav_spots
            .iter()
            .find(|spot| spot.key == key)
            .map(|spot| spot.rect)
    }

    /// Dropdown under the menu trigger, right-aligned.
    pub fn menu(&self) -> MenuLayout {
        let inner_rows = SectionId::ALL.len() as u16 + 1;
        let width = MENU_WIDTH.min(self.area.width);
        let frame = Rect {
            x: self.area.right().saturating_sub(width + 1).max(self.area.x),
            y: self.nav.bottom(),
            width,
            height: (inner_rows + 2).min(self.page.height.saturating_sub(self.nav.height)),
        };
        let inner_width = frame.width.saturating_sub(2);
        let mut spots = Vec::new();
        for (i, id) in SectionId::ALL.into_iter().enumerate() {
            spots.push(ScreenSpot {
                key: ElementKey::MenuItem(id),
                rect: Rect::new(frame.x + 1, frame.y + 1 + i as u16, inner_width, 1),
            });
        }
        spots.push(ScreenSpot {
            key: ElementKey::MenuTheme,
            rect: Rect::new(
                frame.x + 1,
                frame.y + 1 + SectionId::ALL.len() as u16,
                inner_width,
                1,
            ),
        });
        spots.retain(|spot| spot.rect.bottom() < frame.bottom());
        MenuLayout { frame, spots }
    }

    /// Project modal, centered on the page viewport.
    pub fn modal(&self) -> ModalLayout {
        let frame = centered_rect(MODAL_WIDTH_PERCENT, MODAL_HEIGHT_PERCENT, self.page);
        let close = Rect::new(
            frame
                .right()
                .saturating_sub(CLOSE_BUTTON_WIDTH + 2)
                .max(frame.x),
            frame.y,
            CLOSE_BUTTON_WIDTH.min(frame.width),
            1.min(frame.height),
        );
        let body = Rect::new(
            frame.x + 2.min(frame.width),
            frame.y + 2.min(frame.height),
            frame.width.saturating_sub(4),
            frame.height.saturating_sub(3),
        );
        ModalLayout { frame, close, body }
    }

    /// Compose form, centered on the page viewport.
    pub fn form(&self) -> FormLayout {
        let width = FORM_WIDTH.min(self.page.width);
        let height = FORM_HEIGHT.min(self.page.height);
        let frame = Rect::new(
            self.page.x + (self.page.width - width) / 2,
            self.page.y + (self.page.height - height) / 2,
            width,
            height,
        );
        let inner_x = frame.x + 2.min(frame.width);
        let inner_width = frame.width.saturating_sub(4);
        let row = |offset: u16| frame.y + offset;

        let fields = [
            (FormField::Name, row(2), 1),
            (FormField::Email, row(5), 1),
            (FormField::Message, row(8), MESSAGE_ROWS),
        ]
        .map(|(field, y, rows)| FormInput {
            field,
            label: Rect::new(inner_x, y.saturating_sub(1), inner_width, 1),
            input: Rect::new(inner_x, y, inner_width, rows),
        });
        let send_width = (display_width(SEND_LABEL) as u16).min(inner_width);
        let send = Rect::new(inner_x, row(12), send_width, 1);
        let status = Rect::new(
            inner_x + send_width + 2,
            row(12),
            inner_width.saturating_sub(send_width + 2),
            1,
        );
        FormLayout {
            frame,
            fields,
            send,
            status,
        }
    }

    /// Help overlay, centered on the screen.
    pub fn help(&self) -> Rect {
        centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, self.area)
    }
}

/// Dropdown menu geometry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuLayout {
    /// Bordered frame.
    pub frame: Rect,
    /// Menu items followed by the theme toggle.
    pub spots: Vec<ScreenSpot>,
}

/// Project modal geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalLayout {
    /// Bordered frame.
    pub frame: Rect,
    /// Close button on the top border.
    pub close: Rect,
    /// Scrollable body inside the border.
    pub body: Rect,
}

/// One labelled input of the compose form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormInput {
    /// Field the input edits.
    pub field: FormField,
    /// Label row above the input.
    pub label: Rect,
    /// Input rows.
    pub input: Rect,
}

impl FormInput {
    /// Label and input together; clicking either focuses the field.
    pub fn hit_area(&self) -> Rect {
        self.label.union(self.input)
    }
}

/// Compose form geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormLayout {
    /// Bordered frame.
    pub frame: Rect,
    /// Inputs in focus order.
    pub fields: [FormInput; 3],
    /// Submit button.
    pub send: Rect,
    /// Submission status next to the button.
    pub status: Rect,
}

impl FormLayout {
    /// Clickable regions: inputs then the send button.
    pub fn spots(&self) -> Vec<ScreenSpot> {
        let mut spots: Vec<ScreenSpot> = self
            .fields
            .iter()
            .map(|input| ScreenSpot {
                key: ElementKey::FormField(input.field),
                rect: input.hit_area(),
            })
            .collect();
        spots.push(ScreenSpot {
            key: ElementKey::FormSend,
            rect: self.send,
        });
        spots
    }
}

/// Nav bar label for a section item, padded with a space each side.
pub fn nav_label(id: SectionId) -> String {
    format!(" {} ", id.label())
}

fn nav_spots(nav: Rect, compact: bool, logo: &str) -> Vec<ScreenSpot> {
    if nav.height == 0 || nav.width == 0 {
        return Vec::new();
    }
    let mut spots = Vec::new();
    let logo_width = (display_width(logo) as u16 + 2).min(nav.width);
    spots.push(ScreenSpot {
        key: ElementKey::NavLogo,
        rect: Rect::new(nav.x + 1.min(nav.width), nav.y, logo_width, 1),
    });

    // Right to left: theme toggle, then menu trigger or items.
    let mut right = nav.right().saturating_sub(1);
    let mut place = |width: u16| -> Option<Rect> {
        let x = right.checked_sub(width)?;
        if x <= nav.x + logo_width + 1 {
            return None;
        }
        right = x.saturating_sub(1);
        Some(Rect::new(x, nav.y, width, 1))
    };

    if let Some(rect) = place(THEME_BUTTON_WIDTH) {
        spots.push(ScreenSpot {
            key: ElementKey::NavTheme,
            rect,
        });
    }
    if compact {
        if let Some(rect) = place(MENU_BUTTON_WIDTH) {
            spots.push(ScreenSpot {
                key: ElementKey::NavMenuToggle,
                rect,
            });
        }
    } else {
        let mut items = Vec::new();
        for id in SectionId::ALL.into_iter().rev() {
            let width = display_width(&nav_label(id)) as u16;
            match place(width) {
                Some(rect) => items.push(ScreenSpot {
                    key: ElementKey::NavItem(id),
                    rect,
                }),
                None => break,
            }
        }
        items.reverse();
        spots.extend(items);
    }
    spots
}

/// Calculate a rect centered in `area` with the given percentage of its
/// width and height.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

/// Topmost spot containing the cell.
pub fn spot_at(spots: &[ScreenSpot], col: u16, row: u16) -> Option<ElementKey> {
    spots
        .iter()
        .find(|spot| spot.rect.contains(Position::new(col, row)))
        .map(|spot| spot.key)
}

#[cfg(test)]
#[path = "screen_tests.rs"]
mod tests;
