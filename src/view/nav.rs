//! Navigation bar and compact menu.

use crate::model::SectionId;
use crate::state::AppState;
use crate::view::styles::Palette;
use crate::view_state::screen::nav_label;
use crate::view_state::ElementKey;
use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Glyph for the theme toggle; shows the theme it switches to.
fn theme_glyph(state: &AppState) -> &'static str {
    if state.theme.is_dark() {
        " ☀ "
    } else {
        " ☾ "
    }
}

fn is_emphasized(state: &AppState, hovered: Option<ElementKey>, key: ElementKey) -> bool {
    hovered == Some(key) || state.focus == Some(key)
}

/// Render the fixed navigation bar over the top of the page viewport.
pub fn render_nav(frame: &mut Frame, state: &AppState, palette: &Palette, hovered: Option<ElementKey>) {
    let nav = state.screen().nav;
    if nav.height == 0 {
        return;
    }
    frame.render_widget(Clear, nav);
    frame.render_widget(Block::default().style(palette.base), nav);

    for spot in &state.screen().nav_spots {
        let active = is_emphasized(state, hovered, spot.key);
        let span = match spot.key {
            ElementKey::NavLogo => Span::styled(
                format!(" {} ", state.content().owner),
                palette.emphasize(palette.accent.add_modifier(Modifier::BOLD), active),
            ),
            ElementKey::NavItem(id) => {
                let style = if state.active_section() == Some(id) {
                    palette.accent.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
                } else {
                    palette.base
                };
                Span::styled(nav_label(id), palette.emphasize(style, active))
            }
            ElementKey::NavTheme => {
                Span::styled(theme_glyph(state), palette.emphasize(palette.muted, active))
            }
            ElementKey::NavMenuToggle => {
                let glyph = if state.menu.is_open() { " ✕ " } else { " ≡ " };
                Span::styled(glyph, palette.emphasize(palette.base, active))
            }
            _ => continue,
        };
        frame.render_widget(Paragraph::new(Line::from(span)), spot.rect);
    }

    if nav.height > 1 {
        let rule = Rect::new(nav.x, nav.bottom() - 1, nav.width, 1);
        let line = "─".repeat(usize::from(nav.width));
        frame.render_widget(Paragraph::new(Span::styled(line, palette.border)), rule);
    }
}

/// Render the dropdown menu of the compact navigation.
pub fn render_menu(frame: &mut Frame, state: &AppState, palette: &Palette, hovered: Option<ElementKey>) {
    let menu = state.screen().menu();
    if menu.frame.width < 3 || menu.frame.height < 3 {
        return;
    }
    frame.render_widget(Clear, menu.frame);
    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_style(palette.border)
            .style(palette.base),
        menu.frame,
    );

    for spot in &menu.spots {
        let active = is_emphasized(state, hovered, spot.key);
        let (text, style) = match spot.key {
            ElementKey::MenuItem(id) => {
                let marker = if state.active_section() == Some(id) { "▸" } else { " " };
                let style = if state.active_section() == Some(id) {
                    palette.accent
                } else {
                    palette.base
                };
                (format!("{marker} {}", menu_label(id)), style)
            }
            ElementKey::MenuTheme => (format!("  Theme: {}", state.theme.toggled()), palette.muted),
            _ => continue,
        };
        frame.render_widget(
            Paragraph::new(Span::styled(text, palette.emphasize(style, active))),
            spot.rect,
        );
    }
}

fn menu_label(id: SectionId) -> String {
    format!("{:02} {}", id.index() + 1, id.label())
}
