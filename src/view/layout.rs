//! Frame composition.
//!
//! Draws the scrolled page first, then the screen-fixed chrome (navigation,
//! status bar) and finally the overlays in stacking order: menu, project
//! modal, compose form, help, and the cursor indicator on top of everything.

use super::{contact_form, cursor, help, nav, project_modal};
use crate::config::KeyBindings;
use crate::interaction::crawl::CrawlSpeed;
use crate::state::AppState;
use crate::view::styles::{ColorConfig, Palette};
use crate::view_state::document::{build_document, CrawlView, DocumentContext};
use crate::view_state::text::{display_width, truncate};
use crate::view_state::ElementKey;
use ratatui::{
    layout::Position,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

/// Render the whole screen for the current state.
pub fn render_layout(frame: &mut Frame, state: &AppState, colors: ColorConfig, bindings: &KeyBindings) {
    let palette = state.palette(colors);
    let hovered = state.hovered_element();

    render_page(frame, state, &palette, hovered);
    nav::render_nav(frame, state, &palette, hovered);
    render_status_bar(frame, state, &palette);

    if state.menu.is_open() {
        nav::render_menu(frame, state, &palette, hovered);
    }
    project_modal::render_project_modal(frame, state, &palette, hovered);
    contact_form::render_contact_form(frame, state, &palette, hovered);
    if state.help_visible {
        help::render_help_overlay(frame, state.screen().help(), bindings, &palette);
    }

    if state.cursor.is_mounted() {
        let area = state.screen().area;
        cursor::render_cursor(frame.buffer_mut(), area, &state.cursor.frame(), &palette);
    } else if let Some((col, row)) = state.pointer_cell() {
        // The terminal's own cursor marks the pointer instead
        frame.set_cursor_position(Position::new(col, row));
    }
}

fn render_page(frame: &mut Frame, state: &AppState, palette: &Palette, hovered: Option<ElementKey>) {
    let page = state.screen().page;
    if page.width == 0 || page.height == 0 {
        return;
    }
    let ctx = DocumentContext {
        content: state.content(),
        palette: *palette,
        width: page.width,
        viewport_rows: page.height,
        typed_role: state.typewriter.text(),
        crawl: CrawlView::from(&state.crawl),
        hovered,
        focused: state.focus,
        marquee_offset: state.marquee_offset(),
        year: state.year(),
    };
    let document = build_document(&ctx);
    let lines = document
        .visible_lines(state.scroll_offset(), usize::from(page.height))
        .to_vec();
    frame.render_widget(Block::default().style(palette.base), page);
    frame.render_widget(Paragraph::new(lines).style(palette.base), page);
}

fn render_status_bar(frame: &mut Frame, state: &AppState, palette: &Palette) {
    let area = state.screen().status;
    if area.height == 0 {
        return;
    }
    let width = usize::from(area.width);
    let section = state
        .active_section()
        .map_or("—", |id| id.label());
    let left = format!(
        " {section} · {:>3}% · {}{} ",
        state.scroll_progress().percent(),
        state.theme,
        crawl_badge(state),
    );
    let right = state
        .status_message()
        .map_or_else(|| " ? help · q quit ".to_string(), |msg| format!(" {msg} "));

    let left_width = display_width(&left);
    let room = width.saturating_sub(left_width);
    let right = truncate(&right, room);
    let gap = room.saturating_sub(display_width(&right));

    let line = Line::from(vec![
        Span::styled(left, palette.bar.add_modifier(Modifier::BOLD)),
        Span::styled(" ".repeat(gap), palette.bar),
        Span::styled(right, palette.bar),
    ]);
    frame.render_widget(Paragraph::new(line).style(palette.bar), area);
}

/// Crawl speed or pause marker while the about section is on screen.
fn crawl_badge(state: &AppState) -> String {
    if !state.crawl.in_view() {
        return String::new();
    }
    if state.crawl.is_paused() {
        " · crawl paused".to_string()
    } else if state.crawl.speed() != CrawlSpeed::default() {
        format!(" · crawl {}", state.crawl.speed().label())
    } else {
        String::new()
    }
}
