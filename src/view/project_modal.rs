//! Project detail modal.

use crate::state::AppState;
use crate::view::styles::Palette;
use crate::view_state::project_detail::detail_lines;
use crate::view_state::ElementKey;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const CLOSE_GLYPH: &str = "[✕]";

/// Draw the open project's detail modal over the page.
pub fn render_project_modal(
    frame: &mut Frame,
    state: &AppState,
    palette: &Palette,
    hovered: Option<ElementKey>,
) {
    let Some(open) = state.modal.current() else {
        return;
    };
    let Some(project) = state.content().projects.get(open.project) else {
        return;
    };
    let layout = state.screen().modal();
    if layout.frame.width < 4 || layout.frame.height < 3 {
        return;
    }

    frame.render_widget(Clear, layout.frame);
    frame.render_widget(
        Block::default()
            .title(Span::styled(
                format!(" {} ", project.title),
                palette.heading.add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(palette.accent)
            .style(palette.base),
        layout.frame,
    );

    let close_active = hovered == Some(ElementKey::ModalClose);
    frame.render_widget(
        Paragraph::new(Span::styled(
            CLOSE_GLYPH,
            palette.emphasize(palette.base, close_active),
        )),
        layout.close,
    );

    let lines = detail_lines(project, palette, layout.body.width);
    frame.render_widget(
        Paragraph::new(lines).scroll((open.scroll, 0)),
        layout.body,
    );

    let hint = if open.max_scroll > 0 {
        " Esc close · ↑↓ scroll "
    } else {
        " Esc close "
    };
    let hint_area = Rect {
        y: layout.frame.bottom() - 1,
        height: 1,
        ..layout.frame
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(hint, palette.muted))).alignment(Alignment::Center),
        hint_area,
    );
}
