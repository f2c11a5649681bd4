//! Compose form overlay.

use crate::state::{AppState, FormField, SubmitStatus};
use crate::view::styles::Palette;
use crate::view_state::screen::SEND_LABEL;
use crate::view_state::text::{display_width, wrap};
use crate::view_state::ElementKey;
use ratatui::{
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const CARET: &str = "▌";

/// Draw the compose form over the page when it is open.
pub fn render_contact_form(
    frame: &mut Frame,
    state: &AppState,
    palette: &Palette,
    hovered: Option<ElementKey>,
) {
    let form = &state.form;
    if !form.is_open() {
        return;
    }
    let layout = state.screen().form();
    if layout.frame.width < 6 || layout.frame.height < 4 {
        return;
    }

    frame.render_widget(Clear, layout.frame);
    frame.render_widget(
        Block::default()
            .title(Span::styled(
                " Send a message ",
                palette.heading.add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(palette.accent)
            .style(palette.base),
        layout.frame,
    );

    for input in &layout.fields {
        let focused = form.focus() == Some(input.field);
        let label_style = if focused { palette.accent } else { palette.muted };
        frame.render_widget(
            Paragraph::new(Span::styled(input.field.label(), label_style)),
            input.label,
        );

        let lines = field_lines(
            form.value(input.field),
            input.field,
            focused,
            usize::from(input.input.width),
            usize::from(input.input.height),
        );
        let style = if focused {
            palette.base.add_modifier(Modifier::UNDERLINED)
        } else {
            palette.base
        };
        let lines: Vec<Line> = lines
            .into_iter()
            .map(|line| Line::from(Span::styled(line, style)))
            .collect();
        frame.render_widget(Paragraph::new(lines), input.input);
    }

    let send_active = hovered == Some(ElementKey::FormSend) || form.is_sending();
    frame.render_widget(
        Paragraph::new(Span::styled(
            SEND_LABEL,
            palette.emphasize(palette.accent.add_modifier(Modifier::BOLD), send_active),
        )),
        layout.send,
    );

    let status = match form.status() {
        SubmitStatus::Idle => None,
        SubmitStatus::Sending { .. } => Some(("Sending…", palette.muted)),
        SubmitStatus::Sent { .. } => Some(("Message sent ✓", palette.success)),
        SubmitStatus::Failed { reason, .. } => Some((reason.message(), palette.error)),
    };
    if let Some((text, style)) = status {
        frame.render_widget(Paragraph::new(Span::styled(text, style)), layout.status);
    }
}

/// Visible rows of a field value, with a caret when focused. Single-line
/// fields keep their tail in view; the message wraps and shows its last rows.
pub fn field_lines(value: &str, field: FormField, focused: bool, width: usize, rows: usize) -> Vec<String> {
    if width == 0 || rows == 0 {
        return Vec::new();
    }
    let mut text = value.to_string();
    if focused {
        text.push_str(CARET);
    }

    if field == FormField::Message {
        let mut lines = wrap(&text, width);
        if lines.len() > rows {
            lines.drain(..lines.len() - rows);
        }
        return lines;
    }

    let mut chars: Vec<char> = text.chars().collect();
    while display_width(&chars.iter().collect::<String>()) > width {
        chars.remove(0);
    }
    vec![chars.into_iter().collect()]
}
