//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered overlay listing the active key bindings grouped by
//! category. Triggered by '?', dismissed by 'Esc' or '?'.

use crate::config::keybindings::{format_key, KeyBindings};
use crate::model::{KeyAction, SectionId};
use crate::view::styles::Palette;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Width of the key column.
const KEY_COLUMN: usize = 18;

const GROUPS: &[(&str, &[KeyAction])] = &[
    (
        "Scrolling",
        &[
            KeyAction::ScrollDown,
            KeyAction::ScrollUp,
            KeyAction::PageDown,
            KeyAction::PageUp,
            KeyAction::ScrollToTop,
            KeyAction::ScrollToBottom,
        ],
    ),
    (
        "Navigation",
        &[
            KeyAction::NextSection,
            KeyAction::PrevSection,
            KeyAction::FocusNext,
            KeyAction::FocusPrev,
            KeyAction::Activate,
            KeyAction::ToggleMenu,
        ],
    ),
    (
        "Page",
        &[
            KeyAction::ToggleTheme,
            KeyAction::ToggleCrawlPause,
            KeyAction::CrawlFaster,
            KeyAction::CrawlSlower,
            KeyAction::Compose,
            KeyAction::Close,
        ],
    ),
    ("Application", &[KeyAction::Help, KeyAction::Quit]),
];

/// Render the help overlay inside `popup_area`.
pub fn render_help_overlay(frame: &mut Frame, popup_area: Rect, bindings: &KeyBindings, palette: &Palette) {
    if popup_area.width < 4 || popup_area.height < 3 {
        return;
    }
    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(bindings, palette))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(palette.accent)
                .style(palette.base),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);
    frame.render_widget(help_paragraph, popup_area);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };
    let hint = Paragraph::new(Line::from(vec![Span::styled(
        " Press Esc or ? to close ",
        palette.muted.add_modifier(Modifier::DIM),
    )]))
    .alignment(Alignment::Center);
    frame.render_widget(hint, hint_area);
}

/// Help lines grouped by category; actions with no bound key are skipped.
pub fn build_help_content(bindings: &KeyBindings, palette: &Palette) -> Vec<Line<'static>> {
    let category_style = palette.heading.add_modifier(Modifier::UNDERLINED);
    let key_style = palette.accent.add_modifier(Modifier::BOLD);
    let desc_style = palette.base;

    let entry = |keys: String, desc: &str| {
        Line::from(vec![
            Span::styled(format!("  {keys:<KEY_COLUMN$}"), key_style),
            Span::styled(desc.to_string(), desc_style),
        ])
    };

    let mut lines = Vec::new();
    for (i, (title, actions)) in GROUPS.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(*title, category_style)));

        if *title == "Navigation" {
            let jumps: Vec<String> = SectionId::ALL
                .into_iter()
                .flat_map(|id| bindings.keys_for(KeyAction::JumpTo(id)))
                .map(format_key)
                .collect();
            if let (Some(first), Some(last)) = (jumps.first(), jumps.last()) {
                lines.push(entry(
                    format!("{first}-{last}"),
                    KeyAction::JumpTo(SectionId::Hero).describe(),
                ));
            }
        }

        for action in actions.iter().copied() {
            let keys = bindings.keys_for(action);
            if keys.is_empty() {
                continue;
            }
            let label = keys
                .into_iter()
                .map(format_key)
                .collect::<Vec<_>>()
                .join("/");
            lines.push(entry(label, action.describe()));
        }
    }
    lines
}
