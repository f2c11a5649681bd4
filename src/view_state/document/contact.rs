//! Contact section: links, compose button and marquee ticker.

use super::{section_heading, DocBuilder, DocumentContext, SECTION_PADDING};
use crate::model::SectionId;
use crate::view_state::page_layout::ElementKey;
use crate::view_state::text::{display_width, pad_to, truncate};
use ratatui::style::Modifier;
use ratatui::text::Span;
use unicode_width::UnicodeWidthChar;

const LABEL_WIDTH: usize = 12;
pub(super) const COMPOSE_LABEL: &str = "[ ✉ Write a message ]";
const MARQUEE_GAP: &str = "   ";

pub(super) fn build(b: &mut DocBuilder, ctx: &DocumentContext<'_>) {
    let p = &ctx.palette;
    let intro = &ctx.content.contact_intro;

    b.begin_section(SectionId::Contact);
    b.blanks(SECTION_PADDING);
    section_heading(b, ctx, SectionId::Contact);

    b.line(vec![
        Span::styled("● ", p.success),
        Span::styled(intro.label.clone(), p.accent),
    ]);
    b.blank();
    b.wrapped(&intro.heading, p.heading, 0);
    b.blank();
    b.wrapped(&intro.body, p.muted, 0);
    b.blank();

    let width = b.content_width();
    for (i, link) in ctx.content.contacts.iter().enumerate() {
        let key = ElementKey::ContactLink(i);
        let emphasized = ctx.is_emphasized(key);
        let prefix = format!("{:02}  ", i + 1);
        let label = pad_to(&link.label, LABEL_WIDTH);
        let room = width.saturating_sub(display_width(&prefix) + LABEL_WIDTH + 3);
        let row = b.row();
        b.line(vec![
            Span::styled(prefix, p.muted),
            Span::styled(label, p.emphasize(p.heading, emphasized)),
            Span::styled(truncate(&link.value, room), p.emphasize(p.base, emphasized)),
            Span::styled(" ↗", p.accent),
        ]);
        b.hotspot(key, 0, row, width, 1);
        b.blank();
    }

    let row = b.row();
    let compose = truncate(COMPOSE_LABEL, width);
    let compose_width = display_width(&compose);
    b.line(vec![Span::styled(
        compose,
        p.emphasize(
            p.accent.add_modifier(Modifier::BOLD),
            ctx.is_emphasized(ElementKey::ComposeButton),
        ),
    )]);
    b.hotspot(ElementKey::ComposeButton, 0, row, compose_width, 1);
    b.blank();
    b.blank();

    let ticker = marquee_window(
        &ctx.content.marquee,
        ctx.marquee_offset,
        usize::from(b.width()),
    );
    b.full_width_line(vec![Span::styled(
        ticker,
        p.accent.add_modifier(Modifier::BOLD),
    )]);
    b.blank();
    b.end_section();
}

/// `width` columns of the endlessly repeated `text`, starting `offset`
/// chars into the cycle.
pub(super) fn marquee_window(text: &str, offset: usize, width: usize) -> String {
    // The gap guarantees every cycle has visible width, so the loop ends.
    let cycle: Vec<char> = text.chars().chain(MARQUEE_GAP.chars()).collect();
    let mut out = String::new();
    let mut used = 0;
    let mut i = offset % cycle.len();
    loop {
        let c = cycle[i];
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(c);
        used += w;
        i = (i + 1) % cycle.len();
    }
    out
}
