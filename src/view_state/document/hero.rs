//! Full-height opening banner with the typewriter role line.

use super::{DocBuilder, DocumentContext, SECTION_PADDING};
use crate::model::SectionId;
use crate::view_state::text::{display_width, truncate};
use ratatui::style::Modifier;
use ratatui::text::Span;

/// Rows reserved at the bottom for the scroll hint.
const HINT_ROWS: usize = 2;

pub(super) fn build(b: &mut DocBuilder, ctx: &DocumentContext<'_>) {
    let hero = &ctx.content.hero;
    let p = &ctx.palette;

    b.begin_section(SectionId::Hero);
    b.blanks(SECTION_PADDING + 1);

    b.wrapped(&format!("✦ {}", hero.eyebrow), p.accent, 0);
    b.blank();

    let last = hero.title_lines.len().saturating_sub(1);
    for (i, title) in hero.title_lines.iter().enumerate() {
        let style = if i == last {
            p.accent.add_modifier(Modifier::BOLD)
        } else {
            p.heading
        };
        b.wrapped(title, style, 0);
    }
    b.blank();

    b.wrapped(&hero.subtitle, p.muted, 0);
    b.blank();

    // One row regardless of what the typewriter shows.
    let label = format!("{} ", hero.roles_label);
    let room = b
        .content_width()
        .saturating_sub(display_width(&label) + 1);
    b.line(vec![
        Span::styled(truncate(&label, b.content_width()), p.muted),
        Span::styled(
            truncate(ctx.typed_role, room),
            p.accent.add_modifier(Modifier::BOLD),
        ),
        Span::styled("▌", p.accent.add_modifier(Modifier::SLOW_BLINK)),
    ]);

    b.pad_section_to(b.viewport_rows().saturating_sub(HINT_ROWS));
    b.blank();
    b.centered(vec![Span::styled("scroll ↓", p.muted)]);
    b.end_section();
}
