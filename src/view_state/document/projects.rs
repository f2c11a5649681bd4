//! Project gallery: a grid of bordered cards.

use super::{section_heading, DocBuilder, DocumentContext, SECTION_PADDING};
use crate::model::{Project, SectionId};
use crate::view_state::page_layout::ElementKey;
use crate::view_state::text::pad_to;
use ratatui::style::Style;
use ratatui::text::Span;

pub(super) const CARD_HEIGHT: usize = 5;
const CARD_GAP: usize = 2;
/// Content width from which cards sit two to a row.
const TWO_COLUMN_MIN_WIDTH: usize = 72;

pub(super) fn columns_for(content_width: usize) -> usize {
    if content_width >= TWO_COLUMN_MIN_WIDTH {
        2
    } else {
        1
    }
}

pub(super) fn build(b: &mut DocBuilder, ctx: &DocumentContext<'_>) {
    let p = &ctx.palette;
    b.begin_section(SectionId::Projects);
    b.blanks(SECTION_PADDING);
    section_heading(b, ctx, SectionId::Projects);
    b.wrapped("Click a card or press Enter on it for details.", p.muted, 0);
    b.blank();

    let columns = columns_for(b.content_width());
    let card_width = (b.content_width().saturating_sub(CARD_GAP * (columns - 1)) / columns).max(5);

    let projects: Vec<(usize, &Project)> = ctx.content.projects.iter().enumerate().collect();
    for chunk in projects.chunks(columns) {
        let top = b.row();
        for line in 0..CARD_HEIGHT {
            let mut spans = Vec::new();
            for (slot, (index, project)) in chunk.iter().enumerate() {
                if slot > 0 {
                    spans.push(Span::styled(" ".repeat(CARD_GAP), p.base));
                }
                let emphasized = ctx.is_emphasized(ElementKey::ProjectCard(*index));
                spans.extend(card_line(ctx, project, line, card_width, emphasized));
            }
            b.line(spans);
        }
        for (slot, (index, _)) in chunk.iter().enumerate() {
            b.hotspot(
                ElementKey::ProjectCard(*index),
                slot * (card_width + CARD_GAP),
                top,
                card_width,
                CARD_HEIGHT,
            );
        }
        b.blank();
    }
    b.blank();
    b.end_section();
}

/// Technologies on a card: the first few joined, then `+N` for the rest.
pub(super) fn card_tech_summary(project: &Project) -> String {
    let (shown, hidden) = project.card_technologies();
    let mut summary = shown.join(" · ");
    if hidden > 0 {
        summary.push_str(&format!("  +{hidden}"));
    }
    summary
}

fn card_line(
    ctx: &DocumentContext<'_>,
    project: &Project,
    line: usize,
    width: usize,
    emphasized: bool,
) -> Vec<Span<'static>> {
    let p = &ctx.palette;
    let border = if emphasized { p.accent } else { p.border };
    let inner = width.saturating_sub(4);
    let framed = |text: String, style: Style| {
        vec![
            Span::styled("│ ", border),
            Span::styled(pad_to(&text, inner), style),
            Span::styled(" │", border),
        ]
    };
    match line {
        0 => vec![Span::styled(
            format!("┌{}┐", "─".repeat(width.saturating_sub(2))),
            border,
        )],
        1 => framed(project.title.clone(), p.emphasize(p.heading, emphasized)),
        2 => framed(project.role.clone(), p.muted),
        3 => framed(card_tech_summary(project), p.chip),
        _ => vec![Span::styled(
            format!("└{}┘", "─".repeat(width.saturating_sub(2))),
            border,
        )],
    }
}
