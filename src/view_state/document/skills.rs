//! Skills showcase.

use super::{section_heading, DocBuilder, DocumentContext, SECTION_PADDING};
use crate::model::SectionId;
use ratatui::text::Span;

pub(super) fn build(b: &mut DocBuilder, ctx: &DocumentContext<'_>) {
    let p = &ctx.palette;
    b.begin_section(SectionId::Skills);
    b.blanks(SECTION_PADDING);
    section_heading(b, ctx, SectionId::Skills);

    for (i, skill) in ctx.content.skills.iter().enumerate() {
        b.line(vec![
            Span::styled(format!("{:02}  ", i + 1), p.muted),
            Span::styled(skill.title.clone(), p.heading),
        ]);
        b.wrapped(&skill.tagline, p.accent, 4);
        b.wrapped(&skill.description, p.muted, 4);
        for highlight in &skill.highlights {
            b.bulleted("▸ ", highlight, p.accent, p.base, 4);
        }
        b.chips(&skill.technologies, p.chip, 4);
        b.blank();
    }
    b.blank();
    b.end_section();
}
