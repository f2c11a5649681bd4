use super::{DocBuilder, DocumentContext};
use chrono::Datelike;
use ratatui::text::Span;

/// Year printed in the copyright line.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

pub(super) fn copyright(year: i32, owner: &str) -> String {
    format!("© {year} {owner}. All rights reserved.")
}

pub(super) fn build(b: &mut DocBuilder, ctx: &DocumentContext<'_>) {
    let p = &ctx.palette;
    b.line(vec![Span::styled("─".repeat(b.content_width()), p.border)]);
    b.blank();
    b.centered(vec![Span::styled(
        copyright(ctx.year, &ctx.content.owner),
        p.muted,
    )]);
    b.blank();
}
