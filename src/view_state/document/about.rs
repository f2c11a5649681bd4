//! About section: the scrolling crawl over a star field.

use super::{section_heading, DocBuilder, DocumentContext, SECTION_PADDING};
use crate::interaction::crawl::{star_field, Crawl, CrawlSpeed, Star};
use crate::model::SectionId;
use crate::view_state::page_layout::ElementKey;
use crate::view_state::text::{center_offset, display_width, pad_to, wrap};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

const PAUSE_BUTTON_WIDTH: usize = 10;
const SPEED_BUTTON_WIDTH: usize = 4;
const MAX_CRAWL_TEXT_WIDTH: usize = 56;
/// One star per this many cells.
const STAR_DENSITY: usize = 14;

/// Height of the crawl viewport for a terminal with `viewport_rows` rows.
pub(super) fn crawl_rows(viewport_rows: usize) -> usize {
    viewport_rows.saturating_sub(SECTION_PADDING + 8).clamp(8, 24)
}

pub(super) fn build(b: &mut DocBuilder, ctx: &DocumentContext<'_>) {
    let p = &ctx.palette;
    b.begin_section(SectionId::About);
    b.blanks(SECTION_PADDING);
    section_heading(b, ctx, SectionId::About);

    controls(b, ctx);
    b.blank();
    crawl_viewport(b, ctx);
    b.blank();
    b.line(vec![Span::styled("p pause · + faster · - slower", p.muted)]);
    b.blank();
    b.end_section();
}

fn controls(b: &mut DocBuilder, ctx: &DocumentContext<'_>) {
    let p = &ctx.palette;
    let row = b.row();
    let visible = ctx.crawl.controls_visible;

    let pause_label = if ctx.crawl.paused {
        " ▶ Resume"
    } else {
        " ❚❚ Pause"
    };
    let mut spans = Vec::new();
    if visible {
        spans.push(Span::styled(
            pad_to(pause_label, PAUSE_BUTTON_WIDTH),
            p.emphasize(
                p.border.add_modifier(Modifier::REVERSED),
                ctx.is_emphasized(ElementKey::CrawlPause),
            ),
        ));
        spans.push(Span::styled("  ", p.base));
    }
    b.hotspot(ElementKey::CrawlPause, 0, row, PAUSE_BUTTON_WIDTH, 1);

    let mut col = PAUSE_BUTTON_WIDTH + 2;
    for (i, speed) in CrawlSpeed::ALL.into_iter().enumerate() {
        if i > 0 {
            col += 1;
            if visible {
                spans.push(Span::styled(" ", p.base));
            }
        }
        let key = ElementKey::CrawlSpeed(speed);
        if visible {
            let style = if speed == ctx.crawl.speed {
                p.accent.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                p.muted
            };
            spans.push(Span::styled(
                pad_to(&format!(" {}", speed.label()), SPEED_BUTTON_WIDTH),
                p.emphasize(style, ctx.is_emphasized(key)),
            ));
        }
        b.hotspot(key, col, row, SPEED_BUTTON_WIDTH, 1);
        col += SPEED_BUTTON_WIDTH;
    }
    b.line(spans);
}

fn crawl_text(ctx: &DocumentContext<'_>, text_width: usize) -> Vec<(String, Style)> {
    let crawl = &ctx.content.crawl;
    let p = &ctx.palette;
    let mut lines = vec![
        (crawl.episode.clone(), p.crawl),
        (crawl.title.to_uppercase(), p.crawl.add_modifier(Modifier::BOLD)),
        (String::new(), p.crawl),
    ];
    for (i, paragraph) in crawl.paragraphs.iter().enumerate() {
        if i > 0 {
            lines.push((String::new(), p.crawl));
        }
        lines.extend(
            wrap(paragraph, text_width)
                .into_iter()
                .map(|line| (line, p.crawl)),
        );
    }
    lines
}

fn crawl_viewport(b: &mut DocBuilder, ctx: &DocumentContext<'_>) {
    let width = b.content_width();
    let rows = crawl_rows(b.viewport_rows());
    let text_width = width.saturating_sub(4).clamp(1, MAX_CRAWL_TEXT_WIDTH);
    let text = crawl_text(ctx, text_width);

    let star_count = width * rows / STAR_DENSITY;
    let seed = ((width as u64) << 16) | rows as u64;
    let stars = star_field(
        u16::try_from(width).unwrap_or(u16::MAX),
        u16::try_from(rows).unwrap_or(u16::MAX),
        star_count,
        seed,
    );

    let first = Crawl::first_line_row_for(
        ctx.crawl.progress,
        u16::try_from(rows).unwrap_or(u16::MAX),
        u16::try_from(text.len()).unwrap_or(u16::MAX),
    );

    for r in 0..rows {
        let index = r as i64 - i64::from(first);
        let line = usize::try_from(index).ok().and_then(|i| text.get(i));
        match line {
            Some((content, style)) if !content.is_empty() => {
                let left = center_offset(display_width(content), width);
                let right = width.saturating_sub(left + display_width(content));
                b.line(vec![
                    Span::styled(" ".repeat(left), ctx.palette.star_dim),
                    Span::styled(content.clone(), *style),
                    Span::styled(" ".repeat(right), ctx.palette.star_dim),
                ]);
            }
            _ => b.line(star_row(&stars, r, width, ctx)),
        }
    }
}

fn star_row(
    stars: &[Star],
    row: usize,
    width: usize,
    ctx: &DocumentContext<'_>,
) -> Vec<Span<'static>> {
    let mut cells = vec![(' ', ctx.palette.star_dim); width];
    for star in stars.iter().filter(|s| usize::from(s.y) == row) {
        let cell = match star.magnitude {
            0 => ('.', ctx.palette.star_dim),
            1 => ('+', ctx.palette.star_dim),
            _ => ('*', ctx.palette.star_bright),
        };
        if let Some(slot) = cells.get_mut(usize::from(star.x)) {
            *slot = cell;
        }
    }

    let mut spans = Vec::new();
    let mut run = String::new();
    let mut run_style = ctx.palette.star_dim;
    for (c, style) in cells {
        if style != run_style && !run.is_empty() {
            spans.push(Span::styled(std::mem::take(&mut run), run_style));
        }
        run_style = style;
        run.push(c);
    }
    if !run.is_empty() {
        spans.push(Span::styled(run, run_style));
    }
    spans
}
