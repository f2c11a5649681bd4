//! The scrollable page document.
//!
//! [`build_document`] turns content plus a snapshot of live state into
//! styled lines and the matching [`PageLayout`]. Line count and hotspot
//! placement depend only on content, width and viewport height, so the
//! layout built once per resize matches every frame drawn afterwards.

mod about;
mod contact;
mod footer;
mod hero;
mod projects;
mod skills;

use super::page_layout::{DocRect, ElementKey, PageLayout, SectionSpan};
use super::text::{center_offset, display_width, truncate, wrap};
use crate::interaction::crawl::{Crawl, CrawlSpeed};
use crate::model::{PortfolioContent, SectionId, Theme};
use crate::view::constants::NAV_HEIGHT;
use crate::view::styles::{ColorConfig, Palette};
use ratatui::style::Style;
use ratatui::text::{Line, Span};

pub use footer::current_year;

/// Blank rows at the top of each section, so headings clear the nav bar.
pub const SECTION_PADDING: usize = NAV_HEIGHT as usize + 1;

/// Widest text column; wider terminals get side margins.
pub const MAX_CONTENT_WIDTH: u16 = 96;

/// Columns kept free on each side even on narrow terminals.
pub const PAGE_MARGIN: u16 = 2;

/// Crawl playback state needed to draw one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrawlView {
    /// Position within the loop, in `[0, 1)`.
    pub progress: f64,
    /// Playback speed.
    pub speed: CrawlSpeed,
    /// Whether playback is paused.
    pub paused: bool,
    /// Whether the controls are drawn.
    pub controls_visible: bool,
}

impl Default for CrawlView {
    fn default() -> Self {
        Self::from(&Crawl::default())
    }
}

impl From<&Crawl> for CrawlView {
    fn from(crawl: &Crawl) -> Self {
        Self {
            progress: crawl.progress(),
            speed: crawl.speed(),
            paused: crawl.is_paused(),
            controls_visible: crawl.controls_visible(),
        }
    }
}

/// Everything the builders read.
#[derive(Debug, Clone)]
pub struct DocumentContext<'a> {
    /// Page content.
    pub content: &'a PortfolioContent,
    /// Styles for the current theme.
    pub palette: Palette,
    /// Terminal width.
    pub width: u16,
    /// Rows of the page viewport.
    pub viewport_rows: u16,
    /// Prefix of the role the typewriter has typed so far.
    pub typed_role: &'a str,
    /// Crawl playback state.
    pub crawl: CrawlView,
    /// Element under the pointer.
    pub hovered: Option<ElementKey>,
    /// Element with keyboard focus.
    pub focused: Option<ElementKey>,
    /// Scroll position of the marquee, in chars.
    pub marquee_offset: usize,
    /// Year of the copyright line.
    pub year: i32,
}

impl<'a> DocumentContext<'a> {
    /// Context for computing geometry only; styles and animation are at rest.
    pub fn layout_only(content: &'a PortfolioContent, width: u16, viewport_rows: u16) -> Self {
        Self {
            content,
            palette: Palette::for_theme(Theme::Dark, ColorConfig::disabled()),
            width,
            viewport_rows,
            typed_role: "",
            crawl: CrawlView::default(),
            hovered: None,
            focused: None,
            marquee_offset: 0,
            year: current_year(),
        }
    }

    /// Whether `key` is hovered or focused.
    pub fn is_emphasized(&self, key: ElementKey) -> bool {
        self.hovered == Some(key) || self.focused == Some(key)
    }
}

/// The rendered page and its geometry.
#[derive(Debug, Clone)]
pub struct Document {
    /// Every row of the page, top to bottom.
    pub lines: Vec<Line<'static>>,
    /// Where sections and interactive elements landed.
    pub layout: PageLayout,
}

impl Document {
    /// Rows `offset..offset + rows`, clipped to the document.
    pub fn visible_lines(&self, offset: usize, rows: usize) -> &[Line<'static>] {
        let start = offset.min(self.lines.len());
        let end = offset.saturating_add(rows).min(self.lines.len());
        &self.lines[start..end]
    }
}

/// Build the whole page.
pub fn build_document(ctx: &DocumentContext<'_>) -> Document {
    let mut b = DocBuilder::new(ctx.width, ctx.viewport_rows, ctx.palette.base);
    hero::build(&mut b, ctx);
    about::build(&mut b, ctx);
    skills::build(&mut b, ctx);
    projects::build(&mut b, ctx);
    contact::build(&mut b, ctx);
    footer::build(&mut b, ctx);
    b.finish()
}

/// Geometry for `content` at a terminal size.
pub fn compute_layout(content: &PortfolioContent, width: u16, viewport_rows: u16) -> PageLayout {
    build_document(&DocumentContext::layout_only(content, width, viewport_rows)).layout
}

/// Line-by-line document writer that records section spans and hotspots.
pub struct DocBuilder {
    width: u16,
    margin: u16,
    content_width: u16,
    base: Style,
    lines: Vec<Line<'static>>,
    layout: PageLayout,
    open_section: Option<(SectionId, usize)>,
}

impl DocBuilder {
    /// Builder for a `width`-column terminal with `viewport_rows` rows of page.
    pub fn new(width: u16, viewport_rows: u16, base: Style) -> Self {
        let content_width = width
            .saturating_sub(PAGE_MARGIN * 2)
            .clamp(1, MAX_CONTENT_WIDTH);
        let margin = u16::try_from(center_offset(usize::from(content_width), usize::from(width)))
            .unwrap_or(0);
        Self {
            width,
            margin,
            content_width,
            base,
            lines: Vec::new(),
            layout: PageLayout::new(width, viewport_rows, NAV_HEIGHT),
            open_section: None,
        }
    }

    /// Terminal width.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Width of the centered content column.
    pub fn content_width(&self) -> usize {
        usize::from(self.content_width)
    }

    /// Rows of the page viewport.
    pub fn viewport_rows(&self) -> usize {
        usize::from(self.layout.viewport_rows())
    }

    /// Index of the next row to be written.
    pub fn row(&self) -> usize {
        self.lines.len()
    }

    /// Close any open section and start `id` at the next row.
    pub fn begin_section(&mut self, id: SectionId) {
        self.end_section();
        self.open_section = Some((id, self.row()));
    }

    /// Rows written since the open section began.
    pub fn section_rows(&self) -> usize {
        self.open_section
            .map_or(0, |(_, top)| self.row().saturating_sub(top))
    }

    /// Pad the open section with blank rows until it is `rows` tall.
    pub fn pad_section_to(&mut self, rows: usize) {
        while self.section_rows() < rows {
            self.blank();
        }
    }

    /// Close the open section, recording its span.
    pub fn end_section(&mut self) {
        if let Some((id, top)) = self.open_section.take() {
            self.layout.push_section(SectionSpan {
                id,
                top,
                height: self.row() - top,
            });
        }
    }

    /// Append an empty row.
    pub fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    /// Append `count` empty rows.
    pub fn blanks(&mut self, count: usize) {
        for _ in 0..count {
            self.blank();
        }
    }

    /// A line inside the content column.
    pub fn line(&mut self, spans: Vec<Span<'static>>) {
        let mut all = Vec::with_capacity(spans.len() + 1);
        if self.margin > 0 {
            all.push(Span::styled(" ".repeat(usize::from(self.margin)), self.base));
        }
        all.extend(spans);
        self.lines.push(Line::from(all));
    }

    /// A line spanning the whole terminal width, ignoring the margin.
    pub fn full_width_line(&mut self, spans: Vec<Span<'static>>) {
        self.lines.push(Line::from(spans));
    }

    /// A line centered in the content column.
    pub fn centered(&mut self, spans: Vec<Span<'static>>) {
        let used: usize = spans.iter().map(|s| display_width(&s.content)).sum();
        let left = center_offset(used, self.content_width());
        let mut all = Vec::with_capacity(spans.len() + 1);
        if left > 0 {
            all.push(Span::styled(" ".repeat(left), self.base));
        }
        all.extend(spans);
        self.line(all);
    }

    /// Word-wrapped paragraph, indented by `indent` columns.
    pub fn wrapped(&mut self, text: &str, style: Style, indent: usize) -> usize {
        let avail = self.content_width().saturating_sub(indent).max(1);
        let lines = wrap(text, avail);
        let count = lines.len();
        for line in lines {
            self.line(vec![
                Span::styled(" ".repeat(indent), self.base),
                Span::styled(line, style),
            ]);
        }
        count
    }

    /// Wrapped text behind a bullet; continuation lines align with the text.
    pub fn bulleted(&mut self, bullet: &str, text: &str, bullet_style: Style, style: Style, indent: usize) {
        let hang = indent + display_width(bullet);
        let avail = self.content_width().saturating_sub(hang).max(1);
        for (i, line) in wrap(text, avail).into_iter().enumerate() {
            let lead = if i == 0 {
                Span::styled(format!("{}{bullet}", " ".repeat(indent)), bullet_style)
            } else {
                Span::styled(" ".repeat(hang), self.base)
            };
            self.line(vec![lead, Span::styled(line, style)]);
        }
    }

    /// `[a] [b] [c]` chips, wrapping onto as many lines as needed.
    pub fn chips(&mut self, items: &[String], style: Style, indent: usize) {
        if items.is_empty() {
            return;
        }
        let avail = self.content_width().saturating_sub(indent).max(1);
        let mut spans: Vec<Span<'static>> = vec![Span::styled(" ".repeat(indent), self.base)];
        let mut used = 0;
        for item in items {
            let chip = truncate(&format!("[{item}]"), avail);
            let chip_width = display_width(&chip);
            let needed = if used == 0 { chip_width } else { used + 1 + chip_width };
            if needed > avail && used > 0 {
                self.line(std::mem::take(&mut spans));
                spans.push(Span::styled(" ".repeat(indent), self.base));
                used = 0;
            }
            if used > 0 {
                spans.push(Span::styled(" ", self.base));
                used += 1;
            }
            spans.push(Span::styled(chip, style));
            used += chip_width;
        }
        self.line(spans);
    }

    /// Record an interactive element. `col` is relative to the content column.
    pub fn hotspot(&mut self, key: ElementKey, col: usize, row: usize, width: usize, height: usize) {
        let col = u16::try_from(col).unwrap_or(u16::MAX);
        let width = u16::try_from(width).unwrap_or(u16::MAX);
        self.layout.push_hotspot(
            key,
            DocRect::new(self.margin.saturating_add(col), row, width, height),
        );
    }

    /// Record an element positioned in absolute terminal columns.
    pub fn hotspot_absolute(&mut self, key: ElementKey, rect: DocRect) {
        self.layout.push_hotspot(key, rect);
    }

    /// Close the last section and hand over the page.
    pub fn finish(mut self) -> Document {
        self.end_section();
        self.layout.set_doc_height(self.lines.len());
        Document {
            lines: self.lines,
            layout: self.layout,
        }
    }
}

/// `NN / TITLE` label and a short rule, shared by the content sections.
fn section_heading(b: &mut DocBuilder, ctx: &DocumentContext<'_>, id: SectionId) {
    let p = &ctx.palette;
    b.line(vec![
        Span::styled(format!("{:02} / ", id.index()), p.muted),
        Span::styled(id.label().to_uppercase(), p.accent),
    ]);
    let rule = b.content_width().min(24);
    b.line(vec![Span::styled("─".repeat(rule), p.border)]);
    b.blank();
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
