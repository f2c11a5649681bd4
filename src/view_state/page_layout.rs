//! Page geometry: where each section and interactive element sits in the
//! scrollable document.
//!
//! Geometry depends only on the content and the terminal size, never on
//! animation state, so a layout computed once per resize stays valid for
//! hit testing, section tracking and scroll targeting.

use crate::interaction::crawl::CrawlSpeed;
use crate::interaction::{Bounds, ElementLocator, SectionMeasurement};
use crate::model::SectionId;
use crate::state::contact_form::FormField;
use ratatui::layout::Rect;

/// Every interactive element the pointer or keyboard can reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKey {
    /// Logo at the left of the nav bar.
    NavLogo,
    /// Nav bar link to a section.
    NavItem(SectionId),
    /// Theme toggle in the nav bar.
    NavTheme,
    /// Menu trigger of the compact nav bar.
    NavMenuToggle,
    /// Dropdown menu link to a section.
    MenuItem(SectionId),
    /// Theme toggle in the dropdown menu.
    MenuTheme,
    /// Project card, by index.
    ProjectCard(usize),
    /// Contact link row, by index.
    ContactLink(usize),
    /// Button opening the compose form.
    ComposeButton,
    /// Crawl pause control.
    CrawlPause,
    /// Crawl speed button.
    CrawlSpeed(CrawlSpeed),
    /// Modal close button.
    ModalClose,
    /// Compose form input.
    FormField(FormField),
    /// Compose form submit button.
    FormSend,
}

/// A rectangle in document coordinates: `row` counts from the top of the
/// page, `col` from the left edge of the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocRect {
    /// Left column.
    pub col: u16,
    /// Top row, from the top of the page.
    pub row: usize,
    /// Width in columns.
    pub width: u16,
    /// Height in rows.
    pub height: usize,
}

impl DocRect {
    /// Rect with its top-left corner at (`col`, `row`).
    pub fn new(col: u16, row: usize, width: u16, height: usize) -> Self {
        Self {
            col,
            row,
            width,
            height,
        }
    }

    /// Exclusive bottom row.
    pub fn bottom(&self) -> usize {
        self.row + self.height
    }

    /// Whether the cell at (`col`, `row`) lies inside.
    pub fn contains(&self, col: u16, row: usize) -> bool {
        col >= self.col
            && u32::from(col) < u32::from(self.col) + u32::from(self.width)
            && row >= self.row
            && row < self.bottom()
    }

    /// Bounds on screen when the page is scrolled to `scroll` and the page
    /// viewport starts at `area`. Rows are fractional while animating.
    pub fn to_screen(&self, scroll: f64, area: Rect) -> Bounds {
        Bounds::new(
            f64::from(area.x) + f64::from(self.col),
            f64::from(area.y) + self.row as f64 - scroll,
            f64::from(self.width),
            self.height as f64,
        )
    }
}

/// An interactive element and where it sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hotspot {
    /// Element identity.
    pub key: ElementKey,
    /// Document position.
    pub rect: DocRect,
}

/// Vertical extent of one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpan {
    /// Section identity.
    pub id: SectionId,
    /// First row.
    pub top: usize,
    /// Height in rows.
    pub height: usize,
}

impl SectionSpan {
    /// Exclusive bottom row.
    pub fn bottom(&self) -> usize {
        self.top + self.height
    }

    /// Position relative to a viewport scrolled to `scroll`.
    pub fn measure(&self, scroll: f64) -> SectionMeasurement {
        let top = self.top as f64 - scroll;
        SectionMeasurement::new(self.id, top, top + self.height as f64)
    }
}

/// Geometry of the whole scrollable page for one terminal size.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageLayout {
    width: u16,
    viewport_rows: u16,
    nav_height: u16,
    doc_height: usize,
    sections: Vec<SectionSpan>,
    hotspots: Vec<Hotspot>,
}

impl PageLayout {
    /// Empty layout; sections and hotspots are pushed as the page is built.
    pub fn new(width: u16, viewport_rows: u16, nav_height: u16) -> Self {
        Self {
            width,
            viewport_rows,
            nav_height,
            ..Self::default()
        }
    }

    /// Append a section. Sections are pushed in document order.
    pub fn push_section(&mut self, span: SectionSpan) {
        self.sections.push(span);
    }

    /// Append an interactive element.
    pub fn push_hotspot(&mut self, key: ElementKey, rect: DocRect) {
        self.hotspots.push(Hotspot { key, rect });
    }

    /// Set the total page height in rows.
    pub fn set_doc_height(&mut self, rows: usize) {
        self.doc_height = rows;
    }

    /// Terminal width the layout was built for.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Rows of the page viewport.
    pub fn viewport_rows(&self) -> u16 {
        self.viewport_rows
    }

    /// Total page height in rows.
    pub fn doc_height(&self) -> usize {
        self.doc_height
    }

    /// Sections in document order.
    pub fn sections(&self) -> &[SectionSpan] {
        &self.sections
    }

    /// Span of section `id`.
    pub fn section(&self, id: SectionId) -> Option<&SectionSpan> {
        self.sections.iter().find(|span| span.id == id)
    }

    /// Every interactive element, in draw order.
    pub fn hotspots(&self) -> &[Hotspot] {
        &self.hotspots
    }

    /// First hotspot with `key`.
    pub fn hotspot(&self, key: ElementKey) -> Option<&Hotspot> {
        self.hotspots.iter().find(|spot| spot.key == key)
    }

    /// Topmost element under a document cell. Later hotspots are drawn over
    /// earlier ones, so search from the end.
    pub fn hotspot_at(&self, col: u16, row: usize) -> Option<&Hotspot> {
        self.hotspots
            .iter()
            .rev()
            .find(|spot| spot.rect.contains(col, row))
    }

    /// Largest valid scroll offset.
    pub fn max_scroll(&self) -> f64 {
        self.doc_height
            .saturating_sub(usize::from(self.viewport_rows)) as f64
    }

    /// Sections as seen from a viewport scrolled to `scroll`.
    pub fn measurements(&self, scroll: f64) -> Vec<SectionMeasurement> {
        self.sections
            .iter()
            .map(|span| span.measure(scroll))
            .collect()
    }

    /// The section containing document row `row`.
    pub fn section_at(&self, row: usize) -> Option<SectionId> {
        self.sections
            .iter()
            .find(|span| row >= span.top && row < span.bottom())
            .map(|span| span.id)
    }
}

impl ElementLocator for PageLayout {
    fn element_top(&self, id: &str) -> Option<f64> {
        let section: SectionId = id.parse().ok()?;
        self.section(section).map(|span| span.top as f64)
    }

    fn nav_height(&self) -> f64 {
        f64::from(self.nav_height)
    }

    fn scroll_limit(&self) -> f64 {
        self.max_scroll()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PageLayout {
        let mut layout = PageLayout::new(80, 20, 2);
        let mut top = 0;
        for (id, height) in [
            (SectionId::Hero, 20),
            (SectionId::About, 30),
            (SectionId::Skills, 40),
            (SectionId::Projects, 25),
            (SectionId::Contact, 15),
        ] {
            layout.push_section(SectionSpan { id, top, height });
            top += height;
        }
        layout.set_doc_height(top);
        layout.push_hotspot(ElementKey::ProjectCard(0), DocRect::new(4, 95, 30, 5));
        layout.push_hotspot(ElementKey::ProjectCard(1), DocRect::new(40, 95, 30, 5));
        layout
    }

    mod geometry {
        use super::*;

        #[test]
        fn doc_rect_contains_is_half_open() {
            let rect = DocRect::new(2, 10, 3, 2);
            assert!(rect.contains(2, 10));
            assert!(rect.contains(4, 11));
            assert!(!rect.contains(5, 10));
            assert!(!rect.contains(2, 12));
            assert!(!rect.contains(1, 10));
        }

        #[test]
        fn to_screen_subtracts_fractional_scroll() {
            let rect = DocRect::new(4, 30, 10, 3);
            let bounds = rect.to_screen(25.5, Rect::new(0, 0, 80, 20));
            assert_eq!(bounds.left, 4.0);
            assert_eq!(bounds.top, 4.5);
            assert_eq!(bounds.height, 3.0);
        }
    }

    mod lookup {
        use super::*;

        #[test]
        fn hotspot_at_finds_card() {
            let layout = sample();
            let hit = layout.hotspot_at(45, 97).map(|spot| spot.key);
            assert_eq!(hit, Some(ElementKey::ProjectCard(1)));
            assert_eq!(layout.hotspot_at(36, 97), None);
        }

        #[test]
        fn section_at_maps_rows() {
            let layout = sample();
            assert_eq!(layout.section_at(0), Some(SectionId::Hero));
            assert_eq!(layout.section_at(20), Some(SectionId::About));
            assert_eq!(layout.section_at(129), Some(SectionId::Contact));
            assert_eq!(layout.section_at(130), None);
        }
    }

    mod locator {
        use super::*;

        #[test]
        fn element_top_accepts_hash_prefix() {
            let layout = sample();
            assert_eq!(layout.element_top("#skills"), Some(50.0));
            assert_eq!(layout.element_top("contact"), Some(115.0));
            assert_eq!(layout.element_top("blog"), None);
        }

        #[test]
        fn scroll_limit_excludes_last_viewport() {
            let layout = sample();
            assert_eq!(layout.scroll_limit(), 110.0);
            assert_eq!(layout.nav_height(), 2.0);
        }

        #[test]
        fn short_document_cannot_scroll() {
            let mut layout = PageLayout::new(80, 40, 2);
            layout.set_doc_height(10);
            assert_eq!(layout.max_scroll(), 0.0);
        }
    }

    #[test]
    fn measurements_follow_scroll() {
        let layout = sample();
        let measured = layout.measurements(45.0);
        let about = measured
            .iter()
            .find(|m| m.id == SectionId::About)
            .expect("about measured");
        assert_eq!(about.top, -25.0);
        assert_eq!(about.bottom, 5.0);
        assert_eq!(measured.len(), 5);
    }
}
