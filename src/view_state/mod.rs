//! View-state layer - page geometry and document building
//!
//! Sits between the interaction state and the terminal renderer: it knows
//! where every section and interactive element lands on the page, and it
//! produces the styled lines the renderer slices into the viewport.
//!
//! # Module Structure
//!
//! - `page_layout`: PageLayout, ElementKey, Hotspot - geometry and hit testing
//! - `document`: build_document - styled page lines plus their layout
//! - `project_detail`: project modal body lines
//! - `screen`: ScreenLayout - nav bar, overlays and status bar regions
//! - `text`: display-width aware wrapping and truncation

pub mod document;
pub mod page_layout;
pub mod project_detail;
pub mod screen;
pub mod text;

pub use document::{build_document, compute_layout, CrawlView, Document, DocumentContext};
pub use page_layout::{DocRect, ElementKey, Hotspot, PageLayout, SectionSpan};
pub use screen::{centered_rect, spot_at, FormLayout, MenuLayout, ModalLayout, ScreenLayout, ScreenSpot};
