//! Application state and transitions.
//!
//! AppState is the root state type. It owns the page geometry and every
//! interaction component; input handlers mutate it, [`AppState::tick`]
//! advances animations and timers, and the view layer reads it to draw.
//! Time is always passed in, so every transition is deterministic.

use crate::config::ResolvedConfig;
use crate::interaction::crawl::Crawl;
use crate::interaction::typewriter::{Typewriter, TypewriterTiming};
use crate::interaction::{
    Bounds, MagneticCursor, Point, ScrollOptions, ScrollOutcome, ScrollProgress, ScrollTarget,
    SectionTracker, SmoothScrollController, TrackerConfig,
};
use crate::model::{PortfolioContent, SectionId, Theme};
use crate::state::contact_form::ContactForm;
use crate::state::magnets::{magnet_for, MagnetRegistry};
use crate::state::nav_menu::{MenuEffect, NavMenu};
use crate::state::project_modal::ProjectModal;
use crate::view::constants::{
    ENGINE_MIN_WIDTH, FOCUS_SCROLL_DURATION, MARQUEE_STEP, NAV_HEIGHT, STATUS_MESSAGE_DURATION,
};
use crate::view::styles::{ColorConfig, Palette};
use crate::view_state::document::{compute_layout, current_year};
use crate::view_state::project_detail::detail_lines;
use crate::view_state::{spot_at, ElementKey, PageLayout, ScreenLayout};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Position, Rect};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Transient message shown in the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    /// Message text.
    pub text: String,
    expires_at: Instant,
}

/// Application state.
///
/// # Layers
///
/// Input is routed to the topmost open layer: help overlay, compose form,
/// project modal, navigation menu, then the page. A layer that is open
/// swallows input meant for the ones below it.
#[derive(Debug, Clone)]
pub struct AppState {
    content: PortfolioContent,
    config: ResolvedConfig,
    screen: ScreenLayout,
    layout: PageLayout,
    year: i32,

    /// Active colour scheme.
    pub theme: Theme,
    /// Page scroll position and animation.
    pub scroll: SmoothScrollController,
    /// Active-section tracking.
    pub tracker: SectionTracker,
    /// Magnetic cursor indicator.
    pub cursor: MagneticCursor,
    magnets: MagnetRegistry,
    /// Scroll position the magnet bounds were last computed for.
    synced_scroll: f64,

    /// Rotating role in the hero section.
    pub typewriter: Typewriter,
    /// About section crawl.
    pub crawl: Crawl,
    /// Project detail modal.
    pub modal: ProjectModal,
    /// Compose form.
    pub form: ContactForm,
    /// Dropdown menu of the compact nav bar.
    pub menu: NavMenu,

    /// Keyboard focus: a nav spot, menu spot or page hotspot.
    pub focus: Option<ElementKey>,
    /// Whether the key binding overlay is showing.
    pub help_visible: bool,
    /// Set once the user asked to quit.
    pub should_quit: bool,
    status: Option<StatusMessage>,
    chime_pending: bool,
    marquee_offset: usize,
    next_marquee_step: Instant,
    /// Last pointer cell.
    pointer: Option<(u16, u16)>,
}

/// Whether the inertial engine runs at this width.
pub fn engine_enabled(config: &ResolvedConfig, width: u16) -> bool {
    config.smooth_scroll && width > ENGINE_MIN_WIDTH
}

impl AppState {
    /// State for a terminal of `area`, scrolled to the top.
    pub fn new(content: PortfolioContent, config: ResolvedConfig, area: Rect, now: Instant) -> Self {
        let screen = ScreenLayout::new(area, &content.owner);
        let layout = compute_layout(&content, screen.page.width, screen.viewport_rows());
        let mut cursor = MagneticCursor::new();
        if config.magnetic_cursor {
            cursor.mount();
        }
        let tracker = SectionTracker::new(TrackerConfig {
            debounce: config.debounce(),
            priority_band: f64::from(config.priority_band_rows),
        });
        let typewriter = Typewriter::new(
            content.hero.roles.clone(),
            TypewriterTiming::default(),
            now,
        );
        debug!(
            width = area.width,
            height = area.height,
            doc_height = layout.doc_height(),
            "Initial page layout"
        );

        let mut state = Self {
            scroll: SmoothScrollController::new(engine_enabled(&config, area.width)),
            form: ContactForm::new(config.simulate_send_failure),
            theme: config.theme,
            content,
            config,
            screen,
            layout,
            year: current_year(),
            tracker,
            cursor,
            magnets: MagnetRegistry::default(),
            synced_scroll: 0.0,
            typewriter,
            crawl: Crawl::new(),
            modal: ProjectModal::default(),
            menu: NavMenu::default(),
            focus: None,
            help_visible: false,
            should_quit: false,
            status: None,
            chime_pending: false,
            marquee_offset: 0,
            next_marquee_step: now + MARQUEE_STEP,
            pointer: None,
        };
        state.sync_magnets(now);
        state
    }

    /// Page content.
    pub fn content(&self) -> &PortfolioContent {
        &self.content
    }

    /// Configuration the state was built with.
    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    /// Screen-fixed geometry for the current size.
    pub fn screen(&self) -> &ScreenLayout {
        &self.screen
    }

    /// Page geometry for the current size.
    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    /// Year of the copyright line.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Scroll position of the marquee, in chars.
    pub fn marquee_offset(&self) -> usize {
        self.marquee_offset
    }

    /// Status bar message, if one has not expired.
    pub fn status_message(&self) -> Option<&str> {
        self.status.as_ref().map(|status| status.text.as_str())
    }

    /// Styles for the current theme.
    pub fn palette(&self, colors: ColorConfig) -> Palette {
        Palette::for_theme(self.theme, colors)
    }

    /// Rendered scroll offset in whole rows.
    pub fn scroll_offset(&self) -> usize {
        let max = self.layout.max_scroll();
        self.scroll.position().clamp(0.0, max).round() as usize
    }

    /// Scroll position as a fraction of the page.
    pub fn scroll_progress(&self) -> ScrollProgress {
        self.scroll.progress(self.layout.max_scroll())
    }

    /// Section highlighted in the navigation.
    pub fn active_section(&self) -> Option<SectionId> {
        self.tracker.active()
    }

    /// Take the pending menu chime, if any.
    pub fn take_chime(&mut self) -> bool {
        std::mem::take(&mut self.chime_pending)
    }

    /// Show `text` in the status bar for a few seconds.
    pub fn set_status(&mut self, text: impl Into<String>, now: Instant) {
        self.status = Some(StatusMessage {
            text: text.into(),
            expires_at: now + STATUS_MESSAGE_DURATION,
        });
    }

    // ===== Geometry =====

    /// Rebuild geometry for a new terminal size.
    pub fn resize(&mut self, area: Rect, now: Instant) {
        if area == self.screen.area {
            return;
        }
        self.screen = ScreenLayout::new(area, &self.content.owner);
        self.layout = compute_layout(&self.content, self.screen.page.width, self.screen.viewport_rows());
        self.menu.on_resize(area.width);
        self.scroll
            .set_engine_enabled(engine_enabled(&self.config, area.width));
        self.scroll.clamp(self.layout.max_scroll(), now);
        self.refresh_modal_scroll();
        self.tracker.notify(now);
        self.sync_magnets(now);
        debug!(
            width = area.width,
            height = area.height,
            doc_height = self.layout.doc_height(),
            "Relayout after resize"
        );
    }

    /// Topmost interactive element under a screen cell.
    pub fn element_at(&self, col: u16, row: u16) -> Option<ElementKey> {
        if self.help_visible {
            return None;
        }
        if self.form.is_open() {
            return spot_at(&self.screen.form().spots(), col, row);
        }
        if self.modal.is_open() {
            let modal = self.screen.modal();
            return modal
                .close
                .contains(Position::new(col, row))
                .then_some(ElementKey::ModalClose);
        }
        if self.menu.is_open() {
            if let Some(key) = spot_at(&self.screen.menu().spots, col, row) {
                return Some(key);
            }
        }
        if self.screen.nav.contains(Position::new(col, row)) {
            return spot_at(&self.screen.nav_spots, col, row);
        }
        self.page_element_at(col, row)
    }

    fn page_row(&self, col: u16, row: u16) -> Option<usize> {
        let page = self.screen.page;
        if !page.contains(Position::new(col, row)) || self.screen.nav.contains(Position::new(col, row)) {
            return None;
        }
        Some(self.scroll_offset() + usize::from(row - page.y))
    }

    fn page_element_at(&self, col: u16, row: u16) -> Option<ElementKey> {
        let doc_row = self.page_row(col, row)?;
        self.layout
            .hotspot_at(col - self.screen.page.x, doc_row)
            .map(|spot| spot.key)
    }

    /// Element the pointer is over: the cursor's magnetic target if any,
    /// otherwise whatever is under the pointer.
    pub fn hovered_element(&self) -> Option<ElementKey> {
        self.cursor
            .hovered()
            .and_then(|handle| self.magnets.key_for(handle))
            .or_else(|| self.pointer.and_then(|(col, row)| self.element_at(col, row)))
    }

    // ===== Navigation =====

    /// Smooth-scroll to a section and close the menu.
    pub fn navigate_to(&mut self, id: SectionId, now: Instant) -> ScrollOutcome {
        let options = ScrollOptions {
            offset: 0.0,
            duration: self.config.scroll_duration(),
        };
        let outcome = self.scroll.scroll_to(id, options, &self.layout, now);
        debug!(section = %id, ?outcome, "Navigate to section");
        if self.menu.is_open() {
            self.menu.close();
            self.sync_magnets(now);
        }
        outcome
    }

    /// Jump to a section without animating (startup `--section`).
    pub fn start_at(&mut self, id: SectionId, now: Instant) {
        let options = ScrollOptions {
            offset: 0.0,
            duration: Duration::ZERO,
        };
        self.scroll.scroll_to(id, options, &self.layout, now);
        self.sync_magnets(now);
    }

    /// Animate to an absolute document offset.
    pub fn scroll_to_offset(&mut self, offset: f64, duration: Duration, now: Instant) {
        let options = ScrollOptions {
            offset: 0.0,
            duration,
        };
        self.scroll
            .scroll_to(ScrollTarget::Offset(offset), options, &self.layout, now);
    }

    /// Relative page scroll from wheel or keys.
    pub fn scroll_page_by(&mut self, delta: f64, now: Instant) {
        self.scroll.scroll_by(delta, &self.layout, now);
    }

    /// Section that relative navigation (`]`/`[`) starts from: where the
    /// viewport is heading, or the last section once the page bottom is
    /// reached.
    pub fn navigation_section(&self) -> Option<SectionId> {
        let destination = self.scroll.destination();
        let max = self.layout.max_scroll();
        if max > 0.0 && destination >= max - 0.5 {
            return self.layout.sections().last().map(|span| span.id);
        }
        self.layout
            .section_at(destination.round() as usize + usize::from(NAV_HEIGHT))
    }

    // ===== Focus =====

    fn focus_order(&self) -> Vec<ElementKey> {
        if self.menu.is_open() {
            return self.screen.menu().spots.iter().map(|spot| spot.key).collect();
        }
        self.screen
            .nav_spots
            .iter()
            .map(|spot| spot.key)
            .chain(self.layout.hotspots().iter().map(|spot| spot.key))
            .collect()
    }

    /// Move keyboard focus and bring the element into view.
    pub fn move_focus(&mut self, forward: bool, now: Instant) {
        let order = self.focus_order();
        let len = order.len();
        if len == 0 {
            return;
        }
        let current = self.focus.and_then(|key| order.iter().position(|k| *k == key));
        let next = match current {
            Some(i) if forward => (i + 1) % len,
            Some(i) => (i + len - 1) % len,
            None if forward => 0,
            None => len - 1,
        };
        let key = order[next];
        self.focus = Some(key);
        self.reveal(key, now);
    }

    fn reveal(&mut self, key: ElementKey, now: Instant) {
        let Some(spot) = self.layout.hotspot(key) else {
            return;
        };
        let top = spot.rect.row as f64;
        let bottom = spot.rect.bottom() as f64;
        let view_top = self.scroll.destination() + f64::from(NAV_HEIGHT);
        let view_bottom = self.scroll.destination() + f64::from(self.screen.viewport_rows());
        if top < view_top || bottom > view_bottom {
            self.scroll_to_offset(top - f64::from(NAV_HEIGHT) - 1.0, FOCUS_SCROLL_DURATION, now);
        }
    }

    /// Activate the focused element. In the modal, Enter closes it.
    pub fn activate_focused(&mut self, now: Instant) {
        if self.modal.is_open() {
            self.close_modal(now);
            return;
        }
        if let Some(key) = self.focus {
            self.activate(key, now);
        }
    }

    // ===== Pointer =====

    /// Last pointer cell, once the pointer has moved over the screen.
    pub fn pointer_cell(&self) -> Option<(u16, u16)> {
        self.pointer
    }

    /// Pointer moved to a screen cell.
    pub fn pointer_moved(&mut self, col: u16, row: u16, now: Instant) {
        self.pointer = Some((col, row));
        if self.cursor.is_mounted() {
            let point = Point::new(f64::from(col) + 0.5, f64::from(row) + 0.5);
            self.cursor.pointer_move(point, now);
        }
        let over_about = self
            .page_row(col, row)
            .and_then(|doc_row| self.layout.section_at(doc_row))
            == Some(SectionId::About);
        if over_about {
            self.crawl.pointer_activity(now);
        }
    }

    /// Left click on a screen cell.
    pub fn click(&mut self, col: u16, row: u16, now: Instant) {
        let position = Position::new(col, row);
        if self.help_visible {
            self.help_visible = false;
            return;
        }
        if self.form.is_open() {
            let form = self.screen.form();
            if !form.frame.contains(position) {
                self.close_form(now);
            } else if let Some(key) = spot_at(&form.spots(), col, row) {
                self.activate(key, now);
            }
            return;
        }
        if self.modal.is_open() {
            let modal = self.screen.modal();
            if modal.close.contains(position) || !modal.frame.contains(position) {
                self.close_modal(now);
            }
            return;
        }
        if self.menu.is_open() {
            match spot_at(&self.screen.menu().spots, col, row) {
                Some(key) => self.activate(key, now),
                None => {
                    self.menu.close();
                    self.sync_magnets(now);
                }
            }
            return;
        }
        let Some(key) = self.element_at(col, row) else {
            return;
        };
        let crawl_control = matches!(key, ElementKey::CrawlPause | ElementKey::CrawlSpeed(_));
        if crawl_control && !self.crawl.controls_visible() {
            return;
        }
        self.activate(key, now);
    }

    /// Wheel notch: scrolls the modal body while it is open, never the page.
    pub fn wheel(&mut self, delta: f64, now: Instant) {
        if self.help_visible || self.form.is_open() {
            return;
        }
        if self.modal.is_open() {
            self.modal.scroll_by(delta.round() as i32);
            return;
        }
        self.scroll_page_by(delta, now);
    }

    // ===== Activation =====

    /// Perform an element's action.
    pub fn activate(&mut self, key: ElementKey, now: Instant) {
        debug!(?key, "Activate element");
        match key {
            ElementKey::NavLogo => {
                self.navigate_to(SectionId::Hero, now);
            }
            ElementKey::NavItem(id) | ElementKey::MenuItem(id) => {
                self.navigate_to(id, now);
            }
            ElementKey::NavTheme | ElementKey::MenuTheme => self.toggle_theme(),
            ElementKey::NavMenuToggle => self.toggle_menu(now),
            ElementKey::ProjectCard(index) => self.open_project(index, now),
            ElementKey::ContactLink(index) => self.show_contact(index, now),
            ElementKey::ComposeButton => self.open_form(now),
            ElementKey::CrawlPause => {
                self.crawl.toggle_pause(now);
            }
            ElementKey::CrawlSpeed(speed) => {
                self.crawl.set_speed(speed, now);
            }
            ElementKey::ModalClose => self.close_modal(now),
            ElementKey::FormField(field) => self.form.set_focus(field),
            ElementKey::FormSend => {
                let status = self.form.submit(now);
                debug!(?status, "Contact form submitted");
            }
        }
    }

    /// Switch between dark and light.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        info!(theme = %self.theme, "Theme toggled");
    }

    /// Show or hide the key binding overlay.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Open or close the compact menu. Opening rings the chime.
    pub fn toggle_menu(&mut self, now: Instant) {
        if !self.screen.compact && !self.menu.is_open() {
            return;
        }
        if self.menu.toggle() == MenuEffect::Chime {
            self.chime_pending = true;
        }
        self.sync_magnets(now);
    }

    /// Open the detail modal of project `index`.
    pub fn open_project(&mut self, index: usize, now: Instant) {
        let Some(project) = self.content.projects.get(index) else {
            return;
        };
        info!(project = %project.id, "Opening project");
        self.modal.open(index);
        self.refresh_modal_scroll();
        self.sync_magnets(now);
    }

    /// Close the project modal, if open.
    pub fn close_modal(&mut self, now: Instant) {
        if self.modal.close() {
            self.sync_magnets(now);
        }
    }

    fn refresh_modal_scroll(&mut self) {
        let Some(open) = self.modal.current() else {
            return;
        };
        let Some(project) = self.content.projects.get(open.project) else {
            return;
        };
        let body = self.screen.modal().body;
        let palette = Palette::for_theme(self.theme, ColorConfig::disabled());
        let rows = detail_lines(project, &palette, body.width).len();
        let max = rows.saturating_sub(usize::from(body.height));
        self.modal
            .set_max_scroll(u16::try_from(max).unwrap_or(u16::MAX));
    }

    fn show_contact(&mut self, index: usize, now: Instant) {
        let Some(link) = self.content.contacts.get(index) else {
            return;
        };
        info!(contact = %link.id, "Contact link activated");
        let text = format!("{}: {}", link.label, link.href);
        self.set_status(text, now);
    }

    /// Open the compose form.
    pub fn open_form(&mut self, now: Instant) {
        self.menu.close();
        self.modal.close();
        self.form.open();
        self.sync_magnets(now);
    }

    /// Close the compose form, if open.
    pub fn close_form(&mut self, now: Instant) {
        if self.form.close() {
            self.sync_magnets(now);
        }
    }

    /// Close the topmost overlay. Returns `false` if none was open.
    pub fn close_overlay(&mut self, now: Instant) -> bool {
        if self.help_visible {
            self.help_visible = false;
        } else if self.form.is_open() {
            self.close_form(now);
        } else if self.modal.is_open() {
            self.close_modal(now);
        } else if self.menu.is_open() {
            self.menu.close();
            self.sync_magnets(now);
        } else {
            return false;
        }
        true
    }

    /// Keys while the compose form is open. Text goes to the focused field.
    pub fn handle_form_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => self.close_form(now),
            KeyCode::Tab => self.form.focus_next(),
            KeyCode::BackTab => self.form.focus_prev(),
            KeyCode::Enter => {
                self.form.submit(now);
            }
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.form.insert_char(c);
            }
            _ => {}
        }
    }

    // ===== Frame =====

    /// Advance every timer and animation to `now`.
    pub fn tick(&mut self, now: Instant) {
        self.scroll.tick(now);
        let scroll = self.scroll.position();
        let viewport = f64::from(self.screen.viewport_rows());
        let measurements = self.layout.measurements(scroll);
        self.tracker.observe(&measurements, viewport, now);
        self.tracker.poll(now, &measurements, viewport);

        if let Some(about) = measurements.iter().find(|m| m.id == SectionId::About) {
            self.crawl.observe(
                about.is_intersecting(viewport),
                about.intersection_ratio(viewport),
                about.top,
                now,
            );
        }
        self.crawl.tick(now);
        self.typewriter.tick(now);
        self.form.tick(now);

        if scroll != self.synced_scroll {
            self.sync_magnets(now);
        }
        self.cursor.tick(now);

        if self
            .status
            .as_ref()
            .is_some_and(|status| now >= status.expires_at)
        {
            self.status = None;
        }
        while now >= self.next_marquee_step {
            self.marquee_offset = self.marquee_offset.wrapping_add(1);
            self.next_marquee_step += MARQUEE_STEP;
        }
    }

    /// Earliest instant anything scheduled falls due.
    pub fn next_deadline(&self) -> Option<Instant> {
        [self.tracker.next_deadline(), self.typewriter.next_deadline()]
            .into_iter()
            .flatten()
            .chain(std::iter::once(self.next_marquee_step))
            .min()
    }

    // ===== Magnetic targets =====

    /// Register, update and drop magnetic targets to match what is mounted
    /// and where it currently sits on screen.
    fn sync_magnets(&mut self, now: Instant) {
        self.synced_scroll = self.scroll.position();
        if !self.cursor.is_mounted() {
            return;
        }
        let mounted = self.mounted_elements();
        self.magnets.sync(&mut self.cursor, &mounted);
        self.cursor.refresh(now);
    }

    /// Magnetic elements currently mounted, navigation first. Elements that
    /// are scrolled out of view or covered by an overlay have no bounds.
    fn mounted_elements(&self) -> Vec<(ElementKey, Option<Bounds>)> {
        let covered = self.modal.is_open() || self.form.is_open();
        let page_covered = covered || self.menu.is_open();
        let mut mounted = Vec::new();

        for spot in &self.screen.nav_spots {
            if magnet_for(spot.key).is_some() {
                mounted.push((spot.key, (!covered).then(|| Bounds::from(spot.rect))));
            }
        }
        if self.menu.is_open() {
            for spot in self.screen.menu().spots {
                mounted.push((spot.key, (!covered).then(|| Bounds::from(spot.rect))));
            }
        }
        if self.modal.is_open() {
            mounted.push((ElementKey::ModalClose, Some(self.screen.modal().close.into())));
        }
        if self.form.is_open() {
            mounted.push((ElementKey::FormSend, Some(self.screen.form().send.into())));
        }

        let page = self.screen.page;
        let visible_top = f64::from(self.screen.nav.bottom());
        let visible_bottom = f64::from(page.bottom());
        let scroll = self.scroll.position();
        for spot in self.layout.hotspots() {
            if magnet_for(spot.key).is_none() {
                continue;
            }
            let bounds = (!page_covered)
                .then(|| clip_rows(spot.rect.to_screen(scroll, page), visible_top, visible_bottom))
                .flatten();
            mounted.push((spot.key, bounds));
        }
        mounted
    }

    /// Drop every registration and stop observing.
    pub fn teardown(&mut self) {
        self.cursor.teardown();
        self.magnets.clear();
        self.tracker.teardown();
        info!("Interaction layer torn down");
    }
}

/// Vertical clip of `bounds` to `[top, bottom)`; `None` when nothing is left.
fn clip_rows(bounds: Bounds, top: f64, bottom: f64) -> Option<Bounds> {
    let clipped_top = bounds.top.max(top);
    let clipped_bottom = bounds.bottom().min(bottom);
    (clipped_bottom > clipped_top).then(|| {
        Bounds::new(bounds.left, clipped_top, bounds.width, clipped_bottom - clipped_top)
    })
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
