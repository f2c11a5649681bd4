//! Tests for app state transitions.

use super::*;
use crate::interaction::crawl::CrawlSpeed;
use crate::state::contact_form::FormField;
use crate::view::constants::WHEEL_STEP;
use std::time::Duration;

fn state_with(config: ResolvedConfig, width: u16, height: u16) -> (AppState, Instant) {
    let now = Instant::now();
    let content = PortfolioContent::builtin().expect("builtin content");
    let state = AppState::new(content, config, Rect::new(0, 0, width, height), now);
    (state, now)
}

fn state_at(width: u16, height: u16) -> (AppState, Instant) {
    state_with(ResolvedConfig::default(), width, height)
}

/// Tick in 50 ms steps for `ms` milliseconds; returns the final instant.
fn settle(state: &mut AppState, start: Instant, ms: u64) -> Instant {
    let mut now = start;
    for step in 0..=ms / 50 {
        now = start + Duration::from_millis(step * 50);
        state.tick(now);
    }
    now
}

/// A screen cell inside a page hotspot at the current scroll position.
fn page_cell(state: &AppState, key: ElementKey) -> (u16, u16) {
    let spot = state.layout().hotspot(key).expect("hotspot");
    let row = spot.rect.row - state.scroll_offset() + usize::from(state.screen().page.y);
    (spot.rect.col + 1, u16::try_from(row).expect("on screen"))
}

fn nav_cell(state: &AppState, key: ElementKey) -> (u16, u16) {
    let rect = state.screen().nav_spot(key).expect("nav spot");
    (rect.x + 1, rect.y)
}

mod construction {
    use super::*;

    #[test]
    fn starts_at_top_with_no_active_section() {
        let (state, _) = state_at(100, 30);
        assert_eq!(state.scroll_offset(), 0);
        assert_eq!(state.active_section(), None);
        assert!(state.cursor.is_mounted());
        assert!(state.cursor.target_count() > 0);
    }

    #[test]
    fn engine_depends_on_width_and_config() {
        let config = ResolvedConfig::default();
        assert!(engine_enabled(&config, 100));
        assert!(!engine_enabled(&config, ENGINE_MIN_WIDTH));
        let config = ResolvedConfig {
            smooth_scroll: false,
            ..ResolvedConfig::default()
        };
        assert!(!engine_enabled(&config, 200));
    }

    #[test]
    fn disabled_cursor_registers_nothing() {
        let config = ResolvedConfig {
            magnetic_cursor: false,
            ..ResolvedConfig::default()
        };
        let (mut state, now) = state_with(config, 100, 30);
        assert!(!state.cursor.is_mounted());
        state.pointer_moved(10, 10, now);
        assert_eq!(state.cursor.target_count(), 0);
        assert!(!state.cursor.state().is_hovering);
    }

    #[test]
    fn resize_reclamps_scroll_and_toggles_engine() {
        let (mut state, now) = state_at(100, 30);
        state.scroll_page_by(1.0e6, now);
        settle(&mut state, now, 1500);
        let before = state.layout().max_scroll();
        state.resize(Rect::new(0, 0, 60, 30), now);
        assert!(!state.scroll.engine_enabled());
        assert!(state.scroll.position() <= state.layout().max_scroll());
        assert_ne!(state.layout().max_scroll(), before);
    }
}

mod tracking {
    use super::*;

    #[test]
    fn first_recompute_waits_for_debounce() {
        let (mut state, now) = state_at(100, 30);
        state.tick(now);
        assert_eq!(state.active_section(), None);
        state.tick(now + Duration::from_millis(150));
        assert_eq!(state.active_section(), Some(SectionId::Hero));
    }

    #[test]
    fn navigation_highlights_destination() {
        let (mut state, now) = state_at(100, 30);
        let outcome = state.navigate_to(SectionId::Skills, now);
        assert!(matches!(outcome, ScrollOutcome::Animated { .. }));
        let settled = settle(&mut state, now, 2000);
        let top = state.layout().section(SectionId::Skills).expect("skills").top;
        assert_eq!(state.scroll_offset(), top);

        // The last threshold crossing may have been recomputed mid-flight.
        state.tracker.notify(settled);
        state.tick(settled + Duration::from_millis(150));
        assert_eq!(state.active_section(), Some(SectionId::Skills));
    }

    #[test]
    fn narrow_terminal_jumps_below_nav() {
        let (mut state, now) = state_at(60, 30);
        let outcome = state.navigate_to(SectionId::About, now);
        assert!(matches!(outcome, ScrollOutcome::Jumped { .. }));
        let top = state.layout().section(SectionId::About).expect("about").top;
        assert_eq!(state.scroll.position(), (top - usize::from(NAV_HEIGHT)) as f64);
    }

    #[test]
    fn navigation_section_is_last_at_bottom() {
        let (mut state, now) = state_at(100, 30);
        state.scroll_to_offset(1.0e6, Duration::ZERO, now);
        assert_eq!(state.navigation_section(), Some(SectionId::Contact));
    }
}

mod pointer {
    use super::*;

    #[test]
    fn clicking_nav_item_scrolls_to_section() {
        let (mut state, now) = state_at(120, 30);
        let (col, row) = nav_cell(&state, ElementKey::NavItem(SectionId::Projects));
        state.click(col, row, now);
        let top = state.layout().section(SectionId::Projects).expect("projects").top;
        assert_eq!(state.scroll.destination(), top as f64);
    }

    #[test]
    fn hovering_nav_item_engages_cursor() {
        let (mut state, now) = state_at(120, 30);
        let (col, row) = nav_cell(&state, ElementKey::NavItem(SectionId::About));
        state.pointer_moved(col, row, now);
        assert!(state.cursor.state().is_hovering);
        assert_eq!(
            state.hovered_element(),
            Some(ElementKey::NavItem(SectionId::About))
        );
    }

    #[test]
    fn clicking_card_opens_modal_and_outside_closes_it() {
        let (mut state, now) = state_at(100, 30);
        state.start_at(SectionId::Projects, now);
        let (col, row) = page_cell(&state, ElementKey::ProjectCard(0));
        state.click(col, row, now);
        assert_eq!(state.modal.current().map(|open| open.project), Some(0));

        state.click(0, 0, now);
        assert!(!state.modal.is_open());
    }

    #[test]
    fn covered_nav_does_not_attract() {
        let (mut state, now) = state_at(120, 30);
        state.open_project(0, now);
        let (col, row) = nav_cell(&state, ElementKey::NavItem(SectionId::About));
        state.pointer_moved(col, row, now);
        assert!(!state.cursor.state().is_hovering);
    }

    #[test]
    fn wheel_scrolls_modal_body_not_page() {
        let (mut state, now) = state_at(50, 14);
        state.open_project(0, now);
        let destination = state.scroll.destination();
        for _ in 0..20 {
            state.wheel(WHEEL_STEP, now);
        }
        assert_eq!(state.scroll.destination(), destination);
        let open = state.modal.current().expect("modal open");
        assert_eq!(open.scroll, open.max_scroll);
    }

    #[test]
    fn hidden_crawl_controls_ignore_clicks() {
        let (mut state, now) = state_at(100, 30);
        state.start_at(SectionId::About, now);
        let (col, row) = page_cell(&state, ElementKey::CrawlPause);
        state.click(col, row, now);
        assert!(!state.crawl.is_paused());

        state.tick(now);
        assert!(state.crawl.controls_visible());
        state.click(col, row, now);
        assert!(state.crawl.is_paused());
    }

    #[test]
    fn crawl_speed_button_keeps_progress() {
        let (mut state, now) = state_at(100, 30);
        state.start_at(SectionId::About, now);
        let later = settle(&mut state, now, 1000);
        let progress = state.crawl.progress();
        let (col, row) = page_cell(&state, ElementKey::CrawlSpeed(CrawlSpeed::Triple));
        state.click(col, row, later);
        assert_eq!(state.crawl.speed(), CrawlSpeed::Triple);
        assert_eq!(state.crawl.progress(), progress);
    }

    #[test]
    fn contact_link_shows_target() {
        let (mut state, now) = state_at(100, 30);
        state.start_at(SectionId::Contact, now);
        let (col, row) = page_cell(&state, ElementKey::ContactLink(0));
        state.click(col, row, now);
        let link = &state.content().contacts[0];
        let expected = format!("{}: {}", link.label, link.href);
        assert_eq!(state.status_message(), Some(expected.as_str()));
    }

    #[test]
    fn compose_button_opens_form_and_outside_click_closes() {
        let (mut state, now) = state_at(100, 30);
        state.start_at(SectionId::Contact, now);
        let (col, row) = page_cell(&state, ElementKey::ComposeButton);
        state.click(col, row, now);
        assert!(state.form.is_open());
        assert_eq!(state.form.focus(), Some(FormField::Name));

        state.click(0, 28, now);
        assert!(!state.form.is_open());
    }

    #[test]
    fn help_overlay_swallows_click() {
        let (mut state, now) = state_at(120, 30);
        state.toggle_help();
        let (col, row) = nav_cell(&state, ElementKey::NavItem(SectionId::Skills));
        state.click(col, row, now);
        assert!(!state.help_visible);
        assert_eq!(state.scroll.destination(), 0.0);
    }
}

mod menu {
    use super::*;

    #[test]
    fn opening_compact_menu_chimes_once() {
        let (mut state, now) = state_at(80, 30);
        state.activate(ElementKey::NavMenuToggle, now);
        assert!(state.menu.is_open());
        assert!(state.take_chime());
        assert!(!state.take_chime());

        state.toggle_menu(now);
        assert!(!state.menu.is_open());
        assert!(!state.take_chime());
    }

    #[test]
    fn wide_screen_ignores_menu_toggle() {
        let (mut state, now) = state_at(120, 30);
        state.toggle_menu(now);
        assert!(!state.menu.is_open());
    }

    #[test]
    fn widening_closes_menu() {
        let (mut state, now) = state_at(80, 30);
        state.toggle_menu(now);
        state.resize(Rect::new(0, 0, 120, 30), now);
        assert!(!state.menu.is_open());
    }

    #[test]
    fn menu_item_navigates_and_closes() {
        let (mut state, now) = state_at(80, 30);
        state.toggle_menu(now);
        let spot = state
            .screen()
            .menu()
            .spots
            .into_iter()
            .find(|spot| spot.key == ElementKey::MenuItem(SectionId::Contact))
            .expect("contact item");
        state.click(spot.rect.x + 1, spot.rect.y, now);
        assert!(!state.menu.is_open());
        assert!(state.scroll.destination() > 0.0);
    }
}

mod focus {
    use super::*;

    #[test]
    fn tab_starts_at_logo_and_wraps_backwards() {
        let (mut state, now) = state_at(120, 30);
        state.move_focus(true, now);
        assert_eq!(state.focus, Some(ElementKey::NavLogo));
        state.move_focus(false, now);
        let last = state.layout().hotspots().last().map(|spot| spot.key);
        assert_eq!(state.focus, last);
    }

    #[test]
    fn focusing_offscreen_card_scrolls_it_into_view() {
        let (mut state, now) = state_at(120, 30);
        while state.focus != Some(ElementKey::ProjectCard(0)) {
            state.move_focus(true, now);
        }
        let card = state.layout().hotspot(ElementKey::ProjectCard(0)).expect("card");
        let destination = state.scroll.destination();
        assert!(destination > 0.0);
        assert!(card.rect.row as f64 >= destination + f64::from(NAV_HEIGHT));
    }

    #[test]
    fn enter_on_focused_card_opens_then_closes_modal() {
        let (mut state, now) = state_at(120, 30);
        state.focus = Some(ElementKey::ProjectCard(1));
        state.activate_focused(now);
        assert_eq!(state.modal.current().map(|open| open.project), Some(1));
        state.activate_focused(now);
        assert!(!state.modal.is_open());
    }
}

mod form {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn typing_goes_to_focused_field() {
        let (mut state, now) = state_at(100, 30);
        state.open_form(now);
        state.handle_form_key(key(KeyCode::Char('A')), now);
        state.handle_form_key(key(KeyCode::Char('l')), now);
        state.handle_form_key(key(KeyCode::Tab), now);
        state.handle_form_key(key(KeyCode::Char('q')), now);
        assert_eq!(state.form.value(FormField::Name), "Al");
        assert_eq!(state.form.value(FormField::Email), "q");
        assert!(!state.should_quit);
    }

    #[test]
    fn escape_closes_and_ctrl_c_quits() {
        let (mut state, now) = state_at(100, 30);
        state.open_form(now);
        state.handle_form_key(key(KeyCode::Esc), now);
        assert!(!state.form.is_open());

        state.open_form(now);
        state.handle_form_key(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            now,
        );
        assert!(state.should_quit);
    }
}

mod timers {
    use super::*;

    #[test]
    fn status_message_expires() {
        let (mut state, now) = state_at(100, 30);
        state.set_status("hello", now);
        state.tick(now + Duration::from_secs(1));
        assert_eq!(state.status_message(), Some("hello"));
        state.tick(now + STATUS_MESSAGE_DURATION);
        assert_eq!(state.status_message(), None);
    }

    #[test]
    fn marquee_steps_with_time() {
        let (mut state, now) = state_at(100, 30);
        state.tick(now + MARQUEE_STEP * 3);
        assert_eq!(state.marquee_offset(), 3);
    }

    #[test]
    fn typewriter_advances_on_tick() {
        let (mut state, now) = state_at(100, 30);
        assert_eq!(state.typewriter.text(), "");
        state.tick(now + Duration::from_millis(200));
        assert!(!state.typewriter.text().is_empty());
    }

    #[test]
    fn teardown_drops_registrations() {
        let (mut state, now) = state_at(100, 30);
        state.tick(now);
        state.teardown();
        assert_eq!(state.cursor.target_count(), 0);
        assert_eq!(state.tracker.next_deadline(), None);
        assert!(!state.cursor.is_mounted());
    }
}
