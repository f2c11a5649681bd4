//! Acceptance tests: help overlay, project modal and compose form.

use crate::model::SectionId;
use crate::state::{FormFailure, FormField, SubmitStatus};
use crate::test_harness::AcceptanceTestHarness;
use crate::view_state::ElementKey;
use crossterm::event::{KeyCode, KeyModifiers};
use std::time::Duration;

/// Screen cell inside a page hotspot at the current scroll offset.
fn page_cell(harness: &AcceptanceTestHarness, key: ElementKey) -> (u16, u16) {
    let state = harness.state();
    let spot = state.layout().hotspot(key).expect("hotspot");
    let row = spot.rect.row - state.scroll_offset() + usize::from(state.screen().page.y);
    (spot.rect.col + 1, u16::try_from(row).expect("on screen"))
}

fn jump_to(harness: &mut AcceptanceTestHarness, id: SectionId) {
    let now = harness.now();
    harness.state_mut().start_at(id, now);
}

mod help {
    use super::*;

    #[test]
    fn question_mark_shows_and_hides_overlay() {
        let mut harness = AcceptanceTestHarness::new().expect("harness");
        assert!(!harness.state().help_visible);

        harness.send_key(KeyCode::Char('?'));
        let screen = harness.render_to_string();
        assert!(screen.contains("Keyboard Shortcuts"), "got:\n{screen}");
        assert!(screen.contains("Press Esc or ? to close"));
        assert!(screen.contains("Jump to section"));

        harness.send_key(KeyCode::Char('?'));
        assert!(!harness.state().help_visible);
        assert!(!harness.render_to_string().contains("Keyboard Shortcuts"));
    }

    #[test]
    fn escape_closes_help_and_keys_underneath_are_ignored() {
        let mut harness = AcceptanceTestHarness::new().expect("harness");
        harness.send_key(KeyCode::Char('?'));
        harness.send_key(KeyCode::Char('5'));
        assert_eq!(harness.state().scroll.destination(), 0.0);

        harness.send_key(KeyCode::Esc);
        assert!(!harness.state().help_visible);
        assert!(harness.is_running());
    }

    #[test]
    fn quit_still_works_under_help() {
        let mut harness = AcceptanceTestHarness::new().expect("harness");
        harness.send_key(KeyCode::Char('?'));
        assert!(harness.send_key(KeyCode::Char('q')));
        assert!(!harness.is_running());
    }
}

mod project_modal {
    use super::*;

    #[test]
    fn clicking_card_opens_detail_modal() {
        let mut harness = AcceptanceTestHarness::new().expect("harness");
        jump_to(&mut harness, SectionId::Projects);
        let (col, row) = page_cell(&harness, ElementKey::ProjectCard(0));
        harness.click_at(col, row);

        assert_eq!(
            harness.state().modal.current().map(|open| open.project),
            Some(0)
        );
        let project = harness.state().content().projects[0].clone();
        let screen = harness.render_to_string();
        assert!(screen.contains(&project.title), "got:\n{screen}");
        assert!(screen.contains(&project.role));
        assert!(screen.contains("[✕]"));
    }

    #[test]
    fn wheel_inside_modal_never_scrolls_page() {
        let mut harness = AcceptanceTestHarness::with_size(70, 16).expect("harness");
        jump_to(&mut harness, SectionId::Projects);
        let (col, row) = page_cell(&harness, ElementKey::ProjectCard(0));
        harness.click_at(col, row);
        assert!(harness.state().modal.is_open());

        let page_before = harness.state().scroll.destination();
        for _ in 0..30 {
            harness.wheel(true, 35, 8);
        }
        harness.advance(Duration::from_millis(500));
        assert_eq!(harness.state().scroll.destination(), page_before);
        let open = harness.state().modal.current().expect("modal open");
        assert_eq!(open.scroll, open.max_scroll);

        for _ in 0..30 {
            harness.wheel(false, 35, 8);
        }
        assert_eq!(harness.state().modal.current().map(|o| o.scroll), Some(0));
        assert_eq!(harness.state().scroll.destination(), page_before);
    }

    #[test]
    fn escape_and_close_button_dismiss_modal() {
        let mut harness = AcceptanceTestHarness::new().expect("harness");
        let now = harness.now();
        harness.state_mut().open_project(1, now);
        harness.send_key(KeyCode::Esc);
        assert!(!harness.state().modal.is_open());

        harness.state_mut().open_project(1, now);
        let close = harness.state().screen().modal().close;
        harness.click_at(close.x + 1, close.y);
        assert!(!harness.state().modal.is_open());
    }

    #[test]
    fn keyboard_focus_opens_card_with_enter() {
        let mut harness = AcceptanceTestHarness::new().expect("harness");
        let card = ElementKey::ProjectCard(0);
        let mut presses = 0;
        while harness.state().focus != Some(card) {
            harness.send_key(KeyCode::Tab);
            presses += 1;
            assert!(presses < 64, "card never received focus");
        }
        harness.settle();
        harness.send_key(KeyCode::Enter);
        assert!(harness.state().modal.is_open());

        // Focus moves are ignored while the modal is up
        harness.send_key(KeyCode::Tab);
        assert_eq!(harness.state().focus, Some(card));
    }
}

mod compose_form {
    use super::*;

    fn fill(harness: &mut AcceptanceTestHarness, name: &str, email: &str, message: &str) {
        harness.type_text(name);
        harness.send_key(KeyCode::Tab);
        harness.type_text(email);
        harness.send_key(KeyCode::Tab);
        harness.type_text(message);
    }

    #[test]
    fn valid_message_goes_through_sending_to_sent() {
        let mut harness = AcceptanceTestHarness::new().expect("harness");
        harness.send_key(KeyCode::Char('c'));
        assert!(harness.state().form.is_open());
        fill(&mut harness, "Ada", "ada@example.com", "Let's build something");

        harness.send_key(KeyCode::Enter);
        assert!(harness.state().form.is_sending());
        assert!(harness.render_to_string().contains("Sending…"));

        harness.advance(Duration::from_millis(1600));
        assert!(matches!(
            harness.state().form.status(),
            SubmitStatus::Sent { .. }
        ));
        assert!(harness.render_to_string().contains("Message sent ✓"));
        assert_eq!(harness.state().form.value(FormField::Name), "");

        harness.advance(Duration::from_secs(3));
        assert_eq!(harness.state().form.status(), SubmitStatus::Idle);
    }

    #[test]
    fn invalid_email_fails_without_sending() {
        let mut harness = AcceptanceTestHarness::new().expect("harness");
        harness.send_key(KeyCode::Char('c'));
        fill(&mut harness, "Ada", "not-an-email", "Hello");
        harness.send_key(KeyCode::Enter);

        assert!(matches!(
            harness.state().form.status(),
            SubmitStatus::Failed {
                reason: FormFailure::InvalidEmail,
                ..
            }
        ));
        assert!(harness
            .render_to_string()
            .contains(FormFailure::InvalidEmail.message()));
    }

    #[test]
    fn configured_failure_reports_delivery_error() {
        let config = crate::config::ResolvedConfig {
            simulate_send_failure: true,
            ..Default::default()
        };
        let mut harness = AcceptanceTestHarness::with_config(config, 100, 30).expect("harness");
        harness.send_key(KeyCode::Char('c'));
        fill(&mut harness, "Ada", "ada@example.com", "Hello");
        harness.send_key(KeyCode::Enter);
        harness.advance(Duration::from_millis(1600));

        assert!(matches!(
            harness.state().form.status(),
            SubmitStatus::Failed {
                reason: FormFailure::Delivery,
                ..
            }
        ));
        // Fields are kept so the visitor can retry
        assert_eq!(harness.state().form.value(FormField::Name), "Ada");
    }

    #[test]
    fn escape_closes_form_and_ctrl_c_still_quits() {
        let mut harness = AcceptanceTestHarness::new().expect("harness");
        harness.send_key(KeyCode::Char('c'));
        harness.type_text("q?");
        assert!(harness.is_running());
        assert_eq!(harness.state().form.value(FormField::Name), "q?");

        harness.send_key(KeyCode::Esc);
        assert!(!harness.state().form.is_open());

        harness.send_key(KeyCode::Char('c'));
        assert!(harness.send_key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL));
    }
}

mod contact_links {
    use super::*;

    #[test]
    fn clicking_link_shows_target_in_status_bar() {
        let mut harness = AcceptanceTestHarness::with_size(140, 30).expect("harness");
        jump_to(&mut harness, SectionId::Contact);
        let (col, row) = page_cell(&harness, ElementKey::ContactLink(0));
        harness.click_at(col, row);

        let link = harness.state().content().contacts[0].clone();
        let status = harness.row_text(29);
        assert!(status.contains(&link.href), "got {status:?}");

        harness.advance(Duration::from_secs(5));
        assert!(harness.row_text(29).ends_with("? help · q quit"));
    }
}
