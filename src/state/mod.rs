//! UI state machine (pure).
//!
//! All state transitions take the current `Instant` and are testable
//! without a terminal.

pub mod app_state;
pub mod contact_form;
pub mod magnets;
pub mod mouse_handler;
pub mod nav_menu;
pub mod project_modal;
pub mod scroll_handler;

// Re-export for convenience
pub use app_state::{AppState, StatusMessage};
pub use contact_form::{ContactForm, FormField, FormFailure, SubmitStatus};
pub use magnets::MagnetRegistry;
pub use mouse_handler::handle_mouse_event;
pub use nav_menu::NavMenu;
pub use project_modal::{OpenModal, ProjectModal};
pub use scroll_handler::handle_scroll_action;
