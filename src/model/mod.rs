//! Domain model types (pure).

pub mod content;
pub mod error;
pub mod key_action;
pub mod section;
pub mod theme;

pub use content::{ContactLink, PortfolioContent, Project, Skill};
pub use error::{AppError, ContentError};
pub use key_action::KeyAction;
pub use section::{SectionId, UnknownSection};
pub use theme::Theme;
