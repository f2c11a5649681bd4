//! Configuration: config file loading and key bindings.

pub mod keybindings;
pub mod loader;

pub use keybindings::KeyBindings;
pub use loader::{CliOverrides, ConfigError, ResolvedConfig};
