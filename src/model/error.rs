//! Error types for termfolio.
//!
//! Errors are `thiserror` enums that compose through `From` so startup code
//! can use `?` end to end.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned from `main`
//!   - [`ContentError`] - Portfolio content file failures
//!   - [`ConfigError`](crate::config::loader::ConfigError) - Config file failures
//!   - [`LoggingError`](crate::logging::LoggingError) - Tracing setup failures
//!   - `std::io::Error` - Terminal failures
//!
//! Interaction-layer failures never surface here: scrolling to a missing
//! element, a section that cannot be measured or a bell that cannot ring
//! are absorbed where they happen.

use crate::config::loader::ConfigError;
use crate::logging::LoggingError;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
///
/// All of these are fatal: the terminal is restored and the message is
/// printed to stderr.
#[derive(Debug, Error)]
pub enum AppError {
    /// Portfolio content could not be loaded or is invalid.
    #[error("Failed to load content: {0}")]
    Content(#[from] ContentError),

    /// Configuration file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Logging could not be initialised.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Terminal or TUI rendering error.
    ///
    /// Raised by crossterm/ratatui on setup, drawing or event polling.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors loading a portfolio content file.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The content file could not be read.
    #[error("Failed to read content file {path}: {source}")]
    Read {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file extension is neither `.toml` nor `.json`.
    #[error("Unsupported content format for {path} (expected .toml or .json)")]
    UnsupportedFormat {
        /// File with the unrecognised extension.
        path: PathBuf,
    },

    /// The file is not valid TOML or JSON, or does not match the content shape.
    ///
    /// `reason` is the deserializer's message; the deserializer error itself
    /// is not carried so the variant stays format-agnostic.
    #[error("Invalid content in {origin}: {reason}")]
    Parse {
        /// File path, or `built-in` for the embedded content.
        origin: String,
        /// Deserializer message.
        reason: String,
    },

    /// The content parsed but breaks a rule the page relies on.
    #[error("Invalid content: {0}")]
    Invalid(String),
}
