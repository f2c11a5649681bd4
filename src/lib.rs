//! termfolio
//!
//! A single-page developer portfolio rendered in the terminal. The page
//! scrolls smoothly between sections, tracks which section is active while
//! you read, and pulls a magnetic cursor indicator towards interactive
//! elements under the mouse.
//!
//! Pure state lives in [`interaction`], [`model`], [`state`] and
//! [`view_state`]; [`view`] owns the terminal.

pub mod config;
pub mod interaction;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;
pub mod view_state;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
