//! Internal test modules - whitebox tests with crate access
//!
//! Acceptance tests drive a `TuiApp<TestBackend>` through the harness with a
//! virtual clock and assert on both state and rendered output.

mod acceptance_overlays;
