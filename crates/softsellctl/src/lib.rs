//! Softsellctl library - exposes modules for integration tests.

pub mod commands;
pub mod display;
pub mod repl;
pub mod spinner;
