//! formwire - form state, schema validation and per-field errors
//!
//! Inputs register against dotted field paths with a [`state::FormController`],
//! submissions are validated by a [`validation::Schema`] and failures are
//! mapped back onto the offending fields. The binary wraps this in a
//! Ratatui signup screen.

pub mod app;
pub mod config;
pub mod loader;
pub mod state;
pub mod submit;
pub mod ui;
pub mod validation;
