//! Shared presentation helpers used by commands and interaction handlers.

pub mod buttons;
pub mod style;
