//! Implements the `daily` command.

pub mod run;
pub mod ui;
