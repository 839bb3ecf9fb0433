//! Implements `odivorce`. Confirm and cancel are handled in
//! `interactions::divorce_handler`.

pub mod run;
pub mod ui;
