//! Implements `marry`. The prompt answers (ring choice, accept, reject) are
//! handled in `interactions::marry_handler`.

pub mod run;
pub mod ui;
