//! Implements the `shop` command. Purchases arrive through the select menu
//! and are handled in `interactions::shop_handler`.

pub mod run;
pub mod ui;
