//! Central embed constructors so every reply uses the same colours.
use crate::constants::{COLOR_ERROR, COLOR_SUCCESS};
use serenity::builder::CreateEmbed;

pub const EMOJI_HEART: &str = "💖";
pub const EMOJI_BROKEN_HEART: &str = "💔";
pub const EMOJI_CALENDAR: &str = "🗓️";

/// Alert-styled embed for rejected commands.
pub fn error_embed<T: Into<String>, U: Into<String>>(title: T, description: U) -> CreateEmbed {
    CreateEmbed::new()
        .title(title)
        .description(description)
        .color(COLOR_ERROR)
}

pub fn success_embed<T: Into<String>, U: Into<String>>(title: T, description: U) -> CreateEmbed {
    CreateEmbed::new()
        .title(title)
        .description(description)
        .color(COLOR_SUCCESS)
}

/// `12,345$` style rendering for balances and prices.
pub fn money(amount: i64) -> String {
    format!("{}$", crate::constants::format_money(amount))
}
