//! Handles embed creation for the `profile` command.

use crate::commands::economy::core::item;
use crate::constants::{COLOR_INFO, format_money};
use crate::database::models::Account;
use crate::services::relationship::couple_view;
use crate::ui::style::money;
use chrono::{DateTime, Utc};
use serenity::builder::CreateEmbed;
use serenity::model::user::User;
use serenity::prelude::Mentionable;

pub fn create_profile_embed(user: &User, account: &Account, now: DateTime<Utc>) -> CreateEmbed {
    let status = match couple_view(account, now) {
        Some(view) => format!(
            "Married to {}\n🗓️ Wedding date: {}\n💞 Together for {} days",
            view.partner.mention(),
            view.since.format("%d/%m/%Y"),
            view.days_together
        ),
        None => "Single".to_string(),
    };

    let rings = item::held_rings(&account.inventory);
    let ring_display = if rings.is_empty() {
        "No rings yet. Visit the `shop`!".to_string()
    } else {
        rings
            .iter()
            .map(|ring| format!("- {}: `{}`", ring, account.count_of(ring.id)))
            .collect::<Vec<_>>()
            .join("\n")
    };

    CreateEmbed::new()
        .title(format!("👤 {}'s Profile", user.name))
        .thumbnail(user.face())
        .color(COLOR_INFO)
        .field("💰 Balance", money(account.balance), true)
        .field("❤️ Affection", format_money(account.affection), true)
        .field("💍 Status", status, false)
        .field("🎒 Rings", ring_display, false)
}
