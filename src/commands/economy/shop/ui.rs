//! Handles all UI and embed creation for the `shop` command.

use crate::commands::economy::core::item;
use crate::constants::COLOR_INFO;
use crate::interactions::ids::InteractionId;
use crate::services::economy::PurchaseOutcome;
use crate::ui::style::{error_embed, money, success_embed};
use serenity::builder::{
    CreateActionRow, CreateEmbed, CreateEmbedFooter, CreateSelectMenu, CreateSelectMenuKind,
    CreateSelectMenuOption,
};
use serenity::model::id::UserId;
use serenity::prelude::Mentionable;

pub fn create_shop_view(balance: i64) -> (CreateEmbed, Vec<CreateActionRow>) {
    let item_list = item::list()
        .iter()
        .map(|ring| format!("**{}** - **💰{}**", ring, money(ring.price)))
        .collect::<Vec<_>>()
        .join("\n");

    let embed = CreateEmbed::new()
        .title("💍 Wedding Ring Shop 💍")
        .description(format!(
            "💰 Your balance: **{}**\n\n{}",
            money(balance),
            item_list
        ))
        .footer(CreateEmbedFooter::new("Pick a ring below to buy it."))
        .color(COLOR_INFO);

    let options = item::list()
        .iter()
        .map(|ring| {
            let mut option = CreateSelectMenuOption::new(ring.display_name, ring.id)
                .description(format!("Price: {}", money(ring.price)));
            if let Some(emoji) = ring.emoji.chars().next() {
                option = option.emoji(emoji);
            }
            option
        })
        .collect();
    let menu = CreateSelectMenu::new(
        InteractionId::ShopBuy.to_string(),
        CreateSelectMenuKind::String { options },
    )
    .placeholder("Choose a ring...");

    (embed, vec![CreateActionRow::SelectMenu(menu)])
}

/// Returns the reply embed and whether it should only be shown to the buyer.
pub fn create_purchase_embed(buyer: UserId, outcome: &PurchaseOutcome) -> (CreateEmbed, bool) {
    match outcome {
        PurchaseOutcome::Purchased { item, balance } => (
            success_embed(
                "🎊 Purchase Successful!",
                format!(
                    "{} bought **{}**!\n💰 Remaining balance: **{}**",
                    buyer.mention(),
                    item,
                    money(*balance)
                ),
            ),
            false,
        ),
        PurchaseOutcome::InsufficientFunds { item, balance } => (
            error_embed(
                "Not Enough Money",
                format!(
                    "You need **{}** for {} but only have **{}**.",
                    money(item.price),
                    item,
                    money(*balance)
                ),
            ),
            true,
        ),
        PurchaseOutcome::UnknownItem => (
            error_embed("Shop Error", "That item is no longer sold here."),
            true,
        ),
    }
}
