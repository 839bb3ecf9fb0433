//! `oaddcash <amount> [@user]`: credits currency. Restricted to configured admins.

use crate::AppState;
use crate::commands::reply_embed;
use crate::error::BotResult;
use crate::services::economy::{AddCashOutcome, add_cash};
use crate::ui::style::{error_embed, money, success_embed};
use serenity::builder::CreateEmbed;
use serenity::model::channel::Message;
use serenity::prelude::*;

/// Parses a positive amount. Thousands separators (`,` or `_`) are allowed.
pub fn parse_amount(raw: &str) -> Option<i64> {
    let cleaned: String = raw.chars().filter(|c| *c != ',' && *c != '_').collect();
    if cleaned.is_empty() || !cleaned.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    cleaned.parse::<i64>().ok().filter(|a| *a > 0)
}

pub async fn run_prefix(ctx: &Context, msg: &Message, args: Vec<&str>) -> BotResult {
    let app_state = AppState::from_ctx(ctx).await?;
    let amount = args.first().and_then(|raw| parse_amount(raw));
    let target = msg.mentions.first().map_or(msg.author.id, |u| u.id);

    let outcome = add_cash(
        &app_state.store,
        &app_state.admin_ids,
        msg.author.id,
        target,
        amount,
    )
    .await?;
    reply_embed(ctx, msg, create_addcash_embed(&outcome, &app_state.prefix)).await
}

fn create_addcash_embed(outcome: &AddCashOutcome, prefix: &str) -> CreateEmbed {
    match outcome {
        AddCashOutcome::NotAuthorized => error_embed(
            "Not Allowed",
            "Only bot administrators can use this command.",
        ),
        AddCashOutcome::InvalidAmount => error_embed(
            "Usage",
            format!("`{prefix}oaddcash <amount> [@user]`\nExample: `{prefix}oaddcash 1000000 @user`"),
        ),
        AddCashOutcome::Credited {
            target,
            amount,
            balance,
        } => success_embed(
            "✅ Cash Added",
            format!(
                "Credited **{}** to {}.\n💰 New balance: **{}**",
                money(*amount),
                target.mention(),
                money(*balance)
            ),
        ),
    }
}
