//! `olove`: spend time together. Both partners gain affection, once per hour
//! per caller.

use crate::AppState;
use crate::commands::reply_embed;
use crate::constants::{AFFECTION_GRANT, COLOR_LOVE, format_money};
use crate::error::BotResult;
use crate::services::relationship::{AffectionError, AffectionGranted, grant_affection};
use crate::ui::style::error_embed;
use chrono::Utc;
use serenity::builder::CreateEmbed;
use serenity::model::channel::Message;
use serenity::prelude::*;

pub async fn run_prefix(ctx: &Context, msg: &Message, _args: Vec<&str>) -> BotResult {
    let app_state = AppState::from_ctx(ctx).await?;
    let outcome = grant_affection(&app_state.store, msg.author.id, Utc::now()).await?;
    reply_embed(ctx, msg, create_love_embed(outcome, &app_state.prefix)).await
}

fn create_love_embed(outcome: Result<AffectionGranted, AffectionError>, prefix: &str) -> CreateEmbed {
    match outcome {
        Ok(AffectionGranted { partner, affection }) => CreateEmbed::new()
            .title("💖 Quality Time")
            .description(format!(
                "You and {} spent some time together! (+{} affection)\n✨ Affection: **{}**",
                partner.mention(),
                AFFECTION_GRANT,
                format_money(affection)
            ))
            .color(COLOR_LOVE),
        Err(AffectionError::NotMarried) => error_embed(
            "Not Married",
            format!("You need to be married to use this command! Try `{prefix}marry`."),
        ),
        Err(AffectionError::OnCooldown(active)) => error_embed(
            "⏳ Take a Break",
            format!("You need some rest! Come back in {active}."),
        ),
    }
}
