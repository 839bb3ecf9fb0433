use super::ui::create_daily_embed;
use crate::AppState;
use crate::commands::reply_embed;
use crate::error::BotResult;
use crate::services::economy::claim_daily;
use chrono::Utc;
use serenity::model::channel::Message;
use serenity::prelude::*;

pub async fn run_prefix(ctx: &Context, msg: &Message, _args: Vec<&str>) -> BotResult {
    let app_state = AppState::from_ctx(ctx).await?;
    let outcome = claim_daily(&app_state.store, msg.author.id, Utc::now()).await?;
    reply_embed(ctx, msg, create_daily_embed(&outcome)).await
}
