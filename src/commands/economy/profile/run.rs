use super::ui::create_profile_embed;
use crate::AppState;
use crate::commands::reply_embed;
use crate::database::store::AccountStore;
use crate::error::BotResult;
use chrono::Utc;
use serenity::model::channel::Message;
use serenity::prelude::*;

pub async fn run_prefix(ctx: &Context, msg: &Message, _args: Vec<&str>) -> BotResult {
    let app_state = AppState::from_ctx(ctx).await?;
    let account = app_state.store.get_or_create(msg.author.id).await?;
    let embed = create_profile_embed(&msg.author, &account, Utc::now());
    reply_embed(ctx, msg, embed).await
}
