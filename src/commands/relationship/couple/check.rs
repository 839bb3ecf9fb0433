use super::ui::create_couple_embed;
use crate::AppState;
use crate::commands::reply_embed;
use crate::database::store::AccountStore;
use crate::error::BotResult;
use crate::services::relationship::couple_view;
use crate::ui::style::error_embed;
use chrono::Utc;
use serenity::model::channel::Message;
use serenity::prelude::*;

pub async fn run_prefix(ctx: &Context, msg: &Message, _args: Vec<&str>) -> BotResult {
    let app_state = AppState::from_ctx(ctx).await?;
    let prefix = &app_state.prefix;
    let account = app_state.store.get_or_create(msg.author.id).await?;

    let embed = match couple_view(&account, Utc::now()) {
        Some(view) => create_couple_embed(&view, prefix),
        None => error_embed(
            "Single",
            format!("You are currently single. Find your other half and use `{prefix}marry`!"),
        ),
    };
    reply_embed(ctx, msg, embed).await
}
