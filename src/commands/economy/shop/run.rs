//! Handles the command logic for `shop`.

use super::ui::create_shop_view;
use crate::AppState;
use crate::database::store::AccountStore;
use crate::error::BotResult;
use serenity::builder::CreateMessage;
use serenity::model::channel::Message;
use serenity::prelude::*;

pub async fn run_prefix(ctx: &Context, msg: &Message, _args: Vec<&str>) -> BotResult {
    let app_state = AppState::from_ctx(ctx).await?;
    let account = app_state.store.get_or_create(msg.author.id).await?;

    let (embed, components) = create_shop_view(account.balance);
    let builder = CreateMessage::new()
        .embed(embed)
        .components(components)
        .reference_message(msg);
    msg.channel_id.send_message(&ctx.http, builder).await?;
    Ok(())
}
