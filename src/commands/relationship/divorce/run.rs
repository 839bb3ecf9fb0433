use super::ui::create_divorce_prompt;
use crate::AppState;
use crate::commands::reply_embed;
use crate::error::BotResult;
use crate::services::relationship::begin_divorce;
use crate::ui::style::error_embed;
use serenity::builder::CreateMessage;
use serenity::model::channel::Message;
use serenity::prelude::*;

pub async fn run_prefix(ctx: &Context, msg: &Message, _args: Vec<&str>) -> BotResult {
    let app_state = AppState::from_ctx(ctx).await?;
    let initiator = msg.author.id;

    let Ok(partner) = begin_divorce(&app_state.store, initiator).await? else {
        return reply_embed(
            ctx,
            msg,
            error_embed("Divorce", "You are single, there is nobody to divorce!"),
        )
        .await;
    };

    let (content, embed, components) = create_divorce_prompt(initiator, partner);
    let builder = CreateMessage::new()
        .content(content)
        .embed(embed)
        .components(components)
        .reference_message(msg);
    msg.channel_id.send_message(&ctx.http, builder).await?;
    Ok(())
}
