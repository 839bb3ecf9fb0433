use super::ui::{create_proposal_prompt, create_ring_picker, proposal_error_embed};
use crate::AppState;
use crate::commands::reply_embed;
use crate::error::BotResult;
use crate::services::relationship::{ProposalStart, propose};
use crate::ui::style::error_embed;
use serenity::builder::CreateMessage;
use serenity::model::channel::Message;
use serenity::prelude::*;

pub async fn run_prefix(ctx: &Context, msg: &Message, _args: Vec<&str>) -> BotResult {
    let app_state = AppState::from_ctx(ctx).await?;
    let prefix = &app_state.prefix;

    let Some(target) = msg.mentions.first() else {
        let usage = format!("`{prefix}marry @user`\nExample: `{prefix}marry @someone`");
        return reply_embed(ctx, msg, error_embed("Usage", usage)).await;
    };
    if target.bot {
        return reply_embed(
            ctx,
            msg,
            error_embed("Proposal Failed", "Bots cannot get married."),
        )
        .await;
    }

    let proposer = msg.author.id;
    let builder = match propose(&app_state.store, proposer, target.id).await? {
        Err(e) => return reply_embed(ctx, msg, proposal_error_embed(e, prefix)).await,
        Ok(ProposalStart::Ready(ring)) => {
            let (content, embed, components) = create_proposal_prompt(proposer, target.id, ring);
            CreateMessage::new()
                .content(content)
                .embed(embed)
                .components(components)
        }
        Ok(ProposalStart::ChooseRing(rings)) => {
            let (embed, components) = create_ring_picker(proposer, target.id, &rings);
            CreateMessage::new().embed(embed).components(components)
        }
    };
    msg.channel_id
        .send_message(&ctx.http, builder.reference_message(msg))
        .await?;
    Ok(())
}
