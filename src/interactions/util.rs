//! Shared interaction response helpers.
use serenity::all::ComponentInteractionDataKind;
use serenity::builder::{CreateEmbed, CreateInteractionResponse, CreateInteractionResponseMessage};
use serenity::model::application::ComponentInteraction;
use serenity::prelude::Context;

/// The first value picked in a string select menu.
pub fn selected_value(c: &ComponentInteraction) -> Option<&str> {
    match &c.data.kind {
        ComponentInteractionDataKind::StringSelect { values } => {
            values.first().map(String::as_str)
        }
        _ => None,
    }
}

/// Answers only the presser. The prompt message is left untouched.
pub async fn reply_ephemeral(
    ctx: &Context,
    c: &ComponentInteraction,
    embed: CreateEmbed,
) -> serenity::Result<()> {
    let message = CreateInteractionResponseMessage::new()
        .embed(embed)
        .ephemeral(true);
    c.create_response(&ctx.http, CreateInteractionResponse::Message(message))
        .await
}

/// Posts a new message in the channel as the interaction response.
pub async fn reply_public(
    ctx: &Context,
    c: &ComponentInteraction,
    embed: CreateEmbed,
) -> serenity::Result<()> {
    let message = CreateInteractionResponseMessage::new().embed(embed);
    c.create_response(&ctx.http, CreateInteractionResponse::Message(message))
        .await
}

/// Replaces the prompt in place and strips its components so it cannot be
/// answered twice.
pub async fn replace_prompt(
    ctx: &Context,
    c: &ComponentInteraction,
    content: impl Into<String>,
    embed: CreateEmbed,
    tag: &str,
) -> serenity::Result<()> {
    let message = CreateInteractionResponseMessage::new()
        .content(content)
        .embed(embed)
        .components(vec![]);
    let result = c
        .create_response(&ctx.http, CreateInteractionResponse::UpdateMessage(message))
        .await;
    if let Err(e) = &result {
        tracing::error!(target: "ui.update", cid = %c.data.custom_id, tag = %tag, error = ?e, "update message failed");
    }
    result
}
