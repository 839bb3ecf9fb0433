//! Handles the proposal prompt: ring choice, accept and reject.

use super::ids::InteractionId;
use super::util::{reply_ephemeral, replace_prompt, selected_value};
use crate::AppState;
use crate::commands::economy::core::item::ShopItem;
use crate::commands::relationship::marry::ui::{
    create_marriage_embed, create_proposal_prompt, create_rejection_embed, proposal_error_embed,
};
use crate::error::BotResult;
use crate::services::relationship::{self, ProposalError};
use crate::ui::style::error_embed;
use chrono::Utc;
use serenity::builder::{CreateInteractionResponse, CreateInteractionResponseMessage};
use serenity::model::application::ComponentInteraction;
use serenity::model::id::UserId;
use serenity::prelude::Context;
use std::sync::Arc;

pub async fn handle(
    ctx: &Context,
    component: &ComponentInteraction,
    app_state: Arc<AppState>,
    id: InteractionId,
) -> BotResult {
    match id {
        InteractionId::RingSelect { proposer, target } => {
            choose_ring(ctx, component, &app_state, proposer, target).await
        }
        InteractionId::ProposalAccept {
            proposer,
            target,
            item,
        } => accept(ctx, component, &app_state, proposer, target, item).await,
        InteractionId::ProposalReject { proposer, target } => {
            let rejection = relationship::reject(component.user.id, proposer, target);
            tracing::debug!(target: "relationship", actor = component.user.id.get(), ?rejection, "proposal closed");
            replace_prompt(
                ctx,
                component,
                "",
                create_rejection_embed(rejection, proposer, target),
                "marry.reject",
            )
            .await?;
            Ok(())
        }
        _ => Ok(()),
    }
}

async fn choose_ring(
    ctx: &Context,
    component: &ComponentInteraction,
    app_state: &AppState,
    proposer: UserId,
    target: UserId,
) -> BotResult {
    let Some(item_id) = selected_value(component) else {
        return Ok(());
    };
    let chosen = relationship::choose_ring(
        &app_state.store,
        component.user.id,
        proposer,
        target,
        item_id,
    )
    .await?;

    match chosen {
        Ok(ring) => {
            let (content, embed, components) = create_proposal_prompt(proposer, target, ring);
            let message = CreateInteractionResponseMessage::new()
                .content(content)
                .embed(embed)
                .components(components);
            component
                .create_response(&ctx.http, CreateInteractionResponse::UpdateMessage(message))
                .await?;
        }
        Err(ProposalError::WrongActor) => {
            reply_ephemeral(
                ctx,
                component,
                error_embed("Not Your Proposal", "Only the proposer can choose the ring."),
            )
            .await?;
        }
        // The proposer may still pick another ring.
        Err(e @ (ProposalError::RingGone | ProposalError::UnknownRing)) => {
            reply_ephemeral(ctx, component, proposal_error_embed(e, &app_state.prefix)).await?;
        }
        Err(e) => {
            replace_prompt(
                ctx,
                component,
                "",
                proposal_error_embed(e, &app_state.prefix),
                "marry.ring",
            )
            .await?;
        }
    }
    Ok(())
}

async fn accept(
    ctx: &Context,
    component: &ComponentInteraction,
    app_state: &AppState,
    proposer: UserId,
    target: UserId,
    ring: &'static ShopItem,
) -> BotResult {
    let outcome = relationship::accept(
        &app_state.store,
        component.user.id,
        proposer,
        target,
        ring,
        Utc::now(),
    )
    .await?;

    match outcome {
        Ok(since) => {
            replace_prompt(
                ctx,
                component,
                "",
                create_marriage_embed(proposer, target, ring, since),
                "marry.accept",
            )
            .await?;
        }
        Err(ProposalError::WrongActor) => {
            reply_ephemeral(
                ctx,
                component,
                proposal_error_embed(ProposalError::WrongActor, &app_state.prefix),
            )
            .await?;
        }
        Err(e) => {
            replace_prompt(
                ctx,
                component,
                "",
                proposal_error_embed(e, &app_state.prefix),
                "marry.accept",
            )
            .await?;
        }
    }
    Ok(())
}
