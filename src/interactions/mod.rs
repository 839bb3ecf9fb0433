//! This module acts as a central router for all component interactions.
//!
//! The main `handler.rs` file parses the custom_id into an [`ids::InteractionId`]
//! and delegates here; each family (shop, marry, divorce) has its own handler.

pub mod divorce_handler;
pub mod ids;
pub mod marry_handler;
pub mod shop_handler;
pub mod util;

use crate::AppState;
use crate::error::BotResult;
use ids::InteractionId;
use serenity::model::application::ComponentInteraction;
use serenity::prelude::Context;
use std::sync::Arc;

pub async fn route(
    ctx: &Context,
    component: &ComponentInteraction,
    app_state: Arc<AppState>,
    id: InteractionId,
) -> BotResult {
    match id {
        InteractionId::ShopBuy => shop_handler::handle(ctx, component, app_state).await,
        InteractionId::RingSelect { .. }
        | InteractionId::ProposalAccept { .. }
        | InteractionId::ProposalReject { .. } => {
            marry_handler::handle(ctx, component, app_state, id).await
        }
        InteractionId::DivorceConfirm { .. } | InteractionId::DivorceCancel { .. } => {
            divorce_handler::handle(ctx, component, app_state, id).await
        }
    }
}
