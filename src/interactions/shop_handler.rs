//! Handles the shop's ring select menu.

use super::util::{reply_ephemeral, reply_public, selected_value};
use crate::AppState;
use crate::commands::economy::shop::ui::create_purchase_embed;
use crate::error::BotResult;
use crate::services::economy::purchase;
use serenity::model::application::ComponentInteraction;
use serenity::prelude::Context;
use std::sync::Arc;

pub async fn handle(
    ctx: &Context,
    component: &ComponentInteraction,
    app_state: Arc<AppState>,
) -> BotResult {
    let Some(item_id) = selected_value(component) else {
        return Ok(());
    };

    let outcome = purchase(&app_state.store, component.user.id, item_id).await?;
    let (embed, private) = create_purchase_embed(component.user.id, &outcome);
    if private {
        reply_ephemeral(ctx, component, embed).await?;
    } else {
        reply_public(ctx, component, embed).await?;
    }
    Ok(())
}
