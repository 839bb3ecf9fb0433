//! Handles the divorce confirmation prompt.

use super::ids::InteractionId;
use super::util::{reply_ephemeral, replace_prompt};
use crate::AppState;
use crate::commands::relationship::divorce::ui::{
    create_divorced_embed, create_reconciled_embed, divorce_error_embed,
};
use crate::error::BotResult;
use crate::services::relationship::{DivorceError, confirm_divorce};
use serenity::model::application::ComponentInteraction;
use serenity::prelude::Context;
use std::sync::Arc;

pub async fn handle(
    ctx: &Context,
    component: &ComponentInteraction,
    app_state: Arc<AppState>,
    id: InteractionId,
) -> BotResult {
    match id {
        InteractionId::DivorceConfirm { initiator, partner } => {
            let outcome =
                confirm_divorce(&app_state.store, component.user.id, initiator, partner).await?;
            match outcome {
                Ok(()) => {
                    replace_prompt(
                        ctx,
                        component,
                        "",
                        create_divorced_embed(initiator, partner),
                        "divorce.confirm",
                    )
                    .await?;
                }
                Err(DivorceError::NotInitiator) => {
                    reply_ephemeral(ctx, component, divorce_error_embed(DivorceError::NotInitiator))
                        .await?;
                }
                Err(e) => {
                    replace_prompt(
                        ctx,
                        component,
                        "",
                        divorce_error_embed(e),
                        "divorce.confirm",
                    )
                    .await?;
                }
            }
        }
        InteractionId::DivorceCancel { initiator, partner } => {
            replace_prompt(
                ctx,
                component,
                "",
                create_reconciled_embed(initiator, partner),
                "divorce.cancel",
            )
            .await?;
        }
        _ => {}
    }
    Ok(())
}
