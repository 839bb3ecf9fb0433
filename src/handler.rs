use crate::AppState;
use crate::commands::{self, Command, economy, relationship};
use crate::error::BotError;
use crate::interactions::{self, ids::InteractionId, util::reply_ephemeral};
use crate::ui::style::error_embed;
use serenity::async_trait;
use serenity::client::Context;
use serenity::model::application::Interaction;
use serenity::model::{channel::Message, gateway::Ready, id::GuildId};
use serenity::prelude::EventHandler;
use tracing::{debug, error, info};

const GENERIC_FAILURE: &str = "❌ Something went wrong while processing that command!";

pub struct Handler {
    /// When set, messages from other guilds are ignored.
    pub allowed_guild_id: Option<GuildId>,
}

impl Handler {
    fn accepts(&self, msg: &Message) -> bool {
        if msg.author.bot {
            return false;
        }
        match self.allowed_guild_id {
            Some(guild) => msg.guild_id == Some(guild),
            None => true,
        }
    }
}

async fn dispatch(
    ctx: &Context,
    msg: &Message,
    command: Command,
    args: Vec<&str>,
) -> Result<(), BotError> {
    match command {
        Command::Test => commands::test::run_prefix(ctx, msg).await,
        Command::Profile => economy::profile_prefix(ctx, msg, args).await,
        Command::Daily => economy::daily_prefix(ctx, msg, args).await,
        Command::Shop => economy::shop_prefix(ctx, msg, args).await,
        Command::AddCash => economy::addcash_prefix(ctx, msg, args).await,
        Command::Love => relationship::love_prefix(ctx, msg, args).await,
        Command::Check => relationship::check_prefix(ctx, msg, args).await,
        Command::Divorce => relationship::divorce_prefix(ctx, msg, args).await,
        Command::AddPic => relationship::addpic_prefix(ctx, msg, args).await,
        Command::Marry => relationship::marry_prefix(ctx, msg, args).await,
        Command::Help => commands::help::run_prefix(ctx, msg, args).await,
        Command::Unknown => Ok(()),
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Component(component) = interaction else {
            return;
        };
        let id = match component.data.custom_id.parse::<InteractionId>() {
            Ok(id) => id,
            Err(e) => {
                debug!(target: "interaction", error = %e, "ignoring component");
                return;
            }
        };
        debug!(
            target: "interaction",
            custom_id = %component.data.custom_id,
            user_id = component.user.id.get(),
            "component received"
        );
        let app_state = match AppState::from_ctx(&ctx).await {
            Ok(state) => state,
            Err(e) => {
                error!(target: "interaction", error = %e, "no application state");
                return;
            }
        };
        if let Err(e) = interactions::route(&ctx, &component, app_state, id).await {
            error!(
                target: "interaction",
                custom_id = %component.data.custom_id,
                user_id = component.user.id.get(),
                error = %e,
                "interaction failed"
            );
            // Fails harmlessly if the interaction was already answered.
            reply_ephemeral(&ctx, &component, error_embed("Error", GENERIC_FAILURE))
                .await
                .ok();
        }
    }

    async fn message(&self, ctx: Context, msg: Message) {
        if !self.accepts(&msg) {
            return;
        }
        let app_state = match AppState::from_ctx(&ctx).await {
            Ok(state) => state,
            Err(e) => {
                error!(target: "command", error = %e, "no application state");
                return;
            }
        };
        let Some((command, args)) = commands::parse_command(&msg.content, &app_state.prefix)
        else {
            return;
        };
        if command == Command::Unknown {
            return;
        }
        debug!(target: "command", ?command, user_id = msg.author.id.get(), "dispatch");
        if let Err(e) = dispatch(&ctx, &msg, command, args).await {
            error!(
                target: "command",
                ?command,
                user_id = msg.author.id.get(),
                error = %e,
                "command failed"
            );
            msg.reply(&ctx.http, GENERIC_FAILURE).await.ok();
        }
    }

    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!(target: "gateway", user = %ready.user.name, guilds = ready.guilds.len(), "connected and ready");
    }
}
