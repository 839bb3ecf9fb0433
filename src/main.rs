use std::sync::Arc;

use marriage_bot::config::Config;
use marriage_bot::database::{init, postgres::PgStore};
use marriage_bot::handler::Handler;
use marriage_bot::model::{AppState, ShardManagerContainer};
use serenity::model::gateway::GatewayIntents;
use serenity::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,marriage_bot=debug")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(target: "startup", error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let pool = match init::connect(&config.database_url, config.database_max_connections).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!(target: "startup", error = %e, "could not connect to the database");
            std::process::exit(1);
        }
    };

    let app_state = Arc::new(AppState {
        store: PgStore::new(pool),
        prefix: config.command_prefix.clone(),
        admin_ids: config.admin_ids.clone(),
    });

    // Message content is needed for text commands; interactions arrive with GUILDS.
    let intents =
        GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::MESSAGE_CONTENT;

    let mut client = match Client::builder(&config.discord_token, intents)
        .event_handler(Handler {
            allowed_guild_id: config.allowed_guild_id,
        })
        .await
    {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(target: "startup", error = ?e, "error creating the Discord client");
            std::process::exit(1);
        }
    };

    {
        let mut data = client.data.write().await;
        data.insert::<ShardManagerContainer>(client.shard_manager.clone());
        data.insert::<AppState>(app_state);
    }

    if let Err(why) = client.start().await {
        tracing::error!(target: "startup", error = ?why, "client error");
    }
}
