//! Shared state stored in Serenity's global `TypeMap`.

use crate::database::postgres::PgStore;
use crate::error::BotError;
use serenity::gateway::ShardManager;
use serenity::model::id::UserId;
use serenity::prelude::TypeMapKey;
use std::sync::Arc;

/// A container for the ShardManager, used to report gateway latency.
pub struct ShardManagerContainer;

impl TypeMapKey for ShardManagerContainer {
    type Value = Arc<ShardManager>;
}

/// The central, shared state of the application.
pub struct AppState {
    /// The account store every command reads and writes through.
    pub store: PgStore,
    /// Text that must precede every command. Empty means none.
    pub prefix: String,
    /// Users allowed to run `oaddcash`.
    pub admin_ids: Vec<UserId>,
}

impl AppState {
    pub async fn from_ctx(ctx: &serenity::prelude::Context) -> Result<Arc<Self>, BotError> {
        ctx.data
            .read()
            .await
            .get::<AppState>()
            .cloned()
            .ok_or(BotError::MissingState)
    }
}

impl TypeMapKey for AppState {
    type Value = Arc<AppState>;
}
