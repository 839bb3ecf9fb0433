use crate::error::BotResult;
use crate::model::ShardManagerContainer;
use serenity::model::channel::Message;
use serenity::prelude::*;
use std::time::Duration;

/// Liveness check. Includes the shard's heartbeat latency once the gateway
/// has measured one.
pub async fn run_prefix(ctx: &Context, msg: &Message) -> BotResult {
    let response = match heartbeat_latency(ctx).await {
        Some(latency) => format!(
            "✅ The bot is up and running! Heartbeat latency: `{} ms`",
            latency.as_millis()
        ),
        None => "✅ The bot is up and running!".to_string(),
    };
    msg.reply(&ctx.http, response).await?;
    Ok(())
}

async fn heartbeat_latency(ctx: &Context) -> Option<Duration> {
    let shard_manager = ctx.data.read().await.get::<ShardManagerContainer>()?.clone();
    let runners = shard_manager.runners.lock().await;
    runners.get(&ctx.shard_id)?.latency
}
