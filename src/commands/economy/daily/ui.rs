use crate::services::economy::DailyOutcome;
use crate::ui::style::{error_embed, money, success_embed};
use serenity::builder::CreateEmbed;

pub fn create_daily_embed(outcome: &DailyOutcome) -> CreateEmbed {
    match outcome {
        DailyOutcome::Granted { amount, balance } => success_embed(
            "🎁 Daily Reward Claimed",
            format!(
                "You received **{}**\n💰 New balance: **{}**",
                money(*amount),
                money(*balance)
            ),
        ),
        DailyOutcome::OnCooldown(active) => error_embed(
            "⏳ Already Claimed",
            format!("You have already claimed your daily reward! Come back in {active}."),
        ),
    }
}
