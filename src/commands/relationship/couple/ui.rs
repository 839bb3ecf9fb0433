use crate::constants::{COLOR_LOVE, COLOR_PHOTO, format_money};
use crate::services::relationship::CoupleView;
use serenity::builder::{CreateEmbed, CreateEmbedFooter};
use serenity::model::Timestamp;
use serenity::model::id::UserId;
use serenity::prelude::Mentionable;

pub fn create_couple_embed(view: &CoupleView, prefix: &str) -> CreateEmbed {
    let embed = CreateEmbed::new()
        .title("💖 Couple Info 💖")
        .description(format!(
            "👩‍❤️‍👨 **Partner:** {}\n🗓️ **Wedding date:** {}\n💞 **Together for:** {} days\n✨ **Affection:** {}\n\n*Use `{prefix}olove` every hour to earn more affection!*",
            view.partner.mention(),
            view.since.format("%d/%m/%Y"),
            view.days_together,
            format_money(view.affection),
        ))
        .color(COLOR_LOVE)
        .timestamp(Timestamp::now());
    match &view.photo {
        Some(url) => embed.image(url),
        None => embed.footer(CreateEmbedFooter::new(format!(
            "💡 Add a couple photo with: {prefix}oaddpic"
        ))),
    }
}

pub fn create_photo_saved_embed(partner: UserId, url: &str) -> CreateEmbed {
    CreateEmbed::new()
        .title("💖 Your Couple Photo")
        .description(format!(
            "Saved the couple photo for you and {}!",
            partner.mention()
        ))
        .image(url)
        .color(COLOR_PHOTO)
}
