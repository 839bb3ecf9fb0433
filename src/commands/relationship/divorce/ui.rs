use crate::constants::{COLOR_ERROR, COLOR_LOVE};
use crate::interactions::ids::InteractionId;
use crate::services::relationship::DivorceError;
use crate::ui::buttons::Btn;
use crate::ui::style::{EMOJI_BROKEN_HEART, EMOJI_HEART, error_embed};
use serenity::builder::{CreateActionRow, CreateEmbed};
use serenity::model::id::UserId;
use serenity::prelude::Mentionable;

pub fn create_divorce_prompt(
    initiator: UserId,
    partner: UserId,
) -> (String, CreateEmbed, Vec<CreateActionRow>) {
    let embed = CreateEmbed::new()
        .title(format!("{EMOJI_BROKEN_HEART} Confirm Divorce"))
        .description(format!(
            "{}, are you sure you want to divorce {}?\n*This erases your wedding date, couple photo and the affection points of both of you.*",
            initiator.mention(),
            partner.mention()
        ))
        .color(COLOR_ERROR);
    let buttons = CreateActionRow::Buttons(vec![
        Btn::danger(
            InteractionId::DivorceConfirm { initiator, partner }.to_string(),
            "Confirm Divorce",
        ),
        Btn::secondary(
            InteractionId::DivorceCancel { initiator, partner }.to_string(),
            "Cancel",
        ),
    ]);
    (partner.mention().to_string(), embed, vec![buttons])
}

pub fn create_divorced_embed(initiator: UserId, partner: UserId) -> CreateEmbed {
    CreateEmbed::new()
        .title(format!("{EMOJI_BROKEN_HEART} Officially Divorced"))
        .description(format!(
            "{} and {} have gone their separate ways. Affection points were reset to 0.",
            initiator.mention(),
            partner.mention()
        ))
        .color(COLOR_ERROR)
}

pub fn create_reconciled_embed(initiator: UserId, partner: UserId) -> CreateEmbed {
    CreateEmbed::new()
        .title(format!("{EMOJI_HEART} Divorce Cancelled"))
        .description(format!(
            "Luckily, {} and {} decided to stay together!",
            initiator.mention(),
            partner.mention()
        ))
        .color(COLOR_LOVE)
}

pub fn divorce_error_embed(error: DivorceError) -> CreateEmbed {
    let description = match error {
        DivorceError::NotMarried => "You are single, there is nobody to divorce!",
        DivorceError::NotInitiator => "Only the partner who asked for the divorce can confirm it!",
        DivorceError::NoLongerMarried => "These two are no longer married to each other.",
    };
    error_embed("Divorce", description)
}
