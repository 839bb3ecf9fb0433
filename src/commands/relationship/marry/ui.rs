//! Proposal prompts and their outcomes.

use crate::commands::economy::core::item::ShopItem;
use crate::constants::COLOR_LOVE;
use crate::interactions::ids::InteractionId;
use crate::services::relationship::{ProposalError, Rejection};
use crate::ui::buttons::Btn;
use crate::ui::style::{EMOJI_BROKEN_HEART, EMOJI_CALENDAR, error_embed};
use chrono::{DateTime, Utc};
use serenity::builder::{
    CreateActionRow, CreateEmbed, CreateSelectMenu, CreateSelectMenuKind, CreateSelectMenuOption,
};
use serenity::model::id::UserId;
use serenity::prelude::Mentionable;

/// The accept/reject prompt. The content pings the target.
pub fn create_proposal_prompt(
    proposer: UserId,
    target: UserId,
    ring: &'static ShopItem,
) -> (String, CreateEmbed, Vec<CreateActionRow>) {
    let embed = CreateEmbed::new()
        .title("💍 A Marriage Proposal!")
        .description(format!(
            "{} is proposing to {} with a **{}**! Do you accept?",
            proposer.mention(),
            target.mention(),
            ring
        ))
        .color(COLOR_LOVE);
    let buttons = CreateActionRow::Buttons(vec![
        Btn::success(
            InteractionId::ProposalAccept {
                proposer,
                target,
                item: ring,
            }
            .to_string(),
            "Accept",
        ),
        Btn::danger(
            InteractionId::ProposalReject { proposer, target }.to_string(),
            "Reject",
        ),
    ]);
    (target.mention().to_string(), embed, vec![buttons])
}

/// Shown instead of the proposal when the proposer owns more than one kind of ring.
pub fn create_ring_picker(
    proposer: UserId,
    target: UserId,
    rings: &[&'static ShopItem],
) -> (CreateEmbed, Vec<CreateActionRow>) {
    let embed = CreateEmbed::new()
        .title("💍 Choose a Ring")
        .description(format!(
            "{}, you own several rings! Pick the one you want to propose to {} with.",
            proposer.mention(),
            target.mention()
        ))
        .color(COLOR_LOVE);
    let options = rings
        .iter()
        .map(|ring| {
            let mut option = CreateSelectMenuOption::new(ring.display_name, ring.id)
                .description("Propose with this ring");
            if let Some(emoji) = ring.emoji.chars().next() {
                option = option.emoji(emoji);
            }
            option
        })
        .collect();
    let menu = CreateSelectMenu::new(
        InteractionId::RingSelect { proposer, target }.to_string(),
        CreateSelectMenuKind::String { options },
    )
    .placeholder("Choose a ring...");
    (embed, vec![CreateActionRow::SelectMenu(menu)])
}

pub fn proposal_error_embed(error: ProposalError, prefix: &str) -> CreateEmbed {
    let description = match error {
        ProposalError::SelfProposal => "You cannot marry yourself!".to_string(),
        ProposalError::AlreadyMarried => "One of you is already married!".to_string(),
        ProposalError::NoRing => format!(
            "You don't have a ring! Buy one in the `{prefix}shop` before proposing."
        ),
        ProposalError::RingGone => "The proposal failed: the ring no longer exists.".to_string(),
        ProposalError::UnknownRing => "That ring is not sold in the shop.".to_string(),
        ProposalError::WrongActor => "This proposal isn't addressed to you!".to_string(),
    };
    error_embed("Proposal Failed", description)
}

pub fn create_marriage_embed(
    proposer: UserId,
    target: UserId,
    ring: &ShopItem,
    since: DateTime<Utc>,
) -> CreateEmbed {
    CreateEmbed::new()
        .title("🎉 Congratulations!")
        .description(format!(
            "{} said yes! {} and {} are now officially married with a **{}**! 💞\n{} Wedding date: {}",
            target.mention(),
            proposer.mention(),
            target.mention(),
            ring,
            EMOJI_CALENDAR,
            since.format("%d/%m/%Y")
        ))
        .color(COLOR_LOVE)
}

pub fn create_rejection_embed(rejection: Rejection, proposer: UserId, target: UserId) -> CreateEmbed {
    let description = match rejection {
        Rejection::Declined => format!(
            "{} Sorry {}, {} declined the proposal.",
            EMOJI_BROKEN_HEART,
            proposer.mention(),
            target.mention()
        ),
        Rejection::Withdrawn => format!(
            "{} withdrew the proposal to {}.",
            proposer.mention(),
            target.mention()
        ),
        Rejection::Dismissed => format!(
            "{} The proposal from {} to {} was cancelled.",
            EMOJI_BROKEN_HEART,
            proposer.mention(),
            target.mention()
        ),
    };
    CreateEmbed::new()
        .title("Proposal Closed")
        .description(description)
        .color(COLOR_LOVE)
}
