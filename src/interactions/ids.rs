//! Structured custom_id values for interaction components.
//!
//! A custom_id is the only link between a prompt and the later button press
//! or menu choice, so it carries every party the follow-up needs. Fields are
//! `:`-separated; user ids are decimal and items are referenced by catalog id
//! (see [`is_valid_id`]), so no field can contain the separator.

use crate::commands::economy::core::item::{self, ShopItem, is_valid_id};
use serenity::model::id::UserId;
use std::fmt;
use std::str::FromStr;

pub const SHOP_BUY: &str = "shop_buy";
pub const MARRY_RING: &str = "marry_ring";
pub const MARRY_ACCEPT: &str = "marry_accept";
pub const MARRY_REJECT: &str = "marry_reject";
pub const DIVORCE_CONFIRM: &str = "divorce_confirm";
pub const DIVORCE_CANCEL: &str = "divorce_cancel";

const SEP: char = ':';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionId {
    /// Shop select menu; the chosen value is an item id.
    ShopBuy,
    /// Ring picker shown when the proposer owns several ring kinds.
    RingSelect { proposer: UserId, target: UserId },
    ProposalAccept {
        proposer: UserId,
        target: UserId,
        item: &'static ShopItem,
    },
    ProposalReject { proposer: UserId, target: UserId },
    DivorceConfirm { initiator: UserId, partner: UserId },
    DivorceCancel { initiator: UserId, partner: UserId },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError(pub String);

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized interaction id `{}`", self.0)
    }
}

impl std::error::Error for ParseIdError {}

fn parse_user(s: &str) -> Option<UserId> {
    // Reject signs and leading zeros so every id has exactly one encoding.
    if s.is_empty() || s.starts_with('0') || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse::<u64>().ok().map(UserId::new)
}

fn parse_item(s: &str) -> Option<&'static ShopItem> {
    if !is_valid_id(s) {
        return None;
    }
    item::find_by_id(s)
}

impl FromStr for InteractionId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseIdError(s.to_string());
        let parts: Vec<&str> = s.split(SEP).collect();
        let parsed = match parts.as_slice() {
            [SHOP_BUY] => Some(InteractionId::ShopBuy),
            [MARRY_RING, p, t] => parse_user(p)
                .zip(parse_user(t))
                .map(|(proposer, target)| InteractionId::RingSelect { proposer, target }),
            [MARRY_ACCEPT, p, t, i] => match (parse_user(p), parse_user(t), parse_item(i)) {
                (Some(proposer), Some(target), Some(item)) => Some(InteractionId::ProposalAccept {
                    proposer,
                    target,
                    item,
                }),
                _ => None,
            },
            [MARRY_REJECT, p, t] => parse_user(p)
                .zip(parse_user(t))
                .map(|(proposer, target)| InteractionId::ProposalReject { proposer, target }),
            [DIVORCE_CONFIRM, i, p] => parse_user(i)
                .zip(parse_user(p))
                .map(|(initiator, partner)| InteractionId::DivorceConfirm { initiator, partner }),
            [DIVORCE_CANCEL, i, p] => parse_user(i)
                .zip(parse_user(p))
                .map(|(initiator, partner)| InteractionId::DivorceCancel { initiator, partner }),
            _ => None,
        };
        parsed.ok_or_else(err)
    }
}

impl fmt::Display for InteractionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InteractionId::ShopBuy => write!(f, "{SHOP_BUY}"),
            InteractionId::RingSelect { proposer, target } => {
                write!(f, "{MARRY_RING}{SEP}{proposer}{SEP}{target}")
            }
            InteractionId::ProposalAccept {
                proposer,
                target,
                item,
            } => write!(
                f,
                "{MARRY_ACCEPT}{SEP}{proposer}{SEP}{target}{SEP}{}",
                item.id
            ),
            InteractionId::ProposalReject { proposer, target } => {
                write!(f, "{MARRY_REJECT}{SEP}{proposer}{SEP}{target}")
            }
            InteractionId::DivorceConfirm { initiator, partner } => {
                write!(f, "{DIVORCE_CONFIRM}{SEP}{initiator}{SEP}{partner}")
            }
            InteractionId::DivorceCancel { initiator, partner } => {
                write!(f, "{DIVORCE_CANCEL}{SEP}{initiator}{SEP}{partner}")
            }
        }
    }
}
