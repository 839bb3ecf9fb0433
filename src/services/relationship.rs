//! The marriage workflow.
//!
//! Pending proposals and divorces are never stored: they exist only as the
//! interaction id on a prompt. Every commit re-reads both accounts under lock
//! and re-validates, so a stale or replayed prompt can never produce a
//! one-sided partnership.

use crate::commands::economy::core::item::{self, ShopItem};
use crate::constants::AFFECTION_GRANT;
use crate::cooldown::{self, CooldownActive};
use crate::database::models::Account;
use crate::database::store::AccountStore;
use crate::error::StoreError;
use chrono::{DateTime, Utc};
use serenity::model::id::UserId;
use tracing::{info, instrument};

/// How many times a partner-scoped update re-reads the partner id after
/// losing a race with a concurrent marriage or divorce.
const PARTNER_RETRIES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProposalError {
    SelfProposal,
    /// The proposer or the target already has a partner.
    AlreadyMarried,
    /// The proposer owns no catalog ring.
    NoRing,
    /// The ring bound to the prompt is no longer in the proposer's inventory.
    RingGone,
    UnknownRing,
    /// Someone other than the addressed party answered the prompt.
    WrongActor,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProposalStart {
    /// Exactly one ring kind is owned; the proposal can be shown right away.
    Ready(&'static ShopItem),
    /// Several ring kinds are owned; the proposer must pick one first.
    ChooseRing(Vec<&'static ShopItem>),
}

/// Checks whether `proposer` may propose to `target` right now.
pub fn validate_proposal(
    proposer: &Account,
    target: &Account,
) -> Result<ProposalStart, ProposalError> {
    if proposer.user_id == target.user_id {
        return Err(ProposalError::SelfProposal);
    }
    if proposer.is_married() || target.is_married() {
        return Err(ProposalError::AlreadyMarried);
    }
    let rings = item::held_rings(&proposer.inventory);
    match rings.len() {
        0 => Err(ProposalError::NoRing),
        1 => Ok(ProposalStart::Ready(rings[0])),
        _ => Ok(ProposalStart::ChooseRing(rings)),
    }
}

/// Opens a proposal. Creates the target's account if it has never been seen.
#[instrument(level = "debug", skip(store), fields(proposer = proposer_id.get(), target = target_id.get()))]
pub async fn propose<S: AccountStore>(
    store: &S,
    proposer_id: UserId,
    target_id: UserId,
) -> Result<Result<ProposalStart, ProposalError>, StoreError> {
    if proposer_id == target_id {
        return Ok(Err(ProposalError::SelfProposal));
    }
    let proposer = store.get_or_create(proposer_id).await?;
    let target = store.get_or_create(target_id).await?;
    Ok(validate_proposal(&proposer, &target))
}

/// Handles the ring picker: binds the chosen ring to a proposal after
/// re-checking that the proposal is still possible.
#[instrument(level = "debug", skip(store), fields(actor = actor.get()))]
pub async fn choose_ring<S: AccountStore>(
    store: &S,
    actor: UserId,
    proposer_id: UserId,
    target_id: UserId,
    item_id: &str,
) -> Result<Result<&'static ShopItem, ProposalError>, StoreError> {
    if actor != proposer_id {
        return Ok(Err(ProposalError::WrongActor));
    }
    let Some(ring) = item::find_by_id(item_id) else {
        return Ok(Err(ProposalError::UnknownRing));
    };
    let check = propose(store, proposer_id, target_id).await?;
    Ok(match check {
        Err(e) => Err(e),
        Ok(ProposalStart::Ready(only)) if only.id == ring.id => Ok(ring),
        Ok(ProposalStart::ChooseRing(rings)) if rings.iter().any(|r| r.id == ring.id) => Ok(ring),
        Ok(_) => Err(ProposalError::RingGone),
    })
}

/// Commits a marriage between `accounts[0]` (proposer) and `accounts[1]`
/// (target), consuming one `ring` from the proposer.
pub fn form_marriage(
    accounts: &mut [Account],
    ring: &ShopItem,
    now: DateTime<Utc>,
) -> Result<DateTime<Utc>, ProposalError> {
    let [proposer, target] = accounts else {
        return Err(ProposalError::WrongActor);
    };
    if proposer.is_married() || target.is_married() {
        return Err(ProposalError::AlreadyMarried);
    }
    if !proposer.remove_one(ring.id) {
        return Err(ProposalError::RingGone);
    }
    proposer.partner_id = Some(target.user_id);
    proposer.married_at = Some(now);
    target.partner_id = Some(proposer.user_id);
    target.married_at = Some(now);
    Ok(now)
}

/// The addressed target accepts a proposal.
#[instrument(level = "debug", skip(store), fields(actor = actor.get(), ring = ring.id))]
pub async fn accept<S: AccountStore>(
    store: &S,
    actor: UserId,
    proposer_id: UserId,
    target_id: UserId,
    ring: &'static ShopItem,
    now: DateTime<Utc>,
) -> Result<Result<DateTime<Utc>, ProposalError>, StoreError> {
    if actor != target_id {
        return Ok(Err(ProposalError::WrongActor));
    }
    if proposer_id == target_id {
        return Ok(Err(ProposalError::SelfProposal));
    }
    let outcome = store
        .update(
            &[proposer_id, target_id],
            move |accounts: &mut [Account]| -> Result<DateTime<Utc>, ProposalError> {
                form_marriage(accounts, ring, now)
            },
        )
        .await?;
    if outcome.is_ok() {
        info!(
            target: "relationship",
            proposer = proposer_id.get(),
            target_id = target_id.get(),
            ring = ring.id,
            "marriage formed"
        );
    }
    Ok(outcome)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The addressed target declined.
    Declined,
    /// The proposer took the proposal back.
    Withdrawn,
    /// Someone else dismissed the prompt.
    Dismissed,
}

/// Classifies a press of the reject button. Never touches storage.
pub fn reject(actor: UserId, proposer_id: UserId, target_id: UserId) -> Rejection {
    if actor == target_id {
        Rejection::Declined
    } else if actor == proposer_id {
        Rejection::Withdrawn
    } else {
        Rejection::Dismissed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DivorceError {
    NotMarried,
    /// Only the partner who opened the divorce may confirm it.
    NotInitiator,
    /// The pair named on the prompt is no longer married to each other.
    NoLongerMarried,
}

/// Opens a divorce prompt. Returns the partner to name on it.
#[instrument(level = "debug", skip(store), fields(user_id = user_id.get()))]
pub async fn begin_divorce<S: AccountStore>(
    store: &S,
    user_id: UserId,
) -> Result<Result<UserId, DivorceError>, StoreError> {
    let account = store.get_or_create(user_id).await?;
    Ok(account.partner_id.ok_or(DivorceError::NotMarried))
}

/// Clears the relationship of `accounts[0]` (initiator) and `accounts[1]`.
pub fn dissolve(accounts: &mut [Account]) -> Result<(), DivorceError> {
    let [initiator, partner] = accounts else {
        return Err(DivorceError::NoLongerMarried);
    };
    if initiator.partner_id != Some(partner.user_id) || partner.partner_id != Some(initiator.user_id)
    {
        return Err(DivorceError::NoLongerMarried);
    }
    initiator.clear_relationship();
    partner.clear_relationship();
    Ok(())
}

/// The initiator confirms the divorce.
#[instrument(level = "debug", skip(store), fields(actor = actor.get()))]
pub async fn confirm_divorce<S: AccountStore>(
    store: &S,
    actor: UserId,
    initiator_id: UserId,
    partner_id: UserId,
) -> Result<Result<(), DivorceError>, StoreError> {
    if actor != initiator_id {
        return Ok(Err(DivorceError::NotInitiator));
    }
    if initiator_id == partner_id {
        return Ok(Err(DivorceError::NoLongerMarried));
    }
    let outcome = store
        .update(
            &[initiator_id, partner_id],
            |accounts: &mut [Account]| -> Result<(), DivorceError> { dissolve(accounts) },
        )
        .await?;
    if outcome.is_ok() {
        info!(
            target: "relationship",
            initiator = initiator_id.get(),
            partner = partner_id.get(),
            "marriage dissolved"
        );
    }
    Ok(outcome)
}

enum PairError<E> {
    /// The partner changed between the read and the lock.
    Stale,
    Inner(E),
}

/// Runs `f` over the caller and their current partner inside one update.
/// Yields `not_married` if the caller has no partner.
async fn update_with_partner<S, T, E, F>(
    store: &S,
    user_id: UserId,
    not_married: E,
    f: F,
) -> Result<Result<(UserId, T), E>, StoreError>
where
    S: AccountStore,
    T: Send,
    E: Send,
    F: Fn(&mut Account, &mut Account) -> Result<T, E> + Send + Sync,
{
    for _ in 0..PARTNER_RETRIES {
        let account = store.get_or_create(user_id).await?;
        let Some(partner_id) = account.partner_id else {
            return Ok(Err(not_married));
        };
        let f = &f;
        let outcome = store
            .update(
                &[user_id, partner_id],
                move |accounts: &mut [Account]| -> Result<T, PairError<E>> {
                    let [me, partner] = accounts else {
                        return Err(PairError::Stale);
                    };
                    if me.partner_id != Some(partner.user_id) {
                        return Err(PairError::Stale);
                    }
                    f(me, partner).map_err(PairError::Inner)
                },
            )
            .await?;
        match outcome {
            Ok(value) => return Ok(Ok((partner_id, value))),
            Err(PairError::Inner(e)) => return Ok(Err(e)),
            Err(PairError::Stale) => continue,
        }
    }
    Ok(Err(not_married))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AffectionError {
    NotMarried,
    OnCooldown(CooldownActive),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AffectionGranted {
    pub partner: UserId,
    pub affection: i64,
}

/// `olove`: both partners gain affection, gated per caller by a 1h cooldown.
#[instrument(level = "debug", skip(store), fields(user_id = user_id.get()))]
pub async fn grant_affection<S: AccountStore>(
    store: &S,
    user_id: UserId,
    now: DateTime<Utc>,
) -> Result<Result<AffectionGranted, AffectionError>, StoreError> {
    let outcome = update_with_partner(
        store,
        user_id,
        AffectionError::NotMarried,
        move |me: &mut Account, partner: &mut Account| -> Result<i64, AffectionError> {
            cooldown::AFFECTION
                .check(now, me.last_affection_at)
                .map_err(AffectionError::OnCooldown)?;
            me.affection += AFFECTION_GRANT;
            me.last_affection_at = Some(now);
            partner.affection += AFFECTION_GRANT;
            Ok(me.affection)
        },
    )
    .await?;
    Ok(outcome.map(|(partner, affection)| AffectionGranted { partner, affection }))
}

/// `oaddpic`: stores the shared photo on both partners.
#[instrument(level = "debug", skip(store, url), fields(user_id = user_id.get()))]
pub async fn set_couple_photo<S: AccountStore>(
    store: &S,
    user_id: UserId,
    url: &str,
) -> Result<Option<UserId>, StoreError> {
    let outcome = update_with_partner(
        store,
        user_id,
        (),
        |me: &mut Account, partner: &mut Account| -> Result<(), ()> {
            me.couple_photo = Some(url.to_string());
            partner.couple_photo = Some(url.to_string());
            Ok(())
        },
    )
    .await?;
    Ok(outcome.ok().map(|(partner, ())| partner))
}

/// Everything `ocheck` and `profile` show about a relationship.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoupleView {
    pub partner: UserId,
    pub since: DateTime<Utc>,
    pub days_together: i64,
    pub affection: i64,
    pub photo: Option<String>,
}

pub fn days_together(since: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - since).num_days().max(0)
}

pub fn couple_view(account: &Account, now: DateTime<Utc>) -> Option<CoupleView> {
    let (partner, since) = account.partner_id.zip(account.married_at)?;
    Some(CoupleView {
        partner,
        since,
        days_together: days_together(since, now),
        affection: account.affection,
        photo: account.couple_photo.clone(),
    })
}
