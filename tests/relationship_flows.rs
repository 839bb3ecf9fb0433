//! Proposal, marriage, affection and divorce flows against the in-memory store.
use chrono::{DateTime, Duration, TimeZone, Utc};
use marriage_bot::commands::economy::core::item::{self, ShopItem};
use marriage_bot::database::memory::MemoryStore;
use marriage_bot::database::models::Account;
use marriage_bot::services::economy::{PurchaseOutcome, purchase};
use marriage_bot::services::relationship::{
    AffectionError, AffectionGranted, DivorceError, ProposalError, ProposalStart, Rejection,
    accept, begin_divorce, choose_ring, confirm_divorce, couple_view, days_together,
    grant_affection, propose, reject, set_couple_photo,
};
use serenity::model::id::UserId;

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 2, 14, 20, 0, 0).unwrap()
}

fn ring(id: &str) -> &'static ShopItem {
    item::find_by_id(id).expect("catalog ring")
}

async fn buy(store: &MemoryStore, user: UserId, item_id: &str) {
    let outcome = purchase(store, user, item_id).await.unwrap();
    assert!(
        matches!(outcome, PurchaseOutcome::Purchased { .. }),
        "purchase failed: {:?}",
        outcome
    );
}

/// Buys a silver ring for `a` and walks the proposal through to acceptance.
async fn wed(store: &MemoryStore, a: UserId, b: UserId, at: DateTime<Utc>) {
    buy(store, a, "silver").await;
    let ring = match propose(store, a, b).await.unwrap() {
        Ok(ProposalStart::Ready(ring)) => ring,
        Ok(ProposalStart::ChooseRing(rings)) => rings[0],
        Err(e) => panic!("proposal rejected: {:?}", e),
    };
    accept(store, b, a, b, ring, at).await.unwrap().unwrap();
}

async fn account(store: &MemoryStore, user: UserId) -> Account {
    store.get(user).await.expect("account exists")
}

#[tokio::test]
async fn buy_propose_accept_forms_a_mirrored_marriage() {
    let store = MemoryStore::new();
    let (a, b) = (UserId::new(100), UserId::new(200));
    buy(&store, a, "silver").await;
    buy(&store, a, "silver").await;

    let start = propose(&store, a, b).await.unwrap().unwrap();
    assert_eq!(start, ProposalStart::Ready(ring("silver")));
    // The target is created on first sight.
    assert!(!account(&store, b).await.is_married());

    let since = accept(&store, b, a, b, ring("silver"), t0())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(since, t0());

    let (pa, pb) = (account(&store, a).await, account(&store, b).await);
    assert_eq!(pa.partner_id, Some(b));
    assert_eq!(pb.partner_id, Some(a));
    assert_eq!(pa.married_at, Some(t0()));
    assert_eq!(pb.married_at, Some(t0()));
    assert_eq!(pa.count_of("silver"), 1, "exactly one ring is consumed");
}

#[tokio::test]
async fn only_the_target_can_accept() {
    let store = MemoryStore::new();
    let (a, b, c) = (UserId::new(100), UserId::new(200), UserId::new(300));
    buy(&store, a, "gold").await;
    propose(&store, a, b).await.unwrap().unwrap();
    let before = store.snapshot().await;

    for actor in [a, c] {
        let outcome = accept(&store, actor, a, b, ring("gold"), t0()).await.unwrap();
        assert_eq!(outcome, Err(ProposalError::WrongActor));
    }
    assert_eq!(store.snapshot().await, before);
}

#[tokio::test]
async fn proposal_preconditions() {
    let store = MemoryStore::new();
    let (a, b, c) = (UserId::new(100), UserId::new(200), UserId::new(300));

    assert_eq!(
        propose(&store, a, a).await.unwrap(),
        Err(ProposalError::SelfProposal)
    );
    assert_eq!(
        propose(&store, a, b).await.unwrap(),
        Err(ProposalError::NoRing)
    );

    wed(&store, b, c, t0()).await;
    buy(&store, a, "silver").await;
    assert_eq!(
        propose(&store, a, b).await.unwrap(),
        Err(ProposalError::AlreadyMarried)
    );
    assert_eq!(
        propose(&store, b, a).await.unwrap(),
        Err(ProposalError::AlreadyMarried)
    );
}

#[tokio::test]
async fn several_ring_kinds_require_a_choice_by_the_proposer() {
    let store = MemoryStore::new();
    let (a, b) = (UserId::new(100), UserId::new(200));
    buy(&store, a, "gold").await;
    buy(&store, a, "silver").await;

    let start = propose(&store, a, b).await.unwrap().unwrap();
    assert_eq!(
        start,
        ProposalStart::ChooseRing(vec![ring("silver"), ring("gold")])
    );

    assert_eq!(
        choose_ring(&store, b, a, b, "gold").await.unwrap(),
        Err(ProposalError::WrongActor)
    );
    assert_eq!(
        choose_ring(&store, a, a, b, "platinum").await.unwrap(),
        Err(ProposalError::UnknownRing)
    );
    assert_eq!(
        choose_ring(&store, a, a, b, "diamond").await.unwrap(),
        Err(ProposalError::RingGone)
    );
    let chosen = choose_ring(&store, a, a, b, "gold").await.unwrap().unwrap();
    assert_eq!(chosen, ring("gold"));

    accept(&store, b, a, b, chosen, t0()).await.unwrap().unwrap();
    let pa = account(&store, a).await;
    assert_eq!(pa.count_of("gold"), 0);
    assert_eq!(pa.count_of("silver"), 1);
}

#[tokio::test]
async fn accept_revalidates_the_ring() {
    let store = MemoryStore::new();
    let (a, b) = (UserId::new(100), UserId::new(200));
    buy(&store, a, "silver").await;
    propose(&store, a, b).await.unwrap().unwrap();

    let mut pa = account(&store, a).await;
    pa.inventory.clear();
    store.insert(pa).await;

    let outcome = accept(&store, b, a, b, ring("silver"), t0()).await.unwrap();
    assert_eq!(outcome, Err(ProposalError::RingGone));
    assert!(!account(&store, a).await.is_married());
    assert!(!account(&store, b).await.is_married());
}

#[tokio::test]
async fn second_acceptance_of_a_stale_proposal_fails() {
    let store = MemoryStore::new();
    let (a, b, c) = (UserId::new(100), UserId::new(200), UserId::new(300));
    buy(&store, a, "silver").await;
    buy(&store, a, "silver").await;
    // Two prompts are open at once: a -> b and a -> c.
    propose(&store, a, b).await.unwrap().unwrap();
    propose(&store, a, c).await.unwrap().unwrap();

    accept(&store, b, a, b, ring("silver"), t0())
        .await
        .unwrap()
        .unwrap();
    let outcome = accept(&store, c, a, c, ring("silver"), t0()).await.unwrap();
    assert_eq!(outcome, Err(ProposalError::AlreadyMarried));

    assert_eq!(account(&store, a).await.partner_id, Some(b));
    assert_eq!(account(&store, c).await.partner_id, None);
    assert_eq!(account(&store, a).await.count_of("silver"), 1);
}

#[tokio::test]
async fn reject_is_classified_and_changes_nothing() {
    let store = MemoryStore::new();
    let (a, b, c) = (UserId::new(100), UserId::new(200), UserId::new(300));
    buy(&store, a, "silver").await;
    propose(&store, a, b).await.unwrap().unwrap();
    let before = store.snapshot().await;

    assert_eq!(reject(b, a, b), Rejection::Declined);
    assert_eq!(reject(a, a, b), Rejection::Withdrawn);
    assert_eq!(reject(c, a, b), Rejection::Dismissed);
    assert_eq!(store.snapshot().await, before);
}

#[tokio::test]
async fn olove_rewards_both_partners_once_per_hour_each() {
    let store = MemoryStore::new();
    let (a, b) = (UserId::new(100), UserId::new(200));
    wed(&store, a, b, t0()).await;

    let granted = grant_affection(&store, a, t0()).await.unwrap();
    assert_eq!(
        granted,
        Ok(AffectionGranted {
            partner: b,
            affection: 50,
        })
    );
    assert_eq!(account(&store, b).await.affection, 50);

    let again = grant_affection(&store, a, t0() + Duration::minutes(10))
        .await
        .unwrap();
    match again {
        Err(AffectionError::OnCooldown(active)) => assert_eq!(active.remaining, 50),
        other => panic!("expected cooldown, got {:?}", other),
    }
    assert_eq!(account(&store, a).await.affection, 50);
    assert_eq!(account(&store, b).await.affection, 50);

    // The partner's cooldown is their own.
    grant_affection(&store, b, t0() + Duration::minutes(10))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(account(&store, a).await.affection, 100);
    assert_eq!(account(&store, b).await.affection, 100);

    let later = grant_affection(&store, a, t0() + Duration::hours(1))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(later.affection, 150);
}

#[tokio::test]
async fn olove_requires_a_partner() {
    let store = MemoryStore::new();
    let outcome = grant_affection(&store, UserId::new(100), t0()).await.unwrap();
    assert_eq!(outcome, Err(AffectionError::NotMarried));
}

#[tokio::test]
async fn divorce_is_confirmed_only_by_the_initiator() {
    let store = MemoryStore::new();
    let (a, b) = (UserId::new(100), UserId::new(200));
    wed(&store, a, b, t0()).await;
    grant_affection(&store, a, t0()).await.unwrap().unwrap();
    set_couple_photo(&store, b, "https://example.com/us.png")
        .await
        .unwrap();
    let balance_before = account(&store, a).await.balance;

    assert_eq!(begin_divorce(&store, a).await.unwrap(), Ok(b));

    let outcome = confirm_divorce(&store, b, a, b).await.unwrap();
    assert_eq!(outcome, Err(DivorceError::NotInitiator));
    assert_eq!(account(&store, a).await.partner_id, Some(b));

    confirm_divorce(&store, a, a, b).await.unwrap().unwrap();
    for user in [a, b] {
        let acc = account(&store, user).await;
        assert_eq!(acc.partner_id, None);
        assert_eq!(acc.married_at, None);
        assert_eq!(acc.affection, 0);
        assert_eq!(acc.couple_photo, None);
    }
    assert_eq!(account(&store, a).await.balance, balance_before);

    // Pressing the same confirm button again does nothing.
    assert_eq!(
        confirm_divorce(&store, a, a, b).await.unwrap(),
        Err(DivorceError::NoLongerMarried)
    );
    assert_eq!(
        begin_divorce(&store, a).await.unwrap(),
        Err(DivorceError::NotMarried)
    );
}

#[tokio::test]
async fn stale_divorce_prompt_cannot_break_a_new_marriage() {
    let store = MemoryStore::new();
    let (a, b, c) = (UserId::new(100), UserId::new(200), UserId::new(300));
    wed(&store, a, b, t0()).await;
    confirm_divorce(&store, a, a, b).await.unwrap().unwrap();
    wed(&store, a, c, t0() + Duration::days(1)).await;

    let outcome = confirm_divorce(&store, a, a, b).await.unwrap();
    assert_eq!(outcome, Err(DivorceError::NoLongerMarried));
    assert_eq!(account(&store, a).await.partner_id, Some(c));
    assert_eq!(account(&store, c).await.partner_id, Some(a));
}

#[tokio::test]
async fn couple_photo_is_mirrored_and_needs_a_partner() {
    let store = MemoryStore::new();
    let (a, b) = (UserId::new(100), UserId::new(200));
    assert_eq!(
        set_couple_photo(&store, a, "https://example.com/x.png")
            .await
            .unwrap(),
        None
    );
    assert_eq!(account(&store, a).await.couple_photo, None);

    wed(&store, a, b, t0()).await;
    let partner = set_couple_photo(&store, a, "https://example.com/x.png")
        .await
        .unwrap();
    assert_eq!(partner, Some(b));
    for user in [a, b] {
        assert_eq!(
            account(&store, user).await.couple_photo.as_deref(),
            Some("https://example.com/x.png")
        );
    }
}

#[tokio::test]
async fn couple_view_counts_whole_days() {
    let store = MemoryStore::new();
    let (a, b) = (UserId::new(100), UserId::new(200));
    assert!(couple_view(&Account::new(a), t0()).is_none());

    wed(&store, a, b, t0()).await;
    let view = couple_view(&account(&store, a).await, t0() + Duration::hours(36)).unwrap();
    assert_eq!(view.partner, b);
    assert_eq!(view.since, t0());
    assert_eq!(view.days_together, 1);
    assert_eq!(view.photo, None);

    assert_eq!(days_together(t0(), t0() - Duration::hours(5)), 0);
    assert_eq!(days_together(t0(), t0() + Duration::days(30)), 30);
}
