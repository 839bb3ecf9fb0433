//! Random concurrent batches of relationship operations must never leave a
//! one-sided partnership behind.
use chrono::{Duration, TimeZone, Utc};
use marriage_bot::commands::economy::core::item;
use marriage_bot::database::memory::MemoryStore;
use marriage_bot::services::economy::{PurchaseOutcome, purchase};
use marriage_bot::services::relationship::{
    accept, begin_divorce, confirm_divorce, grant_affection, set_couple_photo,
};
use proptest::prelude::*;
use serenity::model::id::UserId;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

const USERS: u64 = 4;

#[derive(Debug, Clone, Copy)]
enum Op {
    BuySilver(u64),
    Accept { proposer: u64, target: u64 },
    Divorce(u64),
    StaleDivorce { initiator: u64, partner: u64 },
    Love(u64, i64),
    Photo(u64),
}

fn user() -> impl Strategy<Value = u64> {
    1..=USERS
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        user().prop_map(Op::BuySilver),
        (user(), user()).prop_map(|(proposer, target)| Op::Accept { proposer, target }),
        user().prop_map(Op::Divorce),
        (user(), user()).prop_map(|(initiator, partner)| Op::StaleDivorce { initiator, partner }),
        (user(), 0i64..180).prop_map(|(u, minutes)| Op::Love(u, minutes)),
        user().prop_map(Op::Photo),
    ]
}

#[derive(Default)]
struct RingLedger {
    bought: AtomicUsize,
    spent: AtomicUsize,
}

async fn run(store: Arc<MemoryStore>, ledger: Arc<RingLedger>, op: Op) {
    let t0 = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    let silver = item::find_by_id("silver").unwrap();
    match op {
        Op::BuySilver(u) => {
            let outcome = purchase(&*store, UserId::new(u), "silver").await.unwrap();
            if matches!(outcome, PurchaseOutcome::Purchased { .. }) {
                ledger.bought.fetch_add(1, Ordering::SeqCst);
            }
        }
        Op::Accept { proposer, target } => {
            let (p, t) = (UserId::new(proposer), UserId::new(target));
            let outcome = accept(&*store, t, p, t, silver, t0).await.unwrap();
            if outcome.is_ok() {
                ledger.spent.fetch_add(1, Ordering::SeqCst);
            }
        }
        Op::Divorce(u) => {
            let u = UserId::new(u);
            if let Ok(partner) = begin_divorce(&*store, u).await.unwrap() {
                confirm_divorce(&*store, u, u, partner).await.unwrap().ok();
            }
        }
        Op::StaleDivorce { initiator, partner } => {
            let i = UserId::new(initiator);
            confirm_divorce(&*store, i, i, UserId::new(partner))
                .await
                .unwrap()
                .ok();
        }
        Op::Love(u, minutes) => {
            grant_affection(&*store, UserId::new(u), t0 + Duration::minutes(minutes))
                .await
                .unwrap()
                .ok();
        }
        Op::Photo(u) => {
            set_couple_photo(&*store, UserId::new(u), "https://example.com/p.png")
                .await
                .unwrap();
        }
    }
}

async fn assert_symmetric(store: &MemoryStore, ledger: &RingLedger) {
    let accounts = store.snapshot().await;
    for account in &accounts {
        match account.partner_id {
            Some(partner_id) => {
                assert_ne!(partner_id, account.user_id, "self partner");
                let partner = accounts
                    .iter()
                    .find(|a| a.user_id == partner_id)
                    .expect("partner account exists");
                assert_eq!(partner.partner_id, Some(account.user_id));
                assert!(account.married_at.is_some());
                assert_eq!(partner.married_at, account.married_at);
                assert_eq!(partner.couple_photo, account.couple_photo);
            }
            None => {
                assert_eq!(account.married_at, None);
                assert_eq!(account.affection, 0);
                assert_eq!(account.couple_photo, None);
            }
        }
    }
    let held: usize = accounts.iter().map(|a| a.count_of("silver")).sum();
    let bought = ledger.bought.load(Ordering::SeqCst);
    let spent = ledger.spent.load(Ordering::SeqCst);
    assert_eq!(bought - spent, held, "rings are consumed exactly once");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn partnerships_stay_mutual(batches in prop::collection::vec(prop::collection::vec(op(), 1..8), 1..6)) {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(4)
            .enable_all()
            .build()
            .unwrap();
        runtime.block_on(async {
            let store = Arc::new(MemoryStore::new());
            let ledger = Arc::new(RingLedger::default());
            for batch in batches {
                let handles: Vec<_> = batch
                    .into_iter()
                    .map(|op| tokio::spawn(run(Arc::clone(&store), Arc::clone(&ledger), op)))
                    .collect();
                for handle in handles {
                    handle.await.unwrap();
                }
                assert_symmetric(&store, &ledger).await;
            }
        });
    }
}
