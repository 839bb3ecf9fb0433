//! Contract tests for the in-memory account store.
use marriage_bot::constants::STARTING_BALANCE;
use marriage_bot::database::memory::MemoryStore;
use marriage_bot::database::models::{Account, AccountPatch, Counter};
use marriage_bot::database::store::AccountStore;
use marriage_bot::error::StoreError;
use serenity::model::id::UserId;
use std::sync::Arc;

#[tokio::test]
async fn get_or_create_starts_with_defaults_once() {
    let store = MemoryStore::new();
    let id = UserId::new(7);
    let first = store.get_or_create(id).await.unwrap();
    assert_eq!(first, Account::new(id));
    assert_eq!(first.balance, STARTING_BALANCE);
    assert!(!first.is_married());

    store.apply_delta(id, Counter::Balance, 5).await.unwrap();
    let second = store.get_or_create(id).await.unwrap();
    assert_eq!(second.balance, STARTING_BALANCE + 5);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_first_sight_creates_one_record() {
    let store = Arc::new(MemoryStore::new());
    let id = UserId::new(7);
    let mut handles = Vec::new();
    for _ in 0..16 {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            store.get_or_create(id).await.unwrap()
        }));
    }
    for handle in handles {
        assert_eq!(handle.await.unwrap(), Account::new(id));
    }
    assert_eq!(store.snapshot().await.len(), 1);
}

#[tokio::test]
async fn apply_delta_refuses_to_go_negative() {
    let store = MemoryStore::new();
    let id = UserId::new(7);

    let err = store
        .apply_delta(id, Counter::Balance, -(STARTING_BALANCE + 1))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        StoreError::NegativeCounter { field: "balance", .. }
    ));
    assert!(store.get(id).await.is_none(), "failed delta must not create");

    let after = store
        .apply_delta(id, Counter::Balance, -STARTING_BALANCE)
        .await
        .unwrap();
    assert_eq!(after.balance, 0);
}

#[tokio::test]
async fn apply_delta_overflow_is_an_error() {
    let store = MemoryStore::new();
    let id = UserId::new(7);
    let err = store
        .apply_delta(id, Counter::Balance, i64::MAX)
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Overflow { .. }));
}

#[tokio::test]
async fn apply_delta_on_affection() {
    let store = MemoryStore::new();
    let id = UserId::new(7);
    store.apply_delta(id, Counter::Affection, 50).await.unwrap();
    let account = store.apply_delta(id, Counter::Affection, 50).await.unwrap();
    assert_eq!(account.affection, 100);
    assert_eq!(account.balance, STARTING_BALANCE);
}

#[tokio::test]
async fn set_fields_only_touches_present_fields() {
    let store = MemoryStore::new();
    let id = UserId::new(7);
    store.apply_delta(id, Counter::Affection, 50).await.unwrap();

    let patch = AccountPatch {
        couple_photo: Some(Some("https://example.com/a.png".into())),
        balance: Some(42),
        ..AccountPatch::default()
    };
    let account = store.set_fields(id, patch).await.unwrap();
    assert_eq!(account.balance, 42);
    assert_eq!(account.affection, 50);
    assert_eq!(
        account.couple_photo.as_deref(),
        Some("https://example.com/a.png")
    );

    let cleared = store
        .set_fields(
            id,
            AccountPatch {
                couple_photo: Some(None),
                ..AccountPatch::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(cleared.couple_photo, None);
    assert_eq!(cleared.balance, 42);
}

#[tokio::test]
async fn update_commits_all_accounts_together() {
    let store = MemoryStore::new();
    let (a, b) = (UserId::new(1), UserId::new(2));
    let outcome = store
        .update(&[a, b], |accounts: &mut [Account]| -> Result<(), ()> {
            accounts[0].balance -= 100;
            accounts[1].balance += 100;
            Ok(())
        })
        .await
        .unwrap();
    assert_eq!(outcome, Ok(()));
    assert_eq!(store.get(a).await.unwrap().balance, STARTING_BALANCE - 100);
    assert_eq!(store.get(b).await.unwrap().balance, STARTING_BALANCE + 100);
}

#[tokio::test]
async fn rejected_update_writes_nothing() {
    let store = MemoryStore::new();
    let (a, b) = (UserId::new(1), UserId::new(2));
    store.get_or_create(a).await.unwrap();

    let outcome = store
        .update(&[a, b], |accounts: &mut [Account]| -> Result<(), &str> {
            accounts[0].balance = 1;
            accounts[1].affection = 5;
            Err("nope")
        })
        .await
        .unwrap();
    assert_eq!(outcome, Err("nope"));
    assert_eq!(store.get(a).await.unwrap(), Account::new(a));
    assert!(store.get(b).await.is_none(), "unseen id must not be created");
}

#[tokio::test]
async fn update_rejects_duplicate_ids() {
    let store = MemoryStore::new();
    let a = UserId::new(1);
    let err = store
        .update(&[a, a], |_: &mut [Account]| -> Result<(), ()> { Ok(()) })
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::DuplicateAccount(id) if id == a));
    assert!(store.snapshot().await.is_empty());
}

#[tokio::test]
async fn update_enforces_non_negative_counters() {
    let store = MemoryStore::new();
    let (a, b) = (UserId::new(1), UserId::new(2));
    let err = store
        .update(&[a, b], |accounts: &mut [Account]| -> Result<(), ()> {
            accounts[1].balance += 10;
            accounts[0].balance = -1;
            Ok(())
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        StoreError::NegativeCounter { user_id, field: "balance" } if user_id == a
    ));
    assert!(store.snapshot().await.is_empty());
}
