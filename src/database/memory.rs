//! In-process [`AccountStore`] used by tests and local experiments.
//!
//! A single mutex guards the whole map, so every operation is trivially
//! atomic and readers never observe a half-applied update.

use super::models::{Account, AccountPatch, Counter};
use super::store::{AccountStore, ensure_distinct};
use crate::error::StoreError;
use async_trait::async_trait;
use serenity::model::id::UserId;
use std::collections::HashMap;
use tokio::sync::Mutex;

#[derive(Default)]
pub struct MemoryStore {
    accounts: Mutex<HashMap<UserId, Account>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A consistent copy of every stored account, ordered by id.
    pub async fn snapshot(&self) -> Vec<Account> {
        let map = self.accounts.lock().await;
        let mut all: Vec<Account> = map.values().cloned().collect();
        all.sort_by_key(|a| a.user_id);
        all
    }

    /// Reads an account without creating it.
    pub async fn get(&self, user_id: UserId) -> Option<Account> {
        self.accounts.lock().await.get(&user_id).cloned()
    }

    /// Seeds or replaces a record verbatim.
    pub async fn insert(&self, account: Account) {
        self.accounts.lock().await.insert(account.user_id, account);
    }
}

#[async_trait]
impl AccountStore for MemoryStore {
    async fn get_or_create(&self, user_id: UserId) -> Result<Account, StoreError> {
        let mut map = self.accounts.lock().await;
        Ok(map
            .entry(user_id)
            .or_insert_with(|| Account::new(user_id))
            .clone())
    }

    async fn apply_delta(
        &self,
        user_id: UserId,
        counter: Counter,
        delta: i64,
    ) -> Result<Account, StoreError> {
        let mut map = self.accounts.lock().await;
        let current = map
            .get(&user_id)
            .cloned()
            .unwrap_or_else(|| Account::new(user_id));
        let next = counter
            .get(&current)
            .checked_add(delta)
            .ok_or(StoreError::Overflow {
                user_id,
                field: counter.column(),
            })?;
        if next < 0 {
            return Err(StoreError::NegativeCounter {
                user_id,
                field: counter.column(),
            });
        }
        let account = map.entry(user_id).or_insert(current);
        *counter.get_mut(account) = next;
        Ok(account.clone())
    }

    async fn set_fields(
        &self,
        user_id: UserId,
        patch: AccountPatch,
    ) -> Result<Account, StoreError> {
        let mut map = self.accounts.lock().await;
        let account = map
            .entry(user_id)
            .or_insert_with(|| Account::new(user_id));
        patch.apply(account);
        Ok(account.clone())
    }

    async fn update<T, R, F>(
        &self,
        user_ids: &[UserId],
        f: F,
    ) -> Result<Result<T, R>, StoreError>
    where
        F: FnOnce(&mut [Account]) -> Result<T, R> + Send + 'async_trait,
        T: Send + 'async_trait,
        R: Send + 'async_trait,
    {
        ensure_distinct(user_ids)?;
        let mut map = self.accounts.lock().await;
        let mut working: Vec<Account> = user_ids
            .iter()
            .map(|id| map.get(id).cloned().unwrap_or_else(|| Account::new(*id)))
            .collect();
        let outcome = f(&mut working);
        if outcome.is_ok() {
            // Mirrors the CHECK constraints of the accounts table.
            for account in &working {
                for counter in [Counter::Balance, Counter::Affection] {
                    if counter.get(account) < 0 {
                        return Err(StoreError::NegativeCounter {
                            user_id: account.user_id,
                            field: counter.column(),
                        });
                    }
                }
            }
            for account in working {
                map.insert(account.user_id, account);
            }
        }
        Ok(outcome)
    }
}
