//! The storage seam: every account mutation goes through [`AccountStore`].

use super::models::{Account, AccountPatch, Counter};
use crate::error::StoreError;
use async_trait::async_trait;
use serenity::model::id::UserId;

#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Fetches an account, inserting the default record if the id is unseen.
    async fn get_or_create(&self, user_id: UserId) -> Result<Account, StoreError>;

    /// Atomically adds `delta` to a counter, creating the account if needed.
    /// Fails with [`StoreError::NegativeCounter`] instead of going below zero.
    async fn apply_delta(
        &self,
        user_id: UserId,
        counter: Counter,
        delta: i64,
    ) -> Result<Account, StoreError>;

    /// Atomically assigns every field present in `patch`.
    async fn set_fields(&self, user_id: UserId, patch: AccountPatch)
    -> Result<Account, StoreError>;

    /// Locks the given accounts (creating absent ones), hands them to `f` in
    /// the order of `user_ids`, and persists all changes in one commit if `f`
    /// returns `Ok`. On `Err` nothing is written and the rejection is passed
    /// through as `Ok(Err(_))`.
    async fn update<T, R, F>(
        &self,
        user_ids: &[UserId],
        f: F,
    ) -> Result<Result<T, R>, StoreError>
    where
        F: FnOnce(&mut [Account]) -> Result<T, R> + Send + 'async_trait,
        T: Send + 'async_trait,
        R: Send + 'async_trait;
}

/// Rejects update requests that name the same account twice.
pub(crate) fn ensure_distinct(user_ids: &[UserId]) -> Result<(), StoreError> {
    for (i, id) in user_ids.iter().enumerate() {
        if user_ids[..i].contains(id) {
            return Err(StoreError::DuplicateAccount(*id));
        }
    }
    Ok(())
}
