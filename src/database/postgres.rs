//! PostgreSQL-backed [`AccountStore`].
//!
//! Multi-account updates run inside one transaction and lock the affected
//! rows with `FOR UPDATE` in ascending id order, so two updates touching the
//! same pair of accounts serialize instead of deadlocking.

use super::init::DbPool;
use super::models::{Account, AccountPatch, AccountRow, Counter};
use super::store::{AccountStore, ensure_distinct};
use crate::constants::STARTING_BALANCE;
use crate::error::StoreError;
use async_trait::async_trait;
use serenity::model::id::UserId;
use sqlx::{Postgres, QueryBuilder, Transaction};
use tracing::instrument;

const ACCOUNT_COLUMNS: &str = "user_id, balance, last_daily_at, partner_id, married_at, affection, last_affection_at, inventory, couple_photo";

#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn to_i64(user_id: UserId) -> i64 {
    user_id.get() as i64
}

/// Inserts default rows for any of `ids` that do not exist yet.
async fn ensure_rows(tx: &mut Transaction<'_, Postgres>, ids: &[i64]) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO accounts (user_id, balance) SELECT id, $2 FROM UNNEST($1::BIGINT[]) AS t(id) ON CONFLICT (user_id) DO NOTHING",
    )
    .bind(ids)
    .bind(STARTING_BALANCE)
    .execute(&mut **tx)
    .await?;
    Ok(())
}

/// Writes every field present in `patch` to the row of `user_id`.
async fn write_patch(
    tx: &mut Transaction<'_, Postgres>,
    user_id: UserId,
    patch: &AccountPatch,
) -> Result<(), sqlx::Error> {
    if patch.is_empty() {
        return Ok(());
    }
    let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE accounts SET ");
    {
        let mut set = qb.separated(", ");
        if let Some(v) = patch.balance {
            set.push("balance = ").push_bind_unseparated(v);
        }
        if let Some(v) = patch.last_daily_at {
            set.push("last_daily_at = ").push_bind_unseparated(v);
        }
        if let Some(v) = patch.partner_id {
            set.push("partner_id = ").push_bind_unseparated(v.map(to_i64));
        }
        if let Some(v) = patch.married_at {
            set.push("married_at = ").push_bind_unseparated(v);
        }
        if let Some(v) = patch.affection {
            set.push("affection = ").push_bind_unseparated(v);
        }
        if let Some(v) = patch.last_affection_at {
            set.push("last_affection_at = ").push_bind_unseparated(v);
        }
        if let Some(v) = &patch.inventory {
            set.push("inventory = ").push_bind_unseparated(v.clone());
        }
        if let Some(v) = &patch.couple_photo {
            set.push("couple_photo = ").push_bind_unseparated(v.clone());
        }
    }
    qb.push(" WHERE user_id = ").push_bind(to_i64(user_id));
    qb.build().execute(&mut **tx).await?;
    Ok(())
}

async fn fetch_locked(
    tx: &mut Transaction<'_, Postgres>,
    ids: &[i64],
) -> Result<Vec<AccountRow>, sqlx::Error> {
    let sql = format!(
        "SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE user_id = ANY($1) ORDER BY user_id FOR UPDATE"
    );
    sqlx::query_as::<_, AccountRow>(&sql)
        .bind(ids)
        .fetch_all(&mut **tx)
        .await
}

#[async_trait]
impl AccountStore for PgStore {
    #[instrument(level = "debug", skip(self), fields(user_id = user_id.get()))]
    async fn get_or_create(&self, user_id: UserId) -> Result<Account, StoreError> {
        // A no-op DO UPDATE makes RETURNING yield the row on both paths.
        let sql = format!(
            "INSERT INTO accounts (user_id, balance) VALUES ($1, $2) ON CONFLICT (user_id) DO UPDATE SET user_id = EXCLUDED.user_id RETURNING {ACCOUNT_COLUMNS}"
        );
        let row = sqlx::query_as::<_, AccountRow>(&sql)
            .bind(to_i64(user_id))
            .bind(STARTING_BALANCE)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.into())
    }

    #[instrument(level = "debug", skip(self), fields(user_id = user_id.get()))]
    async fn apply_delta(
        &self,
        user_id: UserId,
        counter: Counter,
        delta: i64,
    ) -> Result<Account, StoreError> {
        let mut tx = self.pool.begin().await?;
        ensure_rows(&mut tx, &[to_i64(user_id)]).await?;
        let column = counter.column();
        let sql = format!(
            "UPDATE accounts SET {column} = {column} + $2 WHERE user_id = $1 AND {column} + $2 >= 0 RETURNING {ACCOUNT_COLUMNS}"
        );
        let row = sqlx::query_as::<_, AccountRow>(&sql)
            .bind(to_i64(user_id))
            .bind(delta)
            .fetch_optional(&mut *tx)
            .await?;
        match row {
            Some(row) => {
                tx.commit().await?;
                Ok(row.into())
            }
            None => {
                tx.rollback().await.ok();
                Err(StoreError::NegativeCounter {
                    user_id,
                    field: column,
                })
            }
        }
    }

    #[instrument(level = "debug", skip(self, patch), fields(user_id = user_id.get()))]
    async fn set_fields(
        &self,
        user_id: UserId,
        patch: AccountPatch,
    ) -> Result<Account, StoreError> {
        let ids = [to_i64(user_id)];
        let mut tx = self.pool.begin().await?;
        ensure_rows(&mut tx, &ids).await?;
        write_patch(&mut tx, user_id, &patch).await?;
        let row = fetch_locked(&mut tx, &ids)
            .await?
            .into_iter()
            .next()
            .ok_or(sqlx::Error::RowNotFound)?;
        tx.commit().await?;
        Ok(row.into())
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
        let mut sorted: Vec<i64> = user_ids.iter().copied().map(to_i64).collect();
        sorted.sort_unstable();

        let mut tx = self.pool.begin().await?;
        ensure_rows(&mut tx, &sorted).await?;
        let mut rows = fetch_locked(&mut tx, &sorted).await?;

        let mut working = Vec::with_capacity(user_ids.len());
        for id in user_ids {
            let idx = rows
                .iter()
                .position(|r| r.user_id == to_i64(*id))
                .ok_or(sqlx::Error::RowNotFound)?;
            working.push(Account::from(rows.swap_remove(idx)));
        }
        let before = working.clone();

        let outcome = f(&mut working);
        if outcome.is_err() {
            tx.rollback().await.ok();
            return Ok(outcome);
        }
        for (old, new) in before.iter().zip(&working) {
            write_patch(&mut tx, new.user_id, &AccountPatch::diff(old, new)).await?;
        }
        tx.commit().await?;
        Ok(outcome)
    }
}
