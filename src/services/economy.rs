//! Currency rules: the daily grant, ring purchases and admin credits.

use crate::commands::economy::core::item::{self, ShopItem};
use crate::constants::{DAILY_GRANT, MAX_CASH_GRANT};
use crate::cooldown::{self, CooldownActive};
use crate::database::models::{Account, Counter};
use crate::database::store::AccountStore;
use crate::error::StoreError;
use chrono::{DateTime, Utc};
use serenity::model::id::UserId;
use tracing::{info, instrument};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DailyOutcome {
    Granted { amount: i64, balance: i64 },
    OnCooldown(CooldownActive),
}

/// Grants the daily allowance if the 24h gate is open. The gate check, the
/// timestamp and the credit commit together.
#[instrument(level = "debug", skip(store), fields(user_id = user_id.get()))]
pub async fn claim_daily<S: AccountStore>(
    store: &S,
    user_id: UserId,
    now: DateTime<Utc>,
) -> Result<DailyOutcome, StoreError> {
    let outcome = store
        .update(
            &[user_id],
            move |accounts: &mut [Account]| -> Result<i64, CooldownActive> {
                let account = &mut accounts[0];
                cooldown::DAILY.check(now, account.last_daily_at)?;
                account.balance += DAILY_GRANT;
                account.last_daily_at = Some(now);
                Ok(account.balance)
            },
        )
        .await?;
    Ok(match outcome {
        Ok(balance) => {
            info!(target: "economy.daily", user_id = user_id.get(), balance, "daily granted");
            DailyOutcome::Granted {
                amount: DAILY_GRANT,
                balance,
            }
        }
        Err(active) => DailyOutcome::OnCooldown(active),
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurchaseOutcome {
    UnknownItem,
    InsufficientFunds {
        item: &'static ShopItem,
        balance: i64,
    },
    Purchased {
        item: &'static ShopItem,
        balance: i64,
    },
}

/// Buys one unit of `item_id`. Debit and inventory grant happen in the same
/// update, so a purchase either fully happens or leaves the account alone.
#[instrument(level = "debug", skip(store), fields(user_id = user_id.get()))]
pub async fn purchase<S: AccountStore>(
    store: &S,
    user_id: UserId,
    item_id: &str,
) -> Result<PurchaseOutcome, StoreError> {
    let Some(item) = item::find_by_id(item_id) else {
        return Ok(PurchaseOutcome::UnknownItem);
    };
    let outcome = store
        .update(
            &[user_id],
            move |accounts: &mut [Account]| -> Result<i64, i64> {
                let account = &mut accounts[0];
                if account.balance < item.price {
                    return Err(account.balance);
                }
                account.balance -= item.price;
                account.inventory.push(item.id.to_string());
                Ok(account.balance)
            },
        )
        .await?;
    Ok(match outcome {
        Ok(balance) => {
            info!(target: "economy.shop", user_id = user_id.get(), item = item.id, balance, "purchase");
            PurchaseOutcome::Purchased { item, balance }
        }
        Err(balance) => PurchaseOutcome::InsufficientFunds { item, balance },
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddCashOutcome {
    NotAuthorized,
    InvalidAmount,
    Credited {
        target: UserId,
        amount: i64,
        balance: i64,
    },
}

/// Credits `amount` to `target`. Only ids listed in `admins` may call this.
#[instrument(level = "debug", skip(store, admins), fields(actor = actor.get(), target = target.get()))]
pub async fn add_cash<S: AccountStore>(
    store: &S,
    admins: &[UserId],
    actor: UserId,
    target: UserId,
    amount: Option<i64>,
) -> Result<AddCashOutcome, StoreError> {
    if !admins.contains(&actor) {
        return Ok(AddCashOutcome::NotAuthorized);
    }
    let Some(amount) = amount.filter(|a| (1..=MAX_CASH_GRANT).contains(a)) else {
        return Ok(AddCashOutcome::InvalidAmount);
    };
    let account = store.apply_delta(target, Counter::Balance, amount).await?;
    info!(
        target: "economy.addcash",
        actor = actor.get(),
        credited = target.get(),
        amount,
        "admin credit"
    );
    Ok(AddCashOutcome::Credited {
        target,
        amount,
        balance: account.balance,
    })
}
