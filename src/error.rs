//! Error types shared across the bot.

use serenity::model::id::UserId;
use thiserror::Error;

/// Failures raised by an [`AccountStore`](crate::database::store::AccountStore).
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("account {0} listed more than once in a single update")]
    DuplicateAccount(UserId),

    #[error("{field} of account {user_id} cannot go below zero")]
    NegativeCounter {
        user_id: UserId,
        field: &'static str,
    },

    #[error("{field} of account {user_id} would overflow")]
    Overflow {
        user_id: UserId,
        field: &'static str,
    },
}

/// Top-level failure of a command or interaction. Reported to the user as a
/// generic error by the event handler.
#[derive(Error, Debug)]
pub enum BotError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("discord error: {0}")]
    Discord(#[from] serenity::Error),

    #[error("application state missing from the client data map")]
    MissingState,
}

pub type BotResult<T = ()> = Result<T, BotError>;
