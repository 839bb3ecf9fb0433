//! This module contains all commands related to the currency and the ring shop.

pub mod addcash;
pub mod core;
pub mod daily;
pub mod profile;
pub mod shop;

pub use addcash::run_prefix as addcash_prefix;
pub use daily::run::run_prefix as daily_prefix;
pub use profile::run::run_prefix as profile_prefix;
pub use shop::run::run_prefix as shop_prefix;
