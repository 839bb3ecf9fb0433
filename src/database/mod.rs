//! Persistence for accounts. `store` defines the contract the services use;
//! `postgres` backs it in production and `memory` in tests.

pub mod init;
pub mod memory;
pub mod models;
pub mod postgres;
pub mod store;
