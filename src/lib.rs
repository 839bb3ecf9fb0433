// Library entry so integration tests can reach the same modules the binary uses.
pub mod commands;
pub mod config;
pub mod constants;
pub mod cooldown;
pub mod database;
pub mod error;
pub mod handler;
pub mod interactions;
pub mod model;
pub mod services;
pub mod ui;

pub use model::AppState;
