//! Couple details (`ocheck`) and the shared couple photo (`oaddpic`).

pub mod check;
pub mod photo;
pub mod ui;
