//! Domain data shared by the economy commands.

pub mod item;
