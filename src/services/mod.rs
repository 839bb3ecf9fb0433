//! Service layer: the business rules behind each command, generic over the
//! account store so they run unchanged against Postgres or in memory.

pub mod economy;
pub mod relationship;
