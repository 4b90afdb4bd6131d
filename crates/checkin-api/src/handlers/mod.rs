//! Route handlers.

pub mod checkin;
pub mod health;
