//! REST client for the ScoreBee backend auth endpoints.

pub mod api;
pub mod types;
