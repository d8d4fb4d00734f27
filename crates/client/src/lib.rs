//! Client-side building blocks for the ticketdesk API: a typed HTTP client
//! and an in-memory ticket cache with reconciliation rules.

pub mod api;
pub mod cache;
