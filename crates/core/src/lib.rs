//! Domain types shared by the ticketdesk server, database, and client crates.

pub mod error;
pub mod ticket;
pub mod types;
