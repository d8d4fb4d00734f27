//! Ticket model and DTOs.
//!
//! JSON field names are camelCase (`createdBy`) to match the persisted
//! record shape the frontend consumes.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ticketdesk_core::ticket::{TicketPriority, TicketStatus};
use ticketdesk_core::types::{DbId, Timestamp};

/// A row from the `tickets` table.
///
/// `status` and `priority` are stored as their UI labels; rows written
/// through the service layer always hold members of the closed sets.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Ticket {
    pub id: DbId,
    pub title: String,
    pub description: String,
    #[serde(rename = "createdBy")]
    pub created_by: String,
    pub status: String,
    pub priority: String,
    #[serde(rename = "createdAt")]
    pub created_at: Timestamp,
    #[serde(rename = "updatedAt")]
    pub updated_at: Timestamp,
}

/// DTO for creating a new ticket.
///
/// There is intentionally no `status` field: creation always yields an Open
/// ticket and any caller-supplied status is ignored.
#[derive(Debug, Deserialize)]
pub struct CreateTicket {
    pub title: String,
    pub description: String,
    #[serde(rename = "createdBy")]
    pub created_by: String,
    pub priority: Option<String>,
}

/// DTO for a partial-field ticket update. Absent fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTicket {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "createdBy")]
    pub created_by: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
}

/// Query parameters accepted by the ticket listing endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct TicketListParams {
    pub search: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
}

/// A validated listing filter.
///
/// `search` is a case-insensitive substring match against title OR
/// description OR createdBy; `status` and `priority` are exact matches
/// AND-conjoined with the search group.
#[derive(Debug, Default, Clone)]
pub struct TicketFilter {
    pub search: Option<String>,
    pub status: Option<TicketStatus>,
    pub priority: Option<TicketPriority>,
}
