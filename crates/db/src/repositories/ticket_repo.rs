//! Repository for the `tickets` table.

use sqlx::PgPool;
use ticketdesk_core::ticket::{TicketPriority, TicketStatus};
use ticketdesk_core::types::DbId;

use crate::models::ticket::{CreateTicket, Ticket, TicketFilter, UpdateTicket};

/// Column list for tickets queries.
const COLUMNS: &str = "id, title, description, created_by, status, priority, \
    created_at, updated_at";

/// Provides CRUD operations for tickets.
pub struct TicketRepo;

impl TicketRepo {
    /// Create a new ticket, returning the created row.
    ///
    /// Status is always forced to Open; the caller supplies the (already
    /// validated) priority.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTicket,
        priority: TicketPriority,
    ) -> Result<Ticket, sqlx::Error> {
        let query = format!(
            "INSERT INTO tickets (title, description, created_by, status, priority)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Ticket>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.created_by)
            .bind(TicketStatus::Open.as_str())
            .bind(priority.as_str())
            .fetch_one(pool)
            .await
    }

    /// Find a ticket by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Ticket>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tickets WHERE id = $1");
        sqlx::query_as::<_, Ticket>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List tickets matching the filter, in natural store order (ascending id).
    ///
    /// The search term matches title OR description OR createdBy
    /// (case-insensitive substring); status and priority are exact matches.
    pub async fn list(pool: &PgPool, filter: &TicketFilter) -> Result<Vec<Ticket>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tickets
             WHERE ($1::TEXT IS NULL
                    OR title ILIKE '%' || $1 || '%'
                    OR description ILIKE '%' || $1 || '%'
                    OR created_by ILIKE '%' || $1 || '%')
               AND ($2::TEXT IS NULL OR status = $2)
               AND ($3::TEXT IS NULL OR priority = $3)
             ORDER BY id"
        );
        sqlx::query_as::<_, Ticket>(&query)
            .bind(filter.search.as_deref())
            .bind(filter.status.map(TicketStatus::as_str))
            .bind(filter.priority.map(TicketPriority::as_str))
            .fetch_all(pool)
            .await
    }

    /// Apply a partial-field update, returning the updated row.
    ///
    /// Enum fields must already be canonical labels; absent fields keep
    /// their current values (last-write-wins, no version check).
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTicket,
    ) -> Result<Option<Ticket>, sqlx::Error> {
        let query = format!(
            "UPDATE tickets SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                created_by = COALESCE($4, created_by),
                status = COALESCE($5, status),
                priority = COALESCE($6, priority),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Ticket>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.created_by)
            .bind(&input.status)
            .bind(&input.priority)
            .fetch_optional(pool)
            .await
    }

    /// Delete a ticket by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tickets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
