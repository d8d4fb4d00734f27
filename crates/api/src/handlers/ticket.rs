//! Handlers for the `/tickets` resource.
//!
//! All enum-valued inputs are validated against the closed status/priority
//! sets here, at the service boundary; the table itself stays permissive.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use ticketdesk_core::error::CoreError;
use ticketdesk_core::ticket::{TicketPriority, TicketStatus};
use ticketdesk_core::types::DbId;
use ticketdesk_db::models::{CreateTicket, Ticket, TicketFilter, TicketListParams, UpdateTicket};
use ticketdesk_db::repositories::TicketRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/tickets
///
/// List tickets, optionally narrowed by `search` (substring OR-group over
/// title/description/createdBy), `status`, and `priority`. The three
/// criteria are AND-conjoined. `All`, the empty string, and absence all
/// disable a criterion.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<TicketListParams>,
) -> AppResult<Json<Vec<Ticket>>> {
    let filter = build_filter(&params)?;
    let tickets = TicketRepo::list(&state.pool, &filter).await?;
    Ok(Json(tickets))
}

/// POST /api/tickets
///
/// Create a ticket. Status is always Open regardless of any status supplied
/// by the caller; priority defaults to Low.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTicket>,
) -> AppResult<(StatusCode, Json<Ticket>)> {
    require_non_empty("title", &input.title)?;
    require_non_empty("description", &input.description)?;
    require_non_empty("createdBy", &input.created_by)?;

    let priority = match input.priority.as_deref().map(str::trim) {
        None | Some("") => TicketPriority::default(),
        Some(p) => p.parse()?,
    };

    let ticket = TicketRepo::create(&state.pool, &input, priority).await?;
    Ok((StatusCode::CREATED, Json(ticket)))
}

/// PATCH /api/tickets/{id}
///
/// Apply a partial-field merge to the identified ticket and return the
/// updated record. Last-write-wins; no version check.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTicket>,
) -> AppResult<Json<Ticket>> {
    let fields = validate_update(input)?;
    let ticket = TicketRepo::update(&state.pool, id, &fields)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Ticket",
            id,
        }))?;
    Ok(Json(ticket))
}

/// DELETE /api/tickets/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    let deleted = TicketRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(serde_json::json!({
            "deleted": true,
            "id": id,
        })))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Ticket",
            id,
        }))
    }
}

/// Translate raw query parameters into a validated [`TicketFilter`].
fn build_filter(params: &TicketListParams) -> Result<TicketFilter, CoreError> {
    let search = params
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    Ok(TicketFilter {
        search,
        status: TicketStatus::parse_filter(params.status.as_deref())?,
        priority: TicketPriority::parse_filter(params.priority.as_deref())?,
    })
}

/// Validate a partial update and canonicalize its enum labels so the stored
/// values always match the closed sets exactly.
fn validate_update(input: UpdateTicket) -> Result<UpdateTicket, CoreError> {
    if let Some(ref title) = input.title {
        require_non_empty("title", title)?;
    }
    if let Some(ref description) = input.description {
        require_non_empty("description", description)?;
    }
    if let Some(ref created_by) = input.created_by {
        require_non_empty("createdBy", created_by)?;
    }

    let status = input
        .status
        .as_deref()
        .map(|s| s.parse::<TicketStatus>())
        .transpose()?
        .map(|s| s.as_str().to_string());

    let priority = input
        .priority
        .as_deref()
        .map(|p| p.parse::<TicketPriority>())
        .transpose()?
        .map(|p| p.as_str().to_string());

    Ok(UpdateTicket {
        status,
        priority,
        ..input
    })
}

fn require_non_empty(field: &'static str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    Ok(())
}
