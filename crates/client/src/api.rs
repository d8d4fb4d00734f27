//! Typed HTTP client for the ticketdesk REST API.

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use ticketdesk_core::ticket::{TicketPriority, TicketStatus};
use ticketdesk_core::types::DbId;

/// A ticket as seen by the client.
///
/// `status` and `priority` are typed against the closed sets; timestamps and
/// any other extra fields the server returns are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    pub id: DbId,
    pub title: String,
    pub description: String,
    #[serde(rename = "createdBy")]
    pub created_by: String,
    pub status: TicketStatus,
    pub priority: TicketPriority,
}

/// Request body for creating a ticket.
#[derive(Debug, Serialize)]
pub struct CreateTicketRequest {
    pub title: String,
    pub description: String,
    #[serde(rename = "createdBy")]
    pub created_by: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TicketPriority>,
}

/// Request body for a partial-field ticket update.
#[derive(Debug, Default, Serialize)]
pub struct UpdateTicketRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "createdBy", skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TicketStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TicketPriority>,
}

/// Server-side listing filter, passed through as query parameters.
#[derive(Debug, Default, Clone)]
pub struct ListFilter {
    pub search: Option<String>,
    pub status: Option<TicketStatus>,
    pub priority: Option<TicketPriority>,
}

/// Error body returned by the API (`{ "error": ..., "code": ... }`).
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, etc.).
    #[error("failed to reach the ticketdesk server: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server responded with {status}: {message}")]
    Api { status: StatusCode, message: String },
}

pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP client for the four ticket operations.
pub struct TicketsClient {
    http: Client,
    base_url: String,
}

impl TicketsClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn tickets_url(&self) -> String {
        format!("{}/api/tickets", self.base_url)
    }

    fn ticket_url(&self, id: DbId) -> String {
        format!("{}/api/tickets/{id}", self.base_url)
    }

    /// GET /api/tickets with optional search/status/priority filters.
    pub async fn list(&self, filter: &ListFilter) -> ApiResult<Vec<Ticket>> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(ref search) = filter.search {
            query.push(("search", search.clone()));
        }
        if let Some(status) = filter.status {
            query.push(("status", status.as_str().to_string()));
        }
        if let Some(priority) = filter.priority {
            query.push(("priority", priority.as_str().to_string()));
        }

        let response = self.http.get(self.tickets_url()).query(&query).send().await?;
        Self::parse(response).await
    }

    /// POST /api/tickets, returning the persisted ticket with its id.
    pub async fn create(&self, request: &CreateTicketRequest) -> ApiResult<Ticket> {
        let response = self
            .http
            .post(self.tickets_url())
            .json(request)
            .send()
            .await?;
        Self::parse(response).await
    }

    /// PATCH /api/tickets/{id} with a partial-field merge.
    pub async fn update(&self, id: DbId, request: &UpdateTicketRequest) -> ApiResult<Ticket> {
        let response = self
            .http
            .patch(self.ticket_url(id))
            .json(request)
            .send()
            .await?;
        Self::parse(response).await
    }

    /// Change only the status of a ticket.
    pub async fn update_status(&self, id: DbId, status: TicketStatus) -> ApiResult<Ticket> {
        self.update(
            id,
            &UpdateTicketRequest {
                status: Some(status),
                ..UpdateTicketRequest::default()
            },
        )
        .await
    }

    /// Change only the priority of a ticket.
    pub async fn update_priority(&self, id: DbId, priority: TicketPriority) -> ApiResult<Ticket> {
        self.update(
            id,
            &UpdateTicketRequest {
                priority: Some(priority),
                ..UpdateTicketRequest::default()
            },
        )
        .await
    }

    /// DELETE /api/tickets/{id}.
    pub async fn delete(&self, id: DbId) -> ApiResult<()> {
        let response = self.http.delete(self.ticket_url(id)).send().await?;
        Self::check(response).await?;
        Ok(())
    }

    /// Turn a non-success response into [`ApiError::Api`] with the server's
    /// message, falling back to the raw body when it isn't the JSON shape.
    async fn check(response: reqwest::Response) -> ApiResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .map(|b| b.error)
            .unwrap_or(body);
        Err(ApiError::Api { status, message })
    }

    async fn parse<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
        let response = Self::check(response).await?;
        Ok(response.json::<T>().await?)
    }
}
