//! In-memory ticket cache keyed by id.
//!
//! Replaces the original frontend's flat array + splice bookkeeping with a
//! keyed collection and explicit reconciliation rules: the cache only
//! changes after the server has confirmed an operation. Display filtering
//! composes search AND status AND priority over whatever is currently held.

use indexmap::IndexMap;
use ticketdesk_core::ticket::{TicketPriority, TicketStatus};
use ticketdesk_core::types::DbId;

use crate::api::Ticket;

/// Client-side display filter.
#[derive(Debug, Default, Clone)]
pub struct ClientFilter {
    pub search: Option<String>,
    pub status: Option<TicketStatus>,
    pub priority: Option<TicketPriority>,
}

impl ClientFilter {
    /// Whether a ticket passes all three criteria (absent criteria pass).
    pub fn matches(&self, ticket: &Ticket) -> bool {
        let search_ok = match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(term) => {
                let term = term.to_lowercase();
                ticket.title.to_lowercase().contains(&term)
                    || ticket.description.to_lowercase().contains(&term)
                    || ticket.created_by.to_lowercase().contains(&term)
            }
        };
        let status_ok = self.status.map_or(true, |s| ticket.status == s);
        let priority_ok = self.priority.map_or(true, |p| ticket.priority == p);
        search_ok && status_ok && priority_ok
    }
}

/// The full ticket list held by the client, keyed by id in insertion order.
#[derive(Debug, Default)]
pub struct TicketCache {
    tickets: IndexMap<DbId, Ticket>,
}

impl TicketCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole cache with a freshly fetched list.
    pub fn replace_all(&mut self, tickets: Vec<Ticket>) {
        self.tickets = tickets.into_iter().map(|t| (t.id, t)).collect();
    }

    /// Add a server-confirmed new ticket (appended, no optimistic update).
    pub fn insert(&mut self, ticket: Ticket) {
        self.tickets.insert(ticket.id, ticket);
    }

    /// Reconcile a server-confirmed update. The ticket keeps its position in
    /// the list; an update for an id we do not hold is added at the end.
    pub fn apply(&mut self, ticket: Ticket) {
        self.tickets.insert(ticket.id, ticket);
    }

    /// Drop a server-confirmed deletion, preserving the order of the rest.
    pub fn remove(&mut self, id: DbId) -> Option<Ticket> {
        self.tickets.shift_remove(&id)
    }

    pub fn get(&self, id: DbId) -> Option<&Ticket> {
        self.tickets.get(&id)
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    /// All held tickets in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Ticket> {
        self.tickets.values()
    }

    /// Tickets passing the composed filter, in insertion order.
    pub fn filtered<'a>(&'a self, filter: &'a ClientFilter) -> impl Iterator<Item = &'a Ticket> {
        self.tickets.values().filter(|t| filter.matches(t))
    }
}
