pub mod ticket;

pub use ticket::{CreateTicket, Ticket, TicketFilter, TicketListParams, UpdateTicket};
