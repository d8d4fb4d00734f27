//! Command-line front end for the ticketdesk API.
//!
//! One subcommand per user action: list the board, raise a ticket, move a
//! ticket's status or priority, delete a ticket.

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use ticketdesk_core::ticket::{TicketPriority, TicketStatus};
use ticketdesk_core::types::DbId;

use ticketdesk_client::api::{CreateTicketRequest, ListFilter, Ticket, TicketsClient};
use ticketdesk_client::cache::TicketCache;

#[derive(Parser)]
#[command(name = "ticketdesk", version, about = "Helpdesk ticket CLI")]
struct Cli {
    /// Base URL of the ticketdesk server.
    #[arg(long, global = true, env = "TICKETDESK_URL", default_value = "http://localhost:5000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List tickets, optionally filtered.
    List {
        /// Substring to match against title, description, or submitter.
        #[arg(long)]
        search: Option<String>,
        /// Status filter: Open, "In Progress", or Resolved.
        #[arg(long)]
        status: Option<TicketStatus>,
        /// Priority filter: Low, Medium, or High.
        #[arg(long)]
        priority: Option<TicketPriority>,
    },
    /// Raise a new ticket (always starts Open).
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        /// Who is raising the ticket.
        #[arg(long = "created-by")]
        created_by: String,
        /// Priority (defaults to Low).
        #[arg(long)]
        priority: Option<TicketPriority>,
    },
    /// Change a ticket's status.
    Status { id: DbId, status: TicketStatus },
    /// Change a ticket's priority.
    Priority { id: DbId, priority: TicketPriority },
    /// Delete a ticket.
    Delete { id: DbId },
}

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let client = TicketsClient::new(&cli.url);

    match cli.command {
        Commands::List {
            search,
            status,
            priority,
        } => {
            let filter = ListFilter {
                search,
                status,
                priority,
            };
            let mut cache = TicketCache::new();
            cache.replace_all(client.list(&filter).await?);

            if cache.is_empty() {
                println!("No tickets.");
                return Ok(());
            }
            for ticket in cache.iter() {
                print_ticket(ticket);
            }
            println!("{} ticket(s)", cache.len());
        }
        Commands::Create {
            title,
            description,
            created_by,
            priority,
        } => {
            let created = client
                .create(&CreateTicketRequest {
                    title,
                    description,
                    created_by,
                    priority,
                })
                .await?;
            println!("Created ticket #{}", created.id);
            print_ticket(&created);
        }
        Commands::Status { id, status } => {
            let updated = client.update_status(id, status).await?;
            print_ticket(&updated);
        }
        Commands::Priority { id, priority } => {
            let updated = client.update_priority(id, priority).await?;
            print_ticket(&updated);
        }
        Commands::Delete { id } => {
            client.delete(id).await?;
            println!("Deleted ticket #{id}");
        }
    }

    Ok(())
}

/// Render one ticket card. Priority carries the same colour coding the web
/// UI used: Low green, Medium yellow, High red.
fn print_ticket(ticket: &Ticket) {
    let priority = match ticket.priority {
        TicketPriority::Low => ticket.priority.as_str().green(),
        TicketPriority::Medium => ticket.priority.as_str().yellow(),
        TicketPriority::High => ticket.priority.as_str().red(),
    };

    println!("#{} {}", ticket.id, ticket.title.bold());
    println!("    {}", ticket.description);
    println!("    Created by: {}", ticket.created_by);
    println!("    Status: {}  Priority: {}", ticket.status, priority);
}
