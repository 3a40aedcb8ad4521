//! Ticket commands

use std::slice;

use autosupport_console::output::OutputFormat;
use autosupport_console::render;
use autosupport_console::views::create_ticket::SUBMIT_OK_NOTICE;
use autosupport_console::views::{CreateTicketPage, SubmitOutcome, TicketDetailPage, TicketDraft, TicketListPage};
use autosupport_console::{Client, MessageCreate, Ticket, TicketQuery, TicketUpdate};

use super::{show_page, CommandResult};
use crate::TicketCommands;

fn print_ticket(ticket: &Ticket, format: OutputFormat) {
    format.print(ticket, |t| render::tickets_table(slice::from_ref(t)));
}

pub async fn handle(action: TicketCommands, client: &Client, format: OutputFormat) -> CommandResult {
    match action {
        TicketCommands::List { status } => {
            let page = TicketListPage::new(client.clone());
            page.set_filter(status).await;
            show_page(&page.state(), format, |state| render::ticket_list(state, page.filter()))?;
        }
        TicketCommands::Search { status, category, priority, skip, limit } => {
            let query = TicketQuery { status, category, priority, skip, limit };
            let tickets = client.tickets().list(&query).await?;
            format.print(&tickets, |t| render::tickets_table(t));
        }
        TicketCommands::Show { id } => {
            let page = TicketDetailPage::new(client.clone());
            page.load(id).await;
            show_page(&page.state(), format, render::ticket_detail)?;
        }
        TicketCommands::Create { name, email, subject, description, analyze } => {
            let draft = TicketDraft { customer_name: name, customer_email: email, subject, description };
            let mut page = CreateTicketPage::with_draft(client.clone(), draft);

            if analyze && page.can_analyze() {
                page.analyze().await;
                if let Some(prediction) = page.prediction() {
                    format.print(prediction, render::prediction);
                }
            }

            match page.submit().await {
                SubmitOutcome::Created { ticket, navigate_to } => {
                    if format == OutputFormat::Table {
                        println!("{}", SUBMIT_OK_NOTICE);
                    }
                    print_ticket(&ticket, format);
                    tracing::debug!(route = %navigate_to, "back to list");
                }
                SubmitOutcome::Incomplete(missing) => {
                    return Err(format!("missing required fields: {}", missing.join(", ")).into());
                }
                SubmitOutcome::Failed { notice, error } => {
                    return Err(format!("{} ({})", notice, error).into());
                }
            }
        }
        TicketCommands::Update { id, subject, description, category, priority, status } => {
            let update = TicketUpdate { subject, description, category, priority, status };
            if update.is_empty() {
                return Err("nothing to update".into());
            }
            let ticket = client.tickets().update(id, &update).await?;
            print_ticket(&ticket, format);
        }
        TicketCommands::Assign { id, agent } => {
            let ticket = client.tickets().assign(id, agent).await?;
            println!("Assigned {} to agent {}", ticket.ticket_number, agent);
        }
        TicketCommands::Delete { id } => {
            client.tickets().delete(id).await?;
            println!("Deleted ticket {}", id);
        }
        TicketCommands::Responses { id } => {
            let responses = client.tickets().responses(id).await?;
            format.print(&responses, |r| render::responses(r));
        }
        TicketCommands::Respond { id, message, agent } => {
            let body = match agent {
                Some(name) => MessageCreate::from_agent(id, name, message),
                None => MessageCreate::from_customer(id, message),
            };
            let response = client.tickets().add_response(id, &body).await?;
            format.print(&response, |r| render::responses(slice::from_ref(r)));
        }
        TicketCommands::Suggest { id } => {
            let suggestion = client.tickets().suggest_response(id).await?;
            format.print(&suggestion, render::suggestion);
        }
    }
    Ok(())
}
