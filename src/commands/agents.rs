//! Agent commands

use std::slice;

use autosupport_console::models::{AgentCreate, AgentQuery, AgentUpdate};
use autosupport_console::output::OutputFormat;
use autosupport_console::render;
use autosupport_console::views::AgentRosterPage;
use autosupport_console::Client;

use super::{show_page, CommandResult};
use crate::AgentCommands;

pub async fn handle(action: AgentCommands, client: &Client, format: OutputFormat) -> CommandResult {
    match action {
        AgentCommands::List { available: None, skip: None, limit: None } => {
            let page = AgentRosterPage::new(client.clone());
            page.mount().await;
            show_page(&page.state(), format, render::agent_roster)?;
        }
        AgentCommands::List { available, skip, limit } => {
            let query = AgentQuery { is_available: available, skip, limit };
            let agents = client.agents().list(&query).await?;
            format.print(&agents, |a| render::agents_table(a));
        }
        AgentCommands::Show { id } => {
            let agent = client.agents().get(id).await?;
            format.print(&agent, |a| render::agents_table(slice::from_ref(a)));
        }
        AgentCommands::Create { name, email, expertise, max_tickets } => {
            let body = AgentCreate { max_tickets, ..AgentCreate::new(name, email, expertise) };
            let agent = client.agents().create(&body).await?;
            println!("Created agent: {} (#{})", agent.name, agent.id);
        }
        AgentCommands::Update { id, name, expertise, max_tickets, available } => {
            let update = AgentUpdate { name, expertise, max_tickets, is_available: available };
            if update == AgentUpdate::default() {
                return Err("nothing to update".into());
            }
            let agent = client.agents().update(id, &update).await?;
            format.print(&agent, |a| render::agents_table(slice::from_ref(a)));
        }
        AgentCommands::Delete { id } => {
            client.agents().delete(id).await?;
            println!("Deleted agent {}", id);
        }
        AgentCommands::Tickets { id } => {
            let tickets = client.agents().tickets(id).await?;
            format.print(&tickets, |t| render::tickets_table(t));
        }
        AgentCommands::Stats { id } => {
            let stats = client.agents().stats(id).await?;
            format.print(&stats, render::agent_stats);
        }
    }
    Ok(())
}
