//! Tickets resource (`/tickets`)

use super::Client;
use crate::error::Result;
use crate::models::{
    MessageCreate, SuggestedResponse, Ticket, TicketAssign, TicketCreate, TicketMessage, TicketQuery,
    TicketUpdate,
};

pub struct TicketsService {
    client: Client,
}

impl TicketsService {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// `GET /tickets`; a query without a status omits the parameter entirely
    pub async fn list(&self, query: &TicketQuery) -> Result<Vec<Ticket>> {
        self.client.get("/tickets", &query.to_params()).await
    }

    pub async fn get(&self, ticket_id: u64) -> Result<Ticket> {
        self.client.get(&format!("/tickets/{}", ticket_id), &[]).await
    }

    pub async fn create(&self, ticket: &TicketCreate) -> Result<Ticket> {
        self.client.post("/tickets", Some(ticket), &[]).await
    }

    pub async fn update(&self, ticket_id: u64, update: &TicketUpdate) -> Result<Ticket> {
        self.client.put(&format!("/tickets/{}", ticket_id), update).await
    }

    pub async fn delete(&self, ticket_id: u64) -> Result<()> {
        self.client.delete(&format!("/tickets/{}", ticket_id)).await
    }

    pub async fn assign(&self, ticket_id: u64, agent_id: u64) -> Result<Ticket> {
        self.client
            .post(&format!("/tickets/{}/assign", ticket_id), Some(&TicketAssign { agent_id }), &[])
            .await
    }

    pub async fn responses(&self, ticket_id: u64) -> Result<Vec<TicketMessage>> {
        self.client.get(&format!("/tickets/{}/responses", ticket_id), &[]).await
    }

    pub async fn add_response(&self, ticket_id: u64, message: &MessageCreate) -> Result<TicketMessage> {
        self.client
            .post(&format!("/tickets/{}/responses", ticket_id), Some(message), &[])
            .await
    }

    pub async fn suggest_response(&self, ticket_id: u64) -> Result<SuggestedResponse> {
        self.client
            .post(&format!("/tickets/{}/suggest-response", ticket_id), None::<&()>, &[])
            .await
    }
}
