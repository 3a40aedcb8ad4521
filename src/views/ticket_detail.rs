//! Ticket detail page

use serde::Serialize;

use super::state::{Loadable, ViewCell};
use crate::api::Client;
use crate::models::{SuggestedResponse, Ticket, TicketMessage};

/// Everything the detail page shows for one ticket
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TicketDetail {
    pub ticket: Ticket,
    pub responses: Vec<TicketMessage>,
    pub suggestion: Option<SuggestedResponse>,
}

/// Detail view keyed by the `/tickets/{id}` route parameter.
///
/// Loading fans out three calls (ticket, responses, suggestion) and waits
/// for all of them. Responses and suggestion degrade individually to empty;
/// a failed ticket fetch fails the page.
#[derive(Clone)]
pub struct TicketDetailPage {
    client: Client,
    cell: ViewCell<TicketDetail>,
}

impl TicketDetailPage {
    pub fn new(client: Client) -> Self {
        Self { client, cell: ViewCell::new("ticket_detail") }
    }

    /// Load ticket `id`; called on mount and whenever the route id changes
    pub async fn load(&self, id: u64) {
        let token = self.cell.begin();
        let tickets = self.client.tickets();

        let (ticket, responses, suggestion) =
            tokio::join!(tickets.get(id), tickets.responses(id), tickets.suggest_response(id));

        let responses = responses.unwrap_or_else(|e| {
            tracing::error!(ticket_id = id, error = %e, "failed to fetch responses");
            Vec::new()
        });
        let suggestion = suggestion
            .map_err(|e| tracing::error!(ticket_id = id, error = %e, "failed to fetch suggested response"))
            .ok();

        let outcome = ticket.map(|ticket| TicketDetail { ticket, responses, suggestion });
        self.cell.settle(token, outcome);
    }

    pub fn state(&self) -> Loadable<TicketDetail> {
        self.cell.snapshot()
    }

    pub fn unmount(&self) {
        self.cell.unmount();
    }
}
