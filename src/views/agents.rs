//! Agent roster page

use super::state::{Loadable, ViewCell};
use crate::api::Client;
use crate::models::{Agent, AgentQuery};

#[derive(Clone)]
pub struct AgentRosterPage {
    client: Client,
    cell: ViewCell<Vec<Agent>>,
}

impl AgentRosterPage {
    pub fn new(client: Client) -> Self {
        Self { client, cell: ViewCell::new("agents") }
    }

    pub async fn mount(&self) {
        let token = self.cell.begin();
        let result = self.client.agents().list(&AgentQuery::default()).await;
        self.cell.settle(token, result);
    }

    pub fn state(&self) -> Loadable<Vec<Agent>> {
        self.cell.snapshot()
    }

    pub fn unmount(&self) {
        self.cell.unmount();
    }
}
