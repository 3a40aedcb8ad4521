//! Agents resource (`/agents`)

use super::Client;
use crate::error::Result;
use crate::models::{Agent, AgentCreate, AgentQuery, AgentStats, AgentUpdate, Ticket};

pub struct AgentsService {
    client: Client,
}

impl AgentsService {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &AgentQuery) -> Result<Vec<Agent>> {
        self.client.get("/agents", &query.to_params()).await
    }

    pub async fn get(&self, agent_id: u64) -> Result<Agent> {
        self.client.get(&format!("/agents/{}", agent_id), &[]).await
    }

    pub async fn create(&self, agent: &AgentCreate) -> Result<Agent> {
        self.client.post("/agents", Some(agent), &[]).await
    }

    pub async fn update(&self, agent_id: u64, update: &AgentUpdate) -> Result<Agent> {
        self.client.put(&format!("/agents/{}", agent_id), update).await
    }

    pub async fn delete(&self, agent_id: u64) -> Result<()> {
        self.client.delete(&format!("/agents/{}", agent_id)).await
    }

    /// Tickets currently assigned to the agent
    pub async fn tickets(&self, agent_id: u64) -> Result<Vec<Ticket>> {
        self.client.get(&format!("/agents/{}/tickets", agent_id), &[]).await
    }

    pub async fn stats(&self, agent_id: u64) -> Result<AgentStats> {
        self.client.get(&format!("/agents/{}/stats", agent_id), &[]).await
    }
}

#[cfg(test)]
mod tests {
    use crate::models::{AgentQuery, AgentUpdate};
    use crate::testing::{agent_json, client_for, ticket_json};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_list_with_availability_filter() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/agents"))
            .and(query_param("is_available", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([agent_json(1, "Sam", true)])))
            .expect(1)
            .mount(&server)
            .await;

        let query = AgentQuery { is_available: Some(true), ..Default::default() };
        let agents = client_for(&server).agents().list(&query).await.unwrap();
        assert_eq!(agents.len(), 1);
        assert!(agents[0].is_available);
    }

    #[tokio::test]
    async fn test_update_tickets_and_stats() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/v1/agents/2"))
            .and(body_json(json!({ "is_available": false })))
            .respond_with(ResponseTemplate::new(200).set_body_json(agent_json(2, "Ana", false)))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v1/agents/2/tickets"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([ticket_json(11, "in_progress")])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v1/agents/2/stats"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "agent_id": 2,
                "name": "Ana",
                "current_workload": { "open": 1, "in_progress": 2, "total_active": 3 },
                "performance": {
                    "total_handled": 40, "resolved": 30,
                    "avg_resolution_time": 2.5, "satisfaction_score": 4.4
                },
                "capacity": { "max_tickets": 10, "current_tickets": 3, "available_slots": 7 }
            })))
            .mount(&server)
            .await;

        let agents = client_for(&server).agents();
        let update = AgentUpdate { is_available: Some(false), ..Default::default() };
        assert!(!agents.update(2, &update).await.unwrap().is_available);
        assert_eq!(agents.tickets(2).await.unwrap()[0].id, 11);
        let stats = agents.stats(2).await.unwrap();
        assert_eq!(stats.current_workload.total_active, 3);
        assert_eq!(stats.capacity.available_slots, 7);
    }
}
