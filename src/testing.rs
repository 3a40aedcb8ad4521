//! Fixtures shared by the crate's tests

use serde_json::{json, Value};
use wiremock::MockServer;

use crate::api::Client;

pub fn client_for(server: &MockServer) -> Client {
    Client::with_base_url(format!("{}/api/v1", server.uri())).unwrap()
}

pub fn ticket_json(id: u64, status: &str) -> Value {
    json!({
        "id": id,
        "ticket_number": format!("TKT-20240105-{:06}", id),
        "customer_name": "Jane Doe",
        "customer_email": "jane@example.com",
        "subject": "Cannot access my account",
        "description": "Login fails with an error after the password reset",
        "category": "account",
        "category_confidence": 0.75,
        "priority": "high",
        "sentiment": "negative",
        "sentiment_score": 0.3,
        "urgency_score": 0.6,
        "status": status,
        "assigned_to": null,
        "created_at": "2024-01-05T10:00:00Z",
        "updated_at": null,
        "resolved_at": null
    })
}

pub fn agent_json(id: u64, name: &str, available: bool) -> Value {
    json!({
        "id": id,
        "name": name,
        "email": format!("{}@example.com", name.to_lowercase()),
        "expertise": "technical,account",
        "max_tickets": 10,
        "is_active": true,
        "is_available": available,
        "total_tickets_handled": 48,
        "average_resolution_time": 3.5,
        "customer_satisfaction_score": 4.6,
        "created_at": "2024-01-01T09:00:00Z"
    })
}

pub fn dashboard_json() -> Value {
    json!({
        "ticket_stats": {
            "total_tickets": 12,
            "open_tickets": 5,
            "in_progress_tickets": 3,
            "resolved_tickets": 3,
            "closed_tickets": 1,
            "average_resolution_time": 4.5,
            "tickets_by_category": { "billing": 3, "feature_request": 2 },
            "tickets_by_priority": { "high": 4, "low": 8 },
            "sentiment_distribution": { "negative": 1, "neutral": 11 }
        },
        "agent_stats": {
            "total_agents": 4,
            "available_agents": 3,
            "busy_agents": 1,
            "average_tickets_per_agent": 3.0,
            "top_performers": [
                { "id": 1, "name": "Sam", "tickets_handled": 50, "avg_resolution_time": 2.0, "satisfaction_score": 4.9 },
                { "id": 2, "name": "Ana", "tickets_handled": 40, "avg_resolution_time": 2.5, "satisfaction_score": 4.7 },
                { "id": 3, "name": "Lee", "tickets_handled": 30, "avg_resolution_time": 3.0, "satisfaction_score": 4.5 },
                { "id": 4, "name": "Kim", "tickets_handled": 20, "avg_resolution_time": 4.0, "satisfaction_score": 4.1 }
            ]
        },
        "trends": {
            "daily_ticket_count": {
                "2024-01-01": 1, "2024-01-02": 1, "2024-01-03": 2, "2024-01-04": 1,
                "2024-01-05": 3, "2024-01-06": 1, "2024-01-07": 1, "2024-01-08": 1, "2024-01-09": 1
            },
            "category_trends": { "billing": { "2024-01-05": 2 } },
            "total_last_30_days": 12
        }
    })
}
