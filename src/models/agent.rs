//! Support agent types
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub expertise: String,
    #[serde(default = "default_max_tickets")]
    pub max_tickets: u32,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub is_available: bool,
    pub total_tickets_handled: u64,
    pub average_resolution_time: f64,
    pub customer_satisfaction_score: f64,
    pub created_at: DateTime<Utc>,
}

impl Agent {
    pub fn availability_label(&self) -> &'static str {
        if self.is_available { "Available" } else { "Busy" }
    }

    /// First letter of the name, used as the roster avatar
    pub fn initial(&self) -> char {
        self.name.chars().next().map(|c| c.to_ascii_uppercase()).unwrap_or('?')
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentCreate {
    pub name: String,
    pub email: String,
    pub expertise: String,
    pub max_tickets: u32,
}

impl AgentCreate {
    pub fn new(name: impl Into<String>, email: impl Into<String>, expertise: impl Into<String>) -> Self {
        Self { name: name.into(), email: email.into(), expertise: expertise.into(), max_tickets: default_max_tickets() }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expertise: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tickets: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
}

/// Query parameters for `GET /agents`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AgentQuery {
    pub is_available: Option<bool>,
    pub skip: Option<u32>,
    pub limit: Option<u32>,
}

impl AgentQuery {
    pub(crate) fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(a) = self.is_available {
            params.push(("is_available", a.to_string()));
        }
        if let Some(skip) = self.skip {
            params.push(("skip", skip.to_string()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        params
    }
}

/// `GET /agents/{id}/stats`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentStats {
    pub agent_id: u64,
    pub name: String,
    pub current_workload: Workload,
    pub performance: Performance,
    pub capacity: Capacity,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Workload {
    pub open: u64,
    pub in_progress: u64,
    pub total_active: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Performance {
    pub total_handled: u64,
    pub resolved: u64,
    pub avg_resolution_time: f64,
    pub satisfaction_score: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Capacity {
    pub max_tickets: u32,
    pub current_tickets: u32,
    pub available_slots: i64,
}

fn default_max_tickets() -> u32 {
    10
}

fn default_true() -> bool {
    true
}
