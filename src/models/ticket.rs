//! Ticket and ticket-message types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Support ticket as returned by `/tickets`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: u64,
    pub ticket_number: String,
    pub customer_name: String,
    pub customer_email: String,
    pub subject: String,
    pub description: String,
    #[serde(default)]
    pub category: Option<TicketCategory>,
    #[serde(default)]
    pub category_confidence: Option<f64>,
    pub priority: TicketPriority,
    #[serde(default)]
    pub sentiment: Option<String>,
    #[serde(default)]
    pub sentiment_score: Option<f64>,
    #[serde(default)]
    pub urgency_score: Option<f64>,
    pub status: TicketStatus,
    #[serde(default)]
    pub assigned_to: Option<u64>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub resolved_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    #[default]
    Open,
    InProgress,
    Resolved,
    Closed,
}

impl TicketStatus {
    pub const ALL: [TicketStatus; 4] = [Self::Open, Self::InProgress, Self::Resolved, Self::Closed];

    /// Wire value, also used as the `status` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::Resolved => "resolved",
            Self::Closed => "closed",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketPriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl TicketPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketCategory {
    Technical,
    Billing,
    Account,
    General,
    Complaint,
    FeatureRequest,
}

impl TicketCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Technical => "technical",
            Self::Billing => "billing",
            Self::Account => "account",
            Self::General => "general",
            Self::Complaint => "complaint",
            Self::FeatureRequest => "feature_request",
        }
    }
}

/// Display labels replace the underscore with a space: `in_progress` -> `in progress`
macro_rules! label_display {
    ($($ty:ty),*) => {$(
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&display_label(self.as_str()))
            }
        }

        impl FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                serde_json::from_value(serde_json::Value::String(s.to_string()))
                    .map_err(|_| format!("invalid {}: {}", stringify!($ty), s))
            }
        }
    )*};
}

label_display!(TicketStatus, TicketPriority, TicketCategory);

/// Replaces the first underscore with a space, the way labels are shown in badges.
pub fn display_label(raw: &str) -> String {
    raw.replacen('_', " ", 1)
}

/// Body of `POST /tickets`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TicketCreate {
    pub customer_name: String,
    pub customer_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    pub subject: String,
    pub description: String,
}

/// Body of `PUT /tickets/{id}`; unset fields are left untouched server-side
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TicketUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<TicketCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TicketPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TicketStatus>,
}

impl TicketUpdate {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Body of `POST /tickets/{id}/assign`
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct TicketAssign {
    pub agent_id: u64,
}

/// Query parameters for `GET /tickets`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TicketQuery {
    pub status: Option<TicketStatus>,
    pub category: Option<TicketCategory>,
    pub priority: Option<TicketPriority>,
    pub skip: Option<u32>,
    pub limit: Option<u32>,
}

impl TicketQuery {
    pub fn with_status(status: Option<TicketStatus>) -> Self {
        Self { status, ..Default::default() }
    }

    pub(crate) fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(s) = self.status {
            params.push(("status", s.as_str().to_string()));
        }
        if let Some(c) = self.category {
            params.push(("category", c.as_str().to_string()));
        }
        if let Some(p) = self.priority {
            params.push(("priority", p.as_str().to_string()));
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

/// Message attached to a ticket (`/tickets/{id}/responses`)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TicketMessage {
    pub id: u64,
    pub ticket_id: u64,
    pub message: String,
    #[serde(default = "default_true")]
    pub is_agent_response: bool,
    #[serde(default)]
    pub agent_name: Option<String>,
    #[serde(default)]
    pub is_ai_suggested: bool,
    #[serde(default)]
    pub suggestion_confidence: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl TicketMessage {
    /// Author shown next to the message; no agent name means the customer wrote it
    pub fn author(&self) -> &str {
        self.agent_name.as_deref().unwrap_or("Customer")
    }
}

/// Body of `POST /tickets/{id}/responses`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MessageCreate {
    pub ticket_id: u64,
    pub message: String,
    pub is_agent_response: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_name: Option<String>,
}

impl MessageCreate {
    pub fn from_agent(ticket_id: u64, agent_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            ticket_id,
            message: message.into(),
            is_agent_response: true,
            agent_name: Some(agent_name.into()),
        }
    }

    pub fn from_customer(ticket_id: u64, message: impl Into<String>) -> Self {
        Self { ticket_id, message: message.into(), is_agent_response: false, agent_name: None }
    }
}

fn default_true() -> bool {
    true
}
