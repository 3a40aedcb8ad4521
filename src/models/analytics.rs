//! Analytics snapshots

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `GET /analytics/dashboard`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashboardAnalytics {
    pub ticket_stats: TicketStats,
    pub agent_stats: AgentStatsSummary,
    pub trends: Trends,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TicketStats {
    pub total_tickets: u64,
    pub open_tickets: u64,
    pub in_progress_tickets: u64,
    pub resolved_tickets: u64,
    pub closed_tickets: u64,
    pub average_resolution_time: f64,
    #[serde(default)]
    pub tickets_by_category: BTreeMap<String, u64>,
    #[serde(default)]
    pub tickets_by_priority: BTreeMap<String, u64>,
    #[serde(default)]
    pub sentiment_distribution: BTreeMap<String, u64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentStatsSummary {
    pub total_agents: u64,
    pub available_agents: u64,
    pub busy_agents: u64,
    pub average_tickets_per_agent: f64,
    #[serde(default)]
    pub top_performers: Vec<TopPerformer>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TopPerformer {
    pub id: u64,
    pub name: String,
    pub tickets_handled: u64,
    pub avg_resolution_time: f64,
    pub satisfaction_score: f64,
}

/// Daily series are keyed by ISO date (`YYYY-MM-DD`), so key order is chronological.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Trends {
    #[serde(default)]
    pub daily_ticket_count: BTreeMap<String, u64>,
    #[serde(default)]
    pub category_trends: BTreeMap<String, BTreeMap<String, u64>>,
    #[serde(default)]
    pub total_last_30_days: u64,
}

/// `GET /analytics/trends?days=`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrendReport {
    pub period_days: u32,
    pub total_tickets: u64,
    #[serde(default)]
    pub daily_breakdown: BTreeMap<String, u64>,
}

/// `GET /analytics/top-issues?limit=`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TopIssues {
    #[serde(default)]
    pub top_categories: Vec<IssueCount>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IssueCount {
    pub category: String,
    pub count: u64,
}

/// `GET /analytics/performance`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    pub resolution_rate: f64,
    pub total_tickets: u64,
    pub resolved_tickets: u64,
    pub agent_utilization: f64,
    pub total_capacity: u64,
    pub current_load: u64,
}
