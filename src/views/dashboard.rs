//! Dashboard page and its derived chart series
//!
//! The page fetches one analytics snapshot; every chart is computed from
//! that snapshot and never fetches on its own.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

use super::state::{Loadable, ViewCell};
use crate::api::Client;
use crate::models::ticket::display_label;
use crate::models::{DashboardAnalytics, TopPerformer};

/// Number of trailing days shown on the trend chart
pub const TREND_WINDOW: usize = 7;

/// Number of performers shown on the dashboard
pub const TOP_PERFORMERS_SHOWN: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub name: String,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    /// Short label such as `Jan 5`
    pub date: String,
    pub tickets: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
}

/// Everything the dashboard renders, derived from one snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardCharts {
    pub cards: Vec<StatCard>,
    pub trend: Vec<TrendPoint>,
    pub by_category: Vec<ChartPoint>,
    pub by_priority: Vec<ChartPoint>,
    pub by_sentiment: Vec<ChartPoint>,
    pub top_performers: Vec<TopPerformer>,
}

impl DashboardCharts {
    pub fn derive(snapshot: &DashboardAnalytics) -> Self {
        let stats = &snapshot.ticket_stats;

        let cards = vec![
            StatCard { title: "Total Tickets", value: stats.total_tickets.to_string() },
            StatCard { title: "Open Tickets", value: stats.open_tickets.to_string() },
            StatCard { title: "Resolved", value: stats.resolved_tickets.to_string() },
            StatCard { title: "Avg Resolution Time", value: format!("{}h", stats.average_resolution_time) },
        ];

        Self {
            cards,
            trend: trend_window(&snapshot.trends.daily_ticket_count, TREND_WINDOW),
            by_category: histogram(&stats.tickets_by_category, display_label),
            by_priority: histogram(&stats.tickets_by_priority, str::to_string),
            by_sentiment: histogram(&stats.sentiment_distribution, str::to_string),
            top_performers: snapshot
                .agent_stats
                .top_performers
                .iter()
                .take(TOP_PERFORMERS_SHOWN)
                .cloned()
                .collect(),
        }
    }
}

fn histogram(counts: &BTreeMap<String, u64>, label: impl Fn(&str) -> String) -> Vec<ChartPoint> {
    counts
        .iter()
        .map(|(name, value)| ChartPoint { name: label(name), value: *value })
        .collect()
}

/// Last `window` entries of a date-keyed series, oldest first
pub fn trend_window(daily: &BTreeMap<String, u64>, window: usize) -> Vec<TrendPoint> {
    let skip = daily.len().saturating_sub(window);
    daily
        .iter()
        .skip(skip)
        .map(|(date, count)| TrendPoint { date: short_date(date), tickets: *count })
        .collect()
}

fn short_date(raw: &str) -> String {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|d| d.format("%b %-d").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

#[derive(Clone)]
pub struct DashboardPage {
    client: Client,
    cell: ViewCell<DashboardAnalytics>,
}

impl DashboardPage {
    pub fn new(client: Client) -> Self {
        Self { client, cell: ViewCell::new("dashboard") }
    }

    pub async fn mount(&self) {
        let token = self.cell.begin();
        let result = self.client.analytics().dashboard().await;
        self.cell.settle(token, result);
    }

    pub fn state(&self) -> Loadable<DashboardAnalytics> {
        self.cell.snapshot()
    }

    /// Derived chart data, once the snapshot is ready
    pub fn charts(&self) -> Option<DashboardCharts> {
        self.cell.with(|state| state.ready().map(DashboardCharts::derive))
    }

    pub fn unmount(&self) {
        self.cell.unmount();
    }
}
