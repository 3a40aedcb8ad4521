//! Analytics resource (`/analytics`)

use super::Client;
use crate::error::Result;
use crate::models::{DashboardAnalytics, PerformanceMetrics, TopIssues, TrendReport};

/// Default trend window, in days
pub const DEFAULT_TREND_DAYS: u32 = 30;

/// Default number of top issues
pub const DEFAULT_TOP_ISSUES: u32 = 10;

pub struct AnalyticsService {
    client: Client,
}

impl AnalyticsService {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn dashboard(&self) -> Result<DashboardAnalytics> {
        self.client.get("/analytics/dashboard", &[]).await
    }

    pub async fn trends(&self, days: u32) -> Result<TrendReport> {
        self.client.get("/analytics/trends", &[("days", days.to_string())]).await
    }

    pub async fn top_issues(&self, limit: u32) -> Result<TopIssues> {
        self.client.get("/analytics/top-issues", &[("limit", limit.to_string())]).await
    }

    pub async fn performance(&self) -> Result<PerformanceMetrics> {
        self.client.get("/analytics/performance", &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::client_for;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_windowed_queries() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/analytics/trends"))
            .and(query_param("days", "30"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "period_days": 30,
                "total_tickets": 3,
                "daily_breakdown": { "2024-01-04": 1, "2024-01-05": 2 }
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v1/analytics/top-issues"))
            .and(query_param("limit", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "top_categories": [
                    { "category": "technical", "count": 12 },
                    { "category": "billing", "count": 7 }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let analytics = client_for(&server).analytics();
        let trends = analytics.trends(DEFAULT_TREND_DAYS).await.unwrap();
        assert_eq!(trends.daily_breakdown.len(), 2);
        let issues = analytics.top_issues(DEFAULT_TOP_ISSUES).await.unwrap();
        assert_eq!(issues.top_categories[0].category, "technical");
    }

    #[tokio::test]
    async fn test_performance() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/analytics/performance"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "resolution_rate": 62.5,
                "total_tickets": 8,
                "resolved_tickets": 5,
                "agent_utilization": 40.0,
                "total_capacity": 20,
                "current_load": 8
            })))
            .mount(&server)
            .await;

        let perf = client_for(&server).analytics().performance().await.unwrap();
        assert_eq!(perf.resolved_tickets, 5);
    }
}
