//! Ticket list page

use clap::ValueEnum;
use parking_lot::RwLock;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

use super::state::{Loadable, ViewCell};
use crate::api::Client;
use crate::models::{Ticket, TicketQuery, TicketStatus};

/// Status filter buttons on the list page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    #[default]
    All,
    Open,
    InProgress,
    Resolved,
    Closed,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 5] = [Self::All, Self::Open, Self::InProgress, Self::Resolved, Self::Closed];

    /// `None` for `All`, which omits the status parameter
    pub fn status(&self) -> Option<TicketStatus> {
        match self {
            Self::All => None,
            Self::Open => Some(TicketStatus::Open),
            Self::InProgress => Some(TicketStatus::InProgress),
            Self::Resolved => Some(TicketStatus::Resolved),
            Self::Closed => Some(TicketStatus::Closed),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status() {
            Some(status) => write!(f, "{}", status.to_string().to_uppercase()),
            None => f.write_str("ALL"),
        }
    }
}

/// List of tickets scoped by a status filter.
///
/// Every mount and filter change issues one list call and replaces the
/// items wholesale. No pagination.
#[derive(Clone)]
pub struct TicketListPage {
    client: Client,
    filter: Arc<RwLock<StatusFilter>>,
    cell: ViewCell<Vec<Ticket>>,
}

impl TicketListPage {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            filter: Arc::new(RwLock::new(StatusFilter::All)),
            cell: ViewCell::new("tickets"),
        }
    }

    pub async fn mount(&self) {
        self.refresh().await;
    }

    pub async fn set_filter(&self, filter: StatusFilter) {
        *self.filter.write() = filter;
        self.refresh().await;
    }

    /// Re-issue the list call for the active filter
    pub async fn refresh(&self) {
        let token = self.cell.begin();
        let filter = *self.filter.read();
        let result = self.client.tickets().list(&TicketQuery::with_status(filter.status())).await;
        self.cell.settle(token, result);
    }

    pub fn filter(&self) -> StatusFilter {
        *self.filter.read()
    }

    pub fn state(&self) -> Loadable<Vec<Ticket>> {
        self.cell.snapshot()
    }

    pub fn unmount(&self) {
        self.cell.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{client_for, ticket_json};
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_filter_maps_to_status_param() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/tickets"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let page = TicketListPage::new(client_for(&server));
        for filter in StatusFilter::ALL {
            page.set_filter(filter).await;
        }

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 5);
        let statuses: Vec<Option<String>> = requests
            .iter()
            .map(|r| r.url.query_pairs().find(|(k, _)| k == "status").map(|(_, v)| v.into_owned()))
            .collect();
        assert_eq!(
            statuses,
            vec![
                None,
                Some("open".to_string()),
                Some("in_progress".to_string()),
                Some("resolved".to_string()),
                Some("closed".to_string()),
            ]
        );
        assert_eq!(requests[0].url.query(), None);
    }

    #[tokio::test]
    async fn test_empty_result_is_ready_not_failed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/tickets"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let page = TicketListPage::new(client_for(&server));
        assert!(page.state().is_pending());
        page.mount().await;
        assert_eq!(page.state(), Loadable::Ready(vec![]));
    }

    #[tokio::test]
    async fn test_fetch_failure_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/tickets"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "detail": "database unavailable" })))
            .mount(&server)
            .await;

        let page = TicketListPage::new(client_for(&server));
        page.mount().await;
        assert!(page.state().error().unwrap().contains("database unavailable"));
    }

    #[tokio::test]
    async fn test_repeated_fetch_replaces_items() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/tickets"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([ticket_json(1, "open")])))
            .up_to_n_times(1)
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v1/tickets"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([ticket_json(2, "open"), ticket_json(3, "open")])))
            .expect(1)
            .mount(&server)
            .await;

        let page = TicketListPage::new(client_for(&server));
        page.refresh().await;
        assert_eq!(page.state().ready().unwrap().len(), 1);
        page.refresh().await;
        let ids: Vec<u64> = page.state().ready().unwrap().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[tokio::test]
    async fn test_latest_filter_wins_over_slow_stale_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/tickets"))
            .and(query_param("status", "open"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([ticket_json(1, "open")]))
                    .set_delay(Duration::from_millis(300)),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v1/tickets"))
            .and(query_param("status", "closed"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([ticket_json(2, "closed")])))
            .mount(&server)
            .await;

        let page = TicketListPage::new(client_for(&server));
        tokio::join!(page.set_filter(StatusFilter::Open), page.set_filter(StatusFilter::Closed));

        assert_eq!(page.filter(), StatusFilter::Closed);
        let items = page.state();
        let items = items.ready().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].status, TicketStatus::Closed);
    }

    #[tokio::test]
    async fn test_unmounted_page_ignores_result() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/tickets"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([ticket_json(1, "open")]))
                    .set_delay(Duration::from_millis(200)),
            )
            .mount(&server)
            .await;

        let page = TicketListPage::new(client_for(&server));
        let background = page.clone();
        let handle = tokio::spawn(async move { background.mount().await });
        tokio::time::sleep(Duration::from_millis(50)).await;
        page.unmount();
        handle.await.unwrap();

        assert!(page.state().is_pending());
    }

    #[test]
    fn test_filter_labels() {
        let labels: Vec<String> = StatusFilter::ALL.iter().map(|f| f.to_string()).collect();
        assert_eq!(labels, vec!["ALL", "OPEN", "IN PROGRESS", "RESOLVED", "CLOSED"]);
    }
}
