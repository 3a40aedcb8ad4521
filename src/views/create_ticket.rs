//! Ticket creation form

use serde::Serialize;

use crate::api::Client;
use crate::models::{Classification, SentimentAnalysis, Ticket, TicketCreate};
use crate::route::Route;

/// Notification shown when the create call fails
pub const SUBMIT_FAILED_NOTICE: &str = "Failed to create ticket. Please try again.";

/// Notification shown when the create call succeeds
pub const SUBMIT_OK_NOTICE: &str = "Ticket created successfully!";

/// Editable form fields
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TicketDraft {
    pub customer_name: String,
    pub customer_email: String,
    pub subject: String,
    pub description: String,
}

impl TicketDraft {
    /// Names of required fields that are still blank
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("customer_name", &self.customer_name),
            ("customer_email", &self.customer_email),
            ("subject", &self.subject),
            ("description", &self.description),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    fn to_request(&self) -> TicketCreate {
        TicketCreate {
            customer_name: self.customer_name.clone(),
            customer_email: self.customer_email.clone(),
            customer_id: None,
            subject: self.subject.clone(),
            description: self.description.clone(),
        }
    }
}

/// Display-only merge of the classify and sentiment calls.
/// Never sent with the create call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub category: String,
    pub confidence: f64,
    pub sentiment: String,
    pub urgency: f64,
}

impl Prediction {
    pub fn merge(classification: Classification, sentiment: SentimentAnalysis) -> Self {
        Self {
            category: classification.category,
            confidence: classification.confidence,
            sentiment: sentiment.sentiment,
            urgency: sentiment.urgency_score,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Ticket created; the page navigates away
    Created { ticket: Ticket, navigate_to: Route },
    /// Required fields blank; nothing was sent
    Incomplete(Vec<&'static str>),
    /// Create call failed; form left as-is for another attempt
    Failed { notice: &'static str, error: String },
}

/// Form state for `/create-ticket`
pub struct CreateTicketPage {
    client: Client,
    pub draft: TicketDraft,
    prediction: Option<Prediction>,
    analyzing: bool,
    submitting: bool,
}

impl CreateTicketPage {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            draft: TicketDraft::default(),
            prediction: None,
            analyzing: false,
            submitting: false,
        }
    }

    pub fn with_draft(client: Client, draft: TicketDraft) -> Self {
        Self { draft, ..Self::new(client) }
    }

    /// Whether the analyze action is available
    pub fn can_analyze(&self) -> bool {
        !self.analyzing && !self.draft.description.trim().is_empty()
    }

    /// Run classification and sentiment on the description.
    ///
    /// No-op for a blank description. On failure the previous prediction
    /// is kept and the error is only logged.
    pub async fn analyze(&mut self) {
        if self.draft.description.trim().is_empty() {
            return;
        }

        self.analyzing = true;
        let ml = self.client.ml();
        let text = self.draft.description.as_str();
        let (classification, sentiment) = tokio::join!(ml.classify(text), ml.sentiment(text));

        match (classification, sentiment) {
            (Ok(c), Ok(s)) => self.prediction = Some(Prediction::merge(c, s)),
            (Err(e), _) | (_, Err(e)) => tracing::error!(error = %e, "ticket analysis failed"),
        }
        self.analyzing = false;
    }

    /// Post the form as a new ticket; exactly one create call when complete
    pub async fn submit(&mut self) -> SubmitOutcome {
        let missing = self.draft.missing_fields();
        if !missing.is_empty() {
            return SubmitOutcome::Incomplete(missing);
        }

        self.submitting = true;
        let result = self.client.tickets().create(&self.draft.to_request()).await;
        self.submitting = false;

        match result {
            Ok(ticket) => {
                tracing::info!(ticket_id = ticket.id, ticket_number = %ticket.ticket_number, "ticket created");
                SubmitOutcome::Created { ticket, navigate_to: Route::TicketList }
            }
            Err(e) => {
                tracing::error!(error = %e, "error creating ticket");
                SubmitOutcome::Failed { notice: SUBMIT_FAILED_NOTICE, error: e.to_string() }
            }
        }
    }

    pub fn prediction(&self) -> Option<&Prediction> {
        self.prediction.as_ref()
    }

    pub fn is_analyzing(&self) -> bool {
        self.analyzing
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{client_for, ticket_json};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn filled() -> TicketDraft {
        TicketDraft {
            customer_name: "Jane Doe".into(),
            customer_email: "jane@example.com".into(),
            subject: "Charged twice".into(),
            description: "I was charged twice for my subscription, this is urgent".into(),
        }
    }

    async fn mount_ml(server: &MockServer) {
        Mock::given(method("POST"))
            .and(path("/api/v1/ml/classify"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "category": "billing", "confidence": 0.4, "all_predictions": {}
            })))
            .mount(server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/v1/ml/sentiment"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "sentiment": "neutral", "score": 0.5, "urgency_score": 1.0
            })))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_analyze_blank_description_is_noop() {
        let server = MockServer::start().await;
        mount_ml(&server).await;

        let mut page = CreateTicketPage::new(client_for(&server));
        assert!(!page.can_analyze());
        page.analyze().await;

        assert!(server.received_requests().await.unwrap().is_empty());
        assert!(page.prediction().is_none());
    }

    #[tokio::test]
    async fn test_analyze_merges_both_predictions() {
        let server = MockServer::start().await;
        mount_ml(&server).await;

        let mut page = CreateTicketPage::with_draft(client_for(&server), filled());
        page.analyze().await;

        assert_eq!(server.received_requests().await.unwrap().len(), 2);
        assert_eq!(
            page.prediction(),
            Some(&Prediction { category: "billing".into(), confidence: 0.4, sentiment: "neutral".into(), urgency: 1.0 })
        );
        assert!(!page.is_analyzing());
    }

    #[tokio::test]
    async fn test_submit_success_navigates_and_omits_prediction() {
        let server = MockServer::start().await;
        mount_ml(&server).await;
        Mock::given(method("POST"))
            .and(path("/api/v1/tickets"))
            .and(body_json(json!({
                "customer_name": "Jane Doe",
                "customer_email": "jane@example.com",
                "subject": "Charged twice",
                "description": "I was charged twice for my subscription, this is urgent"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(ticket_json(99, "open")))
            .expect(1)
            .mount(&server)
            .await;

        let mut page = CreateTicketPage::with_draft(client_for(&server), filled());
        page.analyze().await;
        let outcome = page.submit().await;

        match outcome {
            SubmitOutcome::Created { ticket, navigate_to } => {
                assert_eq!(ticket.id, 99);
                assert_eq!(navigate_to, Route::TicketList);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert!(!page.is_submitting());
    }

    #[tokio::test]
    async fn test_submit_failure_keeps_fields() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/tickets"))
            .respond_with(ResponseTemplate::new(422).set_body_json(json!({ "detail": "invalid email" })))
            .expect(1)
            .mount(&server)
            .await;

        let mut page = CreateTicketPage::with_draft(client_for(&server), filled());
        let outcome = page.submit().await;

        assert!(matches!(outcome, SubmitOutcome::Failed { notice: SUBMIT_FAILED_NOTICE, .. }));
        assert_eq!(page.draft, filled());
    }

    #[tokio::test]
    async fn test_incomplete_form_sends_nothing() {
        let server = MockServer::start().await;
        let mut draft = filled();
        draft.subject = "  ".into();
        draft.customer_email.clear();

        let mut page = CreateTicketPage::with_draft(client_for(&server), draft);
        let outcome = page.submit().await;

        assert_eq!(outcome, SubmitOutcome::Incomplete(vec!["customer_email", "subject"]));
        assert!(server.received_requests().await.unwrap().is_empty());
    }
}
