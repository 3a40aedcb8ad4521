//! ML prediction resource (`/ml`)

use super::Client;
use crate::error::Result;
use crate::models::{Classification, ModelStatus, ReloadOutcome, SentimentAnalysis, SuggestedResponse, TextInput};

pub struct MlService {
    client: Client,
}

impl MlService {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn classify(&self, text: &str) -> Result<Classification> {
        self.client.post("/ml/classify", Some(&input(text)), &[]).await
    }

    pub async fn sentiment(&self, text: &str) -> Result<SentimentAnalysis> {
        self.client.post("/ml/sentiment", Some(&input(text)), &[]).await
    }

    /// Category goes in the query string; without one the backend classifies first
    pub async fn suggest_response(&self, text: &str, category: Option<&str>) -> Result<SuggestedResponse> {
        let params: Vec<(&str, String)> = category.map(|c| ("category", c.to_string())).into_iter().collect();
        self.client.post("/ml/suggest-response", Some(&input(text)), &params).await
    }

    pub async fn model_status(&self) -> Result<ModelStatus> {
        self.client.get("/ml/models/status", &[]).await
    }

    pub async fn reload_models(&self) -> Result<ReloadOutcome> {
        self.client.post("/ml/models/reload", None::<&()>, &[]).await
    }
}

fn input(text: &str) -> TextInput {
    TextInput { text: text.to_string() }
}
