//! Prediction payloads from the `/ml` endpoints
//!
//! None of these are persisted; pages hold them only until navigation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Body of every text-based ML request
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TextInput {
    pub text: String,
}

/// `POST /ml/classify`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub category: String,
    pub confidence: f64,
    #[serde(default)]
    pub all_predictions: BTreeMap<String, f64>,
}

/// `POST /ml/sentiment`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SentimentAnalysis {
    pub sentiment: String,
    pub score: f64,
    pub urgency_score: f64,
}

/// `POST /ml/suggest-response` and `POST /tickets/{id}/suggest-response`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SuggestedResponse {
    pub suggested_text: String,
    pub confidence: f64,
    #[serde(default)]
    pub source_tickets: Vec<String>,
    #[serde(default)]
    pub reasoning: String,
}

/// `GET /ml/models/status`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModelStatus {
    pub classification_model: bool,
    pub sentiment_model: bool,
    pub embedding_model: bool,
    pub rag_system: bool,
    #[serde(default)]
    pub note: Option<String>,
}

/// `POST /ml/models/reload`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReloadOutcome {
    pub status: String,
    pub message: String,
}

/// Whole-number percentage as shown next to confidences and urgency
pub fn percent(value: f64) -> String {
    format!("{:.0}%", value * 100.0)
}
