use crate::catalog::types::RecommendationRecord;
use serde::{Deserialize, Serialize};

/// Acceptance threshold used when none is configured.
pub const DEFAULT_MATCH_THRESHOLD: u8 = 50;

/// Best candidate for a query and its partial-similarity score (0..=100).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub best_label: String,
    pub score: u8,
}

impl MatchResult {
    /// Returned when there was nothing to match against.
    pub fn no_match() -> Self {
        Self {
            best_label: String::new(),
            score: 0,
        }
    }

    pub fn is_no_match(&self) -> bool {
        self.best_label.is_empty()
    }
}

/// Outcome of a chatbot query. Every input maps to exactly one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatbotReply {
    /// Nothing was left after stopword removal.
    EmptyQuery,
    /// The best candidate scored below the threshold.
    NoMatch { best: MatchResult },
    Matched {
        label: String,
        score: u8,
        records: Vec<RecommendationRecord>,
    },
}

impl ChatbotReply {
    pub fn message(&self) -> String {
        match self {
            ChatbotReply::EmptyQuery => "no keyword found".to_string(),
            ChatbotReply::NoMatch { .. } => "no recommendation found in that category".to_string(),
            ChatbotReply::Matched { label, .. } => {
                format!("here are specific recommendations for '{}'", label)
            }
        }
    }

    pub fn records(&self) -> &[RecommendationRecord] {
        match self {
            ChatbotReply::Matched { records, .. } => records,
            _ => &[],
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatbotParams {
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct ChatbotResponse {
    #[serde(rename = "respuesta")]
    pub message: String,
    #[serde(rename = "Recomendaciones")]
    pub records: Vec<RecommendationRecord>,
}

impl From<ChatbotReply> for ChatbotResponse {
    fn from(reply: ChatbotReply) -> Self {
        let message = reply.message();
        let records = match reply {
            ChatbotReply::Matched { records, .. } => records,
            _ => Vec::new(),
        };
        Self { message, records }
    }
}
