use super::responder::QueryResponder;
use super::types::{ChatbotParams, ChatbotReply, ChatbotResponse};
use axum::extract::Query;
use axum::{Extension, Json};
use std::sync::Arc;

pub async fn handle_chatbot(
    Query(params): Query<ChatbotParams>,
    Extension(responder): Extension<Arc<QueryResponder>>,
) -> Json<ChatbotResponse> {
    let reply = responder.respond(&params.query);

    match &reply {
        ChatbotReply::Matched { label, score, records } => tracing::debug!(
            "Chatbot query '{}' matched '{}' (score={}, records={})",
            params.query,
            label,
            score,
            records.len()
        ),
        ChatbotReply::NoMatch { best } => tracing::debug!(
            "Chatbot query '{}' below threshold (best='{}', score={})",
            params.query,
            best.best_label,
            best.score
        ),
        ChatbotReply::EmptyQuery => {
            tracing::debug!("Chatbot query '{}' had no keywords", params.query)
        }
    }

    Json(ChatbotResponse::from(reply))
}
