use super::normalizer::normalize;
use super::resolver::resolve;
use super::stopwords::StopwordSet;
use super::types::{ChatbotReply, DEFAULT_MATCH_THRESHOLD};
use crate::catalog::store::CatalogStore;
use std::sync::Arc;

/// Turns free text into a [`ChatbotReply`] against a fixed catalog.
///
/// Holds no mutable state: the same query always produces the same reply.
#[derive(Debug, Clone)]
pub struct QueryResponder {
    catalog: Arc<CatalogStore>,
    stopwords: StopwordSet,
    threshold: u8,
}

impl QueryResponder {
    pub fn new(catalog: Arc<CatalogStore>, stopwords: StopwordSet) -> Self {
        Self {
            catalog,
            stopwords,
            threshold: DEFAULT_MATCH_THRESHOLD,
        }
    }

    /// Minimum score (inclusive) for a candidate to be accepted.
    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold.min(100);
        self
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    pub fn accepts(&self, score: u8) -> bool {
        score >= self.threshold
    }

    pub fn respond(&self, query: &str) -> ChatbotReply {
        let tokens = normalize(query, &self.stopwords);
        if tokens.is_empty() {
            return ChatbotReply::EmptyQuery;
        }

        let cleaned = tokens.join(" ");
        let best = resolve(&cleaned, self.catalog.appliance_names());

        if best.is_no_match() || !self.accepts(best.score) {
            return ChatbotReply::NoMatch { best };
        }

        ChatbotReply::Matched {
            records: self.catalog.records_for_appliance(&best.best_label),
            label: best.best_label,
            score: best.score,
        }
    }
}
