// Response tiers
//
// Each tier is a predicate plus handler: it either claims the input and
// produces a response, or passes.

use rand::seq::SliceRandom;
use rand::RngCore;
use std::sync::Arc;

use super::decision::{EngineResponse, ResponseCategory};
use super::knowledge::{IntentRule, SentimentResponses};
use crate::crisis::CrisisDetector;
use crate::sentiment::{Sentiment, SentimentAnalyzer};

/// Used only if a response bucket is somehow empty
const LISTENING_FALLBACK: &str = "I'm listening. Could you tell me more about that?";

pub trait ResponseRule: Send + Sync {
    /// Tier name for logging
    fn name(&self) -> &str;

    /// Respond if this rule matches the normalized input
    fn try_respond(&self, normalized: &str, rng: &mut dyn RngCore) -> Option<EngineResponse>;
}

pub struct CrisisTier {
    detector: CrisisDetector,
}

impl CrisisTier {
    pub fn new(detector: CrisisDetector) -> Self {
        Self { detector }
    }
}

impl ResponseRule for CrisisTier {
    fn name(&self) -> &str {
        "crisis"
    }

    // Never touches the RNG
    fn try_respond(&self, normalized: &str, _rng: &mut dyn RngCore) -> Option<EngineResponse> {
        self.detector.detect_crisis(normalized)?;
        Some(EngineResponse {
            text: self.detector.response().to_string(),
            category: ResponseCategory::Crisis,
        })
    }
}

pub struct IntentTier {
    intent: IntentRule,
}

impl IntentTier {
    pub fn new(intent: IntentRule) -> Self {
        Self { intent }
    }
}

impl ResponseRule for IntentTier {
    fn name(&self) -> &str {
        &self.intent.category
    }

    fn try_respond(&self, normalized: &str, rng: &mut dyn RngCore) -> Option<EngineResponse> {
        let keyword = self.intent.matching_keyword(normalized)?;
        let text = self.intent.responses.choose(rng)?;
        tracing::debug!(
            "Intent '{}' matched on keyword '{}'",
            self.intent.category,
            keyword
        );
        Some(EngineResponse {
            text: text.clone(),
            category: ResponseCategory::Intent(self.intent.category.clone()),
        })
    }
}

/// Last-resort tier; always produces a response
pub struct SentimentTier {
    responses: SentimentResponses,
    analyzer: Arc<dyn SentimentAnalyzer>,
}

impl SentimentTier {
    pub fn new(responses: SentimentResponses, analyzer: Arc<dyn SentimentAnalyzer>) -> Self {
        Self {
            responses,
            analyzer,
        }
    }

    pub fn respond(&self, text: &str, rng: &mut dyn RngCore) -> EngineResponse {
        let sentiment = Sentiment::classify(self.analyzer.as_ref(), text);
        let text = self
            .responses
            .bucket(sentiment)
            .choose(rng)
            .map(String::as_str)
            .unwrap_or(LISTENING_FALLBACK);
        EngineResponse {
            text: text.to_string(),
            category: ResponseCategory::Sentiment(sentiment),
        }
    }
}
