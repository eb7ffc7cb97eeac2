// Response rule engine
//
// Tiers are evaluated in a fixed order and the first match wins:
// crisis keywords, then intents in declared order, then sentiment.

use rand::RngCore;
use std::sync::Arc;

use super::decision::EngineResponse;
use super::knowledge::KnowledgeBase;
use super::rules::{CrisisTier, IntentTier, ResponseRule, SentimentTier};
use crate::crisis::CrisisDetector;
use crate::errors::Result;
use crate::sentiment::{LexiconAnalyzer, SentimentAnalyzer};

/// Lower-case and trim user input before keyword matching
pub fn normalize_input(text: &str) -> String {
    text.trim().to_lowercase()
}

pub struct ResponseEngine {
    rules: Vec<Box<dyn ResponseRule>>,
    fallback: SentimentTier,
}

impl ResponseEngine {
    /// Build an engine from a knowledge base, normalizing and validating it first
    pub fn new(
        mut knowledge: KnowledgeBase,
        analyzer: Arc<dyn SentimentAnalyzer>,
    ) -> Result<Self> {
        knowledge.normalize_keywords();
        knowledge.validate()?;
        Ok(Self::build(knowledge, analyzer))
    }

    /// Built-in knowledge base with the lexicon sentiment analyzer
    pub fn with_defaults() -> Self {
        Self::build(KnowledgeBase::default(), Arc::new(LexiconAnalyzer::new()))
    }

    fn build(knowledge: KnowledgeBase, analyzer: Arc<dyn SentimentAnalyzer>) -> Self {
        let mut rules: Vec<Box<dyn ResponseRule>> = Vec::with_capacity(knowledge.intents.len() + 1);
        rules.push(Box::new(CrisisTier::new(CrisisDetector::new(knowledge.crisis))));
        for intent in knowledge.intents {
            rules.push(Box::new(IntentTier::new(intent)));
        }

        Self {
            rules,
            fallback: SentimentTier::new(knowledge.sentiment, analyzer),
        }
    }

    /// Produce a response for raw user text
    pub fn respond(&self, input: &str, rng: &mut dyn RngCore) -> EngineResponse {
        let normalized = normalize_input(input);

        for rule in &self.rules {
            if let Some(response) = rule.try_respond(&normalized, rng) {
                tracing::debug!("Routing decision: {} tier", rule.name());
                return response;
            }
        }

        let response = self.fallback.respond(input, rng);
        tracing::debug!("Routing decision: sentiment fallback ({})", response.category);
        response
    }

    /// Rule names in evaluation order, excluding the sentiment fallback
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }
}

impl Default for ResponseEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}
