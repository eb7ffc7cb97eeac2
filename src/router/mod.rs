// Router module
// Priority-ordered response selection

mod decision;
mod engine;
mod knowledge;
mod rules;

pub use decision::{EngineResponse, ResponseCategory};
pub use engine::{normalize_input, ResponseEngine};
pub use knowledge::{IntentRule, KnowledgeBase, SentimentResponses};
pub use rules::{CrisisTier, IntentTier, ResponseRule, SentimentTier};
