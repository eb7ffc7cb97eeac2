// Routing decision types

use serde::Serialize;
use std::fmt;

use crate::sentiment::Sentiment;

/// Which tier produced a response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "tier", content = "name", rename_all = "snake_case")]
pub enum ResponseCategory {
    Crisis,
    Intent(String),
    Sentiment(Sentiment),
}

impl ResponseCategory {
    pub fn as_str(&self) -> &str {
        match self {
            ResponseCategory::Crisis => "crisis",
            ResponseCategory::Intent(name) => name,
            ResponseCategory::Sentiment(sentiment) => sentiment.as_str(),
        }
    }

    pub fn is_crisis(&self) -> bool {
        matches!(self, ResponseCategory::Crisis)
    }
}

impl fmt::Display for ResponseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reply and the category that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EngineResponse {
    pub text: String,
    pub category: ResponseCategory,
}
