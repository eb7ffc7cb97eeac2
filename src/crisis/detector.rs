// Crisis keyword detector

use serde::{Deserialize, Serialize};

/// Referral text returned whenever a crisis keyword is detected
pub const CRISIS_RESPONSE: &str = "⚠️ **EMERGENCY WARNING** ⚠️\n\n\
    I am an AI and cannot provide emergency help. Your safety is paramount. \
    Please contact a professional immediately.\n\n\
    **USA/CANADA:** Call or text **988** (Suicide & Crisis Lifeline)\n\
    **UK:** Call **111** or text \"SHOUT\" to **85258**\n\
    **International:** Find your local crisis line at [findahelpline.com](https://findahelpline.com)\n\n\
    You are not alone, and there are people who want to help you right now.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrisisRule {
    pub keywords: Vec<String>,
    pub response: String,
}

impl Default for CrisisRule {
    fn default() -> Self {
        let keywords = [
            "kill myself",
            "end my life",
            "suicide",
            "hurt myself",
            "i want to die",
            "take my life",
            "want to die",
            "ending it all",
        ];
        Self {
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            response: CRISIS_RESPONSE.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CrisisDetector {
    rule: CrisisRule,
}

impl CrisisDetector {
    pub fn new(rule: CrisisRule) -> Self {
        Self { rule }
    }

    /// Detect if the query contains a crisis keyword
    /// Returns the first matching keyword
    pub fn detect_crisis(&self, query: &str) -> Option<&str> {
        let query_lower = query.to_lowercase();

        for keyword in &self.rule.keywords {
            if query_lower.contains(&keyword.to_lowercase()) {
                tracing::warn!("Crisis detected: keyword '{}'", keyword);
                return Some(keyword);
            }
        }

        None
    }

    pub fn response(&self) -> &str {
        &self.rule.response
    }
}

impl Default for CrisisDetector {
    fn default() -> Self {
        Self::new(CrisisRule::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_detector() -> CrisisDetector {
        CrisisDetector::new(CrisisRule {
            keywords: vec!["suicide".to_string(), "Kill Myself".to_string()],
            response: "get help".to_string(),
        })
    }

    #[test]
    fn test_crisis_detection() {
        let detector = create_test_detector();

        assert_eq!(detector.detect_crisis("I'm thinking about suicide"), Some("suicide"));
        assert!(detector.detect_crisis("I want to kill myself").is_some());
        assert!(detector.detect_crisis("What is the meaning of life?").is_none());
    }

    #[test]
    fn test_case_insensitive() {
        let detector = create_test_detector();

        assert!(detector.detect_crisis("SUICIDE").is_some());
        assert!(detector.detect_crisis("SuIcIdE").is_some());
    }

    #[test]
    fn test_default_keywords() {
        let detector = CrisisDetector::default();

        assert!(detector.detect_crisis("i want to die").is_some());
        assert!(detector.detect_crisis("thinking about ending it all").is_some());
        assert!(detector.response().contains("988"));
        assert_eq!(CrisisRule::default().keywords.len(), 8);
    }
}
