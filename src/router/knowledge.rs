// Response knowledge base
// Crisis rule, intents in declared order, and sentiment response buckets

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::crisis::CrisisRule;
use crate::errors::{MindwellError, Result};
use crate::sentiment::Sentiment;

/// A named user concern with its keywords and canned responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentRule {
    pub category: String,
    pub keywords: Vec<String>,
    pub responses: Vec<String>,
}

impl IntentRule {
    pub fn new(category: &str, keywords: &[&str], responses: &[&str]) -> Self {
        Self {
            category: category.to_string(),
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            responses: responses.iter().map(|r| r.to_string()).collect(),
        }
    }

    /// First keyword contained in the normalized input
    pub fn matching_keyword(&self, normalized: &str) -> Option<&str> {
        self.keywords
            .iter()
            .map(String::as_str)
            .find(|keyword| normalized.contains(keyword))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentResponses {
    pub positive: Vec<String>,
    pub negative: Vec<String>,
    pub neutral: Vec<String>,
}

impl SentimentResponses {
    pub fn bucket(&self, sentiment: Sentiment) -> &[String] {
        match sentiment {
            Sentiment::Positive => &self.positive,
            Sentiment::Negative => &self.negative,
            Sentiment::Neutral => &self.neutral,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeBase {
    pub crisis: CrisisRule,
    pub intents: Vec<IntentRule>,
    pub sentiment: SentimentResponses,
}

impl KnowledgeBase {
    /// Load and validate a knowledge base from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let mut knowledge: KnowledgeBase = serde_json::from_str(&contents)?;
        knowledge.normalize_keywords();
        knowledge.validate()?;
        tracing::info!(
            "Loaded knowledge base from {} ({} intents)",
            path.display(),
            knowledge.intents.len()
        );
        Ok(knowledge)
    }

    /// Every list must be non-empty so a matched tier always has something to say
    pub fn validate(&self) -> Result<()> {
        if self.crisis.keywords.is_empty() || self.crisis.response.trim().is_empty() {
            return Err(MindwellError::Configuration(
                "crisis rule needs keywords and a response".to_string(),
            ));
        }
        // A blank keyword is contained in every message
        if self.crisis.keywords.iter().any(|k| k.trim().is_empty()) {
            return Err(MindwellError::Configuration(
                "crisis rule has a blank keyword".to_string(),
            ));
        }

        for intent in &self.intents {
            if intent.category.trim().is_empty() {
                return Err(MindwellError::Configuration(
                    "intent with an empty category name".to_string(),
                ));
            }
            if intent.keywords.iter().any(|k| k.trim().is_empty()) || intent.keywords.is_empty() {
                return Err(MindwellError::Configuration(format!(
                    "intent '{}' needs non-empty keywords",
                    intent.category
                )));
            }
            if intent.responses.is_empty() {
                return Err(MindwellError::Configuration(format!(
                    "intent '{}' has no responses",
                    intent.category
                )));
            }
        }

        for sentiment in [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral] {
            if self.sentiment.bucket(sentiment).is_empty() {
                return Err(MindwellError::Configuration(format!(
                    "sentiment bucket '{}' has no responses",
                    sentiment
                )));
            }
        }

        Ok(())
    }

    /// Keywords are matched against lower-cased input
    pub(crate) fn normalize_keywords(&mut self) {
        for keyword in self
            .crisis
            .keywords
            .iter_mut()
            .chain(self.intents.iter_mut().flat_map(|i| i.keywords.iter_mut()))
        {
            *keyword = keyword.trim().to_lowercase();
        }
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        let intents = vec![
            IntentRule::new(
                "sleep",
                &["sleep", "insomnia", "waking up", "bedtime", "tired", "can't sleep", "awake", "exhausted"],
                &[
                    "Trouble sleeping is draining. Let's talk about **sleep hygiene**. Can you try turning off all screens an hour before bed tonight?",
                    "A racing mind keeps us awake. Would you be willing to try a short **guided meditation for sleep** tonight?",
                    "Sleep issues are common with stress. Have you tried establishing a consistent bedtime routine?",
                    "When you can't sleep, try getting up and doing something calming (like reading a book) for 15 minutes, then returning to bed.",
                ],
            ),
            IntentRule::new(
                "anxiety/stress",
                &["anxious", "stress", "panic", "worry", "overwhelmed", "deadline", "nervous", "anxiety"],
                &[
                    "When anxiety hits, try the **5-4-3-2-1 Grounding Technique**. Can you name 5 things you can see right now?",
                    "Let's try **Box Breathing**. Inhale for 4, hold for 4, exhale for 4, hold for 4. Do this four times.",
                    "Stress can feel overwhelming. Would breaking this down into smaller steps help?",
                    "Remember that this feeling is temporary. What's one small thing you can control right now?",
                ],
            ),
            IntentRule::new(
                "self_esteem",
                &["worthless", "failure", "stupid", "bad about myself", "can't do anything right", "not good enough", "useless"],
                &[
                    "It sounds like your internal critic is very loud right now. Let's try **Cognitive Restructuring**. Can you list one piece of evidence that disproves your thought?",
                    "You are not a failure. Let's list **three things you are genuinely good at** or proud of, no matter how small.",
                    "Everyone has difficult moments. What would you say to a friend who felt this way?",
                    "Our thoughts aren't always facts. Can you identify one positive quality you have?",
                ],
            ),
            IntentRule::new(
                "depression",
                &["depressed", "hopeless", "empty", "nothing matters", "no point", "sad all the time"],
                &[
                    "Depression can make everything feel heavy. Have you been able to do one small thing for yourself today?",
                    "When depression speaks, it lies. What's one tiny thing that usually brings you even a moment of peace?",
                    "This sounds really difficult. Would going for a short walk or changing your environment help right now?",
                    "Depression often isolates us. Is there someone you feel comfortable reaching out to today?",
                ],
            ),
            IntentRule::new(
                "general",
                &["hello", "hi", "hey", "how are you", "what can you do", "help"],
                &[
                    "Hello! I'm here to listen and offer support. How are you feeling today?",
                    "Hi there! I'm a mental fitness chatbot. You can share what's on your mind, and I'll do my best to help.",
                    "Welcome! I'm here to provide mental health support. What would you like to talk about?",
                ],
            ),
        ];

        let owned = |lines: &[&str]| lines.iter().map(|l| l.to_string()).collect::<Vec<_>>();
        let sentiment = SentimentResponses {
            negative: owned(&[
                "That sounds very heavy. It takes courage to share that. Can you tell me more about what's causing this intense feeling?",
                "I hear the pain in your words. Would you like to explore this feeling further?",
                "Thank you for trusting me with this. What's been the most challenging part for you?",
                "I can sense this is really difficult for you. How long have you been feeling this way?",
            ]),
            positive: owned(&[
                "That's wonderful news! It sounds like you've made some positive steps. What contributed most to that feeling?",
                "I'm glad to hear that! What helped you reach this positive place?",
                "That's great! How can you build on this positive momentum?",
                "Wonderful! It's important to celebrate these moments. What made this possible?",
            ]),
            neutral: owned(&[
                "Thank you for sharing that with me. Please continue, I am here to listen without judgment.",
                "I appreciate you telling me this. What else is on your mind?",
                "Thank you for opening up. How has this been affecting your daily life?",
                "I'm listening. Could you tell me more about that?",
            ]),
        };

        Self {
            crisis: CrisisRule::default(),
            intents,
            sentiment,
        }
    }
}
