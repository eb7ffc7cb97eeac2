// Response rule engine priority and determinism
//
// Covers:
// 1. Crisis keywords win over everything, for any seed
// 2. Earliest declared intent wins when several match
// 3. Sentiment fallback buckets
// 4. Analyzer failures degrade to neutral

use mindwell::crisis::CRISIS_RESPONSE;
use mindwell::router::{IntentRule, KnowledgeBase, ResponseCategory, ResponseEngine};
use mindwell::sentiment::{LexiconAnalyzer, Sentiment};
use mindwell::MindwellError;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

const SEEDS: [u64; 6] = [0, 1, 7, 42, 1234, u64::MAX];

#[test]
fn test_crisis_wins_for_every_seed() {
    let engine = ResponseEngine::with_defaults();
    let inputs = [
        "I want to die",
        "I can't sleep and I want to die",
        "hello, I keep thinking about suicide",
        "  I'm so anxious I could END MY LIFE  ",
    ];

    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        for input in inputs {
            let response = engine.respond(input, &mut rng);
            assert_eq!(response.category, ResponseCategory::Crisis, "input: {}", input);
            assert_eq!(response.text, CRISIS_RESPONSE);
        }
    }
}

#[test]
fn test_first_declared_intent_wins() {
    let engine = ResponseEngine::with_defaults();
    let sleep_responses = KnowledgeBase::default().intents[0].responses.clone();

    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let response = engine.respond("I can't sleep and feel anxious", &mut rng);
        assert_eq!(response.category, ResponseCategory::Intent("sleep".to_string()));
        assert!(sleep_responses.contains(&response.text));
    }
}

#[test]
fn test_declared_order_not_alphabetical() {
    let mut knowledge = KnowledgeBase::default();
    knowledge.intents = vec![
        IntentRule::new("zeta", &["anxious"], &["zeta reply"]),
        IntentRule::new("alpha", &["sleep"], &["alpha reply"]),
    ];
    let engine = ResponseEngine::new(knowledge, Arc::new(LexiconAnalyzer::new())).unwrap();
    let mut rng = StdRng::seed_from_u64(5);

    let response = engine.respond("I can't sleep and feel anxious", &mut rng);
    assert_eq!(response.category.as_str(), "zeta");
    assert_eq!(response.text, "zeta reply");
}

#[test]
fn test_same_seed_same_reply() {
    let engine = ResponseEngine::with_defaults();
    let mut first = StdRng::seed_from_u64(99);
    let mut second = StdRng::seed_from_u64(99);

    for input in ["I'm so stressed", "hello", "nothing matters", "I feel amazing today"] {
        assert_eq!(engine.respond(input, &mut first), engine.respond(input, &mut second));
    }
}

#[test]
fn test_positive_sentiment_fallback() {
    let engine = ResponseEngine::with_defaults();
    let positive = KnowledgeBase::default().sentiment.positive;

    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let response = engine.respond("I feel amazing today", &mut rng);
        assert_eq!(response.category, ResponseCategory::Sentiment(Sentiment::Positive));
        assert!(positive.contains(&response.text));
    }
}

#[test]
fn test_negative_and_neutral_fallback() {
    let engine = ResponseEngine::with_defaults();
    let mut rng = StdRng::seed_from_u64(11);

    let negative = engine.respond("The day was terrible and awful", &mut rng);
    assert_eq!(negative.category.as_str(), "negative");

    let neutral = engine.respond("The bus was late on Tuesday", &mut rng);
    assert_eq!(neutral.category.as_str(), "neutral");

    let empty = engine.respond("", &mut rng);
    assert_eq!(empty.category.as_str(), "neutral");
    assert!(!empty.text.is_empty());
}

#[test]
fn test_failing_analyzer_falls_back_to_neutral() {
    let knowledge = KnowledgeBase::default();
    let neutral = knowledge.sentiment.neutral.clone();
    let failing = |_: &str| -> mindwell::Result<f64> {
        Err(MindwellError::Sentiment("lexicon unavailable".to_string()))
    };
    let engine = ResponseEngine::new(knowledge, Arc::new(failing)).unwrap();
    let mut rng = StdRng::seed_from_u64(2);

    let response = engine.respond("I feel amazing today", &mut rng);
    assert_eq!(response.category, ResponseCategory::Sentiment(Sentiment::Neutral));
    assert!(neutral.contains(&response.text));
}
