//! Lexicon-based sentiment scoring.
//!
//! Each known word carries a valence in roughly `[-4, 4]`. Valences are
//! flipped by a nearby negation, nudged by intensity adverbs and emphasis
//! (`!`), summed, then squashed into a compound score in `[-1, 1]`.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

use super::analyzer::SentimentAnalyzer;
use crate::errors::Result;

/// Normalization constant for `sum / sqrt(sum² + alpha)`
const ALPHA: f64 = 15.0;
/// Multiplier applied to a valence preceded by a negation
const NEGATION_SCALAR: f64 = -0.74;
/// Added to (or subtracted from) a valence following an intensity adverb
const BOOSTER_INCREMENT: f64 = 0.293;
/// Emphasis added per exclamation mark, capped at four marks
const EXCLAMATION_INCREMENT: f64 = 0.292;
/// How many preceding tokens are checked for negation and boosters
const LOOKBACK: usize = 3;

/// Words with an optional contraction suffix ("can't", "don't")
static TOKEN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-z]+(?:'[a-z]+)?").expect("Failed to compile token regex")
});

const WORD_VALENCES: &[(&str, f64)] = &[
    // Positive
    ("amazing", 2.8),
    ("awesome", 3.1),
    ("beautiful", 2.9),
    ("best", 3.2),
    ("better", 1.9),
    ("calm", 1.3),
    ("confident", 2.2),
    ("enjoy", 2.2),
    ("enjoyed", 2.3),
    ("excellent", 2.7),
    ("excited", 1.4),
    ("fantastic", 2.6),
    ("fine", 0.8),
    ("fun", 2.3),
    ("glad", 2.0),
    ("good", 1.9),
    ("grateful", 2.0),
    ("great", 3.1),
    ("happy", 2.7),
    ("hope", 1.9),
    ("hopeful", 2.3),
    ("joy", 2.8),
    ("love", 3.2),
    ("loved", 2.9),
    ("nice", 1.8),
    ("okay", 0.9),
    ("peaceful", 2.2),
    ("perfect", 2.7),
    ("proud", 2.1),
    ("relaxed", 2.2),
    ("relieved", 1.5),
    ("thank", 1.5),
    ("thanks", 1.9),
    ("well", 1.1),
    ("wonderful", 2.7),
    // Negative
    ("afraid", -2.0),
    ("alone", -1.0),
    ("angry", -2.3),
    ("annoyed", -1.6),
    ("ashamed", -2.1),
    ("awful", -2.0),
    ("bad", -2.5),
    ("bored", -1.1),
    ("broken", -1.6),
    ("cry", -2.1),
    ("crying", -2.1),
    ("difficult", -1.5),
    ("disappointed", -1.9),
    ("frustrated", -1.7),
    ("grief", -2.2),
    ("guilty", -1.8),
    ("hate", -2.7),
    ("horrible", -2.5),
    ("hurt", -2.4),
    ("lonely", -2.0),
    ("lost", -1.3),
    ("miserable", -2.2),
    ("pain", -2.3),
    ("problem", -1.7),
    ("sad", -2.1),
    ("scared", -1.9),
    ("sick", -1.7),
    ("struggling", -1.6),
    ("terrible", -2.1),
    ("unhappy", -1.8),
    ("upset", -1.6),
    ("worse", -2.1),
    ("worst", -3.1),
    ("wrong", -2.1),
];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "none", "nobody", "nothing", "neither", "nor", "hardly", "cannot",
    "can't", "cant", "don't", "dont", "doesn't", "didn't", "isn't", "aren't", "wasn't",
    "weren't", "won't", "wouldn't", "shouldn't", "couldn't", "without",
];

const BOOSTERS: &[&str] = &[
    "very",
    "really",
    "extremely",
    "so",
    "incredibly",
    "totally",
    "absolutely",
    "completely",
    "super",
];

const DAMPENERS: &[&str] = &["slightly", "somewhat", "barely", "kinda", "sorta", "little"];

/// Built-in analyzer producing a compound polarity score
pub struct LexiconAnalyzer {
    valences: HashMap<String, f64>,
}

impl LexiconAnalyzer {
    pub fn new() -> Self {
        Self::with_lexicon(
            WORD_VALENCES
                .iter()
                .map(|(word, valence)| (word.to_string(), *valence)),
        )
    }

    /// Analyzer over a custom word → valence lexicon
    pub fn with_lexicon(entries: impl IntoIterator<Item = (String, f64)>) -> Self {
        Self {
            valences: entries
                .into_iter()
                .map(|(word, valence)| (word.to_lowercase(), valence))
                .collect(),
        }
    }

    /// Compound score in `[-1, 1]`; 0.0 when no known words are present
    pub fn compound(&self, text: &str) -> f64 {
        let lower = text.to_lowercase();
        let tokens: Vec<&str> = TOKEN_REGEX
            .find_iter(&lower)
            .map(|m| m.as_str())
            .collect();

        let mut sum = 0.0;
        for (i, token) in tokens.iter().enumerate() {
            let Some(&valence) = self.valences.get(*token) else {
                continue;
            };
            let window = &tokens[i.saturating_sub(LOOKBACK)..i];
            sum += adjust_valence(valence, window);
        }

        if sum == 0.0 {
            return 0.0;
        }

        let exclamations = text.chars().filter(|c| *c == '!').count().min(4) as f64;
        let emphasis = exclamations * EXCLAMATION_INCREMENT;
        sum += if sum > 0.0 { emphasis } else { -emphasis };

        normalize(sum)
    }
}

impl Default for LexiconAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentAnalyzer for LexiconAnalyzer {
    fn polarity(&self, text: &str) -> Result<f64> {
        Ok(self.compound(text))
    }
}

fn adjust_valence(valence: f64, window: &[&str]) -> f64 {
    let mut adjusted = valence;

    for word in window {
        let step = if BOOSTERS.contains(word) {
            BOOSTER_INCREMENT
        } else if DAMPENERS.contains(word) {
            -BOOSTER_INCREMENT
        } else {
            continue;
        };
        adjusted += if valence > 0.0 { step } else { -step };
    }

    if window.iter().any(|word| NEGATIONS.contains(word)) {
        adjusted *= NEGATION_SCALAR;
    }

    adjusted
}

fn normalize(sum: f64) -> f64 {
    (sum / (sum * sum + ALPHA).sqrt()).clamp(-1.0, 1.0)
}
