// Sentiment module
// Compound polarity scoring used by the fallback response tier

mod analyzer;
mod lexicon;

pub use analyzer::{Sentiment, SentimentAnalyzer, NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD};
pub use lexicon::LexiconAnalyzer;
