// Configuration structs

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to the questionnaire JSON (questions, scale, interpretation)
    pub questionnaire_path: PathBuf,

    /// Optional response knowledge base; built-in responses when unset
    pub knowledge_path: Option<PathBuf>,

    /// Seed for response selection (random when unset)
    pub seed: Option<u64>,

    /// Enable debug-level logging
    pub debug_logging: bool,

    /// Styled terminal output
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            questionnaire_path: PathBuf::from("data/phq9_questions.json"),
            knowledge_path: None,
            seed: None,
            debug_logging: false,
            color: true,
        }
    }
}
