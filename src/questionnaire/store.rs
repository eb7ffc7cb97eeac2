// Questionnaire store
// Loads the questions, answer scale and interpretation table

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::interpretation::{InterpretationTable, ScoreRange};
use crate::errors::{MindwellError, Result};

/// Highest point value a single answer may carry
pub const MAX_SCALE_POINTS: u32 = 3;

/// One selectable answer and the points it adds to the score
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScalePoint {
    pub label: String,
    pub points: u32,
}

impl ScalePoint {
    pub fn new(label: impl Into<String>, points: u32) -> Self {
        Self {
            label: label.into(),
            points,
        }
    }

    /// Button-style label, e.g. "Several days (1 point)"
    pub fn display_label(&self) -> String {
        let mut chars = self.label.chars();
        let capitalized = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
            None => String::new(),
        };
        let unit = if self.points == 1 { "point" } else { "points" };
        format!("{} ({} {})", capitalized, self.points, unit)
    }
}

/// Raw document shape; objects keep their key order (serde_json `preserve_order`)
#[derive(Debug, Deserialize)]
struct QuestionnaireDocument {
    questions: Vec<String>,
    scale: serde_json::Map<String, serde_json::Value>,
    interpretation: serde_json::Map<String, serde_json::Value>,
}

/// Immutable questionnaire data shared by every session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Questionnaire {
    questions: Vec<String>,
    scale: Vec<ScalePoint>,
    interpretation: InterpretationTable,
}

impl Questionnaire {
    /// Build and validate a questionnaire
    ///
    /// The interpretation ranges must partition `[0, questions * max scale value]`.
    pub fn new(
        questions: Vec<String>,
        scale: Vec<ScalePoint>,
        ranges: Vec<ScoreRange>,
    ) -> Result<Self> {
        if questions.is_empty() {
            return Err(MindwellError::Configuration(
                "questionnaire has no questions".to_string(),
            ));
        }
        if scale.is_empty() {
            return Err(MindwellError::Configuration(
                "questionnaire has an empty answer scale".to_string(),
            ));
        }
        if let Some(point) = scale.iter().find(|p| p.points > MAX_SCALE_POINTS) {
            return Err(MindwellError::Configuration(format!(
                "scale value {} for '{}' is above {}",
                point.points, point.label, MAX_SCALE_POINTS
            )));
        }

        let max_score = max_score_for(&questions, &scale);
        let interpretation = InterpretationTable::new(ranges, max_score)?;

        Ok(Self {
            questions,
            scale,
            interpretation,
        })
    }

    /// The built-in PHQ-9 set
    pub fn phq9() -> Self {
        let questions = [
            "Little interest or pleasure in doing things",
            "Feeling down, depressed, or hopeless",
            "Trouble falling or staying asleep, or sleeping too much",
            "Feeling tired or having little energy",
            "Poor appetite or overeating",
            "Feeling bad about yourself — or that you are a failure or have let yourself or your family down",
            "Trouble concentrating on things, such as reading the newspaper or watching television",
            "Moving or speaking so slowly that other people could have noticed? Or the opposite — being so fidgety or restless that you have been moving around a lot more than usual",
            "Thoughts that you would be better off dead or of hurting yourself in some way",
        ]
        .iter()
        .map(|q| q.to_string())
        .collect::<Vec<_>>();

        let scale = vec![
            ScalePoint::new("not at all", 0),
            ScalePoint::new("several days", 1),
            ScalePoint::new("more than half the days", 2),
            ScalePoint::new("nearly every day", 3),
        ];

        let ranges = vec![
            ScoreRange::new(0, 4, "Minimal depression"),
            ScoreRange::new(5, 9, "Mild depression"),
            ScoreRange::new(10, 14, "Moderate depression"),
            ScoreRange::new(15, 19, "Moderately severe depression"),
            ScoreRange::new(20, 27, "Severe depression"),
        ];

        let max_score = max_score_for(&questions, &scale);
        Self {
            questions,
            scale,
            interpretation: InterpretationTable::new_unchecked(ranges, max_score),
        }
    }

    /// Parse and validate a questionnaire JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let doc: QuestionnaireDocument = serde_json::from_str(json)?;

        let scale = doc
            .scale
            .into_iter()
            .map(|(label, value)| {
                let points = value
                    .as_u64()
                    .and_then(|v| u32::try_from(v).ok())
                    .ok_or_else(|| {
                        MindwellError::Configuration(format!(
                            "scale value for '{}' must be a non-negative integer, got {}",
                            label, value
                        ))
                    })?;
                Ok(ScalePoint::new(label, points))
            })
            .collect::<Result<Vec<_>>>()?;

        let ranges = doc
            .interpretation
            .into_iter()
            .map(|(key, value)| {
                let label = value.as_str().ok_or_else(|| {
                    MindwellError::Configuration(format!(
                        "interpretation label for '{}' must be a string",
                        key
                    ))
                })?;
                ScoreRange::parse(&key, label)
            })
            .collect::<Result<Vec<_>>>()?;

        Self::new(doc.questions, scale, ranges)
    }

    /// Load a questionnaire from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Load a questionnaire, substituting the built-in set when the file is
    /// missing, unreadable or not a questionnaire document
    ///
    /// A document that parses but fails validation is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match Self::load_from_file(path) {
            Ok(questionnaire) => {
                tracing::info!(
                    "Loaded questionnaire from {} ({} questions)",
                    path.display(),
                    questionnaire.len()
                );
                Ok(questionnaire)
            }
            Err(MindwellError::Io(e)) => {
                tracing::warn!(
                    "Could not read questionnaire {}: {}; using built-in PHQ-9",
                    path.display(),
                    e
                );
                Ok(Self::phq9())
            }
            Err(MindwellError::Json(e)) => {
                tracing::warn!(
                    "Could not parse questionnaire {}: {}; using built-in PHQ-9",
                    path.display(),
                    e
                );
                Ok(Self::phq9())
            }
            Err(e) => Err(e),
        }
    }

    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    pub fn question(&self, index: usize) -> Option<&str> {
        self.questions.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Answer options in display order
    pub fn scale(&self) -> &[ScalePoint] {
        &self.scale
    }

    /// Distinct point values accepted as answers
    pub fn allowed_points(&self) -> Vec<u32> {
        let mut points: Vec<u32> = self.scale.iter().map(|p| p.points).collect();
        points.sort_unstable();
        points.dedup();
        points
    }

    pub fn accepts(&self, points: u32) -> bool {
        self.scale.iter().any(|p| p.points == points)
    }

    /// Case-insensitive lookup of an answer label
    pub fn points_for_label(&self, label: &str) -> Option<u32> {
        let label = label.trim().to_lowercase();
        self.scale
            .iter()
            .find(|p| p.label.to_lowercase() == label)
            .map(|p| p.points)
    }

    pub fn max_score(&self) -> u32 {
        self.interpretation.max_score()
    }

    pub fn interpretation(&self) -> &InterpretationTable {
        &self.interpretation
    }

    /// Interpretation label for a final score
    pub fn interpret(&self, score: u32) -> Result<&str> {
        self.interpretation
            .range_containing(score)
            .map(|range| range.label.as_str())
            .ok_or_else(|| {
                MindwellError::Configuration(format!(
                    "no interpretation range contains score {}",
                    score
                ))
            })
    }
}

impl Default for Questionnaire {
    fn default() -> Self {
        Self::phq9()
    }
}

fn max_score_for(questions: &[String], scale: &[ScalePoint]) -> u32 {
    let max_point = scale.iter().map(|p| p.points).max().unwrap_or(0);
    questions.len() as u32 * max_point
}
