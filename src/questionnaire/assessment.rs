// Scoring state machine
// Walks through the questionnaire one answer at a time

use serde::Serialize;
use std::sync::Arc;

use super::store::{Questionnaire, ScalePoint};
use crate::errors::{MindwellError, Result};

/// Final score and its interpretation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessmentResult {
    pub score: u32,
    pub max_score: u32,
    pub interpretation: String,
}

impl AssessmentResult {
    /// Assistant message that opens the chat after the questionnaire
    pub fn summary(&self) -> String {
        format!(
            "Thank you for completing the assessment. Your score is {}/{}, which suggests **{}**. \
             Remember, this is just a screening tool, not a diagnosis. \
             I'm here to listen and support you. What would you like to talk about?",
            self.score,
            self.max_score,
            self.interpretation.to_lowercase()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssessmentState {
    InProgress { index: usize, score: u32 },
    Complete(AssessmentResult),
}

/// What the renderer needs to show the current question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView<'a> {
    pub index: usize,
    /// 1-based position for display
    pub number: usize,
    pub total: usize,
    pub text: &'a str,
    pub options: &'a [ScalePoint],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Moved on to the question at this index
    Next(usize),
    Completed(AssessmentResult),
}

pub struct Assessment {
    questionnaire: Arc<Questionnaire>,
    state: AssessmentState,
}

impl Assessment {
    pub fn new(questionnaire: Arc<Questionnaire>) -> Self {
        Self {
            questionnaire,
            state: AssessmentState::InProgress { index: 0, score: 0 },
        }
    }

    pub fn questionnaire(&self) -> &Questionnaire {
        &self.questionnaire
    }

    pub fn state(&self) -> &AssessmentState {
        &self.state
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.state, AssessmentState::Complete(_))
    }

    /// Index of the next question to answer; equals the question count once complete
    pub fn current_index(&self) -> usize {
        match &self.state {
            AssessmentState::InProgress { index, .. } => *index,
            AssessmentState::Complete(_) => self.questionnaire.len(),
        }
    }

    pub fn score(&self) -> u32 {
        match &self.state {
            AssessmentState::InProgress { score, .. } => *score,
            AssessmentState::Complete(result) => result.score,
        }
    }

    pub fn result(&self) -> Option<&AssessmentResult> {
        match &self.state {
            AssessmentState::Complete(result) => Some(result),
            AssessmentState::InProgress { .. } => None,
        }
    }

    /// The question awaiting an answer, or `None` once complete
    pub fn current_question(&self) -> Option<QuestionView<'_>> {
        let AssessmentState::InProgress { index, .. } = self.state else {
            return None;
        };
        let text = self.questionnaire.question(index)?;
        Some(QuestionView {
            index,
            number: index + 1,
            total: self.questionnaire.len(),
            text,
            options: self.questionnaire.scale(),
        })
    }

    /// Fraction of questions answered, in `[0, 1]`
    pub fn progress(&self) -> f64 {
        let total = self.questionnaire.len();
        if total == 0 {
            return 1.0;
        }
        self.current_index() as f64 / total as f64
    }

    /// Record an answer worth `points`
    ///
    /// Rejected answers leave the state untouched.
    pub fn submit_answer(&mut self, points: u32) -> Result<AnswerOutcome> {
        let AssessmentState::InProgress { index, score } = self.state else {
            return Err(MindwellError::AssessmentComplete);
        };

        if !self.questionnaire.accepts(points) {
            return Err(MindwellError::InvalidAnswer {
                value: points,
                allowed: self.questionnaire.allowed_points(),
            });
        }

        let index = index + 1;
        let score = score + points;
        tracing::debug!("Answer {} recorded: +{} (running score {})", index, points, score);

        if index < self.questionnaire.len() {
            self.state = AssessmentState::InProgress { index, score };
            return Ok(AnswerOutcome::Next(index));
        }

        let interpretation = self.questionnaire.interpret(score)?.to_string();
        let result = AssessmentResult {
            score,
            max_score: self.questionnaire.max_score(),
            interpretation,
        };
        tracing::info!(
            "Assessment complete: {}/{} ({})",
            result.score,
            result.max_score,
            result.interpretation
        );
        self.state = AssessmentState::Complete(result.clone());
        Ok(AnswerOutcome::Completed(result))
    }

    pub fn reset(&mut self) {
        self.state = AssessmentState::InProgress { index: 0, score: 0 };
    }
}
