// Questionnaire module
// Static PHQ-9 data and the scoring state machine

mod assessment;
mod interpretation;
mod store;

pub use assessment::{AnswerOutcome, Assessment, AssessmentResult, AssessmentState, QuestionView};
pub use interpretation::{InterpretationTable, ScoreRange};
pub use store::{Questionnaire, ScalePoint, MAX_SCALE_POINTS};
