// Per-user session state
//
// Owns the assessment, the transcript and the RNG used for response
// selection. Shared data (questionnaire, engine) is immutable behind `Arc`,
// so one process can host many independent sessions.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use uuid::Uuid;

use super::transcript::Transcript;
use crate::errors::{MindwellError, Result};
use crate::questionnaire::{AnswerOutcome, Assessment, Questionnaire, QuestionView};
use crate::router::{normalize_input, ResponseCategory, ResponseEngine};

pub const WELCOME_MESSAGE: &str = "Welcome! I'm an Adaptive Mental Fitness Chatbot. \
    To get started, I'll ask you a few questions to understand how you've been feeling.";

pub const WELCOME_BACK_MESSAGE: &str = "Welcome back! Let's start the assessment again.";

pub const FAREWELL_MESSAGE: &str = "Thank you for trusting me today. \
    Remember, your well-being is important. Take care of yourself.";

pub const EXIT_COMMANDS: &[&str] = &["quit", "exit", "bye", "goodbye"];

/// Exact match on normalized text; "quitting" is not an exit
pub fn is_exit_command(text: &str) -> bool {
    let normalized = normalize_input(text);
    EXIT_COMMANDS.contains(&normalized.as_str())
}

/// Assistant reply to a chat message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    /// `None` for the farewell after an exit command
    pub category: Option<ResponseCategory>,
    /// True once the user has ended the chat
    pub ended: bool,
}

pub struct Session {
    id: Uuid,
    assessment: Assessment,
    transcript: Transcript,
    engine: Arc<ResponseEngine>,
    rng: StdRng,
    last_category: Option<ResponseCategory>,
    chat_active: bool,
}

impl Session {
    pub fn new(questionnaire: Arc<Questionnaire>, engine: Arc<ResponseEngine>) -> Self {
        Self::with_rng(questionnaire, engine, StdRng::from_entropy())
    }

    /// Deterministic response selection
    pub fn with_seed(
        questionnaire: Arc<Questionnaire>,
        engine: Arc<ResponseEngine>,
        seed: u64,
    ) -> Self {
        Self::with_rng(questionnaire, engine, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(
        questionnaire: Arc<Questionnaire>,
        engine: Arc<ResponseEngine>,
        rng: StdRng,
    ) -> Self {
        let mut transcript = Transcript::new();
        transcript.append_assistant(WELCOME_MESSAGE);

        let id = Uuid::new_v4();
        tracing::debug!("Session {} created", id);

        Self {
            id,
            assessment: Assessment::new(questionnaire),
            transcript,
            engine,
            rng,
            last_category: None,
            chat_active: true,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn assessment(&self) -> &Assessment {
        &self.assessment
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Category of the most recent engine reply
    pub fn last_category(&self) -> Option<&ResponseCategory> {
        self.last_category.as_ref()
    }

    pub fn is_complete(&self) -> bool {
        self.assessment.is_complete()
    }

    pub fn is_chat_active(&self) -> bool {
        self.chat_active
    }

    pub fn current_question(&self) -> Option<QuestionView<'_>> {
        self.assessment.current_question()
    }

    pub fn progress(&self) -> f64 {
        self.assessment.progress()
    }

    /// Answer the current question; appends the summary turn on completion
    pub fn submit_answer(&mut self, points: u32) -> Result<AnswerOutcome> {
        let _span = tracing::debug_span!("session", id = %self.id).entered();

        let outcome = self.assessment.submit_answer(points)?;
        if let AnswerOutcome::Completed(result) = &outcome {
            self.transcript.append_assistant(result.summary());
        }
        Ok(outcome)
    }

    /// Route a chat message and append both turns
    pub fn submit_message(&mut self, text: &str) -> Result<Reply> {
        let _span = tracing::debug_span!("session", id = %self.id).entered();

        if !self.assessment.is_complete() {
            return Err(MindwellError::AssessmentInProgress);
        }
        if !self.chat_active {
            return Err(MindwellError::SessionEnded);
        }

        self.transcript.append_user(text);

        if is_exit_command(text) {
            tracing::info!("User ended the chat");
            self.chat_active = false;
            self.transcript.append_assistant(FAREWELL_MESSAGE);
            return Ok(Reply {
                text: FAREWELL_MESSAGE.to_string(),
                category: None,
                ended: true,
            });
        }

        let response = self.engine.respond(text, &mut self.rng);
        self.transcript.append_assistant(response.text.clone());
        self.last_category = Some(response.category.clone());

        Ok(Reply {
            text: response.text,
            category: Some(response.category),
            ended: false,
        })
    }

    /// Start the assessment over
    pub fn reset(&mut self) {
        tracing::debug!("Session {} reset", self.id);
        self.assessment.reset();
        self.transcript.clear();
        self.transcript.append_assistant(WELCOME_BACK_MESSAGE);
        self.last_category = None;
        self.chat_active = true;
    }
}
