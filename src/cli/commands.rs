// Slash command and answer parsing

use crate::questionnaire::Questionnaire;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Quit,
    Reset,
    History,
    Score,
}

impl Command {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "/help" | "/?" => Some(Command::Help),
            "/quit" | "/exit" => Some(Command::Quit),
            "/reset" | "/retake" | "/restart" => Some(Command::Reset),
            "/history" => Some(Command::History),
            "/score" => Some(Command::Score),
            _ => None,
        }
    }
}

pub fn help_text() -> &'static str {
    "Available commands:\n\
     \x20 /help     - Show this help message\n\
     \x20 /reset    - Start the assessment over (alias /retake)\n\
     \x20 /history  - Show the conversation so far\n\
     \x20 /score    - Show assessment progress or result\n\
     \x20 /quit     - Leave MindWell\n\n\
     During the assessment, answer with the point value (0-3) or the option text.\n\
     After it, type 'quit', 'exit', 'bye' or 'goodbye' to end the chat."
}

/// Interpret an answer as a point value or an option label
pub fn parse_answer(input: &str, questionnaire: &Questionnaire) -> Option<u32> {
    let trimmed = input.trim();
    if let Ok(points) = trimmed.parse::<u32>() {
        return Some(points);
    }
    questionnaire.points_for_label(trimmed)
}
