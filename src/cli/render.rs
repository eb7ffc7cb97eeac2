// Terminal rendering for transcript turns, questions and progress

use crossterm::style::Stylize;
use indicatif::{ProgressBar, ProgressStyle};

use crate::questionnaire::{AssessmentResult, QuestionView};
use crate::session::{Role, Turn};

pub const QUESTION_STEM: &str = "How often in the last two weeks have you been bothered by this?";
pub const CHAT_HINT: &str = "What's on your mind today? Type 'quit' to end.";

pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Render `**bold**` spans; stripped when color is off
    pub fn markdown(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for (i, segment) in text.split("**").enumerate() {
            // Odd segments sit between a pair of markers
            if i % 2 == 1 && self.color {
                out.push_str(&segment.bold().to_string());
            } else {
                out.push_str(segment);
            }
        }
        out
    }

    pub fn turn(&self, turn: &Turn) -> String {
        let label = match turn.role {
            Role::User => "You",
            Role::Assistant => "MindWell",
        };
        let label = if !self.color {
            format!("{}:", label)
        } else if turn.role == Role::User {
            format!("{}:", label).cyan().bold().to_string()
        } else {
            format!("{}:", label).green().bold().to_string()
        };
        format!("{} {}", label, self.markdown(&turn.text))
    }

    pub fn question(&self, view: &QuestionView<'_>) -> String {
        let header = format!("Question {} of {}", view.number, view.total);
        let header = if self.color {
            header.yellow().bold().to_string()
        } else {
            header
        };

        let mut lines = vec![
            String::new(),
            header,
            self.markdown(&format!("**{}**", view.text)),
            QUESTION_STEM.to_string(),
        ];
        for option in view.options {
            lines.push(format!("  [{}] {}", option.points, option.display_label()));
        }
        lines.join("\n")
    }

    /// Draw a progress bar for the questionnaire and leave it on screen
    pub fn progress(&self, answered: usize, total: usize, fraction: f64) {
        let pb = ProgressBar::new(total as u64);
        let template = "  {msg:>4} [{bar:30}] {pos}/{len} answered";
        if let Ok(style) = ProgressStyle::with_template(template) {
            pb.set_style(style.progress_chars("=> "));
        }
        pb.set_message(format!("{:.0}%", fraction * 100.0));
        pb.set_position(answered as u64);
        pb.abandon();
    }

    pub fn result(&self, result: &AssessmentResult) -> String {
        let line = format!(
            "PHQ-9 result: {}/{} - {}",
            result.score, result.max_score, result.interpretation
        );
        if self.color {
            line.bold().to_string()
        } else {
            line
        }
    }

    pub fn status(&self, text: &str) -> String {
        if self.color {
            text.dark_grey().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn error(&self, text: &str) -> String {
        if self.color {
            text.red().to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questionnaire::Questionnaire;
    use chrono::Utc;

    #[test]
    fn test_markdown_without_color_strips_markers() {
        let renderer = Renderer::new(false);
        assert_eq!(
            renderer.markdown("Try **Box Breathing** now"),
            "Try Box Breathing now"
        );
        assert_eq!(renderer.markdown("no markers"), "no markers");
    }

    #[test]
    fn test_plain_turn_labels() {
        let renderer = Renderer::new(false);
        let turn = Turn {
            role: Role::User,
            text: "hello".to_string(),
            timestamp: Utc::now(),
        };
        assert_eq!(renderer.turn(&turn), "You: hello");
    }

    #[test]
    fn test_question_lists_options() {
        let renderer = Renderer::new(false);
        let questionnaire = Questionnaire::phq9();
        let view = QuestionView {
            index: 0,
            number: 1,
            total: 9,
            text: questionnaire.question(0).unwrap(),
            options: questionnaire.scale(),
        };
        let block = renderer.question(&view);
        assert!(block.contains("Question 1 of 9"));
        assert!(block.contains("[0] Not at all (0 points)"));
        assert!(block.contains("[1] Several days (1 point)"));
    }
}
