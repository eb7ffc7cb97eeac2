// Interactive REPL
//
// Drives one session: questionnaire first, then chat. All state lives in
// the `Session`; this loop only reads input and renders output.

use anyhow::Result;

use super::commands::{help_text, parse_answer, Command};
use super::input::InputHandler;
use super::render::{Renderer, CHAT_HINT};
use crate::errors::MindwellError;
use crate::questionnaire::AnswerOutcome;
use crate::session::Session;

pub struct Repl {
    session: Session,
    input: InputHandler,
    renderer: Renderer,
    /// Question index already shown, so rejected answers do not redraw it
    shown_question: Option<usize>,
    chat_hint_shown: bool,
}

impl Repl {
    pub fn new(session: Session, input: InputHandler, renderer: Renderer) -> Self {
        Self {
            session,
            input,
            renderer,
            shown_question: None,
            chat_hint_shown: false,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Run until the user quits, says goodbye, or input ends
    pub fn run(mut self) -> Result<Session> {
        for turn in self.session.transcript().turns() {
            println!("{}", self.renderer.turn(turn));
        }
        println!("{}", self.renderer.status("Type /help for commands."));

        loop {
            let prompt = if self.session.is_complete() {
                if !self.chat_hint_shown {
                    println!("\n{}", self.renderer.status(CHAT_HINT));
                    self.chat_hint_shown = true;
                }
                "you> "
            } else {
                self.show_current_question();
                "answer> "
            };

            let Some(line) = self.input.read_line(prompt)? else {
                println!("{}", self.renderer.status("Goodbye!"));
                break;
            };

            if line.is_empty() {
                continue;
            }

            if line.starts_with('/') {
                if self.handle_command(&line) {
                    break;
                }
                continue;
            }

            let keep_going = if self.session.is_complete() {
                self.handle_message(&line)
            } else {
                self.handle_answer(&line);
                true
            };
            if !keep_going {
                break;
            }
        }

        Ok(self.session)
    }

    fn show_current_question(&mut self) {
        let Some(view) = self.session.current_question() else {
            return;
        };
        if self.shown_question == Some(view.index) {
            return;
        }
        println!("{}", self.renderer.question(&view));
        self.renderer
            .progress(view.index, view.total, self.session.progress());
        self.shown_question = Some(view.index);
    }

    fn handle_answer(&mut self, line: &str) {
        let Some(points) = parse_answer(line, self.session.assessment().questionnaire()) else {
            println!(
                "{}",
                self.renderer
                    .error("Please answer with a point value or one of the options above.")
            );
            return;
        };

        match self.session.submit_answer(points) {
            Ok(AnswerOutcome::Next(_)) => {}
            Ok(AnswerOutcome::Completed(result)) => {
                println!("\n{}", self.renderer.result(&result));
                if let Some(turn) = self.session.transcript().last() {
                    println!("{}", self.renderer.turn(turn));
                }
            }
            Err(e @ MindwellError::InvalidAnswer { .. }) => {
                println!("{}", self.renderer.error(&e.to_string()));
            }
            Err(e) => {
                tracing::error!("Failed to record answer: {}", e);
                println!("{}", self.renderer.error(&e.to_string()));
            }
        }
    }

    /// Returns false when the chat has ended
    fn handle_message(&mut self, line: &str) -> bool {
        match self.session.submit_message(line) {
            Ok(reply) => {
                if let Some(turn) = self.session.transcript().last() {
                    println!("{}", self.renderer.turn(turn));
                }
                if let Some(category) = &reply.category {
                    tracing::debug!("Reply category: {}", category);
                }
                !reply.ended
            }
            Err(MindwellError::SessionEnded) => false,
            Err(e) => {
                println!("{}", self.renderer.error(&e.to_string()));
                true
            }
        }
    }

    /// Returns true when the user asked to quit
    fn handle_command(&mut self, line: &str) -> bool {
        let Some(command) = Command::parse(line) else {
            println!("{}", self.renderer.error(&format!("Unknown command: {}", line)));
            println!("{}", self.renderer.status("Type /help for available commands"));
            return false;
        };

        match command {
            Command::Quit => {
                println!("{}", self.renderer.status("Goodbye!"));
                return true;
            }
            Command::Help => println!("{}", help_text()),
            Command::Reset => {
                self.session.reset();
                self.shown_question = None;
                self.chat_hint_shown = false;
                if let Some(turn) = self.session.transcript().last() {
                    println!("{}", self.renderer.turn(turn));
                }
            }
            Command::History => {
                let transcript = self.session.transcript();
                println!(
                    "{}",
                    self.renderer.status(&format!(
                        "Conversation history ({} messages, {} from you):",
                        transcript.message_count(),
                        transcript.user_message_count()
                    ))
                );
                for turn in transcript.turns() {
                    println!("{}", self.renderer.turn(turn));
                }
            }
            Command::Score => match self.session.assessment().result() {
                Some(result) => println!("{}", self.renderer.result(result)),
                None => println!(
                    "{}",
                    self.renderer.status(&format!(
                        "Assessment in progress: {} of {} answered ({:.0}%)",
                        self.session.assessment().current_index(),
                        self.session.assessment().questionnaire().len(),
                        self.session.progress() * 100.0
                    ))
                ),
            },
        }

        false
    }
}
