// CLI module
// Terminal front end: input, commands, rendering and the REPL loop

mod commands;
mod input;
mod render;
mod repl;

pub use commands::{help_text, parse_answer, Command};
pub use input::InputHandler;
pub use render::{Renderer, CHAT_HINT, QUESTION_STEM};
pub use repl::Repl;
