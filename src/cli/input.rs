// Readline input handler with in-memory history and editing support
//
// History is never written to disk; transcripts live only for the process.

use anyhow::{Context, Result};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::{self, BufRead, Write};

pub struct InputHandler {
    editor: Option<DefaultEditor>,
}

impl InputHandler {
    /// Line editor when attached to a terminal, plain stdin otherwise
    pub fn new(interactive: bool) -> Result<Self> {
        let editor = if interactive {
            Some(DefaultEditor::new().context("Failed to initialize readline editor")?)
        } else {
            None
        };
        Ok(Self { editor })
    }

    /// Read a line of input
    ///
    /// Returns:
    /// - `Ok(Some(line))` - user entered text (trimmed)
    /// - `Ok(None)` - user pressed Ctrl+C / Ctrl+D, or stdin reached EOF
    /// - `Err(e)` - I/O or other error
    pub fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        let Some(editor) = self.editor.as_mut() else {
            return read_stdin_line(prompt);
        };

        match editor.readline(prompt) {
            Ok(line) => {
                let line = line.trim().to_string();
                if !line.is_empty() {
                    editor
                        .add_history_entry(&line)
                        .context("Failed to add history entry")?;
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) => Ok(None),
            Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err).context("Failed to read input"),
        }
    }
}

fn read_stdin_line(prompt: &str) -> Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    let read = io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
