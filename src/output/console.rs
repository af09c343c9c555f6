use anyhow::*;
use std::io::{self, Write};

use crate::output::{Message, QuizOutput};

/// Writes the quiz transcript to stdout.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleOutput;

impl QuizOutput for ConsoleOutput {
    fn say(&self, message: &Message) -> Result<()> {
        let stdout = io::stdout();
        let mut stdout = stdout.lock();
        match message {
            // Prompts wait for the answer on the same line
            Message::QuestionBegins(_, _) => write!(stdout, "{}", message)?,
            // The prompt line is still open when the timer fires
            Message::TimeUp => write!(stdout, "\n{}\n", message)?,
            Message::Summary(_) => writeln!(stdout, "{}", message)?,
        }
        stdout.flush().context("Could not write to stdout")
    }
}
