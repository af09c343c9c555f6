use anyhow::*;
use std::fmt;

use crate::quiz::Score;

pub mod console;
#[cfg(test)]
pub mod mock;

pub use console::ConsoleOutput;


#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
    QuestionBegins(usize, String),
    Summary(Score),
    TimeUp,
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::QuestionBegins(number, prompt) => write!(f, "{}. {}: ", number, prompt),
            Message::Summary(score) => write!(
                f,
                "User answered {} problems correctly. Scored {} of {}.",
                score.correct, score.correct, score.total
            ),
            Message::TimeUp => write!(f, "Time limit exceeded."),
        }
    }
}

pub trait QuizOutput {
    fn say(&self, message: &Message) -> Result<()>;
}
