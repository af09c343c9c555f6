use anyhow::*;
use log::debug;

use self::definition::*;
use self::race::*;
use self::settings::*;
use crate::input::AnswerInput;
use crate::output::{Message, QuizOutput};

pub mod definition;
pub mod race;
pub mod settings;


#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
}

impl Score {
    pub fn new(total: usize) -> Self {
        Score { correct: 0, total }
    }

    fn record_correct(&mut self) {
        debug_assert!(self.correct < self.total);
        self.correct += 1;
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Completion {
    Finished(Score),
    TimedOut(Score),
}

impl Completion {
    pub fn get_score(&self) -> Score {
        match self {
            Completion::Finished(score) | Completion::TimedOut(score) => *score,
        }
    }
}

pub struct Quiz<R, O> {
    questions: Vec<Question>,
    settings: Settings,
    input: AnswerInput<R>,
    output: O,
}

impl<R, O> Quiz<R, O>
where
    R: tokio::io::AsyncRead + Unpin + Send + 'static,
    O: QuizOutput,
{
    pub fn new(
        definition: QuizDefinition,
        settings: Settings,
        input: AnswerInput<R>,
        output: O,
    ) -> Self {
        Quiz {
            questions: definition.into_questions(),
            settings,
            input,
            output,
        }
    }

    /// Asks every question in order, each against a fresh timer. The first question
    /// left unanswered when its timer fires ends the quiz.
    pub async fn run(self) -> Result<Completion> {
        let mut score = Score::new(self.questions.len());

        for (index, question) in self.questions.iter().enumerate() {
            let number = index + 1;
            self.output.say(&Message::QuestionBegins(number, question.prompt.clone()))?;

            let answer = self.input.request();
            match race(answer, self.settings.question_duration).await? {
                Outcome::Answered(answer) => {
                    let is_correct = question.is_answer_correct(&answer);
                    debug!("Question {} answered, correct: {}", number, is_correct);
                    if is_correct {
                        score.record_correct();
                    }
                }
                Outcome::TimedOut => {
                    debug!(
                        "Question {} timed out after {:?}",
                        number, self.settings.question_duration
                    );
                    self.output.say(&Message::TimeUp)?;
                    return Ok(Completion::TimedOut(score));
                }
            }
        }

        Ok(Completion::Finished(score))
    }
}
