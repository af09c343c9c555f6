use anyhow::*;
use clap::Parser;
use log::info;
use std::path::PathBuf;
use std::process;
use std::time::Duration;

use crate::input::AnswerInput;
use crate::output::{ConsoleOutput, Message, QuizOutput};
use crate::quiz::definition::QuizDefinition;
use crate::quiz::settings::Settings;
use crate::quiz::{Completion, Quiz};

mod input;
mod output;
mod quiz;

const DEFAULT_QUIZ_PATH: &str = "./problems.csv";

/// Asks the questions from a CSV file one at a time, each against a time limit
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// CSV file of `question,answer` rows
    #[arg(short, long, default_value = DEFAULT_QUIZ_PATH)]
    file: PathBuf,

    /// Seconds allowed to answer each question
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    limit: Option<u64>,
}

impl Args {
    fn get_settings(&self) -> Settings {
        let mut settings = Settings::default();
        if let Some(limit) = self.limit {
            settings.question_duration = Duration::from_secs(limit);
        }
        settings
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let definition = QuizDefinition::open(&args.file)
        .context("The quiz needs a CSV file of questions, see --help")?;
    let settings = args.get_settings();
    info!(
        "Starting quiz with {} questions, {:?} per question",
        definition.get_questions().len(),
        settings.question_duration
    );

    let output = ConsoleOutput;
    let quiz = Quiz::new(
        definition,
        settings,
        AnswerInput::new(tokio::io::stdin()),
        output,
    );
    let completion = quiz.run().await?;

    // The abandoned stdin read would otherwise keep the runtime from shutting down
    if report(&completion, &output)? == Exit::Immediately {
        process::exit(0);
    }

    Ok(())
}

#[derive(Debug, Eq, PartialEq)]
enum Exit {
    Normally,
    Immediately,
}

/// Prints the summary. A timed out quiz still has a read pending on its input, so
/// the process must not wait for it.
fn report<O: QuizOutput>(completion: &Completion, output: &O) -> Result<Exit> {
    output.say(&Message::Summary(completion.get_score()))?;
    Ok(match completion {
        Completion::Finished(_) => Exit::Normally,
        Completion::TimedOut(_) => Exit::Immediately,
    })
}
