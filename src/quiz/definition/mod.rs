use log::debug;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod question;

pub use question::{Question, RawQuestion};


const FIELDS_PER_ROW: usize = 2;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not open question file `{}`", .path.display())]
    ResourceOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not decode row on line {line}")]
    RowDecode {
        line: u64,
        #[source]
        source: csv::Error,
    },
    #[error("row on line {line} has {found} fields, expected a question and an answer")]
    FieldCount { line: u64, found: usize },
}

#[derive(Debug)]
pub struct QuizDefinition {
    questions: Vec<Question>,
}

impl QuizDefinition {
    pub fn open(source: &Path) -> Result<QuizDefinition, LoadError> {
        let file = File::open(source).map_err(|e| LoadError::ResourceOpen {
            path: source.to_path_buf(),
            source: e,
        })?;
        let definition = QuizDefinition::from_reader(file)?;
        debug!(
            "Loaded {} questions from {}",
            definition.questions.len(),
            source.display()
        );
        Ok(definition)
    }

    pub fn from_reader<R: io::Read>(reader: R) -> Result<QuizDefinition, LoadError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut questions = Vec::new();
        for record in csv_reader.records() {
            let record = record.map_err(|e| LoadError::RowDecode {
                line: e.position().map(|p| p.line()).unwrap_or_default(),
                source: e,
            })?;
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            if record.len() != FIELDS_PER_ROW {
                return Err(LoadError::FieldCount {
                    line,
                    found: record.len(),
                });
            }
            let raw_question: RawQuestion = record
                .deserialize(None)
                .map_err(|e| LoadError::RowDecode { line, source: e })?;
            questions.push(raw_question.into());
        }

        Ok(QuizDefinition { questions })
    }

    pub fn get_questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn into_questions(self) -> Vec<Question> {
        self.questions
    }
}
