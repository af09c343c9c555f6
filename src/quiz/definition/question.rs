use serde::Deserialize;

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct RawQuestion(pub String, pub String);

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Question {
    pub prompt: String,
    pub answer: String,
}

impl Question {
    /// Only the submission is trimmed; the expected answer is compared as loaded.
    pub fn is_answer_correct(&self, submitted: &str) -> bool {
        submitted.trim() == self.answer
    }
}

impl From<RawQuestion> for Question {
    fn from(raw_question: RawQuestion) -> Self {
        let RawQuestion(prompt, answer) = raw_question;
        Question { prompt, answer }
    }
}
