use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Settings {
    pub question_duration: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            question_duration: Duration::from_secs(2),
        }
    }
}
