use anyhow::*;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::output::{Message, QuizOutput};

#[derive(Clone, Default)]
pub struct MockOutput {
    entries: Arc<RwLock<Vec<Message>>>,
}

impl MockOutput {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn flush(&self) -> Vec<Message> {
        std::mem::replace(&mut *self.entries.write(), Vec::new())
    }

    pub fn contains_message(&self, message: &Message) -> bool {
        self.entries.read().iter().any(|m| m == message)
    }
}

impl QuizOutput for MockOutput {
    fn say(&self, message: &Message) -> Result<()> {
        self.entries.write().push(message.clone());
        Ok(())
    }
}
