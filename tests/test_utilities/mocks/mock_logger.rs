use dtrack_bom_publish::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock PublishLogger for testing that captures messages per level
#[derive(Default, Clone)]
pub struct MockLogger {
    infos: Arc<Mutex<Vec<String>>>,
    errors: Arc<Mutex<Vec<String>>>,
}

impl MockLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn infos(&self) -> Vec<String> {
        self.infos.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }

    pub fn last_info(&self) -> Option<String> {
        self.infos.lock().unwrap().last().cloned()
    }
}

impl PublishLogger for MockLogger {
    fn info(&self, message: &str) {
        self.infos.lock().unwrap().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
}
