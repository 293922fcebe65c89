use dtrack_bom_publish::prelude::*;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock BomReader returning fixed content and counting calls
#[derive(Clone)]
pub struct MockBomReader {
    content: String,
    calls: Arc<AtomicUsize>,
}

impl MockBomReader {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl BomReader for MockBomReader {
    fn read_bom(&self, _path: &Path) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.content.clone())
    }
}
