use postboard::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock OutputPresenter that keeps every presented frame
#[derive(Default, Clone)]
pub struct MockOutputPresenter {
    frames: Arc<Mutex<Vec<String>>>,
}

impl MockOutputPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> Vec<String> {
        self.frames.lock().unwrap().clone()
    }

    pub fn last_frame(&self) -> Option<String> {
        self.frames.lock().unwrap().last().cloned()
    }
}

impl OutputPresenter for MockOutputPresenter {
    fn present(&self, content: &str) -> Result<()> {
        self.frames.lock().unwrap().push(content.to_string());
        Ok(())
    }
}
