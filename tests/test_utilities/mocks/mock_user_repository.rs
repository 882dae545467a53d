use async_trait::async_trait;
use postboard::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock UserRepository returning a fixed list or a fixed error
#[derive(Clone)]
pub struct MockUserRepository {
    users: Vec<User>,
    error: Option<String>,
    calls: Arc<AtomicUsize>,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            error: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_user(mut self, id: i64, name: &str, description: &str, image_url: &str) -> Self {
        self.users.push(User::new(id, name, description, image_url));
        self
    }

    pub fn failing(mut self, error: &str) -> Self {
        self.error = Some(error.to_string());
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn fetch_users(&self) -> Result<Vec<User>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.error {
            Some(error) => Err(anyhow::anyhow!("{}", error)),
            None => Ok(self.users.clone()),
        }
    }
}
