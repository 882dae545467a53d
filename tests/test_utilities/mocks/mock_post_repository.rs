use async_trait::async_trait;
use postboard::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock PostRepository serving `count` numbered posts
#[derive(Clone)]
pub struct MockPostRepository {
    count: i64,
    calls: Arc<AtomicUsize>,
}

impl MockPostRepository {
    pub fn with_posts(count: i64) -> Self {
        Self {
            count,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PostRepository for MockPostRepository {
    async fn fetch_posts(&self) -> Result<Vec<Post>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok((1..=self.count)
            .map(|i| Post::new(i, format!("Post title {}", i), format!("Post body {}", i)))
            .collect())
    }
}
